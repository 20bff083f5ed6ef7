//! Note commands. Thin wrappers over the backend's note CRUD.

use clap::Subcommand;

use workdesk_core::workspace::{NoteDraft, NotePatch};

use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum NoteAction {
    /// List all notes
    List,
    /// Get a note
    Get {
        /// Note ID
        id: i64,
    },
    /// Create a note
    Create {
        /// Note title
        title: String,
        /// Note body
        #[arg(long, default_value = "")]
        content: String,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Update a note
    Update {
        /// Note ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New body
        #[arg(long)]
        content: Option<String>,
        /// Comma-separated tags (replaces the existing set)
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note ID
        id: i64,
    },
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        NoteAction::List => {
            let notes = block_on(client.list_notes())??;
            print_json(&notes)
        }
        NoteAction::Get { id } => {
            let note = block_on(client.get_note(id))??;
            print_json(&note)
        }
        NoteAction::Create {
            title,
            content,
            tags,
        } => {
            let draft = NoteDraft {
                title,
                content,
                tags: tags.as_deref().map(split_tags).unwrap_or_default(),
            };
            let note = block_on(client.create_note(&draft))??;
            println!("Note created: {}", note.id);
            print_json(&note)
        }
        NoteAction::Update {
            id,
            title,
            content,
            tags,
        } => {
            let patch = NotePatch {
                title,
                content,
                tags: tags.as_deref().map(split_tags),
            };
            let note = block_on(client.update_note(id, &patch))??;
            print_json(&note)
        }
        NoteAction::Delete { id } => {
            block_on(client.delete_note(id))??;
            println!("Note deleted: {id}");
            Ok(())
        }
    }
}
