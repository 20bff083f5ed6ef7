//! Todo commands.

use clap::Subcommand;

use workdesk_core::workspace::{Priority, TodoDraft, TodoPatch};

use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum TodoAction {
    /// List todos
    List {
        /// Only show open items
        #[arg(long)]
        open: bool,
    },
    /// Get a todo
    Get {
        /// Todo ID
        id: i64,
    },
    /// Create a todo
    Create {
        /// Todo title
        title: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Priority: low, medium, or high
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
        /// Due date as ISO 8601 string
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Update a todo
    Update {
        /// Todo ID
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Set completion state
        #[arg(long)]
        completed: Option<bool>,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<CliPriority>,
        /// New due date as ISO 8601 string
        #[arg(long)]
        due_date: Option<String>,
    },
    /// Mark a todo completed
    Complete {
        /// Todo ID
        id: i64,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: i64,
    },
}

/// clap-parseable mirror of [`Priority`].
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliPriority {
    Low,
    Medium,
    High,
}

impl From<CliPriority> for Priority {
    fn from(p: CliPriority) -> Self {
        match p {
            CliPriority::Low => Priority::Low,
            CliPriority::Medium => Priority::Medium,
            CliPriority::High => Priority::High,
        }
    }
}

pub fn run(action: TodoAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        TodoAction::List { open } => {
            let mut todos = block_on(client.list_todos())??;
            if open {
                todos.retain(|t| !t.completed);
            }
            print_json(&todos)
        }
        TodoAction::Get { id } => {
            let todo = block_on(client.get_todo(id))??;
            print_json(&todo)
        }
        TodoAction::Create {
            title,
            description,
            priority,
            due_date,
        } => {
            let draft = TodoDraft {
                title,
                description,
                priority: priority.map(Into::into),
                due_date,
            };
            let todo = block_on(client.create_todo(&draft))??;
            println!("Todo created: {}", todo.id);
            print_json(&todo)
        }
        TodoAction::Update {
            id,
            title,
            description,
            completed,
            priority,
            due_date,
        } => {
            let patch = TodoPatch {
                title,
                description,
                completed,
                priority: priority.map(Into::into),
                due_date,
            };
            let todo = block_on(client.update_todo(id, &patch))??;
            print_json(&todo)
        }
        TodoAction::Complete { id } => {
            let todo = block_on(client.complete_todo(id))??;
            print_json(&todo)
        }
        TodoAction::Delete { id } => {
            block_on(client.delete_todo(id))??;
            println!("Todo deleted: {id}");
            Ok(())
        }
    }
}
