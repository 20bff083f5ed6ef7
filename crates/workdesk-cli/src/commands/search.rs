//! Search commands: backend note/knowledge/web search plus local title
//! suggestions.

use clap::Subcommand;

use workdesk_core::workspace::suggest;

use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum SearchAction {
    /// Full-text note search
    Notes {
        /// Search query
        query: String,
    },
    /// Search notes, projects, tasks, and todos at once
    Knowledge {
        /// Search query
        query: String,
        /// Record types to search (default: all)
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        /// Max results per type
        #[arg(long, default_value = "20")]
        limit: u32,
    },
    /// Web search relayed through the backend
    Web {
        /// Search query
        query: String,
    },
    /// Rank note titles against a partial query, locally
    Suggest {
        /// Partial query
        query: String,
        /// Max suggestions
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}

pub fn run(action: SearchAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        SearchAction::Notes { query } => {
            let notes = block_on(client.search_notes(&query))??;
            print_json(&notes)
        }
        SearchAction::Knowledge {
            query,
            types,
            limit,
        } => {
            let types: Vec<&str> = types.iter().map(String::as_str).collect();
            let found = block_on(client.knowledge_search(&query, &types, limit))??;
            print_json(&found)
        }
        SearchAction::Web { query } => {
            let found = block_on(client.web_search(&query))??;
            print_json(&found)
        }
        SearchAction::Suggest { query, limit } => {
            let notes = block_on(client.list_notes())??;
            let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
            let ranked: Vec<String> = suggest::suggest(&query, titles.iter().copied(), limit)
                .into_iter()
                .map(str::to_string)
                .collect();
            print_json(&ranked)
        }
    }
}
