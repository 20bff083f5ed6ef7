//! AI chat commands.

use clap::Subcommand;

use workdesk_core::api::DEFAULT_CHAT_MODEL;

use super::{api_client, block_on, print_json};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Send a message to the assistant
    Send {
        /// Message text
        message: String,
        /// Model ID (see `chat models`)
        #[arg(long, default_value = DEFAULT_CHAT_MODEL)]
        model: String,
    },
    /// List available models
    Models,
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = api_client()?;

    match action {
        ChatAction::Send { message, model } => {
            // One-shot send; the backend folds in knowledge-base context,
            // so no local transcript is kept between invocations.
            let reply = block_on(client.send_chat(&message, &[], &model))??;
            if reply.knowledge_used {
                eprintln!("(answered with knowledge-base context)");
            }
            println!("{}", reply.response);
            Ok(())
        }
        ChatAction::Models => {
            let models = block_on(client.list_models())??;
            print_json(&models)
        }
    }
}
