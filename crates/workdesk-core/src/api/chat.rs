//! Chat forwarding and the model catalog.
//!
//! The backend augments the prompt with knowledge-base context and relays it
//! to the configured provider; this client only forwards the message and the
//! running transcript.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::workspace::{AiModel, ChatMessage};

/// Model used when the caller does not pick one.
pub const DEFAULT_CHAT_MODEL: &str = "claude-3.5-sonnet";

/// Answer from `/api/chat` (no envelope).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub timestamp: String,
    /// Whether knowledge-base context was folded into the prompt.
    #[serde(default)]
    pub knowledge_used: bool,
}

/// `/api/models` answers with a map keyed by model id.
#[derive(Debug, Deserialize)]
struct ModelCatalog {
    #[serde(default)]
    models: HashMap<String, ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
    #[serde(default)]
    provider: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    recommended: bool,
}

impl ApiClient {
    /// Send a message with the running transcript as context.
    pub async fn send_chat(
        &self,
        message: &str,
        history: &[ChatMessage],
        model: &str,
    ) -> Result<ChatReply, ApiError> {
        let body = json!({
            "message": message,
            "history": history,
            "model": model,
            "use_knowledge_base": true,
        });
        self.post_raw("/api/chat", &body).await
    }

    /// Available models, recommended ones first, then by id.
    pub async fn list_models(&self) -> Result<Vec<AiModel>, ApiError> {
        let catalog: ModelCatalog = self.get_raw("/api/models").await?;
        let mut models: Vec<AiModel> = catalog
            .models
            .into_iter()
            .map(|(id, info)| AiModel {
                id,
                name: info.name,
                provider: info.provider,
                description: info.description,
                recommended: info.recommended,
            })
            .collect();
        models.sort_by(|a, b| b.recommended.cmp(&a.recommended).then(a.id.cmp(&b.id)));
        Ok(models)
    }
}
