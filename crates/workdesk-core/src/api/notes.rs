//! Note CRUD against the backend.

use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::workspace::{Note, NoteDraft, NotePatch};

impl ApiClient {
    /// All notes, most recently updated first.
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.get_data("/api/notes").await
    }

    pub async fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        self.get_data(&format!("/api/notes/{id}")).await
    }

    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Note, ApiError> {
        // The backend stores tags as a JSON-encoded list.
        let body = json!({
            "title": draft.title,
            "content": draft.content,
            "tags": draft.tags,
        });
        self.post_data("/api/notes", &body).await
    }

    pub async fn update_note(&self, id: i64, patch: &NotePatch) -> Result<Note, ApiError> {
        self.put_data(&format!("/api/notes/{id}"), patch).await
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ack(&format!("/api/notes/{id}")).await
    }
}
