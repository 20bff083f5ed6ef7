//! Todo CRUD against the backend.

use super::ApiClient;
use crate::error::ApiError;
use crate::workspace::{Todo, TodoDraft, TodoPatch};

impl ApiClient {
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.get_data("/api/todos").await
    }

    pub async fn get_todo(&self, id: i64) -> Result<Todo, ApiError> {
        self.get_data(&format!("/api/todos/{id}")).await
    }

    pub async fn create_todo(&self, draft: &TodoDraft) -> Result<Todo, ApiError> {
        self.post_data("/api/todos", draft).await
    }

    pub async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, ApiError> {
        self.put_data(&format!("/api/todos/{id}"), patch).await
    }

    /// Convenience for the common "check it off" update.
    pub async fn complete_todo(&self, id: i64) -> Result<Todo, ApiError> {
        let patch = TodoPatch {
            completed: Some(true),
            ..TodoPatch::default()
        };
        self.update_todo(id, &patch).await
    }

    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ack(&format!("/api/todos/{id}")).await
    }
}
