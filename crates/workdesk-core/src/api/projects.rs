//! Project and project-task CRUD against the backend.
//!
//! Tasks always belong to a project; creation goes through `/api/tasks`
//! with a `project_id`, listing through the owning project.

use super::ApiClient;
use crate::error::ApiError;
use crate::workspace::{Project, ProjectDraft, ProjectPatch, Task, TaskDraft, TaskPatch};

impl ApiClient {
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_data("/api/projects").await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        self.get_data(&format!("/api/projects/{id}")).await
    }

    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        self.post_data("/api/projects", draft).await
    }

    pub async fn update_project(&self, id: i64, patch: &ProjectPatch) -> Result<Project, ApiError> {
        self.put_data(&format!("/api/projects/{id}"), patch).await
    }

    /// Deletes the project and, via the backend's cascade, its tasks.
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ack(&format!("/api/projects/{id}")).await
    }

    pub async fn list_project_tasks(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        self.get_data(&format!("/api/projects/{project_id}/tasks"))
            .await
    }

    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.post_data("/api/tasks", draft).await
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, ApiError> {
        self.get_data(&format!("/api/tasks/{id}")).await
    }

    pub async fn update_task(&self, id: i64, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.put_data(&format!("/api/tasks/{id}"), patch).await
    }

    pub async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ack(&format!("/api/tasks/{id}")).await
    }
}
