//! Search endpoints: basic note search, knowledge-base search across every
//! record type, and the backend's web-search relay.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ApiClient;
use crate::error::ApiError;
use crate::workspace::{Note, Project, Task, Todo};

/// One result-type bucket of a knowledge search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBucket<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub count: u32,
}

/// Buckets are present only for the requested types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeResults {
    pub notes: Option<KnowledgeBucket<Note>>,
    pub projects: Option<KnowledgeBucket<Project>>,
    pub tasks: Option<KnowledgeBucket<Task>>,
    pub todos: Option<KnowledgeBucket<Todo>>,
}

/// Answer from `/api/knowledge-search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeSearch {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: KnowledgeResults,
    #[serde(default)]
    pub total_count: u32,
}

/// One hit from the backend's web-search relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchHit {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default, rename = "displayUrl")]
    pub display_url: String,
}

/// Answer from `/api/google-search` (no envelope).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearch {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub results: Vec<WebSearchHit>,
    #[serde(default)]
    pub total: u32,
}

impl ApiClient {
    /// Full-text note search, most recently updated first.
    pub async fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError> {
        self.post_data("/api/search", &json!({ "query": query }))
            .await
    }

    /// Search every requested record type at once.
    ///
    /// `types` picks from `notes`, `projects`, `tasks`, `todos`; empty means
    /// all of them. `limit` caps each bucket.
    pub async fn knowledge_search(
        &self,
        query: &str,
        types: &[&str],
        limit: u32,
    ) -> Result<KnowledgeSearch, ApiError> {
        let types: Vec<&str> = if types.is_empty() {
            vec!["notes", "projects", "tasks", "todos"]
        } else {
            types.to_vec()
        };
        let body = json!({
            "query": query,
            "types": types,
            "limit": limit,
        });
        self.post_raw("/api/knowledge-search", &body).await
    }

    /// Web search relayed through the backend.
    pub async fn web_search(&self, query: &str) -> Result<WebSearch, ApiError> {
        self.post_raw("/api/google-search", &json!({ "query": query }))
            .await
    }
}
