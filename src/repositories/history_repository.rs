use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::RunBatch};

/// Append-only run history, one ordered list per session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Appends `batch` and returns its 1-based run number in the session.
    async fn append(&self, session_id: &str, batch: RunBatch) -> AppResult<usize>;
    async fn list(&self, session_id: &str) -> AppResult<Vec<RunBatch>>;
    async fn find_by_run(&self, session_id: &str, run: usize) -> AppResult<Option<RunBatch>>;
}

/// Process-lifetime history. Nothing is evicted.
#[derive(Default)]
pub struct InMemoryHistoryRepository {
    sessions: Arc<RwLock<HashMap<String, Vec<RunBatch>>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, session_id: &str, batch: RunBatch) -> AppResult<usize> {
        let mut sessions = self.sessions.write().await;
        let history = sessions.entry(session_id.to_string()).or_default();
        history.push(batch);
        Ok(history.len())
    }

    async fn list(&self, session_id: &str) -> AppResult<Vec<RunBatch>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned().unwrap_or_default())
    }

    async fn find_by_run(&self, session_id: &str, run: usize) -> AppResult<Option<RunBatch>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .and_then(|history| history.get(run.checked_sub(1)?))
            .cloned())
    }
}
