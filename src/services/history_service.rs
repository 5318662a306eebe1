use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::RunBatch,
    repositories::HistoryRepository,
};

pub struct HistoryService {
    repository: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self { repository }
    }

    pub async fn record(&self, session_id: &str, batch: RunBatch) -> AppResult<usize> {
        let pages = batch.len();
        let run = self.repository.append(session_id, batch).await?;
        log::info!(
            "Recorded run {} with {} page result(s) for session '{}'",
            run,
            pages,
            session_id
        );
        Ok(run)
    }

    pub async fn list(&self, session_id: &str) -> AppResult<Vec<RunBatch>> {
        self.repository.list(session_id).await
    }

    pub async fn get_run(&self, session_id: &str, run: usize) -> AppResult<RunBatch> {
        self.repository
            .find_by_run(session_id, run)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Run {} not found in session '{}'", run, session_id))
            })
    }
}
