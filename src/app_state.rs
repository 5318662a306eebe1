use std::sync::Arc;

use crate::{
    config::Config,
    repositories::InMemoryHistoryRepository,
    services::{
        history_service::HistoryService,
        model_service::{GeminiClient, GenerationClient},
        study_service::StudyService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<StudyService>,
    pub history_service: Arc<HistoryService>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_client(Arc::new(GeminiClient::new(config)))
    }

    /// Builds the state around an arbitrary generation client.
    pub fn with_client(client: Arc<dyn GenerationClient>) -> Self {
        let history_repository = Arc::new(InMemoryHistoryRepository::new());
        let history_service = Arc::new(HistoryService::new(history_repository));

        let study_service = Arc::new(StudyService::new(client, Arc::clone(&history_service)));

        Self {
            study_service,
            history_service,
        }
    }
}
