use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{Notice, PageResult, RunBatch};

/// Unparsed model reply for one processed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawPageResponse {
    pub page: usize,
    pub raw: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyResponseDto {
    pub run: usize,
    pub run_id: Uuid,
    pub session_id: String,
    pub page_count: usize,
    pub results: Vec<PageResult>,
    pub raw_responses: Vec<RawPageResponse>,
    pub notices: Vec<Notice>,
    pub content_json: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryDto {
    pub run: usize,
    #[serde(flatten)]
    pub batch: RunBatch,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponseDto {
    pub session_id: String,
    pub runs: Vec<HistoryEntryDto>,
}

impl HistoryResponseDto {
    pub fn new(session_id: &str, batches: Vec<RunBatch>) -> Self {
        HistoryResponseDto {
            session_id: session_id.to_string(),
            runs: batches
                .into_iter()
                .enumerate()
                .map(|(i, batch)| HistoryEntryDto { run: i + 1, batch })
                .collect(),
        }
    }
}
