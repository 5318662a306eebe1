use std::{ops::Range, sync::Arc};

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Document, Notices, PageRange, RunBatch},
        dto::response::{RawPageResponse, StudyResponseDto},
    },
    services::{
        history_service::HistoryService,
        model_service::GenerationClient,
        page_selector, prompt_builder, response_parser, text_extractor,
    },
};

/// Everything one submit action produced.
#[derive(Debug)]
pub struct StudyRun {
    pub run: usize,
    pub batch: RunBatch,
    pub page_count: usize,
    pub raw_responses: Vec<RawPageResponse>,
    pub notices: Notices,
    pub answer: Option<String>,
}

impl StudyRun {
    pub fn into_response(self, session_id: &str) -> AppResult<StudyResponseDto> {
        let content_json = self.batch.results_json()?;

        Ok(StudyResponseDto {
            run: self.run,
            run_id: self.batch.id,
            session_id: session_id.to_string(),
            page_count: self.page_count,
            results: self.batch.results,
            raw_responses: self.raw_responses,
            notices: self.notices.into_vec(),
            content_json,
            answer: self.answer,
        })
    }
}

/// Drives a run: extraction, page selection, one model call per selected
/// page, history recording and the optional question.
pub struct StudyService {
    client: Arc<dyn GenerationClient>,
    history: Arc<HistoryService>,
}

impl StudyService {
    pub fn new(client: Arc<dyn GenerationClient>, history: Arc<HistoryService>) -> Self {
        Self { client, history }
    }

    /// Extracts `bytes` as `declared_mime` and processes the document.
    pub async fn submit<B>(
        &self,
        session_id: &str,
        bytes: B,
        declared_mime: &str,
        page_expression: Option<&str>,
        question: Option<&str>,
    ) -> AppResult<StudyRun>
    where
        B: AsRef<[u8]> + Send + 'static,
    {
        let mime = declared_mime.to_string();
        let document = tokio::task::spawn_blocking(move || {
            text_extractor::extract(bytes.as_ref(), &mime)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Extraction task failed: {}", e)))??;

        self.process_document(session_id, &document, page_expression, question)
            .await
    }

    /// Runs the page pipeline over an extracted document.
    ///
    /// A malformed page expression aborts before any model call. Out-of-range
    /// pages, failed model calls and unparseable replies are reported as
    /// notices and the run carries on. The batch is recorded even when empty.
    pub async fn process_document(
        &self,
        session_id: &str,
        document: &Document,
        page_expression: Option<&str>,
        question: Option<&str>,
    ) -> AppResult<StudyRun> {
        let ranges = page_selector::parse_ranges(page_expression, document.len())?;

        log::info!(
            "Processing {} page(s) of {} document {} over {} range(s) for session '{}'",
            document.len(),
            document.format(),
            document.digest(),
            ranges.len(),
            session_id
        );

        let mut notices = Notices::new();
        let mut batch = RunBatch::new(document.digest(), page_expression);
        let mut raw_responses = Vec::new();

        for range in &ranges {
            self.process_range(document, range, &mut batch, &mut raw_responses, &mut notices)
                .await;
        }

        let run = self.history.record(session_id, batch.clone()).await?;

        let answer = match question.filter(|q| !q.trim().is_empty()) {
            Some(question) => Some(self.answer_question(question, &mut notices).await),
            None => None,
        };

        Ok(StudyRun {
            run,
            batch,
            page_count: document.len(),
            raw_responses,
            notices,
            answer,
        })
    }

    async fn process_range(
        &self,
        document: &Document,
        range: &PageRange,
        batch: &mut RunBatch,
        raw_responses: &mut Vec<RawPageResponse>,
        notices: &mut Notices,
    ) {
        for index in range.available(document.len()) {
            let page = index + 1;
            let Some(page_text) = document.page(index) else {
                continue;
            };

            let prompt = prompt_builder::build_prompt(page_text);
            let raw = self.client.generate(&prompt).await.into_raw(notices);

            match response_parser::parse_response(&raw, page) {
                Ok(result) => batch.push(result),
                Err(e) => {
                    log::debug!("Reply for page {} did not parse: {}", page, e);
                    notices.error(format!(
                        "Failed to decode JSON response from the model for page {}.",
                        page
                    ));
                }
            }

            raw_responses.push(RawPageResponse { page, raw });
        }

        report_missing_pages(range.missing(document.len()), notices);
    }

    /// Answers a free-form question. The answer is returned as-is and never
    /// recorded in history.
    pub async fn answer_question(&self, question: &str, notices: &mut Notices) -> String {
        let prompt = prompt_builder::build_question_prompt(question);
        self.client.generate(&prompt).await.into_raw(notices)
    }
}

/// Out-of-range pages warned about one by one before the rest of a range is
/// folded into a single notice.
pub const MAX_OUT_OF_RANGE_WARNINGS: usize = 100;

fn report_missing_pages(missing_indices: Range<usize>, notices: &mut Notices) {
    let Range { start: first, end } = missing_indices;
    let missing = end.saturating_sub(first);
    let listed = missing.min(MAX_OUT_OF_RANGE_WARNINGS);

    for index in first..first + listed {
        notices.warn(format!("Page {} is out of range.", index + 1));
    }

    if missing > listed {
        notices.warn(format!(
            "Pages {} to {} are out of range.",
            first + listed + 1,
            end
        ));
    }
}
