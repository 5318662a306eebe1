use crate::constants::prompts::{PAGE_CONTENT_MARKER, QUESTION_PROMPT_PREFIX, STUDY_PAGE_PROMPT};

/// Fills the study template with one page's text, inserted verbatim.
pub fn build_prompt(page_text: &str) -> String {
    STUDY_PAGE_PROMPT.replacen(PAGE_CONTENT_MARKER, page_text, 1)
}

pub fn build_question_prompt(question: &str) -> String {
    format!("{}{}", QUESTION_PROMPT_PREFIX, question)
}
