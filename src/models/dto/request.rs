use serde::Deserialize;
use validator::Validate;

pub const DEFAULT_SESSION_ID: &str = "default";
pub const SESSION_HEADER: &str = "x-session-id";

/// Query parameters accompanying a document upload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StudyQuery {
    /// Comma-separated `start-end` tokens, 1-based and inclusive.
    #[validate(length(max = 1000))]
    pub pages: Option<String>,

    #[validate(length(max = 10000))]
    pub question: Option<String>,
}

impl StudyQuery {
    pub fn page_expression(&self) -> Option<&str> {
        self.pages.as_deref().filter(|p| !p.trim().is_empty())
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.trim().is_empty())
    }
}
