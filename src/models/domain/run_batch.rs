use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PageResult;

/// Output of one submit action, in processing order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunBatch {
    pub id: Uuid,
    pub document_digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_expression: Option<String>,
    pub results: Vec<PageResult>,
    pub created_at: DateTime<Utc>,
}

impl RunBatch {
    pub fn new(document_digest: &str, page_expression: Option<&str>) -> Self {
        RunBatch {
            id: Uuid::new_v4(),
            document_digest: document_digest.to_string(),
            page_expression: page_expression.map(str::to_string),
            results: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn push(&mut self, result: PageResult) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results as indented JSON, the copyable dump shown after a run.
    pub fn results_json(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.results.serialize(&mut serializer)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
