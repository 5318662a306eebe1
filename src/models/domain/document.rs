use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::{
    constants::mime,
    errors::{AppError, AppResult},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,  // one unit per page
    Docx, // one unit per paragraph
    Text, // one unit per line
}

impl DocumentFormat {
    /// Resolves a declared MIME type, ignoring parameters such as `charset`.
    pub fn from_mime(declared: &str) -> AppResult<Self> {
        let essence = declared
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            mime::PDF => Ok(DocumentFormat::Pdf),
            mime::DOCX => Ok(DocumentFormat::Docx),
            mime::TEXT => Ok(DocumentFormat::Text),
            _ => Err(AppError::UnsupportedFormat(declared.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
            DocumentFormat::Text => write!(f, "text"),
        }
    }
}

/// Extracted page texts of one upload. Indices are zero-based; page numbers
/// shown to users are `index + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    format: DocumentFormat,
    digest: String,
    pages: Vec<String>,
}

impl Document {
    pub fn new(format: DocumentFormat, raw: &[u8], pages: Vec<String>) -> Self {
        Self {
            format,
            digest: format!("{:x}", Sha256::digest(raw)),
            pages,
        }
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Hex SHA-256 of the uploaded bytes.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
