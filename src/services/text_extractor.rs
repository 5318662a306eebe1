//! Page text extraction for uploaded documents.
//!
//! Every supported format is flattened into the same shape: an ordered list
//! of text units. PDFs yield one unit per page, Word documents one unit per
//! body paragraph and plain text one unit per line.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Document, DocumentFormat},
};

const DOCX_MAIN_PART: &str = "word/document.xml";

/// Extracts a [`Document`] from raw upload bytes.
///
/// The declared MIME type is resolved before any decoding is attempted, so
/// an unsupported type never touches the bytes.
pub fn extract(bytes: &[u8], declared_mime: &str) -> AppResult<Document> {
    let format = DocumentFormat::from_mime(declared_mime)?;

    let pages = match format {
        DocumentFormat::Pdf => extract_pdf_pages(bytes)?,
        DocumentFormat::Docx => extract_docx_paragraphs(bytes)?,
        DocumentFormat::Text => extract_text_lines(bytes)?,
    };

    log::info!(
        "Extracted {} {} unit(s) from {} byte upload",
        pages.len(),
        format,
        bytes.len()
    );

    Ok(Document::new(format, bytes, pages))
}

/// One string per PDF page in page order, without trailing line breaks.
/// Pages without extractable text come back as empty strings.
pub fn extract_pdf_pages(bytes: &[u8]) -> AppResult<Vec<String>> {
    let doc = lopdf::Document::load_mem(bytes)?;

    // get_pages is keyed by 1-based page number, already in order
    let pages = doc
        .get_pages()
        .keys()
        .map(|&number| match doc.extract_text(&[number]) {
            // lopdf ends every text line with a break
            Ok(text) => text.trim_end_matches(['\r', '\n']).to_string(),
            Err(e) => {
                log::debug!("No text extracted from PDF page {}: {}", number, e);
                String::new()
            }
        })
        .collect();

    Ok(pages)
}

pub fn extract_docx_paragraphs(bytes: &[u8]) -> AppResult<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name(DOCX_MAIN_PART)?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::ExtractionFailed(format!("Failed to read {}: {}", DOCX_MAIN_PART, e)))?;

    body_paragraphs(&xml)
}

/// Collects the text of every paragraph that is a direct child of `w:body`.
///
/// Paragraphs nested in tables or text boxes are not separate units. Tabs
/// and breaks inside a paragraph become `\t` and `\n`.
fn body_paragraphs(xml: &str) -> AppResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs = Vec::new();
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                match e.local_name().as_ref() {
                    b"body" if body_depth.is_none() => body_depth = Some(depth),
                    b"p" if is_body_child(body_depth, depth) => current = Some(String::new()),
                    b"t" => in_text = true,
                    _ => {}
                }
                depth += 1;
            }
            Event::End(ref e) => {
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"p" if is_body_child(body_depth, depth) => {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    b"t" => in_text = false,
                    _ => {}
                }
            }
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"p" if is_body_child(body_depth, depth) => paragraphs.push(String::new()),
                b"tab" => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\t');
                    }
                }
                b"br" | b"cr" => {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push('\n');
                    }
                }
                _ => {}
            },
            Event::Text(ref e) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| AppError::ExtractionFailed(format!("DOCX text error: {}", e)))?;
                    paragraph.push_str(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

fn is_body_child(body_depth: Option<usize>, depth: usize) -> bool {
    body_depth.is_some_and(|body| depth == body + 1)
}

/// UTF-8 text split on `\n`. A trailing newline yields a trailing empty
/// line and a `\r` before the break is dropped.
pub fn extract_text_lines(bytes: &[u8]) -> AppResult<Vec<String>> {
    let text = String::from_utf8(bytes.to_vec())?;

    Ok(text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect())
}
