#[cfg(test)]
pub mod fixtures {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;

    use crate::models::domain::{Document, DocumentFormat};

    /// A plain-text document whose pages are `pages`.
    pub fn text_document(pages: &[&str]) -> Document {
        let raw = pages.join("\n");
        Document::new(
            DocumentFormat::Text,
            raw.as_bytes(),
            pages.iter().map(|p| p.to_string()).collect(),
        )
    }

    /// A well-formed model reply echoing the page text found in `prompt`.
    pub fn study_reply(prompt: &str) -> String {
        let page = prompt
            .split_once("Page Content: ")
            .and_then(|(_, rest)| rest.split_once("\n\nI want the response"))
            .map(|(page, _)| page)
            .unwrap_or_default();

        serde_json::json!({
            "Explanation": format!("Explained: {}", page),
            "Example": format!("Example for: {}", page),
            "Mini Test": "Q1?",
            "Test Solution": "A1",
        })
        .to_string()
    }

    /// `word/document.xml` wrapping `body` in the WordprocessingML envelope.
    pub fn document_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            body
        )
    }

    /// A minimal DOCX archive with one body paragraph per entry.
    pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!(
                        r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                        escape_xml(p)
                    )
                }
            })
            .collect();

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .expect("zip entry should start");
        writer
            .write_all(document_xml(&body).as_bytes())
            .expect("zip entry should be writable");
        writer
            .finish()
            .expect("zip archive should finish")
            .into_inner()
    }

    /// A PDF with one page per entry. An empty entry gives a page with no
    /// text operators.
    pub fn pdf_bytes(pages: &[&str]) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Object, Stream};

        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let kids: Vec<Object> = pages
            .iter()
            .map(|text| {
                let operations = if text.is_empty() {
                    Vec::new()
                } else {
                    vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 24.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ]
                };
                let content = Content { operations }
                    .encode()
                    .expect("page content should encode");
                let content_id = doc.add_object(Stream::new(dictionary! {}, content));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                })
                .into()
            })
            .collect();

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf should serialize");
        bytes
    }

    fn escape_xml(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::prompt_builder::build_prompt;

    #[test]
    fn test_fixtures_text_document() {
        let doc = text_document(&["a", "b"]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.page(1), Some("b"));
    }

    #[test]
    fn test_fixtures_study_reply_echoes_page() {
        let reply: serde_json::Value = serde_json::from_str(&study_reply(&build_prompt("p7"))).unwrap();
        assert_eq!(reply["Explanation"], "Explained: p7");
        assert_eq!(reply["Mini Test"], "Q1?");
    }

    #[test]
    fn test_fixtures_pdf_has_header() {
        let bytes = pdf_bytes(&["x"]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_fixtures_docx_is_a_zip() {
        let bytes = docx_bytes(&["x"]);
        assert_eq!(&bytes[..2], b"PK");
    }
}
