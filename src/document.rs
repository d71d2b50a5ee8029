/*!
 * Word document handling.
 *
 * A .docx file is a ZIP archive of XML parts. docx-rs parses it into a
 * typed tree: Document → Paragraph → Run → Text. Only the top-level body
 * paragraphs are read; tables, headers and images are ignored.
 */

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::errors::ServiceError;

/// MIME type an upload must declare to be accepted
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Check a declared upload content type against the Word document type
pub fn is_docx_content_type(content_type: &str) -> bool {
    content_type == DOCX_CONTENT_TYPE
}

/// Extract plain text from a .docx payload.
///
/// Paragraphs are emitted in document order and joined with newlines.
/// Empty paragraphs are kept as empty lines so the layout of the original
/// survives.
pub fn extract_text(bytes: &[u8]) -> Result<String, ServiceError> {
    let docx = read_docx(bytes)
        .map_err(|e| ServiceError::ContentExtraction(format!("{:?}", e)))?;

    let paragraphs: Vec<String> = docx.document.children.iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Concatenate the text of every run in a paragraph
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for rc in &run.children {
                match rc {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }

    text
}
