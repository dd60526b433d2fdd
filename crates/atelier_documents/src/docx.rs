//! DOCX text extraction from `word/document.xml`.

use atelier_error::{DocumentError, DocumentErrorKind};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};

const BODY_PART: &str = "word/document.xml";

#[track_caller]
fn failure(e: impl std::fmt::Display) -> DocumentError {
    DocumentError::new(DocumentErrorKind::Extraction(e.to_string()))
}

/// Extract raw paragraph text from a DOCX held in memory.
pub fn extract(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| failure(e))?;
    let mut xml = String::new();
    archive
        .by_name(BODY_PART)
        .map_err(|e| failure(format!("{}: {}", BODY_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| failure(e))?;
    body_text(&xml)
}

/// Text runs joined in order; paragraphs end with a newline.
pub fn body_text(xml: &str) -> Result<String, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event().map_err(|e| failure(e))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_run_text => {
                text.push_str(&e.unescape().map_err(|e| failure(e))?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}
