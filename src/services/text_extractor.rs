//! Plain-text extraction from uploaded PDF and text files.
//!
//! PDF pages are read with `lopdf`; a page whose text cannot be decoded that
//! way is retried with `pdf-extract`, and contributes nothing if both fail.

use std::borrow::Cow;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{DocumentKind, SourceDocument},
};

/// Text pulled out of an upload. Text files that are not valid UTF-8 are
/// carried as their raw bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractedText {
    Utf8(String),
    Raw(Vec<u8>),
}

impl ExtractedText {
    /// Text suitable for a prompt; raw bytes are decoded lossily.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ExtractedText::Utf8(text) => Cow::Borrowed(text),
            ExtractedText::Raw(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &SourceDocument) -> AppResult<ExtractedText>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FileTextExtractor;

impl TextExtractor for FileTextExtractor {
    fn extract(&self, document: &SourceDocument) -> AppResult<ExtractedText> {
        log::info!(
            "Extracting text from '{}' ({} bytes)",
            document.filename,
            document.bytes.len()
        );

        match document.kind {
            DocumentKind::Pdf => extract_pdf(&document.bytes).map(ExtractedText::Utf8),
            DocumentKind::Text => Ok(decode_text(&document.bytes)),
        }
    }
}

fn decode_text(bytes: &[u8]) -> ExtractedText {
    match String::from_utf8(bytes.to_vec()) {
        Ok(text) => ExtractedText::Utf8(text),
        Err(err) => {
            log::warn!("Text upload is not valid UTF-8: {}", err.utf8_error());
            ExtractedText::Raw(err.into_bytes())
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> AppResult<String> {
    let document = lopdf::Document::load_mem(bytes).map_err(|e| AppError::PdfRead(e.to_string()))?;
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();

    let mut fallback_pages: Option<Vec<String>> = None;
    let text = collect_page_text(
        &page_numbers,
        |page_number| document.extract_text(&[page_number]).map_err(|e| e.to_string()),
        |index| {
            fallback_pages
                .get_or_insert_with(|| {
                    pdf_extract::extract_text_from_mem_by_pages(bytes).unwrap_or_else(|e| {
                        log::warn!("Fallback PDF extraction failed: {}", e);
                        Vec::new()
                    })
                })
                .get(index)
                .cloned()
        },
    );

    log::info!(
        "Extracted {} characters from {} PDF pages",
        text.chars().count(),
        page_numbers.len()
    );
    Ok(text)
}

/// Concatenates page text in document order. `fallback` receives the page's
/// zero-based position and is only consulted for pages `primary` fails on.
fn collect_page_text<P, F>(page_numbers: &[u32], mut primary: P, mut fallback: F) -> String
where
    P: FnMut(u32) -> Result<String, String>,
    F: FnMut(usize) -> Option<String>,
{
    let mut text = String::new();
    for (index, &page_number) in page_numbers.iter().enumerate() {
        match primary(page_number) {
            Ok(page_text) => text.push_str(&page_text),
            Err(err) => {
                log::debug!("Page {} primary extraction failed: {}", page_number, err);
                text.push_str(&fallback(index).unwrap_or_default());
            }
        }
    }
    text
}
