use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Sniffs the kind from the ending of an uploaded file name, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let name = filename.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if name.ends_with(".txt") {
            Some(DocumentKind::Text)
        } else {
            None
        }
    }
}

/// An uploaded file, alive for a single request.
#[derive(Clone, Debug)]
pub struct SourceDocument {
    pub filename: String, // Only used for extension sniffing and logs
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
}

impl SourceDocument {
    pub fn from_upload(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> AppResult<Self> {
        let filename = filename.into();
        let kind = DocumentKind::from_filename(&filename)
            .ok_or_else(|| AppError::UnsupportedFormat(filename.clone()))?;

        Ok(Self {
            filename,
            bytes: bytes.into(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_sniffed_from_extension() {
        assert_eq!(DocumentKind::from_filename("notes.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("Notes.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("chapter-1.txt"), Some(DocumentKind::Text));
        assert_eq!(DocumentKind::from_filename("archive.txt.pdf"), Some(DocumentKind::Pdf));
    }

    #[test]
    fn bare_extension_names_are_sniffed() {
        assert_eq!(DocumentKind::from_filename(".pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename(".TXT"), Some(DocumentKind::Text));
    }

    #[test]
    fn unknown_extensions_are_not_sniffed() {
        for name in ["report.docx", "slides.pptx", "pdf", "README", "notes.pdf.bak", ""] {
            assert_eq!(DocumentKind::from_filename(name), None, "{name}");
        }
    }

    #[test]
    fn from_upload_rejects_unsupported_format() {
        let result = SourceDocument::from_upload("essay.docx", b"PK\x03\x04".to_vec());

        assert!(matches!(result, Err(AppError::UnsupportedFormat(name)) if name == "essay.docx"));
    }

    #[test]
    fn from_upload_keeps_bytes_and_kind() {
        let document = SourceDocument::from_upload("facts.txt", "The sky is blue.").unwrap();

        assert_eq!(document.kind, DocumentKind::Text);
        assert_eq!(document.bytes, b"The sky is blue.");
        assert_eq!(document.filename, "facts.txt");
    }
}
