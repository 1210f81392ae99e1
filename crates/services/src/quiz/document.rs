use std::path::Path;

use lopdf::Document;
use study_core::model::QuizRequest;

use crate::error::QuizError;

/// Source of plain text for a page range of a document.
pub trait DocumentReader: Send + Sync {
    /// Concatenated text of the requested pages.
    ///
    /// Pages past the end of the document are skipped.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Document` if the document cannot be read.
    fn extract_pages(&self, path: &Path, request: &QuizRequest) -> Result<String, QuizError>;
}

/// Reads PDF files with `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDocumentReader;

impl DocumentReader for PdfDocumentReader {
    fn extract_pages(&self, path: &Path, request: &QuizRequest) -> Result<String, QuizError> {
        let document = Document::load(path).map_err(|e| QuizError::Document(e.to_string()))?;
        let page_count = u32::try_from(document.get_pages().len()).unwrap_or(u32::MAX);

        let pages: Vec<u32> = request.pages().take_while(|page| *page <= page_count).collect();
        if pages.is_empty() {
            tracing::debug!(
                path = %path.display(),
                page_count,
                start = request.start_page(),
                "requested pages are past the end of the document"
            );
            return Ok(String::new());
        }

        let text = document
            .extract_text(&pages)
            .map_err(|e| QuizError::Document(e.to_string()))?;
        tracing::debug!(path = %path.display(), pages = pages.len(), chars = text.len(), "extracted text");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a.pdf");
        std::fs::write(&path, b"plain text, not a pdf").unwrap();

        let request = QuizRequest::new(1, 2, 3).unwrap();
        let err = PdfDocumentReader.extract_pages(&path, &request).unwrap_err();
        assert!(matches!(err, QuizError::Document(_)));
    }
}
