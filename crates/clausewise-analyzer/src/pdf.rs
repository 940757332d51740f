//! PDF text extraction
//!
//! Wraps the pdf-extract crate. Pages come out in physical order with no
//! layout reconstruction.

use crate::error::AnalyzerError;
use std::panic;
use tracing::{debug, warn};

/// Magic header every PDF file starts with
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Returns true if the bytes carry the PDF magic header
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Extract the plain text of every page, concatenated in page order
///
/// # Errors
///
/// `AnalyzerError::Extraction` for empty input, bytes without a PDF header,
/// or a document the parser cannot read.
pub fn extract_text(bytes: &[u8]) -> Result<String, AnalyzerError> {
    if bytes.is_empty() {
        return Err(AnalyzerError::Extraction("document is empty".to_string()));
    }
    if !looks_like_pdf(bytes) {
        return Err(AnalyzerError::Extraction(
            "document is not a PDF (missing %PDF- header)".to_string(),
        ));
    }

    // pdf-extract panics on some malformed streams instead of returning an error
    let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| AnalyzerError::Extraction("PDF parser aborted on malformed content".to_string()))?
        .map_err(|e| AnalyzerError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        warn!("PDF contains no extractable text (scanned or image-only?)");
    }
    debug!("Extracted {} chars from {} bytes", text.len(), bytes.len());

    Ok(text)
}

/// Run `extract_text` on the blocking thread pool
pub async fn extract_text_blocking(bytes: Vec<u8>) -> Result<String, AnalyzerError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AnalyzerError::Extraction(format!("extraction task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_pdf() {
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"PK\x03\x04"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = extract_text(b"").unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(_)));
    }

    #[test]
    fn test_non_pdf_rejected() {
        let err = extract_text(b"This is a plain text contract.").unwrap_err();
        assert!(matches!(err, AnalyzerError::Extraction(ref m) if m.contains("not a PDF")));
    }

    #[test]
    fn test_header_with_broken_body_rejected() {
        for bytes in [&b"%PDF-1.4\ngarbage"[..], &b"%PDF-"[..]] {
            let err = extract_text(bytes).unwrap_err();
            assert!(matches!(err, AnalyzerError::Extraction(_)), "input: {:?}", bytes);
        }
    }

    #[tokio::test]
    async fn test_blocking_wrapper_propagates_error() {
        let result = extract_text_blocking(b"not a pdf".to_vec()).await;
        assert!(matches!(result, Err(AnalyzerError::Extraction(_))));
    }
}
