pub mod pdftotext;

use crate::error::TarifaError;

/// Text extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    ///
    /// A page that yields no text is returned with no lines.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TarifaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Flatten pages into one sequence of trimmed, non-empty lines in document order.
pub fn flatten_lines(pages: &[PageContent]) -> Vec<&str> {
    pages
        .iter()
        .flat_map(|p| p.lines.iter())
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}
