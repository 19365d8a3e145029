use crate::error::TarifaError;
use crate::extraction::{PageContent, PdfExtractor};
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order mode is the default since price lists wrap product names
/// across lines; `-layout` can be enabled for column-aligned catalogs.
#[derive(Debug, Clone, Default)]
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    /// Use `pdftotext -layout` to preserve whitespace alignment.
    pub fn with_layout(mut self, layout: bool) -> Self {
        self.layout = layout;
        self
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, TarifaError> {
        // The temp file is removed on drop, on every return path.
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| TarifaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| TarifaError::Extraction(e.to_string()))?;

        let mut cmd = Command::new("pdftotext");
        cmd.arg("-enc").arg("UTF-8");
        if self.layout {
            cmd.arg("-layout");
        }
        let output = cmd
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    TarifaError::PdftotextNotFound
                } else {
                    TarifaError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            return Err(TarifaError::PdftotextFailed {
                code,
                stderr: stderr.to_string(),
            });
        }

        // Font descriptor and FontBBox complaints are routine for vendor PDFs.
        for warning in stderr.lines().filter(|l| !l.trim().is_empty()) {
            debug!(backend = "pdftotext", "suppressed extractor warning: {warning}");
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(split_pages(&text))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

/// Split pdftotext output into pages (form feed `\x0c` separates pages).
fn split_pages(text: &str) -> Vec<PageContent> {
    let mut pages: Vec<PageContent> = text
        .split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .collect();

    // pdftotext terminates the last page with a form feed too.
    if pages.len() > 1 && pages.last().is_some_and(|p| p.lines.is_empty()) {
        pages.pop();
    }

    pages
}
