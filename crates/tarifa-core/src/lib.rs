pub mod assemble;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod providers;

use error::TarifaError;
use extraction::{flatten_lines, PdfExtractor};
use model::RecordSet;
use profile::schema::VendorProfile;
use std::path::Path;
use tracing::info;

/// Main API entry point: turn a price-list PDF into normalized records.
///
/// `source` is only used for the `source_file` column (file name only).
/// A document without any recognizable product yields an empty record set,
/// not an error.
pub fn ingest_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    profile: &VendorProfile,
    supplier: &str,
    source: &Path,
) -> Result<RecordSet, TarifaError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let lines = flatten_lines(&pages);

    let records = ingest_lines(&lines, profile, supplier, source);

    info!(
        backend = extractor.backend_name(),
        profile = %profile.name,
        pages = pages.len(),
        lines = lines.len(),
        records = records.len(),
        source = %source.display(),
        "ingested price list"
    );

    Ok(records)
}

/// Run row reconstruction and record assembly over already-extracted lines.
pub fn ingest_lines<S: AsRef<str>>(
    lines: &[S],
    profile: &VendorProfile,
    supplier: &str,
    source: &Path,
) -> RecordSet {
    let rows = parsing::reconstruct_rows(lines, profile);
    assemble::assemble_records(&rows, supplier, source)
}
