pub mod line;
pub mod values;

use crate::model::RawProductRow;
use crate::profile::schema::VendorProfile;
use line::{classify_line, name_before_price, tier_prices, LineKind};
use tracing::debug;
use values::clean_name;

/// Where the scanner is relative to the last record-opening line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Collecting name fragments for the next record.
    Scanning,
    /// Right after a record-opening line; lines are trailing description
    /// until a product keyword or noise line shows up.
    Continuation,
}

/// Recover product rows from the flattened line stream of a price list.
///
/// Layout of one product in the source document:
/// - one or more name lines (no SKU, no price)
/// - the record-opening line: SKU, rest of the name, price tiers, stock
/// - optional technical description lines
///
/// Single forward pass; a classification is never revisited. Name lines
/// left over at the end of the stream are dropped.
pub fn reconstruct_rows<S: AsRef<str>>(
    lines: &[S],
    profile: &VendorProfile,
) -> Vec<RawProductRow> {
    let mut rows = Vec::new();
    let mut name_buffer: Vec<&str> = Vec::new();
    let mut state = ScanState::Scanning;
    let mut discarded = 0usize;

    for raw in lines {
        let line = raw.as_ref().trim();

        state = match (state, classify_line(line, profile)) {
            (_, LineKind::Noise) => {
                name_buffer.clear();
                discarded += 1;
                ScanState::Scanning
            }
            (_, LineKind::RecordOpening { sku, rest }) => {
                let before_price = name_before_price(rest);
                if !before_price.is_empty() {
                    name_buffer.push(before_price);
                }
                rows.push(open_record(sku, &name_buffer, line));
                name_buffer.clear();
                ScanState::Continuation
            }
            (ScanState::Continuation, _) if profile.starts_product(line) => {
                name_buffer.push(line);
                ScanState::Scanning
            }
            (ScanState::Continuation, _) => {
                // Stray price or technical description of the open record.
                discarded += 1;
                ScanState::Continuation
            }
            (ScanState::Scanning, LineKind::StrayPrice) => {
                discarded += 1;
                ScanState::Scanning
            }
            (ScanState::Scanning, LineKind::Text) => {
                name_buffer.push(line);
                ScanState::Scanning
            }
        };
    }

    debug!(
        rows = rows.len(),
        discarded,
        dangling_name_lines = name_buffer.len(),
        "reconstructed price list rows"
    );

    rows
}

fn open_record(sku: &str, name_parts: &[&str], line: &str) -> RawProductRow {
    let name = clean_name(Some(name_parts.join(" ").as_str()));
    let mut tiers = tier_prices(line).into_iter();

    RawProductRow {
        sku: sku.to_string(),
        name,
        price_x1: tiers.next().unwrap_or_default(),
        price_x3: tiers.next().unwrap_or_default(),
        price_x6: tiers.next().unwrap_or_default(),
        // Stock and ETA are not separable here; both re-scan the whole line.
        stock_text: line.to_string(),
        eta_text: line.to_string(),
    }
}
