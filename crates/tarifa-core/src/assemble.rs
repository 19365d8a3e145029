use crate::model::{NormalizedRecord, RawProductRow, RecordSet, TaxIncluded};
use crate::parsing::values::{parse_price, parse_stock};
use std::path::Path;

/// Map recovered rows onto the standard catalog schema.
///
/// Price and stock fields that cannot be parsed become `None` on that record.
/// An empty input still yields a well-formed, zero-row [`RecordSet`].
pub fn assemble_records(rows: &[RawProductRow], supplier: &str, source: &Path) -> RecordSet {
    let source_file = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.to_string_lossy().into_owned());

    let records = rows
        .iter()
        .map(|row| {
            let eta = row.eta_text.trim();
            NormalizedRecord {
                supplier: supplier.to_string(),
                supplier_sku: row.sku.clone(),
                title: row.name.clone(),
                brand: None,
                model: None,
                ean_upc: None,
                category: None,
                condition: None,
                cost_x1_usd: parse_price(&row.price_x1),
                cost_x3_usd: parse_price(&row.price_x3),
                cost_x6_usd: parse_price(&row.price_x6),
                // The whole document family lists prices "+ iva".
                tax_included: TaxIncluded::No,
                stock: parse_stock(&row.stock_text),
                eta_text: (!eta.is_empty()).then(|| eta.to_string()),
                source_file: source_file.clone(),
            }
        })
        .collect();

    RecordSet::new(records)
}
