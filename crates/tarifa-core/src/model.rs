use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical output columns, in the order every export must use.
pub const COLUMNS: [&str; 15] = [
    "supplier",
    "supplier_sku",
    "title",
    "brand",
    "model",
    "ean_upc",
    "category",
    "condition",
    "cost_x1_usd",
    "cost_x3_usd",
    "cost_x6_usd",
    "tax_included",
    "stock",
    "eta_text",
    "source_file",
];

/// One product as recovered from the line stream, before any field parsing.
///
/// The price tiers hold the matched `$amount` text; `stock_text` and
/// `eta_text` both carry the whole record-opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProductRow {
    pub sku: String,
    pub name: String,
    pub price_x1: String,
    pub price_x3: String,
    pub price_x6: String,
    pub stock_text: String,
    pub eta_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxIncluded {
    Yes,
    /// Prices are listed before tax ("+ iva").
    #[default]
    No,
}

impl fmt::Display for TaxIncluded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxIncluded::Yes => write!(f, "yes"),
            TaxIncluded::No => write!(f, "no"),
        }
    }
}

/// A row of the standard supplier catalog schema.
///
/// Field order matches [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub supplier: String,
    pub supplier_sku: String,
    pub title: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub ean_upc: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub cost_x1_usd: Option<Decimal>,
    pub cost_x3_usd: Option<Decimal>,
    pub cost_x6_usd: Option<Decimal>,
    pub tax_included: TaxIncluded,
    pub stock: Option<i64>,
    pub eta_text: Option<String>,
    pub source_file: String,
}

/// A single spreadsheet cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl Cell {
    fn text(value: &Option<String>) -> Cell {
        match value {
            Some(s) => Cell::Text(s.clone()),
            None => Cell::Empty,
        }
    }

    fn decimal(value: Option<Decimal>) -> Cell {
        value
            .and_then(|d| d.to_f64())
            .map(Cell::Number)
            .unwrap_or(Cell::Empty)
    }
}

impl NormalizedRecord {
    /// The record's cells in canonical column order.
    pub fn cells(&self) -> [Cell; 15] {
        [
            Cell::Text(self.supplier.clone()),
            Cell::Text(self.supplier_sku.clone()),
            Cell::Text(self.title.clone()),
            Cell::text(&self.brand),
            Cell::text(&self.model),
            Cell::text(&self.ean_upc),
            Cell::text(&self.category),
            Cell::text(&self.condition),
            Cell::decimal(self.cost_x1_usd),
            Cell::decimal(self.cost_x3_usd),
            Cell::decimal(self.cost_x6_usd),
            Cell::Text(self.tax_included.to_string()),
            self.stock
                .map(|s| Cell::Number(s as f64))
                .unwrap_or(Cell::Empty),
            Cell::text(&self.eta_text),
            Cell::Text(self.source_file.clone()),
        ]
    }
}

/// The normalized table handed to the exporter.
///
/// Always reports the full canonical column set, even with zero rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    pub records: Vec<NormalizedRecord>,
}

impl RecordSet {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        RecordSet { records }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedRecord> {
        self.records.iter()
    }
}
