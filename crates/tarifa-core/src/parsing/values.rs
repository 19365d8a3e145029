use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?\s*([0-9.,]+)").expect("valid price regex"));

static UNITS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\+?\d+)\s*(?:UNITS|UNIDADES)").expect("valid units regex")
});

/// Parse the first price found in a text fragment.
///
/// Handles formats like:
/// - "$1.398,88 + iva" -> 1398.88 (dot thousands, comma decimal)
/// - "$138.22" -> 138.22 (dot decimal)
/// - "1398,88" -> 1398.88 (comma decimal)
/// - "" or "sin precio" -> None
pub fn parse_price(text: &str) -> Option<Decimal> {
    if text.is_empty() {
        return None;
    }
    let raw = PRICE_RE.captures(text)?.get(1)?.as_str().trim();
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let normalized = match (raw.contains('.'), raw.contains(',')) {
        (true, true) => raw.replace('.', "").replace(',', "."),
        (false, true) => raw.replace(',', "."),
        _ => raw.to_string(),
    };

    Decimal::from_str(&normalized).ok()
}

/// Parse a unit count such as "50 UNITS" or "+100 UNIDADES".
///
/// A leading `+` ("at least") is dropped; only the magnitude is kept.
pub fn parse_stock(text: &str) -> Option<i64> {
    let caps = UNITS_RE.captures(text)?;
    caps.get(1)?.as_str().trim_start_matches('+').parse().ok()
}

/// Trim a product name and collapse every whitespace run to one space.
pub fn clean_name(name: Option<&str>) -> String {
    name.unwrap_or_default()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
