use crate::profile::schema::VendorProfile;
use regex::Regex;
use std::sync::LazyLock;

/// Marker that introduces every monetary amount in the price list.
pub const CURRENCY_MARKER: char = '$';

// Exactly six digits at the literal start of the line; five or seven never match.
static SKU_INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{6})\s+(.+)$").expect("valid sku regex"));

static TIER_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$\s*([0-9.,]+)\s*\+\s*(?:iva|tax)").expect("valid tier price regex")
});

/// How a single line of extracted text is treated by the reconstructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Header, footer, banner or blank line.
    Noise,
    /// Six-digit SKU followed by text that carries at least one price.
    RecordOpening { sku: &'a str, rest: &'a str },
    /// Contains a price but no SKU.
    StrayPrice,
    /// Anything else: a name fragment or description line.
    Text,
}

/// Classify one trimmed line, in priority order.
pub fn classify_line<'a>(line: &'a str, profile: &VendorProfile) -> LineKind<'a> {
    if line.is_empty() || profile.is_noise(line) {
        return LineKind::Noise;
    }

    if !line.contains(CURRENCY_MARKER) {
        return LineKind::Text;
    }

    SKU_INLINE_RE
        .captures(line)
        .and_then(|caps| Some((caps.get(1)?, caps.get(2)?)))
        .map(|(sku, rest)| LineKind::RecordOpening {
            sku: sku.as_str(),
            rest: rest.as_str(),
        })
        .unwrap_or(LineKind::StrayPrice)
}

/// The part of a record-opening line's trailing text before the first price.
pub fn name_before_price(rest: &str) -> &str {
    rest.split(CURRENCY_MARKER).next().unwrap_or_default().trim()
}

/// Every "$amount + iva" price on the line, in order of appearance.
pub fn tier_prices(line: &str) -> Vec<String> {
    TIER_PRICE_RE
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| format!("{}{}", CURRENCY_MARKER, m.as_str()))
        .collect()
}
