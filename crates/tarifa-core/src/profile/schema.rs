use serde::{Deserialize, Serialize};

/// The vocabulary of one price-list document family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Lines containing any of these (table headers, footers) are noise.
    #[serde(default)]
    pub noise_markers: Vec<String>,
    /// Lines starting with any of these (bullets, banners, promotions) are noise.
    #[serde(default)]
    pub noise_prefixes: Vec<String>,
    /// Case-sensitive prefixes that start a new product name right after a
    /// record-opening line.
    pub product_keywords: Vec<String>,
    /// Extract text with column layout preserved instead of reading order.
    #[serde(default)]
    pub layout: bool,
}

impl VendorProfile {
    pub fn is_noise(&self, line: &str) -> bool {
        self.noise_markers.iter().any(|m| line.contains(m.as_str()))
            || self.noise_prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }

    pub fn starts_product(&self, line: &str) -> bool {
        self.product_keywords
            .iter()
            .any(|k| line.starts_with(k.as_str()))
    }
}
