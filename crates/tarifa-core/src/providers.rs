use crate::error::TarifaError;
use crate::extraction::pdftotext::PdftotextExtractor;
use crate::model::RecordSet;
use crate::profile::builtin::load_preset;
use crate::profile::schema::VendorProfile;
use std::collections::BTreeMap;
use std::path::Path;

/// A provider turns an input document and a supplier label into records.
pub type ProviderFn =
    Box<dyn Fn(&Path, &str) -> Result<RecordSet, TarifaError> + Send + Sync + 'static>;

/// Name of the built-in IDC price-list provider.
pub const IDC_PDF: &str = "idc_pdf";

/// Explicit mapping from provider name to ingestion function.
///
/// Built once at startup and passed to whatever dispatches on a provider name.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, ProviderFn>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(IDC_PDF, ingest_idc_pdf);
        registry
    }

    /// Add a provider; an existing provider with the same name is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, provider: F)
    where
        F: Fn(&Path, &str) -> Result<RecordSet, TarifaError> + Send + Sync + 'static,
    {
        self.providers.insert(name.into(), Box::new(provider));
    }

    /// Register a PDF provider driven by a custom vendor profile, named
    /// `<profile>_pdf`. Returns the provider name.
    pub fn register_profile(&mut self, profile: VendorProfile) -> String {
        let name = format!("{}_pdf", profile.name);
        self.register(name.clone(), move |input: &Path, supplier: &str| {
            ingest_pdf_file(input, supplier, &profile)
        });
        name
    }

    pub fn get(&self, name: &str) -> Result<&ProviderFn, TarifaError> {
        self.providers
            .get(name)
            .ok_or_else(|| TarifaError::UnknownProvider {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }
}

fn ingest_idc_pdf(input: &Path, supplier: &str) -> Result<RecordSet, TarifaError> {
    let profile = load_preset("idc")?;
    ingest_pdf_file(input, supplier, &profile)
}

fn ingest_pdf_file(
    input: &Path,
    supplier: &str,
    profile: &VendorProfile,
) -> Result<RecordSet, TarifaError> {
    let pdf_bytes = std::fs::read(input)?;
    let extractor = PdftotextExtractor::new().with_layout(profile.layout);
    crate::ingest_pdf(&pdf_bytes, &extractor, profile, supplier, input)
}
