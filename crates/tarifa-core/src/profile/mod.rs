pub mod builtin;
pub mod schema;

use crate::error::TarifaError;
use schema::VendorProfile;
use std::path::Path;

/// Load a vendor profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<VendorProfile, TarifaError> {
    let content = std::fs::read_to_string(path).map_err(|e| TarifaError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a vendor profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<VendorProfile, TarifaError> {
    let profile: VendorProfile =
        serde_json::from_str(json).map_err(|e| TarifaError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a vendor profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<VendorProfile, TarifaError> {
    let profile: VendorProfile = serde_json::from_str(json).map_err(TarifaError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a profile is usable by the row reconstructor.
pub fn validate_profile(profile: &VendorProfile) -> Result<(), TarifaError> {
    if profile.name.trim().is_empty() {
        return Err(TarifaError::ProfileInvalid(
            "profile name must not be empty".into(),
        ));
    }

    if profile.product_keywords.is_empty() {
        return Err(TarifaError::ProfileInvalid(format!(
            "profile '{}' has no product keywords",
            profile.name
        )));
    }

    let lists = [
        ("noise_markers", &profile.noise_markers),
        ("noise_prefixes", &profile.noise_prefixes),
        ("product_keywords", &profile.product_keywords),
    ];
    for (field, entries) in lists {
        if entries.iter().any(|e| e.trim().is_empty()) {
            // A blank entry would match every line.
            return Err(TarifaError::ProfileInvalid(format!(
                "profile '{}' has a blank entry in {}",
                profile.name, field
            )));
        }
    }

    Ok(())
}
