use crate::error::TarifaError;
use crate::profile::schema::VendorProfile;

const IDC_JSON: &str = include_str!("../../../../profiles/idc.json");

/// Available predefined vendor profiles.
pub const PRESETS: &[&str] = &["idc"];

/// Load a predefined vendor profile by name.
pub fn load_preset(name: &str) -> Result<VendorProfile, TarifaError> {
    match name {
        "idc" => {
            let profile: VendorProfile = serde_json::from_str(IDC_JSON)?;
            Ok(profile)
        }
        _ => Err(TarifaError::ProfileInvalid(format!(
            "unknown profile '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
