use std::path::PathBuf;
use tarifa_core::error::TarifaError;
use tarifa_core::export::write_xlsx;
use tarifa_core::profile::load_profile;
use tarifa_core::providers::ProviderRegistry;
use tracing::debug;

use crate::output;

pub struct IngestArgs {
    pub provider: String,
    pub input: PathBuf,
    pub supplier: String,
    pub out: PathBuf,
    pub profile: Option<PathBuf>,
    pub json: bool,
}

pub fn run(args: IngestArgs) -> Result<(), TarifaError> {
    let mut registry = ProviderRegistry::builtin();
    if let Some(path) = &args.profile {
        let profile = load_profile(path)?;
        let name = registry.register_profile(profile);
        debug!(provider = %name, path = %path.display(), "registered custom profile");
    }

    let provider = registry.get(&args.provider)?;
    let records = provider(args.input.as_path(), args.supplier.as_str())?;

    let written = write_xlsx(&records, &args.out)?;

    let summary = format!("Exported {} | rows={}", written.display(), records.len());
    if args.json {
        // Keep stdout parseable.
        output::json::print(&records)?;
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    Ok(())
}
