use tarifa_core::error::TarifaError;
use tarifa_core::model::RecordSet;

pub fn print(records: &RecordSet) -> Result<(), TarifaError> {
    let json = serde_json::to_string_pretty(&records.records)?;
    println!("{json}");
    Ok(())
}
