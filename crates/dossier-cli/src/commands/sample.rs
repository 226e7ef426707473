use serde_json::Value;

use crate::error::CliError;

/// The bundled snapshot, normalized through the model so field names match
/// what `render` reads back.
pub fn run() -> Result<Value, CliError> {
    let snapshot = dossier_core::sample::uamy()?;
    Ok(serde_json::to_value(&snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_document_loads_back_unchanged() {
        let document = run().expect("sample should serialize");
        let reloaded =
            dossier_core::loader::from_json_str(&document.to_string()).expect("should reload");

        assert_eq!(reloaded, dossier_core::sample::uamy().expect("sample"));
    }
}
