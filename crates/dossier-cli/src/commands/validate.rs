use dossier_core::{audit, render, AuditFinding, EnvelopeError, TickerSnapshot};
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ValidationReport {
    ticker: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<&'static str>,
    findings: Vec<AuditFinding>,
}

pub fn run(snapshot: &TickerSnapshot) -> Result<CommandResult, CliError> {
    let missing = render(snapshot).err();
    let findings = audit(snapshot);
    let warnings = findings.iter().map(ToString::to_string).collect();

    let report = ValidationReport {
        ticker: snapshot.ticker.clone(),
        valid: missing.is_none(),
        missing: missing.as_ref().map(|error| error.field),
        findings,
    };

    let errors = missing.iter().map(EnvelopeError::from).collect();

    Ok(CommandResult::ok(serde_json::to_value(report)?)
        .with_ticker(snapshot.ticker.clone())
        .with_warnings(warnings)
        .with_errors(errors))
}
