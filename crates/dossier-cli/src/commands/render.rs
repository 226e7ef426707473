use dossier_core::{audit, EnvelopeError, Renderer, TickerSnapshot};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::CliError;

use super::CommandResult;

pub fn run(snapshot: &TickerSnapshot, renderer: &Renderer) -> Result<CommandResult, CliError> {
    let warnings: Vec<String> = audit(snapshot).iter().map(ToString::to_string).collect();

    let result = match renderer.render(snapshot) {
        Ok(tree) => {
            info!(
                ticker = %tree.ticker,
                nodes = tree.node_count(),
                "dashboard rendered"
            );
            CommandResult::ok(serde_json::to_value(&tree)?).with_view(tree)
        }
        Err(missing) => {
            warn!(field = missing.field, "snapshot is incomplete");
            CommandResult::ok(Value::Null).with_errors(vec![EnvelopeError::from(&missing)])
        }
    };

    Ok(result
        .with_ticker(snapshot.ticker.clone())
        .with_warnings(warnings))
}
