mod render;
mod sample;
mod validate;

use std::io;
use std::path::Path;

use dossier_core::{
    loader, Envelope, EnvelopeError, EnvelopeMeta, RenderConfig, Renderer, TickerSnapshot,
    ViewTree, VIEW_SCHEMA_VERSION,
};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::cli::{Cli, Command, SnapshotArgs};
use crate::error::CliError;

/// What a command hands to the output layer.
pub enum Outcome {
    /// Enveloped result; `view` is set when a dashboard was rendered.
    Enveloped {
        envelope: Envelope<Value>,
        view: Option<ViewTree>,
    },
    /// Bare JSON document, printed as-is.
    Document(Value),
}

pub struct CommandResult {
    pub data: Value,
    pub view: Option<ViewTree>,
    pub ticker: Option<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            view: None,
            ticker: None,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_view(mut self, view: ViewTree) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_ticker(mut self, ticker: Option<String>) -> Self {
        self.ticker = ticker;
        self
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

struct LoadedSnapshot {
    snapshot: TickerSnapshot,
    source: String,
}

pub fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let command_result = match &cli.command {
        Command::Sample => return Ok(Outcome::Document(sample::run()?)),
        Command::Render(args) => {
            let loaded = load(args)?;
            let renderer = Renderer::new(RenderConfig {
                currency_prefix: cli.currency.clone(),
            });
            (render::run(&loaded.snapshot, &renderer)?, loaded.source)
        }
        Command::Validate(args) => {
            let loaded = load(args)?;
            (validate::run(&loaded.snapshot)?, loaded.source)
        }
    };

    let (
        CommandResult {
            data,
            view,
            ticker,
            warnings,
            errors,
        },
        source,
    ) = command_result;

    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), VIEW_SCHEMA_VERSION, source)?;
    if let Some(ticker) = ticker {
        meta = meta.with_ticker(ticker);
    }
    for warning in warnings {
        meta.push_warning(warning);
    }

    let envelope = Envelope::with_errors(meta, data, errors)?;
    Ok(Outcome::Enveloped { envelope, view })
}

fn load(args: &SnapshotArgs) -> Result<LoadedSnapshot, CliError> {
    if args.sample {
        return Ok(LoadedSnapshot {
            snapshot: dossier_core::sample::uamy()?,
            source: String::from("sample"),
        });
    }

    let Some(path) = args.path.as_deref() else {
        return Err(CliError::Command(String::from(
            "a snapshot path or --sample is required",
        )));
    };

    let loaded = if path == Path::new("-") {
        LoadedSnapshot {
            snapshot: loader::from_reader(io::stdin().lock())?,
            source: String::from("stdin"),
        }
    } else {
        LoadedSnapshot {
            snapshot: loader::from_path(path)?,
            source: format!("file:{}", path.display()),
        }
    };

    info!(source = %loaded.source, "snapshot loaded");
    Ok(loaded)
}
