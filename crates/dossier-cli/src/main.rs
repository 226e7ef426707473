mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::Outcome;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (envelope, view) = match commands::run(&cli)? {
        Outcome::Document(document) => {
            return output::render_document(&document, cli.format, cli.pretty);
        }
        Outcome::Enveloped { envelope, view } => (envelope, view),
    };

    output::render(&envelope, view.as_ref(), cli.format, cli.pretty)?;

    if let Some(error) = envelope.errors.first() {
        return Err(CliError::Rejected {
            code: error.code.clone(),
            message: error.message.clone(),
        });
    }

    if cli.strict && !envelope.meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: envelope.meta.warnings.len(),
            error_count: envelope.errors.len(),
        });
    }

    Ok(())
}
