//! CLI argument definitions for dossier.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `render` | Render a snapshot into a dashboard |
//! | `validate` | Check a snapshot for missing fields and inconsistent values |
//! | `sample` | Print the bundled sample snapshot |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table, html) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--currency` | `$` | Prefix for monetary values |
//! | `--verbose` | `false` | Debug logging on stderr |
//!
//! # Examples
//!
//! ```bash
//! dossier render uamy.json --format table
//! dossier sample | dossier render - --format html
//! dossier validate uamy.json --strict
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "dossier",
    author,
    version,
    about = "Render ticker due-diligence snapshots into dashboards"
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON envelope (default)
    /// - ndjson: One event per line, one chunk per dashboard section
    /// - table: Plain-text dashboard
    /// - html: HTML fragment with stable element ids
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Prefix used for monetary values.
    #[arg(long, global = true, default_value = "$")]
    pub currency: String,

    /// Enable debug logging on stderr (otherwise RUST_LOG, default warn).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text dashboard for terminal display.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON events.
    Ndjson,
    /// HTML fragment.
    Html,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a snapshot into a dashboard view.
    ///
    ///   dossier render uamy.json --format table
    ///   dossier render --sample --format html
    Render(SnapshotArgs),

    /// Check a snapshot without rendering it to output.
    ///
    /// Reports the first missing required field and any upstream
    /// inconsistencies (insider values, confidence range, negative prices).
    Validate(SnapshotArgs),

    /// Print the bundled sample snapshot as JSON.
    Sample,
}

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Snapshot JSON file, or `-` for stdin.
    #[arg(required_unless_present = "sample", conflicts_with = "sample")]
    pub path: Option<PathBuf>,

    /// Use the bundled sample snapshot.
    #[arg(long, default_value_t = false)]
    pub sample: bool,
}
