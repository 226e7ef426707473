pub mod stream_writer;

use std::io::{self, Write};

use dossier_core::{mount, Envelope, HtmlMount, TextMount, ViewTree};
use serde_json::json;
use serde_json::Value;

use self::stream_writer::{NdjsonStreamWriter, StreamEventError};
use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    view: Option<&ViewTree>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match (format, view) {
        (OutputFormat::Json, _) => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        (OutputFormat::Ndjson, _) => render_stream(&mut out, envelope, view)?,
        (OutputFormat::Table, Some(view)) => mount(view, &mut TextMount::new(&mut out))?,
        (OutputFormat::Html, Some(view)) => mount(view, &mut HtmlMount::new(&mut out))?,
        (OutputFormat::Table | OutputFormat::Html, None) => render_table(&mut out, envelope)?,
    }

    Ok(())
}

/// Prints a bare document. Only JSON shapes apply; table and HTML fall back
/// to pretty JSON.
pub fn render_document(document: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let payload = match format {
        OutputFormat::Json if !pretty => serde_json::to_string(document)?,
        OutputFormat::Ndjson => serde_json::to_string(document)?,
        _ => serde_json::to_string_pretty(document)?,
    };
    println!("{payload}");
    Ok(())
}

fn render_stream<W: Write>(
    out: W,
    envelope: &Envelope<Value>,
    view: Option<&ViewTree>,
) -> Result<(), CliError> {
    let mut writer = NdjsonStreamWriter::new(out);

    writer.emit_start(Some(json!({
        "request_id": envelope.meta.request_id,
        "schema_version": envelope.meta.schema_version,
        "source": envelope.meta.source,
        "ticker": envelope.meta.ticker,
    })))?;

    match view {
        Some(view) => {
            for section in &view.sections {
                writer.emit_section(section)?;
            }
        }
        None if !envelope.data.is_null() => writer.emit_chunk(Some(envelope.data.clone()))?,
        None => {}
    }

    for error in &envelope.errors {
        let mut stream_error = StreamEventError::new(error.code.clone(), error.message.clone());
        if let Some(field) = &error.field {
            stream_error = stream_error.with_field(field.clone());
        }
        writer.emit_error(stream_error)?;
    }

    writer.emit_end(Some(json!({
        "status": if envelope.errors.is_empty() { "ok" } else { "error" },
        "warnings": envelope.meta.warnings,
        "error_count": envelope.errors.len(),
    })))?;

    Ok(())
}

fn render_table<W: Write>(mut out: W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    writeln!(out, "request_id  : {}", envelope.meta.request_id)?;
    writeln!(out, "schema      : {}", envelope.meta.schema_version)?;
    writeln!(out, "generated_at: {}", envelope.meta.generated_at)?;
    writeln!(out, "source      : {}", envelope.meta.source)?;
    if let Some(ticker) = &envelope.meta.ticker {
        writeln!(out, "ticker      : {ticker}")?;
    }

    if !envelope.meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &envelope.meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    writeln!(out, "data:")?;
    let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
    for line in pretty_data.lines() {
        writeln!(out, "  {line}")?;
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            writeln!(out, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}
