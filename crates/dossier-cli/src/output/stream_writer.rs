use std::io::Write;

use dossier_core::{Section, SectionId};
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamEventType {
    Start,
    /// One rendered dashboard section; `section` names it.
    Section,
    /// Payload that is not a dashboard section, such as a validation report.
    Chunk,
    End,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamEventError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl StreamEventError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamEvent {
    pub event: StreamEventType,
    pub seq: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub ts: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StreamEventError>,
}

/// Writes one JSON event per line with a monotonically increasing `seq`.
/// Errors name the snapshot field they refer to.
pub struct NdjsonStreamWriter<W: Write> {
    writer: W,
    next_seq: u64,
}

impl<W: Write> NdjsonStreamWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq: 1,
        }
    }

    pub fn emit_start(&mut self, data: Option<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::Start, None, data, None)
    }

    /// Emits `section` with its title and nodes as the payload.
    pub fn emit_section(&mut self, section: &Section) -> Result<(), CliError> {
        let data = serde_json::json!({
            "title": section.title,
            "nodes": section.nodes,
        });
        self.emit(StreamEventType::Section, Some(section.id), Some(data), None)
    }

    pub fn emit_chunk(&mut self, data: Option<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::Chunk, None, data, None)
    }

    pub fn emit_end(&mut self, data: Option<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::End, None, data, None)
    }

    pub fn emit_error(&mut self, error: StreamEventError) -> Result<(), CliError> {
        self.emit(StreamEventType::Error, None, None, Some(error))
    }

    fn emit(
        &mut self,
        event: StreamEventType,
        section: Option<SectionId>,
        data: Option<Value>,
        error: Option<StreamEventError>,
    ) -> Result<(), CliError> {
        let event = StreamEvent {
            event,
            seq: self.next_seq,
            ts: OffsetDateTime::now_utc(),
            section,
            data,
            error,
        };
        self.next_seq += 1;

        let payload = serde_json::to_string(&event)?;
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn events(sink: &[u8]) -> Vec<Value> {
        std::str::from_utf8(sink)
            .expect("utf8")
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).expect("json line"))
            .collect()
    }

    #[test]
    fn emits_expected_event_sequence() {
        let mut sink = Vec::<u8>::new();

        {
            let mut writer = NdjsonStreamWriter::new(&mut sink);
            writer
                .emit_start(Some(json!({ "ticker": "UAMY" })))
                .expect("start");
            writer
                .emit_section(&Section::new(SectionId::InsiderTrades))
                .expect("section");
            writer.emit_end(None).expect("end");
        }

        let events = events(&sink);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "start");
        assert!(events[0].get("section").is_none());
        assert_eq!(events[1]["event"], "section");
        assert_eq!(events[1]["section"], "insider_trades");
        assert_eq!(events[1]["data"]["title"], "Insider Activity");
        assert_eq!(events[1]["data"]["nodes"], json!([]));
        assert_eq!(events[2]["event"], "end");
        assert_eq!(events[0]["seq"], 1);
        assert_eq!(events[2]["seq"], 3);
        assert!(events[2].get("data").is_none());
        assert!(events[0]["ts"].as_str().is_some_and(|ts| ts.contains('T')));
    }

    #[test]
    fn emits_error_event_payload() {
        let mut sink = Vec::<u8>::new();

        {
            let mut writer = NdjsonStreamWriter::new(&mut sink);
            writer
                .emit_error(
                    StreamEventError::new("missing_data", "missing required field 'price'")
                        .with_field("price"),
                )
                .expect("error event");
        }

        let events = events(&sink);

        assert_eq!(events[0]["event"], "error");
        assert_eq!(events[0].pointer("/error/code"), Some(&json!("missing_data")));
        assert_eq!(events[0].pointer("/error/field"), Some(&json!("price")));
    }
}
