//! Snapshot loading from JSON documents.
//!
//! A `null` document is reported as a missing snapshot rather than a parse
//! error, matching how the renderer reports absent required fields.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::{CoreError, MissingDataError, TickerSnapshot};

pub fn from_json_str(input: &str) -> Result<TickerSnapshot, CoreError> {
    let snapshot = serde_json::from_str::<Option<TickerSnapshot>>(input)?;
    require_root(snapshot)
}

pub fn from_reader<R: Read>(reader: R) -> Result<TickerSnapshot, CoreError> {
    let snapshot = serde_json::from_reader::<_, Option<TickerSnapshot>>(reader)?;
    require_root(snapshot)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<TickerSnapshot, CoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading snapshot");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

fn require_root(snapshot: Option<TickerSnapshot>) -> Result<TickerSnapshot, CoreError> {
    snapshot.ok_or_else(|| MissingDataError::new("snapshot").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_document_is_missing_snapshot() {
        let err = from_json_str("null").expect_err("must fail");
        assert!(matches!(
            err,
            CoreError::Missing(MissingDataError { field: "snapshot" })
        ));
    }

    #[test]
    fn malformed_document_is_serialization_error() {
        let err = from_json_str("{\"ticker\": ").expect_err("must fail");
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn bad_insider_date_is_rejected_at_load() {
        let err = from_json_str(
            r#"{"insider_trades": [{"date": "yesterday", "insider": "A", "type": "P",
                "shares": 1, "price": 1.0, "value": 1.0}]}"#,
        )
        .expect_err("must fail");
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn empty_object_loads_as_incomplete_snapshot() {
        let snapshot = from_json_str("{}").expect("empty object should load");
        assert!(snapshot.ticker.is_none());
        assert!(snapshot.headlines.is_empty());
    }
}
