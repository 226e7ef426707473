//! Bundled sample snapshot, handy for demos and smoke tests.

use crate::{loader, CoreError, TickerSnapshot};

/// Raw JSON of the bundled United States Antimony Corp snapshot.
pub const UAMY_JSON: &str = include_str!("../fixtures/uamy.json");

pub fn uamy() -> Result<TickerSnapshot, CoreError> {
    loader::from_json_str(UAMY_JSON)
}
