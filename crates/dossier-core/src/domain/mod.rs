//! # Domain Models
//!
//! The snapshot record a dashboard is rendered from.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TickerSnapshot`] | Root record for one ticker |
//! | [`Technicals`] | Moving averages, ATR, buy zone, pivot and fibonacci levels |
//! | [`InsiderTrade`] | One insider filing |
//! | [`Verification`] | Supply-chain claims and geospatial monitoring |
//! | [`SecInsights`] | Text extracted from SEC filings |
//! | [`Headline`] | News headline with optional summary |
//! | [`CalendarDate`] | `YYYY-MM-DD` date |
//!
//! Snapshots are plain values: built once by a loader, borrowed by the
//! renderer, never mutated in between.

mod date;
mod ordered;
mod snapshot;

pub use date::CalendarDate;
pub use snapshot::{
    is_active_status, Claim, Geospatial, Headline, InsiderTrade, PriceLevel, SecInsights, SupplyChain,
    Technicals, TickerSnapshot, TimelineEvent, TradeDirection, Verification,
};
