//! Core contracts for dossier.
//!
//! This crate contains:
//! - The ticker snapshot model and its JSON loader
//! - The renderer mapping a snapshot to a toolkit-independent view tree
//! - Mount adapters turning a view tree into text or HTML
//! - Consistency audit, response envelope and structured errors

pub mod audit;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod format;
pub mod loader;
pub mod mount;
pub mod render;
pub mod sample;
pub mod view;

pub use audit::{audit, AuditFinding};
pub use domain::{
    CalendarDate, Claim, Geospatial, Headline, InsiderTrade, PriceLevel, SecInsights,
    SupplyChain, Technicals, TickerSnapshot, TimelineEvent, TradeDirection, Verification,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, MissingDataError, ValidationError};
pub use mount::{element_id, mount, HtmlMount, Mount, TextMount};
pub use render::{render, RenderConfig, Renderer};
pub use view::{
    LevelEntry, NewsItem, NodeKey, Section, SectionId, TimelineEntry, ViewNode, ViewTree,
    VIEW_SCHEMA_VERSION,
};
