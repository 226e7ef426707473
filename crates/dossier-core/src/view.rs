use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Version of the view-tree layout emitted by the renderer.
pub const VIEW_SCHEMA_VERSION: &str = "v1.0.0";

/// Renderer output: ordered sections of typed display nodes, independent of
/// any concrete UI toolkit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTree {
    pub schema_version: String,
    pub ticker: String,
    pub sections: Vec<Section>,
}

impl ViewTree {
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Looks up a node by its binding key across all sections.
    pub fn node(&self, key: NodeKey) -> Option<&ViewNode> {
        self.nodes().find(|node| node.key() == key)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ViewNode> {
        self.sections.iter().flat_map(|section| section.nodes.iter())
    }

    pub fn node_count(&self) -> usize {
        self.sections.iter().map(|section| section.nodes.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub nodes: Vec<ViewNode>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            title: id.title().to_owned(),
            nodes: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Technicals,
    InsiderTrades,
    Verification,
    SecInsights,
    Headlines,
}

impl SectionId {
    pub const ALL: [Self; 6] = [
        Self::Header,
        Self::Technicals,
        Self::InsiderTrades,
        Self::Verification,
        Self::SecInsights,
        Self::Headlines,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Technicals => "technicals",
            Self::InsiderTrades => "insider_trades",
            Self::Verification => "verification",
            Self::SecInsights => "sec_insights",
            Self::Headlines => "headlines",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Header => "Overview",
            Self::Technicals => "Technical Stack",
            Self::InsiderTrades => "Insider Activity",
            Self::Verification => "Physical Verification",
            Self::SecInsights => "SEC Insights",
            Self::Headlines => "Headlines",
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit binding reference carried by every node. Mount adapters resolve
/// keys to their own widgets; nothing is looked up by global name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKey {
    Ticker,
    Name,
    Price,
    PriceChange,
    Sentiment,
    Ema21,
    Sma50,
    Sma200,
    Atr,
    BuyZone,
    Pivots,
    Fibonacci,
    InsiderTable,
    SiteName,
    Coordinates,
    ConfidenceScore,
    SiteStatus,
    SiteTimeline,
    ClaimBadges,
    Benchmark,
    GapAnalysis,
    SecOperations,
    SecForwardLooking,
    News,
}

impl NodeKey {
    pub const ALL: [Self; 24] = [
        Self::Ticker,
        Self::Name,
        Self::Price,
        Self::PriceChange,
        Self::Sentiment,
        Self::Ema21,
        Self::Sma50,
        Self::Sma200,
        Self::Atr,
        Self::BuyZone,
        Self::Pivots,
        Self::Fibonacci,
        Self::InsiderTable,
        Self::SiteName,
        Self::Coordinates,
        Self::ConfidenceScore,
        Self::SiteStatus,
        Self::SiteTimeline,
        Self::ClaimBadges,
        Self::Benchmark,
        Self::GapAnalysis,
        Self::SecOperations,
        Self::SecForwardLooking,
        Self::News,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::Name => "name",
            Self::Price => "price",
            Self::PriceChange => "price_change",
            Self::Sentiment => "sentiment",
            Self::Ema21 => "ema_21",
            Self::Sma50 => "sma_50",
            Self::Sma200 => "sma_200",
            Self::Atr => "atr",
            Self::BuyZone => "buy_zone",
            Self::Pivots => "pivots",
            Self::Fibonacci => "fibonacci",
            Self::InsiderTable => "insider_table",
            Self::SiteName => "site_name",
            Self::Coordinates => "coordinates",
            Self::ConfidenceScore => "confidence_score",
            Self::SiteStatus => "site_status",
            Self::SiteTimeline => "site_timeline",
            Self::ClaimBadges => "claim_badges",
            Self::Benchmark => "benchmark",
            Self::GapAnalysis => "gap_analysis",
            Self::SecOperations => "sec_operations",
            Self::SecForwardLooking => "sec_forward_looking",
            Self::News => "news",
        }
    }
}

impl Display for NodeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed display node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewNode {
    /// Single labelled value.
    Field {
        key: NodeKey,
        label: String,
        value: String,
    },
    /// Boolean indicator with its display label.
    Flag {
        key: NodeKey,
        label: String,
        active: bool,
        value: String,
    },
    /// Ordered `(label, formatted price)` pairs.
    Levels {
        key: NodeKey,
        label: String,
        levels: Vec<LevelEntry>,
    },
    Table {
        key: NodeKey,
        label: String,
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Badges {
        key: NodeKey,
        label: String,
        badges: Vec<String>,
    },
    Timeline {
        key: NodeKey,
        label: String,
        events: Vec<TimelineEntry>,
    },
    News {
        key: NodeKey,
        items: Vec<NewsItem>,
    },
    /// Free-form paragraph.
    Text {
        key: NodeKey,
        label: String,
        body: String,
    },
}

impl ViewNode {
    pub fn key(&self) -> NodeKey {
        match self {
            Self::Field { key, .. }
            | Self::Flag { key, .. }
            | Self::Levels { key, .. }
            | Self::Table { key, .. }
            | Self::Badges { key, .. }
            | Self::Timeline { key, .. }
            | Self::News { key, .. }
            | Self::Text { key, .. } => *key,
        }
    }

    /// Display text of a `Field` or `Flag` node.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Field { value, .. } | Self::Flag { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub label: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub byline: String,
}
