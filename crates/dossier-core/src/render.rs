//! Snapshot to view-tree mapping.
//!
//! Rendering is a single pass over a borrowed [`TickerSnapshot`]: required
//! fields are resolved first, so a missing field fails the whole render
//! before any node exists. Sequences keep their input order.

use tracing::debug;

use crate::domain::{
    is_active_status, Geospatial, Headline, InsiderTrade, PriceLevel, SecInsights, SupplyChain,
    TickerSnapshot,
};
use crate::format;
use crate::view::{
    LevelEntry, NewsItem, NodeKey, Section, SectionId, TimelineEntry, ViewNode, ViewTree,
    VIEW_SCHEMA_VERSION,
};
use crate::MissingDataError;

const INSIDER_COLUMNS: [&str; 6] = ["Date", "Insider", "Type", "Shares", "Price", "Value"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prepended to every monetary value.
    pub currency_prefix: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            currency_prefix: String::from("$"),
        }
    }
}

/// Stateless renderer; one instance can serve any number of snapshots,
/// from any thread.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

/// Renders with the default configuration.
pub fn render(snapshot: &TickerSnapshot) -> Result<ViewTree, MissingDataError> {
    Renderer::default().render(snapshot)
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, snapshot: &TickerSnapshot) -> Result<ViewTree, MissingDataError> {
        let required = Required::resolve(snapshot)?;
        debug!(ticker = required.ticker, "rendering snapshot");

        let sections = vec![
            self.header(snapshot, &required),
            self.technicals(&required),
            self.insider_trades(&snapshot.insider_trades),
            self.verification(&required),
            sec_insights(snapshot.sec_insights.as_ref()),
            headlines(&snapshot.headlines),
        ];

        let tree = ViewTree {
            schema_version: VIEW_SCHEMA_VERSION.to_owned(),
            ticker: required.ticker.to_owned(),
            sections,
        };
        debug!(
            ticker = required.ticker,
            sections = tree.sections.len(),
            nodes = tree.node_count(),
            "snapshot rendered"
        );
        Ok(tree)
    }

    fn header(&self, snapshot: &TickerSnapshot, required: &Required<'_>) -> Section {
        let mut section = Section::new(SectionId::Header);
        section
            .nodes
            .push(field(NodeKey::Ticker, "Ticker", required.ticker.to_owned()));
        section
            .nodes
            .push(field(NodeKey::Name, "Name", snapshot.name.clone()));
        section
            .nodes
            .push(field(NodeKey::Price, "Price", self.money(required.price)));
        if let Some(change) = &snapshot.price_change {
            section
                .nodes
                .push(field(NodeKey::PriceChange, "Change", change.clone()));
        }
        section.nodes.push(field(
            NodeKey::Sentiment,
            "Sentiment",
            required.sentiment.to_uppercase(),
        ));
        section
    }

    fn technicals(&self, required: &Required<'_>) -> Section {
        let mut section = Section::new(SectionId::Technicals);
        section
            .nodes
            .push(field(NodeKey::Ema21, "EMA 21", self.money(required.ema_21)));
        section
            .nodes
            .push(field(NodeKey::Sma50, "SMA 50", self.money(required.sma_50)));
        section
            .nodes
            .push(field(NodeKey::Sma200, "SMA 200", self.money(required.sma_200)));
        section
            .nodes
            .push(field(NodeKey::Atr, "ATR", self.money(required.atr)));

        let active = is_active_status(required.buy_zone);
        section.nodes.push(ViewNode::Flag {
            key: NodeKey::BuyZone,
            label: String::from("Buy Zone"),
            active,
            value: format::flag_label(active).to_owned(),
        });

        section.nodes.push(ViewNode::Levels {
            key: NodeKey::Pivots,
            label: String::from("Pivots"),
            levels: self.levels(required.pivots),
        });
        section.nodes.push(ViewNode::Levels {
            key: NodeKey::Fibonacci,
            label: String::from("Fibonacci"),
            levels: self.levels(required.fibonacci),
        });
        section
    }

    fn insider_trades(&self, trades: &[InsiderTrade]) -> Section {
        let rows = trades
            .iter()
            .map(|trade| {
                vec![
                    trade.date.to_string(),
                    trade.insider_name.clone(),
                    trade.direction.display_label().to_owned(),
                    format::grouped(trade.shares),
                    self.money(trade.price_per_share),
                    format::thousands(&self.config.currency_prefix, trade.total_value),
                ]
            })
            .collect();

        let mut section = Section::new(SectionId::InsiderTrades);
        section.nodes.push(ViewNode::Table {
            key: NodeKey::InsiderTable,
            label: String::from("Insider Trades"),
            columns: INSIDER_COLUMNS.iter().map(|c| (*c).to_owned()).collect(),
            rows,
        });
        section
    }

    fn verification(&self, required: &Required<'_>) -> Section {
        let geo = required.geospatial;
        let supply = required.supply_chain;
        let mut section = Section::new(SectionId::Verification);

        section
            .nodes
            .push(field(NodeKey::SiteName, "Site", geo.site.clone()));
        section.nodes.push(field(
            NodeKey::Coordinates,
            "Coordinates",
            geo.coordinates.clone(),
        ));
        section.nodes.push(field(
            NodeKey::ConfidenceScore,
            "Confidence",
            format::percent(required.score),
        ));
        section
            .nodes
            .push(field(NodeKey::SiteStatus, "Status", geo.status.clone()));
        section.nodes.push(ViewNode::Timeline {
            key: NodeKey::SiteTimeline,
            label: String::from("Timeline"),
            events: geo
                .timeline
                .iter()
                .map(|event| TimelineEntry {
                    date: event.date.clone(),
                    label: event.event.clone(),
                    detail: event.detail.clone(),
                })
                .collect(),
        });

        section.nodes.push(ViewNode::Badges {
            key: NodeKey::ClaimBadges,
            label: String::from("Supply Chain"),
            badges: supply
                .claims
                .iter()
                .map(|claim| claim.status.clone())
                .collect(),
        });
        section.nodes.push(field(
            NodeKey::Benchmark,
            "Benchmark",
            self.money(required.benchmark),
        ));
        if let Some(gap) = &supply.gap_analysis {
            section.nodes.push(ViewNode::Text {
                key: NodeKey::GapAnalysis,
                label: String::from("Gap Analysis"),
                body: gap.clone(),
            });
        }
        section
    }

    fn levels(&self, levels: &[PriceLevel]) -> Vec<LevelEntry> {
        levels
            .iter()
            .map(|level| LevelEntry {
                label: level.label.clone(),
                value: self.money(level.price),
            })
            .collect()
    }

    fn money(&self, value: f64) -> String {
        format::currency(&self.config.currency_prefix, value)
    }
}

fn sec_insights(insights: Option<&SecInsights>) -> Section {
    let mut section = Section::new(SectionId::SecInsights);
    if let Some(insights) = insights {
        section.nodes.push(ViewNode::Text {
            key: NodeKey::SecOperations,
            label: String::from("Operations"),
            body: insights.operations.clone(),
        });
        section.nodes.push(ViewNode::Text {
            key: NodeKey::SecForwardLooking,
            label: String::from("Forward Looking"),
            body: insights.forward_looking.clone(),
        });
    }
    section
}

fn headlines(headlines: &[Headline]) -> Section {
    let mut section = Section::new(SectionId::Headlines);
    section.nodes.push(ViewNode::News {
        key: NodeKey::News,
        items: headlines
            .iter()
            .map(|headline| NewsItem {
                title: headline.title.clone(),
                byline: format::byline(&headline.date, headline.summary.as_deref()),
            })
            .collect(),
    });
    section
}

fn field(key: NodeKey, label: &str, value: String) -> ViewNode {
    ViewNode::Field {
        key,
        label: label.to_owned(),
        value,
    }
}

/// Required inputs, resolved up front in a fixed order.
struct Required<'a> {
    ticker: &'a str,
    price: f64,
    sentiment: &'a str,
    sma_50: f64,
    sma_200: f64,
    ema_21: f64,
    atr: f64,
    buy_zone: &'a str,
    pivots: &'a [PriceLevel],
    fibonacci: &'a [PriceLevel],
    supply_chain: &'a SupplyChain,
    benchmark: f64,
    geospatial: &'a Geospatial,
    score: f64,
}

impl<'a> Required<'a> {
    fn resolve(snapshot: &'a TickerSnapshot) -> Result<Self, MissingDataError> {
        let ticker = require(snapshot.ticker.as_deref(), "ticker")?;
        let price = require(snapshot.price, "price")?;
        let sentiment = require(snapshot.sentiment.as_deref(), "sentiment")?;

        let technicals = require(snapshot.technicals.as_ref(), "technicals")?;
        let sma_50 = require(technicals.sma_50, "technicals.sma_50")?;
        let sma_200 = require(technicals.sma_200, "technicals.sma_200")?;
        let ema_21 = require(technicals.ema_21, "technicals.ema_21")?;
        let atr = require(technicals.atr, "technicals.atr")?;
        let buy_zone = require(technicals.buy_zone.as_deref(), "technicals.buy_zone")?;

        let verification = require(snapshot.verification.as_ref(), "verification")?;
        let supply_chain = require(
            verification.supply_chain.as_ref(),
            "verification.supply_chain",
        )?;
        let benchmark = require(
            supply_chain.benchmark,
            "verification.supply_chain.benchmark",
        )?;
        let geospatial = require(
            verification.geospatial.as_ref(),
            "verification.geospatial",
        )?;
        let score = require(geospatial.score, "verification.geospatial.score")?;

        Ok(Self {
            ticker,
            price,
            sentiment,
            sma_50,
            sma_200,
            ema_21,
            atr,
            buy_zone,
            pivots: if technicals.pivots.is_empty() {
                &snapshot.levels
            } else {
                &technicals.pivots
            },
            fibonacci: &technicals.fibonacci,
            supply_chain,
            benchmark,
            geospatial,
            score,
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, MissingDataError> {
    value.ok_or(MissingDataError::new(field))
}
