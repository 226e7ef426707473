use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ordered::ordered_entries;
use super::CalendarDate;

/// Full due-diligence record for one ticker.
///
/// Fields the renderer cannot do without (`ticker`, `price`, `sentiment`,
/// `technicals`, `verification`) are `Option` so that an incomplete document
/// still loads and the renderer can name the absent field instead of a
/// generic parse failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickerSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(
        default,
        alias = "technical_stack",
        skip_serializing_if = "Option::is_none"
    )]
    pub technicals: Option<Technicals>,
    /// Root-level pivot levels (`pivot`, `r1`, `s1`, ...). Used when
    /// `technicals.pivots` is empty.
    #[serde(
        default,
        deserialize_with = "price_levels",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub levels: Vec<PriceLevel>,
    #[serde(default)]
    pub insider_trades: Vec<InsiderTrade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sec_insights: Option<SecInsights>,
    #[serde(default)]
    pub headlines: Vec<Headline>,
}

/// Pre-computed technical indicators and price levels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Technicals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma_50: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sma_200: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ema_21: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    /// Buy-zone status text as supplied upstream, e.g. `"Active"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_zone: Option<String>,
    #[serde(default, deserialize_with = "price_levels")]
    pub pivots: Vec<PriceLevel>,
    #[serde(
        default,
        alias = "fibonacci_levels",
        deserialize_with = "price_levels"
    )]
    pub fibonacci: Vec<PriceLevel>,
}

impl Technicals {
    /// `Some(true)` when the buy-zone status is exactly "active", ignoring case.
    pub fn buy_zone_active(&self) -> Option<bool> {
        self.buy_zone.as_deref().map(is_active_status)
    }
}

/// Case-insensitive exact match; surrounding whitespace does not count.
pub fn is_active_status(status: &str) -> bool {
    status.eq_ignore_ascii_case("active")
}

/// Named price threshold such as a pivot (`R1`) or fibonacci level (`61.8`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub label: String,
    pub price: f64,
}

impl PriceLevel {
    pub fn new(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

impl From<(String, f64)> for PriceLevel {
    fn from((label, price): (String, f64)) -> Self {
        Self { label, price }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    Purchase,
    Sale,
}

impl TradeDirection {
    /// Filing code `P` (or the word `purchase`) is a purchase; every other
    /// code, blank included, is treated as a sale.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("p") || code.eq_ignore_ascii_case("purchase") {
            Self::Purchase
        } else {
            Self::Sale
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
        }
    }

    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Purchase => "PURCHASE",
            Self::Sale => "SALE",
        }
    }
}

impl Display for TradeDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TradeDirection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TradeDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Self::from_code(&code))
    }
}

/// One insider filing. Callers supply trades newest first; order is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsiderTrade {
    pub date: CalendarDate,
    #[serde(alias = "insider")]
    pub insider_name: String,
    #[serde(alias = "type")]
    pub direction: TradeDirection,
    /// Signed so a malformed filing still loads; `audit` flags negatives.
    pub shares: i64,
    #[serde(alias = "price")]
    pub price_per_share: f64,
    #[serde(alias = "value")]
    pub total_value: f64,
}

impl InsiderTrade {
    pub fn expected_value(&self) -> f64 {
        self.shares as f64 * self.price_per_share
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supply_chain: Option<SupplyChain>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geospatial: Option<Geospatial>,
}

/// Supply-chain verification. Claims keep document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SupplyChainDocument")]
pub struct SupplyChain {
    pub claims: Vec<Claim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_analysis: Option<String>,
}

/// Wire form of [`SupplyChain`]. `claims` is either labelled entries or a
/// single claim sentence; a sibling `status` sentence becomes one more claim.
#[derive(Deserialize)]
struct SupplyChainDocument {
    #[serde(default)]
    claims: Option<ClaimsDocument>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, alias = "benchmark_price")]
    benchmark: Option<f64>,
    #[serde(default)]
    gap_analysis: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClaimsDocument {
    Sentence(String),
    Entries(#[serde(deserialize_with = "claims")] Vec<Claim>),
}

impl From<SupplyChainDocument> for SupplyChain {
    fn from(document: SupplyChainDocument) -> Self {
        let mut claims = match document.claims {
            Some(ClaimsDocument::Entries(entries)) => entries,
            Some(ClaimsDocument::Sentence(sentence)) => {
                vec![Claim::from((String::from("claims"), sentence))]
            }
            None => Vec::new(),
        };
        if let Some(status) = document.status {
            claims.push(Claim::from((String::from("status"), status)));
        }

        Self {
            claims,
            benchmark: document.benchmark,
            gap_analysis: document.gap_analysis,
        }
    }
}

/// Supply-chain claim and its free-text verification status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub key: String,
    pub status: String,
}

impl From<(String, String)> for Claim {
    fn from((key, status): (String, String)) -> Self {
        Self { key, status }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geospatial {
    #[serde(default, alias = "site_name")]
    pub site: String,
    #[serde(default)]
    pub coordinates: String,
    /// Confidence in `[0, 1]` by convention; not enforced.
    #[serde(
        default,
        alias = "confidence_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    #[serde(default)]
    pub date: String,
    #[serde(alias = "event_label", alias = "label")]
    pub event: String,
    #[serde(default, alias = "detail_text")]
    pub detail: String,
}

/// Text pulled from the company's SEC filings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecInsights {
    #[serde(default)]
    pub operations: String,
    #[serde(default, alias = "risk_factors")]
    pub forward_looking: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headline {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

fn price_levels<'de, D>(deserializer: D) -> Result<Vec<PriceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    ordered_entries::<D, PriceLevel, f64>(deserializer)
}

fn claims<'de, D>(deserializer: D) -> Result<Vec<Claim>, D::Error>
where
    D: Deserializer<'de>,
{
    ordered_entries::<D, Claim, String>(deserializer)
}
