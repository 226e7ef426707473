//! Upstream consistency checks.
//!
//! The renderer takes values as given. These findings are for the caller to
//! surface as warnings; none of them stop a render.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::TickerSnapshot;

/// Relative tolerance between a trade's reported value and shares x price.
pub const INSIDER_VALUE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum AuditFinding {
    InsiderValueMismatch {
        index: usize,
        insider: String,
        expected: f64,
        reported: f64,
    },
    ConfidenceOutOfRange {
        score: f64,
    },
    NegativeValue {
        field: &'static str,
        value: f64,
    },
    NegativeShares {
        index: usize,
        shares: i64,
    },
}

impl Display for AuditFinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsiderValueMismatch {
                index,
                insider,
                expected,
                reported,
            } => write!(
                f,
                "insider trade #{index} ({insider}): reported value {reported} differs from shares x price {expected}"
            ),
            Self::ConfidenceOutOfRange { score } => {
                write!(f, "geospatial confidence score {score} is outside [0, 1]")
            }
            Self::NegativeValue { field, value } => {
                write!(f, "field '{field}' is negative: {value}")
            }
            Self::NegativeShares { index, shares } => {
                write!(f, "insider trade #{index}: negative share count {shares}")
            }
        }
    }
}

/// Collects every finding for a snapshot; absent fields are skipped.
pub fn audit(snapshot: &TickerSnapshot) -> Vec<AuditFinding> {
    let mut findings = Vec::new();

    let mut check_negative = |field: &'static str, value: Option<f64>| {
        if let Some(value) = value.filter(|value| *value < 0.0) {
            findings.push(AuditFinding::NegativeValue { field, value });
        }
    };

    check_negative("price", snapshot.price);
    if let Some(technicals) = &snapshot.technicals {
        check_negative("technicals.sma_50", technicals.sma_50);
        check_negative("technicals.sma_200", technicals.sma_200);
        check_negative("technicals.ema_21", technicals.ema_21);
        check_negative("technicals.atr", technicals.atr);
    }
    let verification = snapshot.verification.as_ref();
    check_negative(
        "verification.supply_chain.benchmark",
        verification
            .and_then(|v| v.supply_chain.as_ref())
            .and_then(|s| s.benchmark),
    );

    if let Some(score) = verification
        .and_then(|v| v.geospatial.as_ref())
        .and_then(|g| g.score)
    {
        if !(0.0..=1.0).contains(&score) {
            findings.push(AuditFinding::ConfidenceOutOfRange { score });
        }
    }

    for (index, trade) in snapshot.insider_trades.iter().enumerate() {
        if trade.shares < 0 {
            findings.push(AuditFinding::NegativeShares {
                index,
                shares: trade.shares,
            });
        }

        let expected = trade.expected_value();
        let tolerance = INSIDER_VALUE_TOLERANCE * expected.abs().max(1.0);
        if (trade.total_value - expected).abs() > tolerance {
            findings.push(AuditFinding::InsiderValueMismatch {
                index,
                insider: trade.insider_name.clone(),
                expected,
                reported: trade.total_value,
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarDate, InsiderTrade, TradeDirection};

    fn trade(shares: i64, price: f64, value: f64) -> InsiderTrade {
        InsiderTrade {
            date: CalendarDate::parse("2025-01-02").expect("valid date"),
            insider_name: String::from("Jane Roe"),
            direction: TradeDirection::Sale,
            shares,
            price_per_share: price,
            total_value: value,
        }
    }

    #[test]
    fn consistent_snapshot_has_no_findings() {
        let snapshot = TickerSnapshot {
            price: Some(8.61),
            insider_trades: vec![trade(100_000, 6.13, 613_000.0)],
            ..TickerSnapshot::default()
        };
        assert!(audit(&snapshot).is_empty());
    }

    #[test]
    fn flags_insider_value_mismatch() {
        let snapshot = TickerSnapshot {
            insider_trades: vec![trade(100_000, 6.13, 613_000.0), trade(1_000, 2.0, 20_000.0)],
            ..TickerSnapshot::default()
        };

        let findings = audit(&snapshot);
        assert_eq!(findings.len(), 1);
        assert!(matches!(
            findings[0],
            AuditFinding::InsiderValueMismatch { index: 1, .. }
        ));
    }

    #[test]
    fn flags_negative_price() {
        let snapshot = TickerSnapshot {
            price: Some(-1.0),
            ..TickerSnapshot::default()
        };

        let findings = audit(&snapshot);
        assert_eq!(
            findings,
            vec![AuditFinding::NegativeValue {
                field: "price",
                value: -1.0
            }]
        );
        assert_eq!(findings[0].to_string(), "field 'price' is negative: -1");
    }

    #[test]
    fn flags_negative_share_count() {
        let snapshot = TickerSnapshot {
            insider_trades: vec![trade(-5, 2.0, -10.0)],
            ..TickerSnapshot::default()
        };

        assert_eq!(
            audit(&snapshot),
            vec![AuditFinding::NegativeShares {
                index: 0,
                shares: -5
            }]
        );
    }
}
