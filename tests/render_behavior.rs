//! Behavior-driven tests for rendering a ticker snapshot
//!
//! These tests verify WHAT a dashboard shows for a given snapshot, focusing
//! on the rendered view tree rather than on how it is assembled.

use dossier_core::{render, LevelEntry, MissingDataError, NodeKey, SectionId, ViewNode};
use dossier_tests::{uamy, value_of, with_json};

// =============================================================================
// Header and technicals
// =============================================================================

#[test]
fn user_sees_price_with_two_decimals_and_uppercased_sentiment() {
    // Given: The bundled UAMY snapshot
    let snapshot = uamy();

    // When: It is rendered
    let tree = render(&snapshot).expect("sample should render");

    // Then: Header values are formatted for display
    assert_eq!(tree.ticker, "UAMY");
    assert_eq!(value_of(&tree, NodeKey::Price), "$8.61");
    assert_eq!(value_of(&tree, NodeKey::Sentiment), "STRONG BULLISH");
    assert_eq!(value_of(&tree, NodeKey::PriceChange), "+4.1%");
    assert_eq!(value_of(&tree, NodeKey::Name), "United States Antimony Corp");
}

#[test]
fn indicators_are_currency_formatted() {
    let tree = render(&uamy()).expect("sample should render");

    assert_eq!(value_of(&tree, NodeKey::Ema21), "$8.12");
    assert_eq!(value_of(&tree, NodeKey::Sma50), "$7.01");
    assert_eq!(value_of(&tree, NodeKey::Sma200), "$5.58");
    assert_eq!(value_of(&tree, NodeKey::Atr), "$0.45");
}

#[test]
fn whole_prices_gain_trailing_zeros() {
    let snapshot = with_json(|doc| doc["price"] = serde_json::json!(7.5));
    let tree = render(&snapshot).expect("should render");
    assert_eq!(value_of(&tree, NodeKey::Price), "$7.50");
}

#[test]
fn buy_zone_flag_ignores_case_of_active() {
    for (status, expected_active, expected_label) in [
        ("Active", true, "YES"),
        ("ACTIVE", true, "YES"),
        ("active", true, "YES"),
        ("Inactive", false, "NO"),
        ("Watching", false, "NO"),
        (" active ", false, "NO"),
    ] {
        // Given: A snapshot whose buy-zone status is `status`
        let snapshot = with_json(|doc| doc["technical_stack"]["buy_zone"] = status.into());

        // When: It is rendered
        let tree = render(&snapshot).expect("should render");

        // Then: The flag reflects an exact case-insensitive match on "active"
        match tree.node(NodeKey::BuyZone) {
            Some(ViewNode::Flag { active, value, .. }) => {
                assert_eq!(*active, expected_active, "status '{status}'");
                assert_eq!(value, expected_label, "status '{status}'");
            }
            other => panic!("expected buy-zone flag, got {other:?}"),
        }
    }
}

#[test]
fn pivot_and_fibonacci_levels_keep_input_order() {
    let tree = render(&uamy()).expect("sample should render");

    let Some(ViewNode::Levels { levels, .. }) = tree.node(NodeKey::Pivots) else {
        panic!("pivots should render as levels");
    };
    let labels: Vec<&str> = levels.iter().map(|level| level.label.as_str()).collect();
    assert_eq!(labels, ["R2", "R1", "PP", "S1", "S2"]);
    assert_eq!(
        levels[4],
        LevelEntry {
            label: String::from("S2"),
            value: String::from("$4.10"),
        }
    );

    let Some(ViewNode::Levels { levels, .. }) = tree.node(NodeKey::Fibonacci) else {
        panic!("fibonacci should render as levels");
    };
    let labels: Vec<&str> = levels.iter().map(|level| level.label.as_str()).collect();
    assert_eq!(labels, ["100", "61.8", "50", "38.2", "0"]);
}

// =============================================================================
// Insider trades
// =============================================================================

#[test]
fn insider_rows_follow_input_order_with_values_in_thousands() {
    let tree = render(&uamy()).expect("sample should render");

    let Some(ViewNode::Table { columns, rows, .. }) = tree.node(NodeKey::InsiderTable) else {
        panic!("insider trades should render as a table");
    };
    assert_eq!(columns, &["Date", "Insider", "Type", "Shares", "Price", "Value"]);
    assert_eq!(
        rows,
        &[
            vec!["2025-09-26", "Gary C. Evans", "PURCHASE", "100,000", "$6.13", "$613K"],
            vec!["2024-12-10", "Gary C. Evans", "PURCHASE", "200,000", "$1.45", "$290K"],
        ]
    );
}

#[test]
fn non_purchase_codes_render_as_sale_and_order_is_never_resorted() {
    // Given: Trades supplied oldest first with a sale code
    let snapshot = with_json(|doc| {
        doc["insider_trades"] = serde_json::json!([
            { "date": "2023-01-05", "insider": "A. Older", "type": "S", "shares": 10, "price": 2.0, "value": 20 },
            { "date": "2025-01-05", "insider": "B. Newer", "type": "P", "shares": 10, "price": 3.0, "value": 30 }
        ]);
    });

    // When: Rendered
    let tree = render(&snapshot).expect("should render");

    // Then: Rows appear exactly as supplied
    let Some(ViewNode::Table { rows, .. }) = tree.node(NodeKey::InsiderTable) else {
        panic!("insider table expected");
    };
    assert_eq!(rows[0][1], "A. Older");
    assert_eq!(rows[0][2], "SALE");
    assert_eq!(rows[1][1], "B. Newer");
    assert_eq!(rows[1][2], "PURCHASE");
}

// =============================================================================
// Verification
// =============================================================================

#[test]
fn confidence_score_is_shown_as_literal_percentage() {
    let tree = render(&uamy()).expect("sample should render");
    assert_eq!(value_of(&tree, NodeKey::ConfidenceScore), "85%");

    let snapshot = with_json(|doc| doc["verification"]["geospatial"]["score"] = serde_json::json!(0.855));
    let tree = render(&snapshot).expect("should render");
    assert_eq!(value_of(&tree, NodeKey::ConfidenceScore), "85.5%");
}

#[test]
fn out_of_range_values_render_as_is() {
    // Given: Values the renderer does not police
    let snapshot = with_json(|doc| {
        doc["price"] = serde_json::json!(-1.25);
        doc["verification"]["geospatial"]["score"] = serde_json::json!(1.5);
        doc["headlines"] = serde_json::json!([]);
    });

    // When/Then: Rendering succeeds and shows them unchanged
    let tree = render(&snapshot).expect("unusual values are accepted");
    assert_eq!(value_of(&tree, NodeKey::Price), "$-1.25");
    assert_eq!(value_of(&tree, NodeKey::ConfidenceScore), "150%");
}

#[test]
fn supply_chain_claims_render_as_badges_without_keys() {
    let tree = render(&uamy()).expect("sample should render");

    let Some(ViewNode::Badges { badges, .. }) = tree.node(NodeKey::ClaimBadges) else {
        panic!("claims should render as badges");
    };
    assert_eq!(
        badges,
        &["330 Ton Feedstock Verified", "Probable Traffic (Bolivia)"]
    );
    assert!(badges.iter().all(|badge| badge != "feedstock"));
    assert_eq!(value_of(&tree, NodeKey::Benchmark), "$46.70");
}

#[test]
fn gap_analysis_appears_only_when_supplied() {
    let tree = render(&uamy()).expect("sample should render");
    assert!(tree.node(NodeKey::GapAnalysis).is_none());

    let snapshot = with_json(|doc| {
        doc["verification"]["supply_chain"]["gap_analysis"] = "Spot trades 12% above benchmark".into();
    });
    let tree = render(&snapshot).expect("should render");
    assert!(matches!(
        tree.node(NodeKey::GapAnalysis),
        Some(ViewNode::Text { body, .. }) if body == "Spot trades 12% above benchmark"
    ));
}

#[test]
fn site_timeline_keeps_input_order() {
    let tree = render(&uamy()).expect("sample should render");

    let Some(ViewNode::Timeline { events, .. }) = tree.node(NodeKey::SiteTimeline) else {
        panic!("timeline expected");
    };
    let labels: Vec<&str> = events.iter().map(|event| event.label.as_str()).collect();
    assert_eq!(labels, ["Access road graded", "Bulk sampling"]);
    assert_eq!(value_of(&tree, NodeKey::SiteName), "Stibnite Hill, MT");
    assert_eq!(value_of(&tree, NodeKey::SiteStatus), "ACTIVE (Bulk Sampling)");
}

// =============================================================================
// Optional sections and headlines
// =============================================================================

#[test]
fn snapshot_without_sec_insights_renders_an_empty_section() {
    // Given: The sample, which carries no SEC insights
    let snapshot = uamy();
    assert!(snapshot.sec_insights.is_none());

    // When: Rendered
    let tree = render(&snapshot).expect("optional sections must not fail");

    // Then: The section exists but holds nothing
    let section = tree
        .section(SectionId::SecInsights)
        .expect("section should be present");
    assert!(section.is_empty());
}

#[test]
fn sec_insights_render_as_text_when_present() {
    let snapshot = with_json(|doc| {
        doc["sec_insights"] = serde_json::json!({
            "operations": "Antimony smelting in Montana and Mexico.",
            "risk_factors": "Single-site concentration."
        });
    });
    let tree = render(&snapshot).expect("should render");

    assert!(matches!(
        tree.node(NodeKey::SecOperations),
        Some(ViewNode::Text { body, .. }) if body == "Antimony smelting in Montana and Mexico."
    ));
    assert!(matches!(
        tree.node(NodeKey::SecForwardLooking),
        Some(ViewNode::Text { body, .. }) if body == "Single-site concentration."
    ));
}

#[test]
fn headlines_render_in_order_with_optional_summary() {
    let snapshot = with_json(|doc| {
        doc["headlines"] = serde_json::json!([
            { "title": "Later", "date": "2026-02-04", "summary": "Program launched" },
            { "title": "Earlier", "date": "2026-01-15" }
        ]);
    });
    let tree = render(&snapshot).expect("should render");

    let Some(ViewNode::News { items, .. }) = tree.node(NodeKey::News) else {
        panic!("news node expected");
    };
    assert_eq!(items[0].title, "Later");
    assert_eq!(items[0].byline, "2026-02-04 • Program launched");
    assert_eq!(items[1].title, "Earlier");
    assert_eq!(items[1].byline, "2026-01-15");
}

// =============================================================================
// Determinism and failure
// =============================================================================

#[test]
fn rendering_twice_yields_equal_trees() {
    let snapshot = uamy();
    let first = render(&snapshot).expect("should render");
    let second = render(&snapshot).expect("should render");

    assert_eq!(first, second);
    assert_eq!(snapshot, uamy(), "input must be left untouched");
}

#[test]
fn missing_price_fails_with_named_field() {
    // Given: A snapshot with no price
    let mut snapshot = uamy();
    snapshot.price = None;

    // When: Rendered
    let result = render(&snapshot);

    // Then: Rendering fails naming the field, no tree is produced
    assert_eq!(result, Err(MissingDataError::new("price")));
}

#[test]
fn missing_technicals_or_sentiment_fail_fast() {
    let mut snapshot = uamy();
    snapshot.technicals = None;
    assert_eq!(
        render(&snapshot).expect_err("must fail").field,
        "technicals"
    );

    let snapshot = with_json(|doc| {
        doc.as_object_mut()
            .expect("sample is an object")
            .remove("sentiment");
    });
    let err = render(&snapshot).expect_err("must fail");
    assert_eq!(err.field, "sentiment");
    assert_eq!(err.to_string(), "missing required field 'sentiment'");
}
