use std::io::{self, Write};

use askama::Template;

use super::Mount;
use crate::view::{LevelEntry, NewsItem, NodeKey, Section, SectionId, TimelineEntry, ViewNode};

/// Element id each node is bound to in the dashboard markup.
pub const fn element_id(key: NodeKey) -> &'static str {
    match key {
        NodeKey::Ticker => "ticker-val",
        NodeKey::Name => "name-val",
        NodeKey::Price => "price-val",
        NodeKey::PriceChange => "price-change-val",
        NodeKey::Sentiment => "sentiment-val",
        NodeKey::Ema21 => "ema-val",
        NodeKey::Sma50 => "sma50-val",
        NodeKey::Sma200 => "sma200-val",
        NodeKey::Atr => "atr-val",
        NodeKey::BuyZone => "buy-zone-val",
        NodeKey::Pivots => "pivot-list",
        NodeKey::Fibonacci => "fib-list",
        NodeKey::InsiderTable => "insider-table",
        NodeKey::SiteName => "geo-site-val",
        NodeKey::Coordinates => "geo-coords-val",
        NodeKey::ConfidenceScore => "geo-score",
        NodeKey::SiteStatus => "geo-status-val",
        NodeKey::SiteTimeline => "geo-timeline",
        NodeKey::ClaimBadges => "claim-badges",
        NodeKey::Benchmark => "benchmark-val",
        NodeKey::GapAnalysis => "gap-analysis",
        NodeKey::SecOperations => "sec-operations",
        NodeKey::SecForwardLooking => "sec-forward-looking",
        NodeKey::News => "news-list",
    }
}

/// HTML fragment writer. One `<section>` per view section; every node
/// carries the id from [`element_id`]. Markup lives in `templates/html/`,
/// text is escaped by the template engine.
pub struct HtmlMount<W: Write> {
    writer: W,
}

impl<W: Write> HtmlMount<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write<T: Template>(&mut self, fragment: &T) -> io::Result<()> {
        let markup = fragment.render().map_err(io::Error::other)?;
        writeln!(self.writer, "{}", markup.trim_end())
    }
}

#[derive(Template)]
#[template(path = "html/section.html")]
struct SectionOpen<'a> {
    slug: String,
    title: &'a str,
}

#[derive(Template)]
#[template(path = "html/field.html")]
struct FieldFragment<'a> {
    id: &'a str,
    label: &'a str,
    value: &'a str,
}

#[derive(Template)]
#[template(path = "html/flag.html")]
struct FlagFragment<'a> {
    id: &'a str,
    label: &'a str,
    active: bool,
    value: &'a str,
}

#[derive(Template)]
#[template(path = "html/levels.html")]
struct LevelsFragment<'a> {
    id: &'a str,
    label: &'a str,
    levels: &'a [LevelEntry],
}

#[derive(Template)]
#[template(path = "html/table.html")]
struct TableFragment<'a> {
    id: &'a str,
    label: &'a str,
    columns: &'a [String],
    rows: &'a [Vec<String>],
}

#[derive(Template)]
#[template(path = "html/badges.html")]
struct BadgesFragment<'a> {
    id: &'a str,
    label: &'a str,
    badges: &'a [String],
}

#[derive(Template)]
#[template(path = "html/timeline.html")]
struct TimelineFragment<'a> {
    id: &'a str,
    label: &'a str,
    events: &'a [TimelineEntry],
}

#[derive(Template)]
#[template(path = "html/news.html")]
struct NewsFragment<'a> {
    id: &'a str,
    items: &'a [NewsItem],
}

#[derive(Template)]
#[template(path = "html/text.html")]
struct TextFragment<'a> {
    id: &'a str,
    label: &'a str,
    body: &'a str,
}

impl<W: Write> Mount for HtmlMount<W> {
    type Error = io::Error;

    fn begin_section(&mut self, section: &Section) -> Result<(), Self::Error> {
        self.write(&SectionOpen {
            slug: section.id.as_str().replace('_', "-"),
            title: &section.title,
        })
    }

    fn node(&mut self, _section: SectionId, node: &ViewNode) -> Result<(), Self::Error> {
        let id = element_id(node.key());
        match node {
            ViewNode::Field { label, value, .. } => self.write(&FieldFragment { id, label, value }),
            ViewNode::Flag {
                label,
                active,
                value,
                ..
            } => self.write(&FlagFragment {
                id,
                label,
                active: *active,
                value,
            }),
            ViewNode::Levels { label, levels, .. } => {
                self.write(&LevelsFragment { id, label, levels })
            }
            ViewNode::Table {
                label,
                columns,
                rows,
                ..
            } => self.write(&TableFragment {
                id,
                label,
                columns,
                rows,
            }),
            ViewNode::Badges { label, badges, .. } => {
                self.write(&BadgesFragment { id, label, badges })
            }
            ViewNode::Timeline { label, events, .. } => {
                self.write(&TimelineFragment { id, label, events })
            }
            ViewNode::News { items, .. } => self.write(&NewsFragment { id, items }),
            ViewNode::Text { label, body, .. } => self.write(&TextFragment { id, label, body }),
        }
    }

    fn end_section(&mut self, _section: &Section) -> Result<(), Self::Error> {
        writeln!(self.writer, "</section>")
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
