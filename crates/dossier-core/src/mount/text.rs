use std::io::{self, Write};

use super::Mount;
use crate::view::{Section, SectionId, ViewNode};

const LABEL_WIDTH: usize = 12;

/// Plain-text terminal dashboard.
pub struct TextMount<W: Write> {
    writer: W,
    sections_written: usize,
}

impl<W: Write> TextMount<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sections_written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn table(&mut self, label: &str, columns: &[String], rows: &[Vec<String>]) -> io::Result<()> {
        writeln!(self.writer, "  {label}:")?;
        if rows.is_empty() {
            return writeln!(self.writer, "    (none)");
        }

        let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        self.table_row(columns, &widths)?;
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        self.table_row(&rule, &widths)?;
        for row in rows {
            self.table_row(row, &widths)?;
        }
        Ok(())
    }

    fn table_row(&mut self, cells: &[String], widths: &[usize]) -> io::Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(self.writer, "    {}", line.trim_end())
    }
}

impl<W: Write> Mount for TextMount<W> {
    type Error = io::Error;

    fn begin_section(&mut self, section: &Section) -> Result<(), Self::Error> {
        if self.sections_written > 0 {
            writeln!(self.writer)?;
        }
        self.sections_written += 1;
        writeln!(self.writer, "== {} ==", section.title)?;
        if section.is_empty() {
            writeln!(self.writer, "  (none)")?;
        }
        Ok(())
    }

    fn node(&mut self, _section: SectionId, node: &ViewNode) -> Result<(), Self::Error> {
        match node {
            ViewNode::Field { label, value, .. } | ViewNode::Flag { label, value, .. } => {
                writeln!(self.writer, "  {label:<LABEL_WIDTH$}: {value}")
            }
            ViewNode::Levels { label, levels, .. } => {
                writeln!(self.writer, "  {label}:")?;
                if levels.is_empty() {
                    return writeln!(self.writer, "    (none)");
                }
                for level in levels {
                    writeln!(self.writer, "    {:<8} {}", level.label, level.value)?;
                }
                Ok(())
            }
            ViewNode::Table {
                label,
                columns,
                rows,
                ..
            } => self.table(label, columns, rows),
            ViewNode::Badges { label, badges, .. } => {
                let rendered = badges
                    .iter()
                    .map(|badge| format!("[{badge}]"))
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(self.writer, "  {label:<LABEL_WIDTH$}: {rendered}")
            }
            ViewNode::Timeline { label, events, .. } => {
                writeln!(self.writer, "  {label}:")?;
                if events.is_empty() {
                    return writeln!(self.writer, "    (none)");
                }
                for event in events {
                    writeln!(self.writer, "    {}  {}", event.date, event.label)?;
                    if !event.detail.is_empty() {
                        writeln!(self.writer, "      {}", event.detail)?;
                    }
                }
                Ok(())
            }
            ViewNode::News { items, .. } => {
                if items.is_empty() {
                    return writeln!(self.writer, "  (none)");
                }
                for item in items {
                    writeln!(self.writer, "  * {}", item.title)?;
                    if !item.byline.is_empty() {
                        writeln!(self.writer, "    {}", item.byline)?;
                    }
                }
                Ok(())
            }
            ViewNode::Text { label, body, .. } => {
                writeln!(self.writer, "  {label}:")?;
                writeln!(self.writer, "    {body}")
            }
        }
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.writer.flush()
    }
}
