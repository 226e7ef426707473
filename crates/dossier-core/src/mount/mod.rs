//! Mount adapters: turn a [`ViewTree`] into concrete output.
//!
//! An adapter receives every section and node in tree order and binds nodes
//! to its own widgets through [`NodeKey`](crate::NodeKey). Adapters are
//! interchangeable; the renderer knows nothing about them.

mod html;
mod text;

pub use html::{element_id, HtmlMount};
pub use text::TextMount;

use crate::view::{Section, SectionId, ViewNode, ViewTree};

pub trait Mount {
    type Error;

    fn begin_section(&mut self, section: &Section) -> Result<(), Self::Error> {
        let _ = section;
        Ok(())
    }

    fn node(&mut self, section: SectionId, node: &ViewNode) -> Result<(), Self::Error>;

    fn end_section(&mut self, section: &Section) -> Result<(), Self::Error> {
        let _ = section;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Walks `tree` in order, handing each section and node to `target`.
pub fn mount<M>(tree: &ViewTree, target: &mut M) -> Result<(), M::Error>
where
    M: Mount + ?Sized,
{
    for section in &tree.sections {
        target.begin_section(section)?;
        for node in &section.nodes {
            target.node(section.id, node)?;
        }
        target.end_section(section)?;
    }
    target.finish()
}
