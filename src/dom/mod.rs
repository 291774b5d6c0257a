//! Minimal HTML DOM used to inspect converted Markdown.
//!
//! The converter's output is parsed with html5ever into an arena-backed
//! tree. Using a real HTML parser means headings whose attributes contain
//! `>`, headings spanning several lines and misnested inline markup are
//! all seen the way a browser would see them.

mod arena;
mod tree_sink;

pub use arena::{Attribute, Children, Descendants, Dom, Node, NodeData, NodeId};
pub use tree_sink::DomSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document or fragment.
///
/// Fragments are wrapped by the parser in the usual `html`/`head`/`body`
/// scaffolding, so converted Markdown ends up as children of `body`.
pub fn parse_html(html: &str) -> Dom {
    let sink = DomSink::new();
    parse_document(sink, ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes())
        .into_dom()
}
