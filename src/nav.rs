//! Navigation outline extraction.
//!
//! Builds the table of contents for a rendered page from the headings in
//! the converted HTML.

use log::trace;
use serde::Serialize;

use crate::dom::{Dom, NodeId, parse_html};
use crate::sanitize::strip_node;

/// One heading in the page outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// The heading's `id` attribute, exactly as the converter assigned it.
    pub id: String,
    /// Heading text with all markup stripped. HTML-escaped, so it can be
    /// inserted into a page as is.
    pub text: String,
}

/// Extract one entry per `h1`..`h6` element, in document order.
///
/// Headings without an `id` attribute (or with an empty one) cannot be
/// linked to and are skipped.
///
/// ```
/// use mdview::nav::extract_nav;
///
/// let nav = extract_nav(r#"<h1 id="intro">Intro</h1><h2>No anchor</h2><h2 id="more">More <em>stuff</em></h2>"#);
/// assert_eq!(nav.len(), 2);
/// assert_eq!(nav[1].text, "More stuff");
/// ```
pub fn extract_nav(html: &str) -> Vec<NavEntry> {
    let dom = parse_html(html);
    let nav: Vec<NavEntry> = dom
        .descendants(dom.document())
        .filter_map(|node| nav_entry(&dom, node))
        .collect();

    for entry in &nav {
        trace!("nav entry h{} #{}: {}", entry.level, entry.id, entry.text);
    }
    nav
}

fn nav_entry(dom: &Dom, node: NodeId) -> Option<NavEntry> {
    let level = heading_level(dom.element_name(node)?.as_ref())?;
    let id = dom.element_id(node).filter(|id| !id.is_empty())?;

    Some(NavEntry {
        level,
        id: id.to_string(),
        text: strip_node(dom, node, &[]).trim().to_string(),
    })
}

fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
