//! Tag stripping against an allow-list.
//!
//! Elements whose tag is not allowed are removed but their text is kept;
//! allowed elements are re-emitted bare, without attributes. The content of
//! `script`, `style`, `textarea` and `noscript` is dropped entirely. Text is
//! re-escaped, so the result is always safe to insert as HTML.

use crate::dom::{Dom, NodeData, NodeId, parse_html};

/// Elements whose content is never kept.
const DROP_CONTENT: [&str; 4] = ["script", "style", "textarea", "noscript"];

/// Wrappers the parser synthesizes around every fragment.
const STRUCTURAL: [&str; 3] = ["html", "head", "body"];

const VOID: [&str; 4] = ["br", "hr", "img", "wbr"];

/// Strip every tag from `html` that is not in `allowed`.
///
/// Tag matching is case-insensitive. With an empty allow-list the result
/// contains no markup at all.
///
/// ```
/// use mdview::sanitize::strip_tags;
///
/// assert_eq!(strip_tags("Hello <em>world</em>", &[]), "Hello world");
/// assert_eq!(strip_tags("<b>bold</b> <i>it</i>", &["i"]), "bold <i>it</i>");
/// ```
pub fn strip_tags(html: &str, allowed: &[&str]) -> String {
    let dom = parse_html(html);
    strip_node(&dom, dom.document(), allowed)
}

/// Strip the children of `node` in an already parsed DOM.
pub fn strip_node(dom: &Dom, node: NodeId, allowed: &[&str]) -> String {
    let mut out = String::new();
    write_children(dom, node, allowed, &mut out);
    out
}

enum Step<'a> {
    Visit(NodeId),
    Close(&'a str),
}

fn write_children(dom: &Dom, parent: NodeId, allowed: &[&str], out: &mut String) {
    let mut stack: Vec<Step<'_>> = dom.children(parent).map(Step::Visit).collect();
    stack.reverse();

    while let Some(step) = stack.pop() {
        let id = match step {
            Step::Close(tag) => {
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                continue;
            }
            Step::Visit(id) => id,
        };

        match dom.get(id).map(|n| &n.data) {
            Some(NodeData::Text(text)) => escape_text(text, out),
            Some(NodeData::Element { name, .. }) => {
                let tag = name.local.as_ref();
                if DROP_CONTENT.contains(&tag) {
                    continue;
                }

                let keep = !STRUCTURAL.contains(&tag)
                    && allowed.iter().any(|a| a.eq_ignore_ascii_case(tag));
                if keep {
                    out.push('<');
                    out.push_str(tag);
                    out.push('>');
                    if !VOID.contains(&tag) {
                        stack.push(Step::Close(tag));
                    }
                }

                let first = stack.len();
                stack.extend(dom.children(id).map(Step::Visit));
                stack[first..].reverse();
            }
            _ => {}
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
