//! html5ever TreeSink implementation for [`Dom`].

use std::borrow::Cow;
use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tree_builder::{ElementFlags, NodeOrText, QuirksMode, TreeSink};
use html5ever::{Attribute as Html5Attribute, QualName};

use super::arena::{Attribute, Dom, NodeData, NodeId};

/// TreeSink that builds a [`Dom`].
///
/// html5ever's TreeSink methods take `&self`, so the DOM sits behind a
/// RefCell.
pub struct DomSink {
    dom: RefCell<Dom>,
}

impl Default for DomSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DomSink {
    pub fn new() -> Self {
        Self {
            dom: RefCell::new(Dom::new()),
        }
    }

    /// Consume the sink and return the DOM.
    pub fn into_dom(self) -> Dom {
        self.dom.into_inner()
    }

    fn insert(&self, parent: NodeId, child: NodeOrText<NodeId>) {
        let mut dom = self.dom.borrow_mut();
        match child {
            NodeOrText::AppendNode(node) => dom.append(parent, node),
            NodeOrText::AppendText(text) => dom.append_text(parent, &text),
        }
    }
}

impl TreeSink for DomSink {
    type Handle = NodeId;
    type Output = Self;
    type ElemName<'a>
        = &'a QualName
    where
        Self: 'a;

    fn finish(self) -> Self::Output {
        self
    }

    fn parse_error(&self, msg: Cow<'static, str>) {
        log::trace!("html parse error: {msg}");
    }

    fn get_document(&self) -> NodeId {
        self.dom.borrow().document()
    }

    fn elem_name<'a>(&'a self, target: &'a NodeId) -> Self::ElemName<'a> {
        static EMPTY: QualName = QualName {
            prefix: None,
            ns: html5ever::ns!(),
            local: html5ever::local_name!(""),
        };

        let dom = self.dom.borrow();
        match dom.get(*target).map(|n| &n.data) {
            Some(NodeData::Element { name, .. }) => {
                // SAFETY: nodes are never removed from the arena while the sink
                // lives, and the tree builder only holds the name for the
                // duration of a comparison, before any further node is created.
                unsafe { std::mem::transmute::<&QualName, &'a QualName>(name) }
            }
            _ => &EMPTY,
        }
    }

    fn create_element(
        &self,
        name: QualName,
        attrs: Vec<Html5Attribute>,
        _flags: ElementFlags,
    ) -> NodeId {
        let attrs = attrs
            .into_iter()
            .map(|a| Attribute {
                name: a.name,
                value: a.value.to_string(),
            })
            .collect();
        self.dom.borrow_mut().create_element(name, attrs)
    }

    fn create_comment(&self, text: StrTendril) -> NodeId {
        self.dom.borrow_mut().create_comment(text.to_string())
    }

    fn create_pi(&self, _target: StrTendril, data: StrTendril) -> NodeId {
        self.dom.borrow_mut().create_comment(data.to_string())
    }

    fn append(&self, parent: &NodeId, child: NodeOrText<NodeId>) {
        self.insert(*parent, child);
    }

    fn append_based_on_parent_node(
        &self,
        element: &NodeId,
        prev_element: &NodeId,
        child: NodeOrText<NodeId>,
    ) {
        let parent = self.dom.borrow().get(*element).and_then(|n| n.parent);
        self.insert(parent.unwrap_or(*prev_element), child);
    }

    fn append_doctype_to_document(
        &self,
        _name: StrTendril,
        _public_id: StrTendril,
        _system_id: StrTendril,
    ) {
        let mut dom = self.dom.borrow_mut();
        let doc = dom.document();
        let doctype = dom.create_doctype();
        dom.append(doc, doctype);
    }

    fn get_template_contents(&self, target: &NodeId) -> NodeId {
        // Template contents are kept inline with the template element.
        *target
    }

    fn same_node(&self, x: &NodeId, y: &NodeId) -> bool {
        x == y
    }

    fn set_quirks_mode(&self, _mode: QuirksMode) {}

    fn append_before_sibling(&self, sibling: &NodeId, new_node: NodeOrText<NodeId>) {
        let mut dom = self.dom.borrow_mut();
        let node = match new_node {
            NodeOrText::AppendNode(node) => node,
            NodeOrText::AppendText(text) => dom.create_text(text.to_string()),
        };
        dom.insert_before(*sibling, node);
    }

    fn add_attrs_if_missing(&self, target: &NodeId, attrs: Vec<Html5Attribute>) {
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.get_mut(*target)
            && let NodeData::Element {
                attrs: existing, ..
            } = &mut node.data
        {
            for attr in attrs {
                if !existing.iter().any(|a| a.name == attr.name) {
                    existing.push(Attribute {
                        name: attr.name,
                        value: attr.value.to_string(),
                    });
                }
            }
        }
    }

    fn remove_from_parent(&self, target: &NodeId) {
        self.dom.borrow_mut().detach(*target);
    }

    fn reparent_children(&self, node: &NodeId, new_parent: &NodeId) {
        let mut dom = self.dom.borrow_mut();
        let children: Vec<_> = dom.children(*node).collect();
        for child in children {
            dom.detach(child);
            dom.append(*new_parent, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse_html;

    #[test]
    fn test_basic_parse() {
        let dom = parse_html("<p>Hello</p>");

        // document, html, head, body, p, text
        assert!(dom.len() >= 6);

        let p = dom.find_by_tag("p").expect("should find p");
        let text = dom.children(p).next().expect("p should have a child");
        assert_eq!(dom.text_content(text), Some("Hello"));
    }

    #[test]
    fn test_fragment_lands_in_body() {
        let dom = parse_html("<h1 id=\"a\">A</h1><p>b</p>");
        let body = dom.find_by_tag("body").expect("body is synthesized");
        let tags: Vec<_> = dom
            .children(body)
            .filter_map(|n| dom.element_name(n).map(|name| name.to_string()))
            .collect();
        assert_eq!(tags, vec!["h1", "p"]);
    }

    #[test]
    fn test_attributes() {
        let dom = parse_html(r#"<div id="main" title="a > b">Content</div>"#);
        let div = dom.find_by_tag("div").expect("should find div");
        assert_eq!(dom.element_id(div), Some("main"));
        assert_eq!(dom.get_attr(div, "title"), Some("a > b"));
    }

    #[test]
    fn test_misnested_markup_is_repaired() {
        // The adoption agency algorithm reparents and detaches nodes.
        let dom = parse_html("<p><b>one<i>two</b>three</i></p>");
        let p = dom.find_by_tag("p").expect("should find p");
        assert_eq!(dom.collect_text(p), "onetwothree");
    }

    #[test]
    fn test_uppercase_tags_are_lowercased() {
        let dom = parse_html("<H2 ID=\"x\">Up</H2>");
        let h2 = dom.find_by_tag("h2").expect("tag names are case-insensitive");
        assert_eq!(dom.element_id(h2), Some("x"));
    }
}
