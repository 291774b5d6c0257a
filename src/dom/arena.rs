//! Arena-allocated DOM that html5ever parses into.
//!
//! Nodes live in one vector and link to each other by index, so a whole
//! converted document is a handful of allocations and traversal never
//! touches reference counts.

use html5ever::{LocalName, QualName};

/// Index of a node in its [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a DOM node.
#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element {
        name: QualName,
        attrs: Vec<Attribute>,
    },
    Text(String),
    /// Comments and processing instructions; kept so the tree builder can
    /// hand out handles, never rendered.
    Comment(String),
    Doctype,
}

/// HTML attribute.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QualName,
    pub value: String,
}

#[derive(Debug)]
pub struct Node {
    pub data: NodeData,
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-based DOM tree.
#[derive(Debug)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Dom {
    /// Create a DOM holding only the document root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// The document root.
    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    pub fn create_element(&mut self, name: QualName, attrs: Vec<Attribute>) -> NodeId {
        self.alloc(NodeData::Element { name, attrs })
    }

    pub fn create_text(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Text(text))
    }

    pub fn create_comment(&mut self, text: String) -> NodeId {
        self.alloc(NodeData::Comment(text))
    }

    pub fn create_doctype(&mut self) -> NodeId {
        self.alloc(NodeData::Doctype)
    }

    /// Append `child` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let last = self.get(parent).and_then(|n| n.last_child);

        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
            node.prev_sibling = last;
            node.next_sibling = None;
        }

        match last {
            Some(last) => {
                if let Some(node) = self.get_mut(last) {
                    node.next_sibling = Some(child);
                }
            }
            None => {
                if let Some(node) = self.get_mut(parent) {
                    node.first_child = Some(child);
                }
            }
        }

        if let Some(node) = self.get_mut(parent) {
            node.last_child = Some(child);
        }
    }

    /// Insert `new_node` immediately before `sibling`.
    pub fn insert_before(&mut self, sibling: NodeId, new_node: NodeId) {
        let Some((parent, prev)) = self.get(sibling).map(|n| (n.parent, n.prev_sibling)) else {
            return;
        };

        if let Some(node) = self.get_mut(new_node) {
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = Some(sibling);
        }

        if let Some(node) = self.get_mut(sibling) {
            node.prev_sibling = Some(new_node);
        }

        match prev {
            Some(prev) => {
                if let Some(node) = self.get_mut(prev) {
                    node.next_sibling = Some(new_node);
                }
            }
            None => {
                if let Some(node) = parent.and_then(|p| self.get_mut(p)) {
                    node.first_child = Some(new_node);
                }
            }
        }
    }

    /// Unlink a node from its parent and siblings. The node stays in the
    /// arena and can be re-attached.
    pub fn detach(&mut self, id: NodeId) {
        let Some((parent, prev, next)) = self
            .get(id)
            .map(|n| (n.parent, n.prev_sibling, n.next_sibling))
        else {
            return;
        };

        match prev {
            Some(prev) => {
                if let Some(node) = self.get_mut(prev) {
                    node.next_sibling = next;
                }
            }
            None => {
                if let Some(node) = parent.and_then(|p| self.get_mut(p)) {
                    node.first_child = next;
                }
            }
        }

        match next {
            Some(next) => {
                if let Some(node) = self.get_mut(next) {
                    node.prev_sibling = prev;
                }
            }
            None => {
                if let Some(node) = parent.and_then(|p| self.get_mut(p)) {
                    node.last_child = prev;
                }
            }
        }

        if let Some(node) = self.get_mut(id) {
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
    }

    /// Append text to `parent`, merging with a trailing text node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let last = self.get(parent).and_then(|n| n.last_child);

        if let Some(Node {
            data: NodeData::Text(existing),
            ..
        }) = last.and_then(|id| self.get_mut(id))
        {
            existing.push_str(text);
            return;
        }

        let node = self.create_text(text.to_string());
        self.append(parent, node);
    }

    /// Number of nodes, including the document root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when nothing but the document root exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.get(parent).and_then(|n| n.first_child),
        }
    }

    /// All nodes below `root` in document (pre-)order, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.children(root).collect();
        stack.reverse();
        Descendants { dom: self, stack }
    }

    /// Element's local name (tag), lower-cased by the parser.
    pub fn element_name(&self, id: NodeId) -> Option<&LocalName> {
        match &self.get(id)?.data {
            NodeData::Element { name, .. } => Some(&name.local),
            _ => None,
        }
    }

    pub fn get_attr(&self, id: NodeId, attr_name: &str) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Element { attrs, .. } => attrs
                .iter()
                .find(|a| a.name.local.as_ref() == attr_name)
                .map(|a| a.value.as_str()),
            _ => None,
        }
    }

    pub fn element_id(&self, id: NodeId) -> Option<&str> {
        self.get_attr(id, "id")
    }

    /// Text of a text node.
    pub fn text_content(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Concatenated text of every text node below `id`.
    pub fn collect_text(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| self.text_content(n))
            .collect()
    }

    /// First element with the given tag name, in document order.
    pub fn find_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.descendants(self.document())
            .find(|&n| self.element_name(n).is_some_and(|name| name.as_ref() == tag))
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.dom.get(id).and_then(|n| n.next_sibling);
        Some(id)
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'a> {
    dom: &'a Dom,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let first = self.stack.len();
        self.stack.extend(self.dom.children(id));
        self.stack[first..].reverse();
        Some(id)
    }
}
