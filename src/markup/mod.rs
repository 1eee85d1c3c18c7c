// SPDX-License-Identifier: PMPL-1.0-or-later
//! Node abstraction over parsed markup trees.
//!
//! Both tree shapes (an HTML document tree and a JSX element tree) are
//! normalized at the parse boundary into one [`Document`]: a pre-order
//! arena of tag-bearing [`Element`]s. Downstream code never branches on
//! the source shape.

use std::collections::HashMap;

pub mod html;
pub mod jsx;

/// Index of an element in its [`Document`] arena.
pub type NodeId = usize;

/// Byte offsets of an element in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// The markup dialect a document was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Html,
    Jsx,
}

impl Dialect {
    /// Map a file extension to a dialect, if it is one we analyze.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "html" | "htm" => Some(Dialect::Html),
            "jsx" | "tsx" => Some(Dialect::Jsx),
            _ => None,
        }
    }
}

/// A tag-bearing node: the one capability surface every validator sees.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, e.g. `div` or `Foo.Bar` for a JSX member expression.
    pub tag: String,
    /// Attribute name to value. Keys are case-sensitive.
    pub attributes: HashMap<String, String>,
    /// Element children, in document order.
    pub children: Vec<NodeId>,
    /// Content of the first text-bearing child, if any.
    pub text: Option<String>,
    /// Source span, when the parser could attribute one.
    pub span: Option<Span>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
            text: None,
            span: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

/// A flattened, read-only tree of elements.
///
/// Elements are stored in pre-order, so arena order is document order and
/// the element list a validator consumes is simply the id range `0..len`.
/// Text and comment nodes are not stored; a text child only survives as the
/// `text` field of its parent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element. Callers push parents before their children so
    /// that document order is preserved.
    pub fn push(&mut self, element: Element) -> NodeId {
        self.nodes.push(element);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All element ids in document order.
    pub fn ids(&self) -> std::ops::Range<NodeId> {
        0..self.nodes.len()
    }

    /// First element child of `id`, the only child that participates in
    /// same-tag sequence chains.
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|el| el.children.first().copied())
    }
}
