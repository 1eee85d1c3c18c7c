// SPDX-License-Identifier: PMPL-1.0-or-later
//! Element list accessor.
//!
//! The read-only view every validator consumes: the flattened, tag-only,
//! document-order element list, plus the convenience queries the rules
//! share. All queries are pure functions of the underlying document and
//! never panic on malformed nodes.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::markup::{Document, Element, NodeId};

fn empty_attributes() -> &'static HashMap<String, String> {
    static EMPTY: OnceLock<HashMap<String, String>> = OnceLock::new();
    EMPTY.get_or_init(HashMap::new)
}

pub struct ElementList<'a> {
    doc: &'a Document,
}

impl<'a> ElementList<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self { doc }
    }

    pub fn get(&self, id: NodeId) -> Option<&'a Element> {
        self.doc.get(id)
    }

    /// All element ids in document order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.doc.ids()
    }

    /// First element with the given tag, in document order.
    pub fn find_first(&self, tag: &str) -> Option<NodeId> {
        self.ids()
            .find(|&id| self.get(id).is_some_and(|el| el.tag == tag))
    }

    /// All elements with the given tag, in document order.
    pub fn find_all(&self, tag: &str) -> Vec<NodeId> {
        self.ids()
            .filter(|&id| self.get(id).is_some_and(|el| el.tag == tag))
            .collect()
    }

    /// Attribute mapping of an element; empty mapping when absent.
    pub fn attributes(&self, id: NodeId) -> &'a HashMap<String, String> {
        self.get(id)
            .map(|el| &el.attributes)
            .unwrap_or_else(|| empty_attributes())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&'a str> {
        self.get(id).and_then(|el| el.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_attribute(name))
    }

    /// First text-bearing child's content.
    pub fn text(&self, id: NodeId) -> Option<&'a str> {
        self.get(id).and_then(|el| el.text.as_deref())
    }

    pub fn children(&self, id: NodeId) -> &'a [NodeId] {
        self.get(id).map_or(&[], |el| &el.children)
    }

    /// Whether every element in `ids` carries at least one of the attribute
    /// alternatives.
    pub fn all_have_any_attribute(&self, ids: &[NodeId], alternatives: &[&str]) -> bool {
        ids.iter()
            .all(|&id| alternatives.iter().any(|attr| self.has_attribute(id, attr)))
    }

    /// Whether any element in `ids` carries the attribute.
    pub fn any_has_attribute(&self, ids: &[NodeId], name: &str) -> bool {
        ids.iter().any(|&id| self.has_attribute(id, name))
    }

    /// Longest chain of same-tag elements connected by first-child descent,
    /// outermost first. Ties go to the earliest candidate in document order;
    /// a candidate with no matching descendant yields a chain of length 1.
    pub fn longest_sequence(&self, tag: &str) -> Vec<NodeId> {
        let mut longest: Vec<NodeId> = Vec::new();
        for candidate in self.find_all(tag) {
            let chain = self.sequence_from(candidate, tag);
            if chain.len() > longest.len() {
                longest = chain;
            }
        }
        longest
    }

    fn sequence_from(&self, start: NodeId, tag: &str) -> Vec<NodeId> {
        let mut chain = vec![start];
        let mut current = start;
        while let Some(child) = self.doc.first_child(current) {
            if self.get(child).is_none_or(|el| el.tag != tag) {
                break;
            }
            chain.push(child);
            current = child;
        }
        chain
    }
}
