/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Node types for the document tree.
//!
//! Every node carries a `kind` tag (the node type string of the external
//! AST convention) and a [`NodeBody`] that says which shape the node has:
//! a text-carrying leaf, a container with ordered children, or a void leaf
//! with neither. The tagged body replaces duck-typed `"value" in node`
//! checks with an explicit capability query ([`Node::has_text_value`]).

use crate::tree::NodeId;

/// The payload of a node, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// A leaf carrying raw text (the only shape frontmatter extraction
    /// can target)
    Text(String),
    /// A container with an ordered child sequence
    Children(Vec<NodeId>),
    /// A leaf with no payload (e.g. `break`)
    Empty,
}

/// A single node in a [`Tree`](crate::Tree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) kind: String,
    pub(crate) body: NodeBody,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// The node's type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The node's shape-tagged payload.
    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    /// The node's parent, or `None` for the root and detached nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this node is a text-carrying leaf.
    pub fn has_text_value(&self) -> bool {
        matches!(self.body, NodeBody::Text(_))
    }

    /// The raw text value, if this node is a text leaf.
    pub fn text_value(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Text(value) => Some(value),
            _ => None,
        }
    }

    /// The node's child ids. Empty for leaves.
    pub fn child_ids(&self) -> &[NodeId] {
        match &self.body {
            NodeBody::Children(children) => children,
            _ => &[],
        }
    }
}
