/*
 * raw.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Nested serde representation of a document tree.
//!
//! [`RawNode`] mirrors the unist-style JSON convention most markdown
//! parsers emit: a `type` tag, an optional `value` for literals, and an
//! optional `children` array for containers. It exists for serialization
//! and for building fixture trees; traversal and mutation happen on the
//! arena form ([`Tree`](crate::Tree)).

use serde::{Deserialize, Serialize};

/// One node of the nested tree form.
///
/// When both `children` and `value` are present, `children` wins and the
/// node is treated as a container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    /// Node type tag
    #[serde(rename = "type")]
    pub kind: String,

    /// Raw text value (literal nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Ordered child sequence (container nodes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
}

impl RawNode {
    /// A container node with ordered children.
    pub fn parent(kind: impl Into<String>, children: Vec<RawNode>) -> Self {
        RawNode {
            kind: kind.into(),
            value: None,
            children: Some(children),
        }
    }

    /// A text-carrying leaf node.
    pub fn text(kind: impl Into<String>, value: impl Into<String>) -> Self {
        RawNode {
            kind: kind.into(),
            value: Some(value.into()),
            children: None,
        }
    }

    /// A leaf node with no payload.
    pub fn empty(kind: impl Into<String>) -> Self {
        RawNode {
            kind: kind.into(),
            value: None,
            children: None,
        }
    }
}
