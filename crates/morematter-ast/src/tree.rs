/*
 * tree.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Arena-backed document tree with stable node ids.
 */

//! The arena form of a document tree.
//!
//! Nodes are stored in a flat arena and addressed by [`NodeId`]. Ids are
//! stable for the lifetime of the tree: detaching a node unlinks it from
//! its parent's child sequence but never moves or invalidates other
//! nodes. A caller can therefore collect ids during one traversal and
//! detach them afterwards without any index bookkeeping — removing node
//! *i* cannot skip or revisit node *i + 1*.

use crate::error::Result;
use crate::node::{Node, NodeBody};
use crate::raw::RawNode;

/// Stable handle to a node within one [`Tree`].
///
/// Ids are only meaningful for the tree that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A rooted, ordered document tree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Build a tree from its nested serde form.
    pub fn from_raw(raw: RawNode) -> Tree {
        let mut nodes = Vec::new();
        let root = insert_raw(&mut nodes, raw, None);
        Tree { nodes, root }
    }

    /// Parse a tree from unist-style JSON.
    pub fn from_json(json: &str) -> Result<Tree> {
        Ok(Tree::from_raw(serde_json::from_str(json)?))
    }

    /// Convert the attached portion of the tree back to nested form.
    pub fn to_raw(&self) -> RawNode {
        self.raw_of(self.root)
    }

    /// Serialize the attached portion of the tree to unist-style JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_raw())?)
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node addressed by `id`.
    ///
    /// Panics if `id` came from a different tree; ids handed out by this
    /// tree are always valid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The node addressed by `id`, or `None` if the id is out of range.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The parent of `id`, or `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The position `id` currently occupies in its parent's child
    /// sequence, or `None` if it has no parent.
    pub fn index_in_parent(&self, id: NodeId) -> Option<usize> {
        let parent = self.node(id).parent?;
        self.node(parent).child_ids().iter().position(|&c| c == id)
    }

    /// Unlink `id` from its parent's child sequence.
    ///
    /// Returns the index the node occupied at the moment of removal, or
    /// `None` if the node has no parent (the root, or an already-detached
    /// node). The node and its descendants stay in the arena but are no
    /// longer reachable from the root.
    pub fn detach(&mut self, id: NodeId) -> Option<usize> {
        let parent = self.nodes[id.0].parent?;
        let NodeBody::Children(children) = &mut self.nodes[parent.0].body else {
            return None;
        };
        let position = children.iter().position(|&c| c == id)?;
        children.remove(position);
        self.nodes[id.0].parent = None;
        Some(position)
    }

    /// Depth-first, document-order iterator over the attached nodes.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Number of attached nodes whose kind equals `kind`.
    pub fn count_kind(&self, kind: &str) -> usize {
        self.preorder()
            .filter(|&id| self.node(id).kind() == kind)
            .count()
    }
}

fn insert_raw(nodes: &mut Vec<Node>, raw: RawNode, parent: Option<NodeId>) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(Node {
        kind: raw.kind,
        body: NodeBody::Empty,
        parent,
    });
    let body = match (raw.children, raw.value) {
        (Some(children), _) => NodeBody::Children(
            children
                .into_iter()
                .map(|child| insert_raw(nodes, child, Some(id)))
                .collect(),
        ),
        (None, Some(value)) => NodeBody::Text(value),
        (None, None) => NodeBody::Empty,
    };
    nodes[id.0].body = body;
    id
}

impl Tree {
    fn raw_of(&self, id: NodeId) -> RawNode {
        let node = self.node(id);
        match node.body() {
            NodeBody::Text(value) => RawNode::text(node.kind(), value.clone()),
            NodeBody::Children(children) => RawNode::parent(
                node.kind(),
                children.iter().map(|&child| self.raw_of(child)).collect(),
            ),
            NodeBody::Empty => RawNode::empty(node.kind()),
        }
    }
}

/// Explicit-stack preorder traversal over a [`Tree`].
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.tree.node(id).child_ids();
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Tree {
        Tree::from_raw(RawNode::parent(
            "root",
            vec![
                RawNode::text("yaml", "a: 1"),
                RawNode::parent(
                    "paragraph",
                    vec![RawNode::text("text", "hello"), RawNode::empty("break")],
                ),
                RawNode::text("toml", "b = 2"),
            ],
        ))
    }

    fn kinds_in_order(tree: &Tree) -> Vec<String> {
        tree.preorder()
            .map(|id| tree.node(id).kind().to_string())
            .collect()
    }

    #[test]
    fn test_preorder_is_document_order() {
        let tree = sample_tree();
        assert_eq!(
            kinds_in_order(&tree),
            vec!["root", "yaml", "paragraph", "text", "break", "toml"]
        );
    }

    #[test]
    fn test_detach_returns_index_at_removal() {
        let mut tree = sample_tree();
        let toml = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "toml")
            .unwrap();
        assert_eq!(tree.index_in_parent(toml), Some(2));

        let yaml = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "yaml")
            .unwrap();
        assert_eq!(tree.detach(yaml), Some(0));

        // The sibling shifted down, and its id still addresses it.
        assert_eq!(tree.index_in_parent(toml), Some(1));
        assert_eq!(tree.node(toml).kind(), "toml");
        assert_eq!(tree.detach(toml), Some(1));
    }

    #[test]
    fn test_detach_root_is_none() {
        let mut tree = sample_tree();
        let root = tree.root();
        assert_eq!(tree.detach(root), None);
    }

    #[test]
    fn test_detach_twice_is_none() {
        let mut tree = sample_tree();
        let yaml = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "yaml")
            .unwrap();
        assert_eq!(tree.detach(yaml), Some(0));
        assert_eq!(tree.detach(yaml), None);
    }

    #[test]
    fn test_detached_nodes_leave_traversal() {
        let mut tree = sample_tree();
        let paragraph = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "paragraph")
            .unwrap();
        tree.detach(paragraph);
        assert_eq!(kinds_in_order(&tree), vec!["root", "yaml", "toml"]);
        assert_eq!(tree.count_kind("text"), 0);
    }

    #[test]
    fn test_raw_round_trip() {
        let raw = RawNode::parent(
            "root",
            vec![
                RawNode::text("yaml", "a: 1"),
                RawNode::parent("paragraph", vec![RawNode::text("text", "hi")]),
            ],
        );
        let tree = Tree::from_raw(raw.clone());
        assert_eq!(tree.to_raw(), raw);
    }

    #[test]
    fn test_to_raw_after_detach_omits_node() {
        let mut tree = sample_tree();
        let yaml = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "yaml")
            .unwrap();
        tree.detach(yaml);
        let raw = tree.to_raw();
        let children = raw.children.unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].kind, "paragraph");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Tree::from_json("{ not json").is_err());
    }

    #[test]
    fn test_from_json_parses_unist_shape() {
        let tree = Tree::from_json(
            r#"{ "type": "root", "children": [ { "type": "yaml", "value": "a: 1" } ] }"#,
        )
        .unwrap();
        assert_eq!(tree.count_kind("yaml"), 1);
        let yaml = tree
            .preorder()
            .find(|&id| tree.node(id).kind() == "yaml")
            .unwrap();
        assert_eq!(tree.node(yaml).text_value(), Some("a: 1"));
    }
}
