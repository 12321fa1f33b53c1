/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for frontmatter extraction.
//!
//! Configuration and structural errors ([`ExtractError`]'s non-aggregate
//! variants) abort the call immediately: they mean the call itself is
//! malformed, not that one document fragment was bad. Parse and
//! validation failures are collected per node as [`NodeError`] records
//! and surface at the end of the call, either wrapped in one
//! [`MultiError`] or as diagnostics, depending on the failure mode.

use std::fmt;

use thiserror::Error;

use crate::diagnostic::DiagnosticMessage;

/// Result type alias for morematter operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Fatal extraction errors.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A handler was registered under the `root` kind
    #[error("handlers for `root` nodes are not supported")]
    RootHandler,

    /// A handler was registered under a denylisted structural kind
    #[error("handling `{0}` node kinds is not supported")]
    UnsupportedKind(String),

    /// A matched node carries no text value and so cannot be a
    /// frontmatter leaf
    #[error("matched `{kind}` node carries no text value")]
    NotATextLeaf { kind: String },

    /// A matched node has no parent (the handler kind targets the root
    /// or a detached node)
    #[error("matched `{kind}` node has no parent")]
    DetachedNode { kind: String },

    /// One or more nodes failed to parse or validate, in throwing mode
    #[error(transparent)]
    Failed(#[from] MultiError),
}

/// Why one node failed to contribute a value.
#[derive(Debug, Error)]
pub enum NodeFailure {
    /// The caller-supplied parser rejected the raw text
    #[error("parser failed: {0}")]
    Parse(anyhow::Error),

    /// The caller-supplied validator rejected the parsed value
    #[error("validation failed: {0}")]
    Invalid(String),
}

/// One per-node error record: which kind it matched, the position it
/// occupied in its parent at the time of failure, and why it failed.
#[derive(Debug, Error)]
#[error("`{kind}` node at index {index}: {failure}")]
pub struct NodeError {
    pub kind: String,
    pub index: usize,
    pub failure: NodeFailure,
}

impl NodeError {
    /// Render as a non-fatal diagnostic for best-effort mode.
    pub fn to_diagnostic(&self) -> DiagnosticMessage {
        DiagnosticMessage::error(self.failure.to_string())
            .with_detail(format!("`{}` node at index {}", self.kind, self.index))
    }
}

/// Aggregated failure wrapping every [`NodeError`] collected during one
/// extraction call, in the order the nodes were visited.
#[derive(Debug)]
pub struct MultiError {
    pub errors: Vec<NodeError>,
}

impl MultiError {
    pub fn new(errors: Vec<NodeError>) -> MultiError {
        MultiError { errors }
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s) occurred while extracting frontmatter blocks",
            self.errors.len()
        )?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_error_display() {
        let error = NodeError {
            kind: "yaml".to_string(),
            index: 2,
            failure: NodeFailure::Invalid("missing title".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "`yaml` node at index 2: validation failed: missing title"
        );
    }

    #[test]
    fn test_parse_failure_display() {
        let failure = NodeFailure::Parse(anyhow::anyhow!("unexpected token"));
        assert_eq!(failure.to_string(), "parser failed: unexpected token");
    }

    #[test]
    fn test_multi_error_lists_each_record() {
        let multi = MultiError::new(vec![
            NodeError {
                kind: "yaml".to_string(),
                index: 0,
                failure: NodeFailure::Invalid("no".to_string()),
            },
            NodeError {
                kind: "toml".to_string(),
                index: 1,
                failure: NodeFailure::Parse(anyhow::anyhow!("bad")),
            },
        ]);
        let text = multi.to_string();
        assert!(text.starts_with("2 error(s) occurred"));
        assert!(text.contains("`yaml` node at index 0"));
        assert!(text.contains("`toml` node at index 1"));
    }

    #[test]
    fn test_node_error_to_diagnostic_carries_context() {
        let error = NodeError {
            kind: "yaml".to_string(),
            index: 3,
            failure: NodeFailure::Invalid("empty".to_string()),
        };
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.title, "validation failed: empty");
        assert_eq!(diagnostic.detail.as_deref(), Some("`yaml` node at index 3"));
    }
}
