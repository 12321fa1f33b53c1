/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Frontmatter-block extraction for parsed document trees.
 */

//! Extracts, parses, validates, and removes frontmatter-like leaf blocks
//! from an already-parsed document tree.
//!
//! This is a post-parse transform, not a parser. The caller registers a
//! [`Handler`] per node kind — a parser closure, an optional validator,
//! and an optional output name — and [`extract`] performs one traversal
//! per kind: every matching text leaf is parsed, optionally validated,
//! removed from the tree, and its value collected into a named result
//! bucket on [`Extracted`].
//!
//! Parse and validation failures are collected per node so one bad block
//! does not abort the rest. With [`Settings::fail_on_error`] set (the
//! default) they surface at the end of the call as one [`MultiError`];
//! otherwise they become [`DiagnosticMessage`]s on the output and the
//! call completes with whatever validated.
//!
//! # Example
//!
//! ```ignore
//! use morematter::{Handler, HandlerSet, Settings, extract};
//! use morematter::ast::Tree;
//!
//! let mut tree = Tree::from_json(source)?;
//!
//! let mut handlers = HandlerSet::new();
//! handlers.insert(
//!     "yaml",
//!     Handler::new(|raw| Ok(serde_json::from_str(raw)?)).named("meta"),
//! );
//!
//! let extracted = extract(&mut tree, &Settings::new(handlers))?;
//! let meta = extracted.bucket("meta");
//! ```

pub mod diagnostic;
pub mod error;
pub mod extract;
pub mod handler;

/// The document tree types this crate operates on.
pub use morematter_ast as ast;

// Re-export main types for convenience
pub use diagnostic::{DiagnosticKind, DiagnosticMessage};
pub use error::{ExtractError, MultiError, NodeError, NodeFailure, Result};
pub use extract::{Extracted, Settings, extract};
pub use handler::{Handler, HandlerSet, Validation, is_structural_kind};
