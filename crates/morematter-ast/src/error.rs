/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for document tree construction.

use thiserror::Error;

/// Result type alias for morematter-ast operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a tree from serialized form.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid document-tree JSON
    #[error("malformed document tree: {0}")]
    Json(#[from] serde_json::Error),
}
