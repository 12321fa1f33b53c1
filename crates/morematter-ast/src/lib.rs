/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for morematter.
 *
 * This crate provides the arena-backed document tree that the morematter
 * extractor operates on. It has minimal dependencies (serde, thiserror)
 * and can be used by any crate that needs to build or inspect a parsed
 * document tree.
 */

pub mod error;
pub mod node;
pub mod raw;
pub mod tree;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use node::{Node, NodeBody};
pub use raw::RawNode;
pub use tree::{NodeId, Preorder, Tree};
