/*
 * extract.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The frontmatter extraction transform.
 */

//! The extraction transform itself.
//!
//! [`extract`] runs one document-order traversal per registered kind.
//! Matched node ids are collected up front from the arena; ids are
//! stable, so detaching nodes afterwards cannot skip or revisit a
//! sibling. Every matched node is removed exactly once, whether or not
//! its payload parses — failure affects result placement and error
//! reporting, not tree mutation.

use hashlink::LinkedHashMap;
use serde::Serialize;
use serde_json::Value;

use morematter_ast::{NodeId, Tree};

use crate::diagnostic::DiagnosticMessage;
use crate::error::{ExtractError, MultiError, NodeError, NodeFailure, Result};
use crate::handler::{Handler, HandlerSet, Validation, is_structural_kind};

/// Extraction settings: what to extract and how to fail.
#[derive(Debug)]
pub struct Settings {
    /// Handlers per node kind, traversed in registration order.
    pub handlers: HandlerSet,

    /// When `true` (the default), any parse or validation failure turns
    /// the whole call into an `Err` wrapping a [`MultiError`]. When
    /// `false`, failures become diagnostics on [`Extracted::messages`]
    /// and the call completes with the values that did validate.
    pub fail_on_error: bool,
}

impl Settings {
    /// Settings with the default throwing failure mode.
    pub fn new(handlers: HandlerSet) -> Settings {
        Settings {
            handlers,
            fail_on_error: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings::new(HandlerSet::new())
    }
}

/// The output of one extraction call.
#[derive(Debug, Default, Serialize)]
pub struct Extracted {
    /// Result buckets, one per distinct output name, each holding its
    /// values in document order. Buckets exist (possibly empty) for
    /// every registered handler's name.
    pub data: LinkedHashMap<String, Vec<Value>>,

    /// Non-fatal diagnostics, populated only in best-effort mode.
    pub messages: Vec<DiagnosticMessage>,
}

impl Extracted {
    /// The bucket stored under `name`, if any handler produced one.
    pub fn bucket(&self, name: &str) -> Option<&[Value]> {
        self.data.get(name).map(Vec::as_slice)
    }
}

/// Extract all registered frontmatter blocks from `tree`.
///
/// For every kind in `settings.handlers`, in registration order:
/// matching text leaves are located in document order, removed from the
/// tree, and their raw values run through the handler's parser and
/// (when present) validator. Successful values land in the bucket named
/// by the handler; kinds sharing a name append to one bucket.
///
/// # Errors
///
/// Configuration errors (a `root` or denylisted kind among the
/// registered handlers) and structural errors (a matched node with no
/// text value or no parent) abort immediately, regardless of failure
/// mode. Per-node parse/validation failures abort only at the end of
/// the call, as one [`MultiError`], and only when
/// [`Settings::fail_on_error`] is set.
pub fn extract(tree: &mut Tree, settings: &Settings) -> Result<Extracted> {
    for kind in settings.handlers.kinds() {
        if kind == "root" {
            return Err(ExtractError::RootHandler);
        }
        if is_structural_kind(kind) {
            return Err(ExtractError::UnsupportedKind(kind.to_string()));
        }
    }

    let mut extracted = Extracted::default();
    let mut errors: Vec<NodeError> = Vec::new();

    for (kind, handler) in settings.handlers.iter() {
        let name = handler.output_name().unwrap_or(kind);
        let matches: Vec<NodeId> = tree
            .preorder()
            .filter(|&id| tree.node(id).kind() == kind)
            .collect();
        tracing::debug!(
            kind,
            bucket = name,
            matches = matches.len(),
            "extracting frontmatter blocks"
        );

        let bucket = extracted
            .data
            .entry(name.to_string())
            .or_insert_with(Vec::new);
        for id in matches {
            let Some(raw) = tree.node(id).text_value().map(str::to_owned) else {
                return Err(ExtractError::NotATextLeaf {
                    kind: kind.to_string(),
                });
            };
            // Detach unconditionally, noting the index the node occupied.
            let Some(index) = tree.detach(id) else {
                return Err(ExtractError::DetachedNode {
                    kind: kind.to_string(),
                });
            };
            match run_handler(handler, &raw) {
                Ok(value) => bucket.push(value),
                Err(failure) => errors.push(NodeError {
                    kind: kind.to_string(),
                    index,
                    failure,
                }),
            }
        }
    }

    if errors.is_empty() {
        return Ok(extracted);
    }
    if settings.fail_on_error {
        Err(MultiError::new(errors).into())
    } else {
        extracted.messages = errors.iter().map(NodeError::to_diagnostic).collect();
        Ok(extracted)
    }
}

fn run_handler(handler: &Handler, raw: &str) -> std::result::Result<Value, NodeFailure> {
    let parsed = handler.parse(raw).map_err(NodeFailure::Parse)?;
    match handler.validate(parsed) {
        Validation::Valid(value) => Ok(value),
        Validation::Invalid(reason) => Err(NodeFailure::Invalid(reason)),
    }
}
