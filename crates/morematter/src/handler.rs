/*
 * handler.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Handler registration: the parser/validator/name triple per node kind.

use hashlink::LinkedHashMap;
use serde_json::Value;

type ParserFn = Box<dyn Fn(&str) -> anyhow::Result<Value> + Send + Sync>;
type ValidatorFn = Box<dyn Fn(Value) -> Validation + Send + Sync>;

/// Outcome of a validator.
///
/// Failure and transformation are structurally distinct: a validator
/// either accepts (returning the value that lands in the result bucket,
/// possibly a transformed one) or rejects with a reason.
#[derive(Debug)]
pub enum Validation {
    /// The value to append to the result bucket
    Valid(Value),
    /// Rejection, with the reason reported in the error record
    Invalid(String),
}

impl Validation {
    /// Shorthand for `Validation::Invalid` from anything stringy.
    pub fn invalid(reason: impl Into<String>) -> Validation {
        Validation::Invalid(reason.into())
    }
}

/// What to do with nodes of one registered kind.
///
/// The parser turns a node's raw text into a value; the crate imposes no
/// textual format — YAML, TOML, or anything else is the parser's choice.
/// The optional validator checks (and may replace) the parsed value. The
/// optional name labels the result bucket; it defaults to the kind the
/// handler was registered under.
pub struct Handler {
    parser: ParserFn,
    validator: Option<ValidatorFn>,
    name: Option<String>,
}

impl Handler {
    /// Create a handler from a parser closure.
    pub fn new(parser: impl Fn(&str) -> anyhow::Result<Value> + Send + Sync + 'static) -> Handler {
        Handler {
            parser: Box::new(parser),
            validator: None,
            name: None,
        }
    }

    /// Attach a validator.
    pub fn with_validator(
        mut self,
        validator: impl Fn(Value) -> Validation + Send + Sync + 'static,
    ) -> Handler {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Store results under `name` instead of the registration kind.
    ///
    /// Handlers for different kinds may share a name; their buckets
    /// append in registration order rather than overwriting.
    pub fn named(mut self, name: impl Into<String>) -> Handler {
        self.name = Some(name.into());
        self
    }

    /// The configured output name, if any.
    pub fn output_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn parse(&self, raw: &str) -> anyhow::Result<Value> {
        (self.parser)(raw)
    }

    pub(crate) fn validate(&self, parsed: Value) -> Validation {
        match &self.validator {
            Some(validator) => validator(parsed),
            None => Validation::Valid(parsed),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("validator", &self.validator.is_some())
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered registry of node kind → [`Handler`].
///
/// Extraction runs one traversal per registered kind, in registration
/// order.
#[derive(Debug, Default)]
pub struct HandlerSet {
    handlers: LinkedHashMap<String, Handler>,
}

impl HandlerSet {
    /// Create an empty registry.
    pub fn new() -> HandlerSet {
        HandlerSet::default()
    }

    /// Register a handler for a node kind.
    ///
    /// Re-registering a kind replaces its handler but keeps its position
    /// in the traversal order.
    pub fn insert(&mut self, kind: impl Into<String>, handler: Handler) {
        // LinkedHashMap::insert would move an occupied entry to the back;
        // replace keeps its position in the traversal order.
        self.handlers.replace(kind.into(), handler);
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Registered (kind, handler) pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Handler)> {
        self.handlers.iter().map(|(kind, handler)| (kind.as_str(), handler))
    }
}

// Structural and inline container kinds that can never hold a
// frontmatter block. Registering any of these is a configuration error.
const STRUCTURAL_KINDS: &[&str] = &[
    "root",
    "paragraph",
    "heading",
    "list",
    "listItem",
    "thematicBreak",
    "blockquote",
    "table",
    "definition",
    "footnoteDefinition",
    "tableRow",
    "tableCell",
    "link",
    "linkReference",
    "emphasis",
    "strong",
    "delete",
    "inlineCode",
    "break",
    "image",
    "imageReference",
    "footnote",
    "footnoteReference",
];

/// Whether `kind` is a denylisted structural/container node kind.
pub fn is_structural_kind(kind: &str) -> bool {
    STRUCTURAL_KINDS.contains(&kind)
}
