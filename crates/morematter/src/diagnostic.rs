/*
 * diagnostic.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Non-fatal diagnostic messages.
//!
//! When extraction runs with `fail_on_error = false`, per-node failures
//! are reported through this channel instead of aborting the call.

use serde::{Deserialize, Serialize};

/// The kind of diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// An error that prevented one node from contributing a value
    Error,
    /// A warning that doesn't affect results
    Warning,
    /// Informational message
    Info,
}

/// One diagnostic message on an extraction's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,

    /// Brief description of what went wrong
    pub title: String,

    /// Where it went wrong (node kind and position), when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl DiagnosticMessage {
    /// Create an error diagnostic.
    pub fn error(title: impl Into<String>) -> DiagnosticMessage {
        DiagnosticMessage {
            kind: DiagnosticKind::Error,
            title: title.into(),
            detail: None,
        }
    }

    /// Attach location/context detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> DiagnosticMessage {
        self.detail = Some(detail.into());
        self
    }

    /// Render for terminal or log output.
    pub fn to_text(&self) -> String {
        let prefix = match self.kind {
            DiagnosticKind::Error => "Error",
            DiagnosticKind::Warning => "Warning",
            DiagnosticKind::Info => "Info",
        };
        match &self.detail {
            Some(detail) => format!("{}: {} ({})", prefix, self.title, detail),
            None => format!("{}: {}", prefix, self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_without_detail() {
        let msg = DiagnosticMessage::error("parser failed: bad yaml");
        assert_eq!(msg.to_text(), "Error: parser failed: bad yaml");
    }

    #[test]
    fn test_to_text_with_detail() {
        let msg = DiagnosticMessage::error("validation failed: missing title")
            .with_detail("`yaml` node at index 0");
        assert_eq!(
            msg.to_text(),
            "Error: validation failed: missing title (`yaml` node at index 0)"
        );
    }

    #[test]
    fn test_serializes_without_empty_detail() {
        let msg = DiagnosticMessage::error("boom");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "Error", "title": "boom" })
        );
    }
}
