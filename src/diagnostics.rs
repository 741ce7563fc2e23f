//! Diagnostic side channel.
//!
//! Invalid descriptors and misuse of a lens group (unknown property names,
//! non-record inputs, validation on a group without validators) never
//! interrupt the caller. They are reported to a [`DiagnosticSink`] chosen when
//! the group is built and inherited by every group derived from it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lens_groups::diagnostics::{CollectingSink, DiagnosticCategory};
//! use lens_groups::{LensGroup, LensGroupDescriptor};
//! use serde_json::json;
//!
//! let sink = Arc::new(CollectingSink::new());
//! let group = LensGroup::create_with_sink(
//!     LensGroupDescriptor::new(["name"]),
//!     sink.clone(),
//! ).unwrap();
//!
//! assert_eq!(group.view("nope", &json!({})), None);
//! assert_eq!(sink.diagnostics()[0].category, DiagnosticCategory::Usage);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Which kind of problem a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCategory {
    /// A descriptor was rejected while building a group.
    Construction,
    /// An operation was called with arguments it cannot act on.
    Usage,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction => formatter.write_str("construction error"),
            Self::Usage => formatter.write_str("usage warning"),
        }
    }
}

/// A single advisory message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// Construction error or usage warning.
    pub category: DiagnosticCategory,
    /// Operation that produced the message, e.g. `"LensGroup::set"`.
    pub operation: String,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// Builds a construction-error diagnostic.
    pub fn construction(operation: &str, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Construction,
            operation: operation.to_owned(),
            message: message.into(),
        }
    }

    /// Builds a usage-warning diagnostic.
    pub fn usage(operation: &str, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Usage,
            operation: operation.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "LG {}: {}: {}",
            self.category, self.operation, self.message
        )
    }
}

/// Receiver for diagnostics.
///
/// Implementations must not panic; emission is advisory only.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Shared handle to a sink, as stored on every lens group.
pub type SharedSink = Arc<dyn DiagnosticSink>;

/// Forwards diagnostics to `tracing`.
///
/// Construction errors are logged at `ERROR`, usage warnings at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic.category {
            DiagnosticCategory::Construction => {
                tracing::error!(operation = %diagnostic.operation, "LG: {}", diagnostic.message);
            }
            DiagnosticCategory::Usage => {
                tracing::warn!(operation = %diagnostic.operation, "LG: {}", diagnostic.message);
            }
        }
    }
}

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything emitted so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Number of diagnostics emitted so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of diagnostics of the given category.
    pub fn count(&self, category: DiagnosticCategory) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|diagnostic| diagnostic.category == category)
            .count()
    }

    /// Removes and returns everything emitted so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.entries.lock().push(diagnostic.clone());
    }
}

/// The sink used when none is supplied.
pub(crate) fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.emit(&Diagnostic::construction("create", "first"));
        sink.emit(&Diagnostic::usage("view", "second"));

        let entries = sink.diagnostics();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].category, DiagnosticCategory::Usage);
        assert_eq!(sink.count(DiagnosticCategory::Construction), 1);
    }

    #[test]
    fn test_take_drains() {
        let sink = CollectingSink::new();
        sink.emit(&Diagnostic::usage("set", "oops"));
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_display_keeps_category() {
        let diagnostic = Diagnostic::construction("LensGroup::create", "bad path");
        assert_eq!(
            diagnostic.to_string(),
            "LG construction error: LensGroup::create: bad path"
        );
    }
}
