//! Construction errors for lens groups.
//!
//! Building a lens group either succeeds completely or fails with a
//! [`LensGroupError`]; a partially built group is never returned. Usage
//! problems on an existing group (unknown property, non-record input) are
//! not errors: they degrade to `None` or pass-through results and are
//! reported through the [`DiagnosticSink`](crate::diagnostics::DiagnosticSink).

use thiserror::Error;

/// Reasons a descriptor cannot be turned into a lens group.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LensGroupError {
    /// The descriptor itself is not an object.
    #[error("descriptor must be an object")]
    NotADescriptor,

    /// A field that must hold an array of strings holds something else.
    #[error("{field} must be supplied as an array of strings")]
    NotAStringArray {
        /// Descriptor field name.
        field: &'static str,
    },

    /// A field that must hold an array holds something else.
    #[error("{field} must be an array of values")]
    NotAnArray {
        /// Descriptor field name.
        field: &'static str,
    },

    /// A field that must hold a boolean (or array of booleans) holds something else.
    #[error("{field} must be a boolean")]
    NotABoolean {
        /// Descriptor field name.
        field: &'static str,
    },

    /// A field that must hold an array of booleans holds something else.
    #[error("{field} must be an array of booleans")]
    NotABooleanArray {
        /// Descriptor field name.
        field: &'static str,
    },

    /// Some, but not all, of `required`, `validators` and `extraProps` were supplied.
    #[error("only partial validation info provided")]
    PartialValidation,

    /// `validators` length differs from `propList` length.
    #[error("validators must be an array of functions, same length as propList ({expected}), got {actual}")]
    ValidatorCount {
        /// Length of `propList`.
        expected: usize,
        /// Length of `validators`.
        actual: usize,
    },

    /// `required` length differs from `propList` length.
    #[error("required must be an array of booleans, same length as propList ({expected}), got {actual}")]
    RequiredCount {
        /// Length of `propList`.
        expected: usize,
        /// Length of `required`.
        actual: usize,
    },

    /// A validator name in a JSON descriptor has no built-in counterpart.
    #[error("unknown validator `{0}`")]
    UnknownValidator(String),
}
