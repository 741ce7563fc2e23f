//! # lens-groups
//!
//! Immutable, path-aware property accessors for JSON-like records.
//!
//! ## Overview
//!
//! A [`LensGroup`] is declared once for a set of property names, with
//! optional defaults, an optional path locating the group's target inside a
//! larger record, and optional validation info. It then provides:
//!
//! - **Accessors**: `view`, `view_or`, `view_or_def`, `set`, plus the list
//!   forms `view_l`, `view_or_l`, `view_or_def_l`, `set_l`, `set_o`
//! - **Target operations**: `view_target`, `set_target`
//! - **Whole-object operations**: `clone_of`, `clone_with_def`, `def`, `add_def`
//! - **Validation**: `prop_is_valid`, `is_valid`, `validation_status`
//! - **Specialization**: `add`, `remove`, `replace_path`, `append_path`,
//!   `prepend_path`
//!
//! No operation mutates a record or a group. Misuse (a non-record target,
//! an unknown property) never panics: reads yield `None`, writes hand back
//! an unchanged copy, and a usage diagnostic goes to the group's
//! [`DiagnosticSink`](diagnostics::DiagnosticSink).
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Path`] and the diagnostic types
//!
//! ## Example
//!
//! ```rust
//! use lens_groups::prelude::*;
//! use serde_json::json;
//!
//! let bros_cat = LensGroup::create(
//!     LensGroupDescriptor::new(["id", "name", "color", "mood"])
//!         .with_defaults([json!(-1), json!("defName"), json!("defColor"), json!("defMood")])
//!         .with_path(["myBrother", "hisPets", "brosCat"]),
//! ).unwrap();
//!
//! let family = json!({"myBrother": {"hisPets": {"brosCat": {"id": 9, "mood": "grumpy"}}}});
//! assert_eq!(bros_cat.view("id", &family), Some(&json!(9)));
//! assert_eq!(bros_cat.view_or_def("name", &family), Some(&json!("defName")));
//!
//! let happier = bros_cat.set("mood", json!("happy"), &family);
//! assert_eq!(happier["myBrother"]["hisPets"]["brosCat"]["mood"], json!("happy"));
//! assert_eq!(family["myBrother"]["hisPets"]["brosCat"]["mood"], json!("grumpy"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use lens_groups::prelude::*;
/// ```
pub mod prelude {
    pub use crate::diagnostics::{CollectingSink, DiagnosticSink, SilentSink, TracingSink};
    pub use crate::validators::{self, Validator};
    pub use crate::{
        LensGroup, LensGroupDescriptor, LensGroupError, Optional, Path, PropertyLens,
        PropertyValues, ValidationStatus,
    };
}

mod accessor;
mod descriptor;
pub mod diagnostics;
mod error;
mod group;
mod optic;
pub mod partial;
mod path;
mod validation;
pub mod validators;

pub use accessor::PropertyLens;
pub use descriptor::LensGroupDescriptor;
pub use error::LensGroupError;
pub use group::{LensGroup, PropertyValues};
pub use optic::Optional;
pub use path::Path;
pub use validation::{PropertyRule, Validation, ValidationFailure, ValidationStatus};
pub use validators::Validator;
