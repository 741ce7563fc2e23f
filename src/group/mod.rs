//! The lens group.
//!
//! A [`LensGroup`] bundles one [`PropertyLens`] per declared property, the
//! [`Path`] locating the group's target inside an outer record, optional
//! [`Validation`] metadata and the [`DiagnosticSink`](crate::diagnostics::DiagnosticSink)
//! that receives usage warnings.
//!
//! Groups are immutable values. Every operation that would change one
//! (adding or removing properties, changing the path) returns a new group,
//! and no operation mutates the records it is given.
//!
//! # Example
//!
//! ```
//! use lens_groups::{LensGroup, LensGroupDescriptor};
//! use serde_json::json;
//!
//! let cat = LensGroup::create(
//!     LensGroupDescriptor::new(["id", "name", "color", "mood"])
//!         .with_defaults([json!(-1), json!("defName"), json!("defColor"), json!("defMood")]),
//! ).unwrap();
//!
//! let my_cat = json!({"name": "sunshine", "color": "orange"});
//! assert_eq!(cat.view("name", &my_cat), Some(&json!("sunshine")));
//! assert_eq!(cat.view("id", &my_cat), None);
//! assert_eq!(cat.view_or_def("id", &my_cat), Some(&json!(-1)));
//!
//! let purple = cat.set("color", json!("purple"), &my_cat);
//! assert_eq!(purple["color"], json!("purple"));
//! assert_eq!(my_cat["color"], json!("orange"));
//! ```

mod bulk;
mod specialize;
mod validate;
mod whole;

pub use bulk::PropertyValues;

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::accessor::PropertyLens;
use crate::descriptor::{LensGroupDescriptor, PropertySpec};
use crate::diagnostics::{Diagnostic, SharedSink, default_sink};
use crate::error::LensGroupError;
use crate::path::Path;
use crate::validation::{PropertyRule, Validation};

/// A named bundle of property accessors focused on a target sub-record.
#[derive(Clone)]
pub struct LensGroup {
    path: Path,
    properties: Vec<PropertyLens>,
    /// Property name to its position in `properties`.
    index: HashMap<String, usize>,
    validation: Validation,
    sink: SharedSink,
}

static_assertions::assert_impl_all!(LensGroup: Send, Sync, Clone);

impl LensGroup {
    /// Builds a lens group, reporting diagnostics through `tracing`.
    ///
    /// Property `i` gets `defaults[i]` as its default when that entry exists.
    /// Duplicate names are allowed; the last declaration wins.
    ///
    /// # Errors
    ///
    /// Returns the descriptor problem (also emitted as a construction
    /// diagnostic) when the validation block is partial or misaligned.
    pub fn create(descriptor: LensGroupDescriptor) -> Result<Self, LensGroupError> {
        Self::create_with_sink(descriptor, default_sink())
    }

    /// Builds a lens group that reports to `sink`. Derived groups inherit it.
    ///
    /// # Errors
    ///
    /// See [`LensGroup::create`].
    pub fn create_with_sink(
        descriptor: LensGroupDescriptor,
        sink: SharedSink,
    ) -> Result<Self, LensGroupError> {
        if let Err(error) = descriptor.check() {
            sink.emit(&Diagnostic::construction("LensGroup::create", error.to_string()));
            return Err(error);
        }
        let path = descriptor.path.clone().unwrap_or_default();
        Ok(Self::assemble(
            path,
            descriptor.property_specs(),
            descriptor.extra_props,
            sink,
        ))
    }

    /// Parses a JSON descriptor and builds a lens group from it.
    ///
    /// # Errors
    ///
    /// See [`LensGroupDescriptor::from_value`].
    pub fn from_json(descriptor: &Value) -> Result<Self, LensGroupError> {
        Self::from_json_with_sink(descriptor, default_sink())
    }

    /// [`LensGroup::from_json`] reporting to `sink`.
    ///
    /// # Errors
    ///
    /// See [`LensGroupDescriptor::from_value`].
    pub fn from_json_with_sink(
        descriptor: &Value,
        sink: SharedSink,
    ) -> Result<Self, LensGroupError> {
        match LensGroupDescriptor::from_value(descriptor) {
            Ok(descriptor) => Self::create_with_sink(descriptor, sink),
            Err(error) => {
                sink.emit(&Diagnostic::construction("LensGroup::from_json", error.to_string()));
                Err(error)
            }
        }
    }

    /// The construction pipeline shared by `create` and every specialization:
    /// merge duplicate names, build accessor bundles, attach validation.
    pub(crate) fn assemble(
        path: Path,
        specs: Vec<PropertySpec>,
        extra_props: Option<bool>,
        sink: SharedSink,
    ) -> Self {
        let mut merged: Vec<PropertySpec> = Vec::with_capacity(specs.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(specs.len());
        for spec in specs {
            match index.get(&spec.name) {
                Some(&position) => merged[position] = spec,
                None => {
                    index.insert(spec.name.clone(), merged.len());
                    merged.push(spec);
                }
            }
        }
        let validation = attach_validation(&merged, extra_props);
        let properties = merged
            .into_iter()
            .map(|spec| PropertyLens::new(&path, &spec.name, spec.default))
            .collect();
        Self {
            path,
            properties,
            index,
            validation,
            sink,
        }
    }

    /// The current properties as pipeline input, carrying static defaults and rules.
    pub(crate) fn specs(&self) -> Vec<PropertySpec> {
        self.properties
            .iter()
            .map(|lens| PropertySpec {
                name: lens.name().to_owned(),
                default: lens.static_default(),
                rule: self.validation.rule(lens.name()).cloned(),
            })
            .collect()
    }

    pub(crate) fn warn(&self, operation: &str, message: impl Into<String>) {
        self.sink.emit(&Diagnostic::usage(operation, message));
    }

    /// Resolves `prop` for a single-property operation, warning on misuse.
    fn accessor(&self, operation: &str, prop: &str, record: &Value) -> Option<&PropertyLens> {
        if !record.is_object() {
            self.warn(operation, format!("non-record target supplied for `{prop}`"));
            return None;
        }
        let lens = self.lens(prop);
        if lens.is_none() {
            self.warn(operation, format!("`{prop}` is not on the lens group"));
        }
        lens
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Path from the outer record to the group's target.
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// The accessor bundle for `prop`.
    pub fn lens(&self, prop: &str) -> Option<&PropertyLens> {
        self.index
            .get(prop)
            .and_then(|&position| self.properties.get(position))
    }

    /// All accessor bundles, in declaration order.
    pub fn properties(&self) -> &[PropertyLens] {
        &self.properties
    }

    /// Declared property names, in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(PropertyLens::name)
    }

    /// The declared defaults as a positional list aligned with
    /// [`LensGroup::property_names`]; `None` marks "no default".
    pub fn defaults(&self) -> Vec<Option<&Value>> {
        self.properties
            .iter()
            .map(|lens| lens.default_value())
            .collect()
    }

    /// Whether `prop` is declared.
    pub fn has_property(&self, prop: &str) -> bool {
        self.lens(prop).is_some()
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no property is declared.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Validation metadata.
    pub const fn validation(&self) -> &Validation {
        &self.validation
    }

    /// Whether the group carries validation metadata.
    pub const fn has_validators(&self) -> bool {
        self.validation.is_validated()
    }

    /// The sink receiving this group's diagnostics.
    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    // =========================================================================
    // Per-property accessors
    // =========================================================================

    /// The value of `prop` on the target of `record`.
    ///
    /// `None` when `record` is not a record, `prop` is not declared, or any
    /// path segment is missing.
    pub fn view<'a>(&self, prop: &str, record: &'a Value) -> Option<&'a Value> {
        self.accessor("LensGroup::view", prop, record)?.view(record)
    }

    /// Like [`LensGroup::view`], but a missing or `null` value yields `fallback`.
    pub fn view_or<'a>(
        &self,
        fallback: &'a Value,
        prop: &str,
        record: &'a Value,
    ) -> Option<&'a Value> {
        Some(
            self.accessor("LensGroup::view_or", prop, record)?
                .view_or(fallback, record),
        )
    }

    /// Like [`LensGroup::view`], but a missing or `null` value yields the
    /// property's default, when it has one.
    pub fn view_or_def<'a>(&'a self, prop: &str, record: &'a Value) -> Option<&'a Value> {
        self.accessor("LensGroup::view_or_def", prop, record)?
            .view_or_def(record)
    }

    /// A copy of `record` with `prop` set to `value` on its target.
    ///
    /// Missing intermediate records are created. When `record` is not a
    /// record or `prop` is not declared, an unchanged copy is returned.
    #[must_use]
    pub fn set(&self, prop: &str, value: Value, record: &Value) -> Value {
        match self.accessor("LensGroup::set", prop, record) {
            Some(lens) => lens.set(value, record.clone()),
            None => record.clone(),
        }
    }

    // =========================================================================
    // Target operations
    // =========================================================================

    /// The target sub-record itself (not a copy), or `None` if `record` is
    /// not a record or the path does not resolve.
    pub fn view_target<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        if !record.is_object() {
            self.warn("LensGroup::view_target", "non-record supplied");
            return None;
        }
        self.path.resolve(record)
    }

    /// A copy of `record` with its target replaced by `target`.
    ///
    /// With an empty path the result is `target` itself, so a targetless
    /// group still hands back a fresh value rather than `record`.
    #[must_use]
    pub fn set_target(&self, target: Value, record: &Value) -> Value {
        if self.path.is_root() {
            return target;
        }
        if !record.is_object() {
            self.warn("LensGroup::set_target", "non-record supplied");
            return record.clone();
        }
        self.path.assign(record.clone(), target)
    }
}

/// Validation is attached only when the policy is given and every property
/// has a rule.
fn attach_validation(specs: &[PropertySpec], extra_props: Option<bool>) -> Validation {
    let Some(extra_props_allowed) = extra_props else {
        return Validation::Unvalidated;
    };
    let rules: Option<HashMap<String, PropertyRule>> = specs
        .iter()
        .map(|spec| spec.rule.clone().map(|rule| (spec.name.clone(), rule)))
        .collect();
    rules.map_or(Validation::Unvalidated, |rules| Validation::Validated {
        rules,
        extra_props_allowed,
    })
}

impl fmt::Debug for LensGroup {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LensGroup")
            .field("path", &self.path)
            .field("properties", &self.properties)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}
