//! Per-property accessor bundles.
//!
//! Every declared property of a lens group gets a [`PropertyLens`]: the four
//! accessors `view`, `view_or`, `view_or_def` and `set`, bound once at
//! construction to `group path ++ [property]` and to the property's default.
//! A bundle is also the partially applied form of the group-level accessors:
//! hold on to it and call it with records only.
//!
//! # Example
//!
//! ```
//! use lens_groups::{LensGroup, LensGroupDescriptor};
//! use serde_json::json;
//!
//! let group = LensGroup::create(
//!     LensGroupDescriptor::new(["id", "name"])
//!         .with_defaults([json!(-1)])
//!         .with_path(["pets", "cat"]),
//! ).unwrap();
//!
//! let id = group.lens("id").unwrap();
//! let record = json!({"pets": {"cat": {"name": "tom"}}});
//! assert_eq!(id.view(&record), None);
//! assert_eq!(id.view_or_def(&record), Some(&json!(-1)));
//! assert_eq!(id.set(json!(7), record)["pets"]["cat"]["id"], json!(7));
//! ```

use serde_json::Value;

use crate::optic::Optional;
use crate::path::Path;

/// `true` when a lookup produced nothing or an explicit `null`.
pub(crate) fn is_nil(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

/// The accessor bundle for one declared property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyLens {
    name: String,
    focus: Path,
    default: Option<Value>,
}

impl PropertyLens {
    pub(crate) fn new(group_path: &Path, name: &str, default: Option<Value>) -> Self {
        Self {
            name: name.to_owned(),
            focus: group_path.child(name),
            default,
        }
    }

    /// Property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path from the outer record to the property.
    pub fn focus(&self) -> &Path {
        &self.focus
    }

    /// The declared default, if any. `Some(&Value::Null)` is a declared `null` default.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// The property's value, or `None` when the record is not a record or the
    /// path does not resolve.
    pub fn view<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        if !record.is_object() {
            return None;
        }
        self.focus.resolve(record)
    }

    /// The property's value, or `fallback` when it is missing or `null`.
    ///
    /// Falsy but defined values (`0`, `""`, `false`) are returned as is.
    pub fn view_or<'a>(&self, fallback: &'a Value, record: &'a Value) -> &'a Value {
        match self.view(record) {
            Some(value) if !value.is_null() => value,
            _ => fallback,
        }
    }

    /// The property's value, or its default when it is missing or `null`.
    ///
    /// Without a declared default this is [`PropertyLens::view`].
    pub fn view_or_def<'a>(&'a self, record: &'a Value) -> Option<&'a Value> {
        let value = self.view(record);
        match &self.default {
            Some(default) if is_nil(value) => Some(default),
            _ => value,
        }
    }

    /// The static default, as `view_or_def` of an absent record would produce it.
    pub(crate) fn static_default(&self) -> Option<Value> {
        self.default.clone()
    }

    /// Returns `record` with the property set to `value`, creating missing
    /// intermediate records. Non-record input is returned unchanged.
    #[must_use]
    pub fn set(&self, value: Value, record: Value) -> Value {
        if !record.is_object() {
            return record;
        }
        self.focus.assign(record, value)
    }
}

impl Optional<Value, Value> for PropertyLens {
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        self.view(source)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        Self::set(self, value, source)
    }
}
