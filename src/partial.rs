//! Partial application of lens group operations.
//!
//! Every operation takes the record last, so fixing the leading arguments
//! leaves a reusable function of the record. The factories here capture the
//! fixed arguments by value and clone them on each call, the way a
//! `partial!`-style binding would.
//!
//! # Example
//!
//! ```
//! use lens_groups::{partial, LensGroup, LensGroupDescriptor};
//! use serde_json::json;
//!
//! let cat = LensGroup::create(
//!     LensGroupDescriptor::new(["name", "mood"]).with_defaults([json!("tom")]),
//! ).unwrap();
//!
//! let name_of = cat.defaulted_viewer("name");
//! assert_eq!(name_of(&json!({})), Some(json!("tom")));
//!
//! let calm = cat.setter("mood", json!("calm"));
//! assert_eq!(calm(&json!({"name": "felix"})), json!({"name": "felix", "mood": "calm"}));
//!
//! let nested = partial::appending_path(["pets", "cat"]);
//! assert_eq!(nested(&cat).path().segments(), ["pets", "cat"]);
//! ```

use serde_json::Value;

use crate::descriptor::LensGroupDescriptor;
use crate::error::LensGroupError;
use crate::group::LensGroup;
use crate::path::Path;

// =============================================================================
// Record-last closures
// =============================================================================

impl LensGroup {
    /// `|record| view(prop, record)`, returning an owned copy.
    pub fn viewer(&self, prop: impl Into<String>) -> impl Fn(&Value) -> Option<Value> + '_ {
        let prop = prop.into();
        move |record: &Value| self.view(&prop, record).cloned()
    }

    /// `|record| view_or_def(prop, record)`, returning an owned copy.
    pub fn defaulted_viewer(
        &self,
        prop: impl Into<String>,
    ) -> impl Fn(&Value) -> Option<Value> + '_ {
        let prop = prop.into();
        move |record: &Value| self.view_or_def(&prop, record).cloned()
    }

    /// `|record| set(prop, value, record)`.
    pub fn setter(&self, prop: impl Into<String>, value: Value) -> impl Fn(&Value) -> Value + '_ {
        let prop = prop.into();
        move |record: &Value| self.set(&prop, value.clone(), record)
    }

    /// `|record| clone_of(record)`.
    pub fn cloner(&self) -> impl Fn(&Value) -> Value + '_ {
        move |record: &Value| self.clone_of(record)
    }

    /// `|record| clone_with_def(record)`.
    pub fn default_cloner(&self) -> impl Fn(&Value) -> Value + '_ {
        move |record: &Value| self.clone_with_def(record)
    }

    /// `|record| set_target(target, record)`.
    pub fn target_setter(&self, target: Value) -> impl Fn(&Value) -> Value + '_ {
        move |record: &Value| self.set_target(target.clone(), record)
    }
}

// =============================================================================
// Group-last specializations
// =============================================================================

/// `|group| group.add(descriptor)`.
pub fn adding(
    descriptor: LensGroupDescriptor,
) -> impl Fn(&LensGroup) -> Result<LensGroup, LensGroupError> {
    move |group: &LensGroup| group.add(descriptor.clone())
}

/// `|group| group.remove(props)`.
pub fn removing<I, S>(props: I) -> impl Fn(&LensGroup) -> LensGroup
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = props
        .into_iter()
        .map(|name| name.as_ref().to_owned())
        .collect();
    move |group: &LensGroup| group.remove(&names)
}

/// `|group| group.append_path(suffix)`.
pub fn appending_path(suffix: impl Into<Path>) -> impl Fn(&LensGroup) -> LensGroup {
    let suffix = suffix.into();
    move |group: &LensGroup| group.append_path(suffix.clone())
}

/// `|group| group.prepend_path(prefix)`.
pub fn prepending_path(prefix: impl Into<Path>) -> impl Fn(&LensGroup) -> LensGroup {
    let prefix = prefix.into();
    move |group: &LensGroup| group.prepend_path(prefix.clone())
}

/// `|group| group.replace_path(path)`.
pub fn replacing_path(path: impl Into<Path>) -> impl Fn(&LensGroup) -> LensGroup {
    let path = path.into();
    move |group: &LensGroup| group.replace_path(path.clone())
}
