//! Whole-object operations: cloning, defaults materialization, default merging.

use serde_json::{Map, Value};

use super::LensGroup;
use crate::accessor::PropertyLens;

impl LensGroup {
    /// Copies the declared properties `pick` finds on `record` into a new record.
    fn collect_props<'a, F>(&'a self, operation: &str, record: &'a Value, pick: F) -> Value
    where
        F: Fn(&'a PropertyLens, &'a Value) -> Option<&'a Value>,
    {
        if !record.is_object() {
            self.warn(operation, "non-record supplied");
        }
        let props: Map<String, Value> = self
            .properties
            .iter()
            .filter_map(|lens| pick(lens, record).map(|value| (lens.name().to_owned(), value.clone())))
            .collect();
        Value::Object(props)
    }

    /// A new record with deep copies of the declared properties present on
    /// the target of `record`. Absent properties get no key.
    ///
    /// # Example
    ///
    /// ```
    /// use lens_groups::{LensGroup, LensGroupDescriptor};
    /// use serde_json::json;
    ///
    /// let group = LensGroup::create(
    ///     LensGroupDescriptor::new(["id", "name"]).with_path(["pets", "cat"]),
    /// ).unwrap();
    /// let family = json!({"pets": {"cat": {"id": 9, "toy": "mouse"}}});
    /// assert_eq!(group.clone_of(&family), json!({"id": 9}));
    /// ```
    #[must_use]
    pub fn clone_of(&self, record: &Value) -> Value {
        self.collect_props("LensGroup::clone_of", record, PropertyLens::view)
    }

    /// Like [`LensGroup::clone_of`], but absent or `null` properties take their
    /// default. Properties with neither a value nor a default get no key.
    #[must_use]
    pub fn clone_with_def(&self, record: &Value) -> Value {
        self.collect_props("LensGroup::clone_with_def", record, PropertyLens::view_or_def)
    }

    /// [`LensGroup::clone_with_def`] on the group without `exclude`; excluded
    /// properties never appear in the result.
    #[must_use]
    pub fn clone_with_def_except<I, S>(&self, exclude: I, record: &Value) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove(exclude).clone_with_def(record)
    }

    /// The "all defaults" record: every property that has a default, set to it.
    #[must_use]
    pub fn def(&self) -> Value {
        self.clone_with_def(&Value::Object(Map::new()))
    }

    /// `{...def(), ...record}`: adds the defaults for group properties that
    /// `record` lacks as own keys. Keys already on `record`, including keys the
    /// group does not declare, are kept and take precedence.
    #[must_use]
    pub fn add_def(&self, record: &Value) -> Value {
        let Some(own) = record.as_object() else {
            self.warn("LensGroup::add_def", "non-record supplied");
            return record.clone();
        };
        let mut merged = match self.def() {
            Value::Object(defaults) => defaults,
            _ => Map::new(),
        };
        for (key, value) in own {
            merged.insert(key.clone(), value.clone());
        }
        Value::Object(merged)
    }

    /// [`LensGroup::add_def`] on the group without `exclude`.
    #[must_use]
    pub fn add_def_except<I, S>(&self, exclude: I, record: &Value) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove(exclude).add_def(record)
    }
}
