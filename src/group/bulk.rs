//! List forms of the per-property accessors.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::LensGroup;
use crate::accessor::PropertyLens;

/// Property name to looked-up value, in request order.
///
/// A `None` value is a property the group knows but the record lacks; it is
/// kept so callers can tell "asked for and missing" from "not asked for".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyValues {
    entries: Vec<(String, Option<Value>)>,
    positions: HashMap<String, usize>,
}

impl PropertyValues {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    fn insert(&mut self, name: &str, value: Option<Value>) {
        match self.positions.get(name) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.positions.insert(name.to_owned(), self.entries.len());
                self.entries.push((name.to_owned(), value));
            }
        }
    }

    /// The value for `name`; `None` when missing or not requested.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.positions
            .get(name)
            .and_then(|&position| self.entries.get(position))
            .and_then(|(_, value)| value.as_ref())
    }

    /// Whether `name` has an entry, missing or not.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// A record holding the present entries; missing ones are left out.
    pub fn into_record(self) -> Value {
        Value::Object(
            self.entries
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl LensGroup {
    /// Collects `lookup` over the known names in `props`, warning about the rest.
    fn collect_views<'a, I, S, F>(
        &'a self,
        operation: &str,
        props: I,
        record: &'a Value,
        mut lookup: F,
    ) -> PropertyValues
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(usize, &'a PropertyLens) -> Option<Value>,
    {
        if !record.is_object() {
            self.warn(operation, "non-record target supplied");
        }
        let props = props.into_iter();
        let mut values = PropertyValues::with_capacity(props.size_hint().0);
        for (index, prop) in props.enumerate() {
            let prop = prop.as_ref();
            match self.lens(prop) {
                Some(lens) => values.insert(prop, lookup(index, lens)),
                None => self.warn(operation, format!("`{prop}` is not on the lens group")),
            }
        }
        values
    }

    /// [`LensGroup::view`] for each name in `props`. Unknown names are left out.
    pub fn view_l<I, S>(&self, props: I, record: &Value) -> PropertyValues
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.collect_views("LensGroup::view_l", props, record, |_, lens| {
            lens.view(record).cloned()
        })
    }

    /// [`LensGroup::view_or`] for each name in `props`, with the fallback at
    /// the same position in `fallbacks`. Past the end of `fallbacks` the
    /// fallback is "nothing", so a missing or `null` value yields `None`.
    pub fn view_or_l<I, S>(&self, fallbacks: &[Value], props: I, record: &Value) -> PropertyValues
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.collect_views("LensGroup::view_or_l", props, record, |index, lens| {
            match fallbacks.get(index) {
                Some(fallback) => Some(lens.view_or(fallback, record).clone()),
                None => lens.view(record).filter(|value| !value.is_null()).cloned(),
            }
        })
    }

    /// [`LensGroup::view_or_def`] for each name in `props`.
    pub fn view_or_def_l<I, S>(&self, props: I, record: &Value) -> PropertyValues
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.collect_views("LensGroup::view_or_def_l", props, record, |_, lens| {
            lens.view_or_def(record).cloned()
        })
    }

    /// Folds [`LensGroup::set`] over `props` and `values` pairwise, left to right.
    ///
    /// Unknown names are skipped. Names without a value at the same position
    /// are skipped with a usage warning.
    #[must_use]
    pub fn set_l<I, S, V>(&self, props: I, values: V, record: &Value) -> Value
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: IntoIterator<Item = Value>,
    {
        const OPERATION: &str = "LensGroup::set_l";
        if !record.is_object() {
            self.warn(OPERATION, "non-record target supplied");
            return record.clone();
        }
        let mut values = values.into_iter();
        props.into_iter().fold(record.clone(), |updated, prop| {
            let prop = prop.as_ref();
            match (self.lens(prop), values.next()) {
                (Some(lens), Some(value)) => lens.set(value, updated),
                (None, _) => {
                    self.warn(OPERATION, format!("`{prop}` is not on the lens group"));
                    updated
                }
                (Some(_), None) => {
                    self.warn(OPERATION, format!("no value supplied for `{prop}`"));
                    updated
                }
            }
        })
    }

    /// [`LensGroup::set_l`] with the keys and values of `props_to_set`, in key order.
    #[must_use]
    pub fn set_o(&self, props_to_set: &Value, record: &Value) -> Value {
        let Some(updates) = props_to_set.as_object() else {
            self.warn("LensGroup::set_o", "properties to set must be a record");
            return record.clone();
        };
        self.set_l(updates.keys(), updates.values().cloned(), record)
    }
}
