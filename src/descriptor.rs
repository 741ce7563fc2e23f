//! Lens group descriptors and their structural checks.
//!
//! A [`LensGroupDescriptor`] names the properties of a group and, optionally,
//! their defaults, the path to the group's target, and validation info. It
//! can be built with the typed builder or parsed from a loosely typed JSON
//! value with [`LensGroupDescriptor::from_value`]; either way
//! [`LensGroupDescriptor::check`] runs before anything is built.
//!
//! # Example
//!
//! ```
//! use lens_groups::{validators, LensGroupDescriptor, LensGroupError};
//! use serde_json::json;
//!
//! let typed = LensGroupDescriptor::new(["id", "name"])
//!     .with_defaults([json!(-1), json!("defName")])
//!     .with_required([false, true])
//!     .with_validators([validators::is_number(), validators::is_string()])
//!     .with_extra_props(false);
//! assert!(typed.check().is_ok());
//!
//! let parsed = LensGroupDescriptor::from_value(&json!({
//!     "propList": ["id", "name"],
//!     "required": [false, true],
//!     "validators": ["isNumber", "isString"],
//!     "extraProps": false
//! }));
//! assert!(parsed.is_ok());
//!
//! let partial = LensGroupDescriptor::new(["id"]).with_required([true]);
//! assert_eq!(partial.check(), Err(LensGroupError::PartialValidation));
//! ```

use serde_json::{Map, Value};

use crate::error::LensGroupError;
use crate::path::Path;
use crate::validation::PropertyRule;
use crate::validators::{self, Validator};

/// Input for [`LensGroup::create`](crate::LensGroup::create) and
/// [`LensGroup::add`](crate::LensGroup::add).
#[derive(Debug, Clone, Default)]
pub struct LensGroupDescriptor {
    pub(crate) prop_list: Vec<String>,
    pub(crate) defaults: Option<Vec<Value>>,
    pub(crate) path: Option<Path>,
    pub(crate) required: Option<Vec<bool>>,
    pub(crate) validators: Option<Vec<Validator>>,
    pub(crate) extra_props: Option<bool>,
}

/// One property as it enters the construction pipeline.
#[derive(Debug, Clone)]
pub(crate) struct PropertySpec {
    pub(crate) name: String,
    pub(crate) default: Option<Value>,
    pub(crate) rule: Option<PropertyRule>,
}

impl LensGroupDescriptor {
    /// A descriptor for the given property names, with no defaults, no path
    /// and no validation.
    pub fn new<I, S>(prop_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prop_list: prop_list.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Positional defaults. Properties past the end have no default; extra
    /// entries are ignored.
    #[must_use]
    pub fn with_defaults<I>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.defaults = Some(defaults.into_iter().collect());
        self
    }

    /// Path from the outer record to the group's target.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Path>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Positional required flags; must match the property count.
    #[must_use]
    pub fn with_required<I>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        self.required = Some(required.into_iter().collect());
        self
    }

    /// Positional validators; must match the property count.
    #[must_use]
    pub fn with_validators<I>(mut self, validators: I) -> Self
    where
        I: IntoIterator<Item = Validator>,
    {
        self.validators = Some(validators.into_iter().collect());
        self
    }

    /// Whether keys outside the declared properties pass validation.
    #[must_use]
    pub fn with_extra_props(mut self, allowed: bool) -> Self {
        self.extra_props = Some(allowed);
        self
    }

    /// Declared property names, in order.
    pub fn prop_list(&self) -> &[String] {
        &self.prop_list
    }

    /// Whether any validation field is present.
    pub const fn has_validation_info(&self) -> bool {
        self.required.is_some() || self.validators.is_some() || self.extra_props.is_some()
    }

    /// Structural checks on the validation block.
    ///
    /// If any of `required`, `validators` and `extraProps` is present, all
    /// three must be, and both arrays must have one entry per property.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn check(&self) -> Result<(), LensGroupError> {
        if !self.has_validation_info() {
            return Ok(());
        }
        let (Some(required), Some(validators), Some(_)) =
            (&self.required, &self.validators, self.extra_props)
        else {
            return Err(LensGroupError::PartialValidation);
        };
        let expected = self.prop_list.len();
        if validators.len() != expected {
            return Err(LensGroupError::ValidatorCount {
                expected,
                actual: validators.len(),
            });
        }
        if required.len() != expected {
            return Err(LensGroupError::RequiredCount {
                expected,
                actual: required.len(),
            });
        }
        Ok(())
    }

    /// Parses a JSON descriptor
    /// `{propList, defaults?, path?, required?, validators?, extraProps?}`.
    ///
    /// Validators are given by built-in name (see [`validators::by_name`]).
    /// Absent and `null` fields are treated alike.
    ///
    /// # Errors
    ///
    /// Returns the first shape problem found, then anything
    /// [`LensGroupDescriptor::check`] rejects.
    pub fn from_value(value: &Value) -> Result<Self, LensGroupError> {
        let fields = value.as_object().ok_or(LensGroupError::NotADescriptor)?;

        let prop_list = string_array(fields.get("propList").unwrap_or(&Value::Null))
            .ok_or(LensGroupError::NotAStringArray { field: "propList" })?;

        let defaults = optional_field(fields, "defaults")
            .map(|defaults| {
                defaults
                    .as_array()
                    .cloned()
                    .ok_or(LensGroupError::NotAnArray { field: "defaults" })
            })
            .transpose()?;

        let path = optional_field(fields, "path")
            .map(|path| {
                string_array(path)
                    .map(Path::from)
                    .ok_or(LensGroupError::NotAStringArray { field: "path" })
            })
            .transpose()?;

        let required = optional_field(fields, "required")
            .map(|required| {
                required
                    .as_array()
                    .and_then(|flags| flags.iter().map(Value::as_bool).collect::<Option<Vec<_>>>())
                    .ok_or(LensGroupError::NotABooleanArray { field: "required" })
            })
            .transpose()?;

        let validators = optional_field(fields, "validators")
            .map(|names| {
                string_array(names)
                    .ok_or(LensGroupError::NotAStringArray {
                        field: "validators",
                    })?
                    .into_iter()
                    .map(|name| validators::by_name(&name).ok_or(LensGroupError::UnknownValidator(name)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let extra_props = optional_field(fields, "extraProps")
            .map(|allowed| {
                allowed
                    .as_bool()
                    .ok_or(LensGroupError::NotABoolean {
                        field: "extraProps",
                    })
            })
            .transpose()?;

        let descriptor = Self {
            prop_list,
            defaults,
            path,
            required,
            validators,
            extra_props,
        };
        descriptor.check()?;
        Ok(descriptor)
    }

    /// Splits a checked descriptor into per-property specs, positionally.
    pub(crate) fn property_specs(&self) -> Vec<PropertySpec> {
        self.prop_list
            .iter()
            .enumerate()
            .map(|(index, name)| PropertySpec {
                name: name.clone(),
                default: self
                    .defaults
                    .as_ref()
                    .and_then(|defaults| defaults.get(index))
                    .cloned(),
                rule: self.rule_at(index),
            })
            .collect()
    }

    fn rule_at(&self, index: usize) -> Option<PropertyRule> {
        let required = *self.required.as_ref()?.get(index)?;
        let validator = self.validators.as_ref()?.get(index)?.clone();
        Some(PropertyRule::new(required, validator))
    }
}

fn optional_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|value| !value.is_null())
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_plain_descriptor_checks() {
        assert!(LensGroupDescriptor::new(Vec::<String>::new()).check().is_ok());
        assert!(LensGroupDescriptor::new(["a"]).check().is_ok());
    }

    #[test]
    fn test_counts_must_match() {
        let descriptor = LensGroupDescriptor::new(["a", "b"])
            .with_required([true, false])
            .with_validators([validators::any()])
            .with_extra_props(true);
        assert_eq!(
            descriptor.check(),
            Err(LensGroupError::ValidatorCount {
                expected: 2,
                actual: 1
            })
        );

        let descriptor = LensGroupDescriptor::new(["a", "b"])
            .with_required([true])
            .with_validators([validators::any(), validators::any()])
            .with_extra_props(true);
        assert_eq!(
            descriptor.check(),
            Err(LensGroupError::RequiredCount {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_specs_are_positional() {
        let specs = LensGroupDescriptor::new(["a", "b", "c"])
            .with_defaults([json!(1), Value::Null])
            .property_specs();
        assert_eq!(specs[0].default, Some(json!(1)));
        assert_eq!(specs[1].default, Some(Value::Null));
        assert_eq!(specs[2].default, None);
        assert!(specs.iter().all(|spec| spec.rule.is_none()));
    }

    #[rstest]
    #[case(json!([]), LensGroupError::NotADescriptor)]
    #[case(json!({}), LensGroupError::NotAStringArray { field: "propList" })]
    #[case(json!({"propList": ["a", 1]}), LensGroupError::NotAStringArray { field: "propList" })]
    #[case(json!({"propList": ["a"], "defaults": "x"}), LensGroupError::NotAnArray { field: "defaults" })]
    #[case(json!({"propList": ["a"], "path": "a.b"}), LensGroupError::NotAStringArray { field: "path" })]
    #[case(
        json!({"propList": ["a"], "required": [1], "validators": ["any"], "extraProps": true}),
        LensGroupError::NotABooleanArray { field: "required" }
    )]
    #[case(
        json!({"propList": ["a"], "required": [true], "validators": ["isUnicorn"], "extraProps": true}),
        LensGroupError::UnknownValidator("isUnicorn".to_owned())
    )]
    #[case(
        json!({"propList": ["a"], "required": [true], "validators": ["any"], "extraProps": "yes"}),
        LensGroupError::NotABoolean { field: "extraProps" }
    )]
    #[case(
        json!({"propList": ["a"], "required": [true]}),
        LensGroupError::PartialValidation
    )]
    fn test_from_value_rejects(#[case] input: Value, #[case] expected: LensGroupError) {
        assert_eq!(LensGroupDescriptor::from_value(&input).unwrap_err(), expected);
    }

    #[test]
    fn test_from_value_accepts_full_descriptor() {
        let descriptor = LensGroupDescriptor::from_value(&json!({
            "propList": ["id", "name"],
            "defaults": [-1],
            "path": ["pets", "cat"],
            "required": [false, true],
            "validators": ["isNumber", "isString"],
            "extraProps": true
        }))
        .unwrap();
        assert_eq!(descriptor.prop_list(), ["id", "name"]);
        assert_eq!(descriptor.path, Some(Path::new(["pets", "cat"])));
        let specs = descriptor.property_specs();
        assert!(specs[1].rule.as_ref().is_some_and(|rule| rule.required));
    }
}
