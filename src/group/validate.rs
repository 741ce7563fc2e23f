//! Structural validation of records against a validated lens group.

use serde_json::Value;

use super::LensGroup;
use crate::accessor::{PropertyLens, is_nil};
use crate::validation::{PropertyRule, Validation, ValidationFailure, ValidationStatus};
use crate::validators::Validator;

/// A nil value passes unless required; anything else must satisfy the validator.
fn rule_accepts(lens: &PropertyLens, rule: &PropertyRule, record: &Value) -> bool {
    let value = lens.view(record);
    if is_nil(value) {
        return !rule.required;
    }
    value.is_some_and(|value| rule.validator.check(value))
}

impl LensGroup {
    /// Whether `prop` on the target of `record` satisfies its rule.
    ///
    /// A missing or `null` value is valid exactly when the property is not
    /// required; a present value must pass the validator. Returns `false`,
    /// with a usage warning, when the group has no validators, `record` is
    /// not a record, or `prop` is not declared.
    pub fn prop_is_valid(&self, prop: &str, record: &Value) -> bool {
        const OPERATION: &str = "LensGroup::prop_is_valid";
        if !self.has_validators() {
            self.warn(OPERATION, "lens group is without validators");
            return false;
        }
        if !record.is_object() {
            self.warn(OPERATION, "non-record supplied");
            return false;
        }
        match (self.lens(prop), self.validation.rule(prop)) {
            (Some(lens), Some(rule)) => rule_accepts(lens, rule, record),
            _ => {
                self.warn(OPERATION, format!("`{prop}` is not on the lens group"));
                false
            }
        }
    }

    /// Whether `record` passes validation.
    ///
    /// With `incoming` the own keys of the target, the record is valid when
    /// every required property is in `incoming`, no key of `incoming` is
    /// undeclared unless extra props are allowed, and every declared key of
    /// `incoming` satisfies [`LensGroup::prop_is_valid`].
    ///
    /// # Example
    ///
    /// ```
    /// use lens_groups::{validators, LensGroup, LensGroupDescriptor};
    /// use serde_json::json;
    ///
    /// let group = LensGroup::create(
    ///     LensGroupDescriptor::new(["id", "name"])
    ///         .with_validators([validators::is_number(), validators::is_string()])
    ///         .with_required([false, true])
    ///         .with_extra_props(false),
    /// ).unwrap();
    ///
    /// assert!(group.is_valid(&json!({"name": "x"})));
    /// assert!(!group.is_valid(&json!({"id": 1})));
    /// assert!(!group.is_valid(&json!({"name": "x", "extra": 1})));
    /// ```
    pub fn is_valid(&self, record: &Value) -> bool {
        self.status("LensGroup::is_valid", record)
            .is_some_and(|status| status.is_valid())
    }

    /// `!is_valid(record)`.
    pub fn is_invalid(&self, record: &Value) -> bool {
        !self.is_valid(record)
    }

    /// Every reason `record` fails validation, or `None` (with a usage
    /// warning) when the group has no validators.
    pub fn validation_status(&self, record: &Value) -> Option<ValidationStatus> {
        self.status("LensGroup::validation_status", record)
    }

    fn status(&self, operation: &str, record: &Value) -> Option<ValidationStatus> {
        let Validation::Validated {
            rules,
            extra_props_allowed,
        } = &self.validation
        else {
            self.warn(operation, "lens group is without validators");
            return None;
        };

        let mut status = ValidationStatus::default();
        if !record.is_object() {
            self.warn(operation, "non-record supplied");
            status.push(ValidationFailure::NotARecord);
            return Some(status);
        }

        let target = self.path.resolve(record).and_then(Value::as_object);
        let is_incoming = |name: &str| target.is_some_and(|target| target.contains_key(name));

        for lens in &self.properties {
            let required = rules.get(lens.name()).is_some_and(|rule| rule.required);
            if required && !is_incoming(lens.name()) {
                status.push(ValidationFailure::MissingRequired {
                    prop: lens.name().to_owned(),
                });
            }
        }

        for key in target.into_iter().flat_map(|target| target.keys()) {
            match (self.lens(key), rules.get(key)) {
                (Some(lens), Some(rule)) => {
                    if !rule_accepts(lens, rule, record) {
                        status.push(ValidationFailure::InvalidValue {
                            prop: key.clone(),
                            expected: rule.validator.description().to_owned(),
                        });
                    }
                }
                _ if !extra_props_allowed => {
                    status.push(ValidationFailure::ExtraProp { prop: key.clone() });
                }
                _ => {}
            }
        }
        Some(status)
    }

    /// Names of the required properties, in declaration order. Empty for a
    /// group without validators.
    pub fn required_props(&self) -> Vec<&str> {
        self.property_names()
            .filter(|name| self.validation.rule(name).is_some_and(|rule| rule.required))
            .collect()
    }

    /// Ad-hoc check of a property's current value against `validator`.
    ///
    /// `false` when the value is missing.
    pub fn prop_satisfies(&self, prop: &str, validator: &Validator, record: &Value) -> bool {
        self.view(prop, record)
            .is_some_and(|value| validator.check(value))
    }
}
