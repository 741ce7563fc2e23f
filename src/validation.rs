//! Validation metadata and reports.
//!
//! Validation metadata is all or nothing: a lens group is either
//! [`Validation::Unvalidated`] or carries a [`PropertyRule`] for every one of
//! its properties plus the group-level extra-props policy. Failing validation
//! is an ordinary result, never a diagnostic.

use std::collections::HashMap;
use std::fmt;

use crate::validators::Validator;

/// Requirement and predicate for one property.
#[derive(Debug, Clone)]
pub struct PropertyRule {
    /// Whether the property must be present on the target.
    pub required: bool,
    /// Predicate applied to present, non-null values.
    pub validator: Validator,
}

impl PropertyRule {
    /// Builds a rule.
    pub const fn new(required: bool, validator: Validator) -> Self {
        Self {
            required,
            validator,
        }
    }
}

/// Group-level validation state.
#[derive(Debug, Clone, Default)]
pub enum Validation {
    /// No validation metadata.
    #[default]
    Unvalidated,
    /// One rule per declared property.
    Validated {
        /// Rules keyed by property name.
        rules: HashMap<String, PropertyRule>,
        /// Whether keys outside the declared properties are accepted.
        extra_props_allowed: bool,
    },
}

impl Validation {
    /// Whether rules are attached.
    pub const fn is_validated(&self) -> bool {
        matches!(self, Self::Validated { .. })
    }

    /// The rule for `prop`, if the group is validated and knows it.
    pub fn rule(&self, prop: &str) -> Option<&PropertyRule> {
        match self {
            Self::Unvalidated => None,
            Self::Validated { rules, .. } => rules.get(prop),
        }
    }

    /// The extra-props policy, if the group is validated.
    pub const fn extra_props_allowed(&self) -> Option<bool> {
        match self {
            Self::Unvalidated => None,
            Self::Validated {
                extra_props_allowed,
                ..
            } => Some(*extra_props_allowed),
        }
    }
}

/// One reason a record failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The outer value is not a record.
    NotARecord,
    /// A required property is not an own key of the target.
    MissingRequired {
        /// Property name.
        prop: String,
    },
    /// The target carries a key the group does not declare, and extras are not allowed.
    ExtraProp {
        /// Offending key.
        prop: String,
    },
    /// A property value was rejected by its validator, or a required property is `null`.
    InvalidValue {
        /// Property name.
        prop: String,
        /// Description of the validator that rejected it.
        expected: String,
    },
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotARecord => formatter.write_str("not a record"),
            Self::MissingRequired { prop } => write!(formatter, "missing required `{prop}`"),
            Self::ExtraProp { prop } => write!(formatter, "extra prop `{prop}` not allowed"),
            Self::InvalidValue { prop, expected } => {
                write!(formatter, "`{prop}` is not a valid {expected}")
            }
        }
    }
}

/// Every failure found while validating one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationStatus {
    failures: Vec<ValidationFailure>,
}

impl ValidationStatus {
    pub(crate) fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// `true` when nothing failed.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures in the order they were found.
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return formatter.write_str("valid");
        }
        formatter.write_str("invalid: ")?;
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{failure}")?;
        }
        Ok(())
    }
}
