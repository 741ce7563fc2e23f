//! Property validators.
//!
//! A [`Validator`] is a shareable predicate over a property value together
//! with a short description of what it accepts ("string", "number", ...).
//! The description shows up in [`ValidationStatus`](crate::ValidationStatus)
//! reports.
//!
//! # Example
//!
//! ```
//! use lens_groups::validators::{self, Validator};
//! use serde_json::json;
//!
//! assert!(validators::is_string().check(&json!("x")));
//! assert!(!validators::is_number().check(&json!("x")));
//!
//! let positive = Validator::new("positive number", |value| {
//!     value.as_f64().is_some_and(|number| number > 0.0)
//! });
//! assert!(positive.check(&json!(3)));
//! assert_eq!(positive.description(), "positive number");
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A described predicate over a property value.
#[derive(Clone)]
pub struct Validator {
    description: Arc<str>,
    predicate: Arc<Predicate>,
}

impl Validator {
    /// Wraps a predicate.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            description: Arc::from(description.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// Runs the predicate.
    pub fn check(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    /// What the validator accepts.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Accepts values this validator or `other` accepts.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        let left = self.clone();
        let right = other.clone();
        Self::new(
            format!("{} or {}", left.description, right.description),
            move |value| left.check(value) || right.check(value),
        )
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Validator")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Accepts strings.
pub fn is_string() -> Validator {
    Validator::new("string", Value::is_string)
}

/// Accepts any number.
pub fn is_number() -> Validator {
    Validator::new("number", Value::is_number)
}

/// Accepts integral numbers.
pub fn is_integer() -> Validator {
    Validator::new("integer", |value| value.is_i64() || value.is_u64())
}

/// Accepts `true` and `false`.
pub fn is_bool() -> Validator {
    Validator::new("boolean", Value::is_boolean)
}

/// Accepts arrays.
pub fn is_array() -> Validator {
    Validator::new("array", Value::is_array)
}

/// Accepts records.
pub fn is_object() -> Validator {
    Validator::new("object", Value::is_object)
}

/// Accepts only `null`.
pub fn is_null() -> Validator {
    Validator::new("null", Value::is_null)
}

/// Accepts anything but `null`.
pub fn not_null() -> Validator {
    Validator::new("non-null value", |value| !value.is_null())
}

/// Accepts everything.
pub fn any() -> Validator {
    Validator::new("any value", |_| true)
}

/// Accepts values equal to one of `allowed`.
pub fn one_of<I>(allowed: I) -> Validator
where
    I: IntoIterator<Item = Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().collect();
    let description = format!(
        "one of [{}]",
        allowed
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    Validator::new(description, move |value| allowed.contains(value))
}

/// Resolves a built-in validator by the name used in JSON descriptors.
///
/// Both camel case (`"isString"`) and snake case (`"is_string"`) are accepted.
pub fn by_name(name: &str) -> Option<Validator> {
    let validator = match name {
        "isString" | "is_string" | "isStr" => is_string(),
        "isNumber" | "is_number" => is_number(),
        "isInteger" | "is_integer" => is_integer(),
        "isBool" | "is_bool" | "isBoolean" => is_bool(),
        "isArray" | "is_array" | "isArr" => is_array(),
        "isObject" | "is_object" | "isObj" => is_object(),
        "isNull" | "is_null" => is_null(),
        "notNull" | "not_null" => not_null(),
        "any" => any(),
        _ => return None,
    };
    Some(validator)
}
