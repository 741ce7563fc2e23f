//! Specialization: deriving new groups by adding or removing properties or
//! changing the path.
//!
//! Every operator rebuilds the group through the same pipeline as
//! [`LensGroup::create`], carrying each surviving property's static default
//! and, when present, its validation rule. The result is validated only if
//! every property of the new group still has a rule.

use super::LensGroup;
use crate::descriptor::LensGroupDescriptor;
use crate::diagnostics::Diagnostic;
use crate::error::LensGroupError;
use crate::path::Path;

impl LensGroup {
    /// A new group with the properties of `descriptor` added.
    ///
    /// The path is inherited; a path on `descriptor` is ignored with a usage
    /// warning. A name that is already declared is replaced, so its old
    /// default and rule are dropped unless `descriptor` supplies new ones.
    /// The extra-props policy of `descriptor` wins over the existing one.
    ///
    /// # Errors
    ///
    /// Returns the descriptor problem, as [`LensGroup::create`] does.
    ///
    /// # Example
    ///
    /// ```
    /// use lens_groups::{LensGroup, LensGroupDescriptor};
    /// use serde_json::json;
    ///
    /// let group = LensGroup::create(
    ///     LensGroupDescriptor::new(["p1"]).with_defaults([json!("p1def")]),
    /// ).unwrap();
    /// let wider = group
    ///     .add(LensGroupDescriptor::new(["p2"]).with_defaults([json!("p2def")]))
    ///     .unwrap();
    /// assert_eq!(wider.def(), json!({"p1": "p1def", "p2": "p2def"}));
    /// assert_eq!(group.def(), json!({"p1": "p1def"}));
    /// ```
    pub fn add(&self, descriptor: LensGroupDescriptor) -> Result<Self, LensGroupError> {
        const OPERATION: &str = "LensGroup::add";
        if let Err(error) = descriptor.check() {
            self.sink
                .emit(&Diagnostic::construction(OPERATION, error.to_string()));
            return Err(error);
        }
        if descriptor.path.is_some() {
            self.warn(OPERATION, "descriptor path ignored; the group's path is kept");
        }
        let carries_rules = descriptor.has_validation_info();
        let mut specs = self.specs();
        specs.extend(descriptor.property_specs());
        let extra_props = descriptor
            .extra_props
            .or_else(|| self.validation.extra_props_allowed());
        let derived = Self::assemble(self.path.clone(), specs, extra_props, self.sink.clone());
        if self.has_validators() && !derived.has_validators() {
            self.warn(
                OPERATION,
                "added properties carry no validation info; validators dropped",
            );
        } else if carries_rules && !derived.has_validators() {
            self.warn(
                OPERATION,
                "existing properties carry no validation info; added validators dropped",
            );
        }
        Ok(derived)
    }

    /// A new group without the named properties (and their rules).
    ///
    /// Names the group does not declare are ignored.
    #[must_use]
    pub fn remove<I, S>(&self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed: Vec<String> = props
            .into_iter()
            .map(|name| name.as_ref().to_owned())
            .collect();
        let specs = self
            .specs()
            .into_iter()
            .filter(|spec| !removed.contains(&spec.name))
            .collect();
        Self::assemble(
            self.path.clone(),
            specs,
            self.validation.extra_props_allowed(),
            self.sink.clone(),
        )
    }

    /// A new group with the same properties, defaults and rules, focused on `path`.
    #[must_use]
    pub fn replace_path(&self, path: impl Into<Path>) -> Self {
        Self::assemble(
            path.into(),
            self.specs(),
            self.validation.extra_props_allowed(),
            self.sink.clone(),
        )
    }

    /// [`LensGroup::replace_path`] with `path ++ suffix`.
    #[must_use]
    pub fn append_path(&self, suffix: impl Into<Path>) -> Self {
        self.replace_path(self.path.concat(&suffix.into()))
    }

    /// [`LensGroup::replace_path`] with `prefix ++ path`.
    #[must_use]
    pub fn prepend_path(&self, prefix: impl Into<Path>) -> Self {
        self.replace_path(prefix.into().concat(&self.path))
    }
}
