//! The optic seam shared by paths and property accessors.
//!
//! An [`Optional`] focuses on a value that may or may not exist inside a
//! larger structure. Both [`Path`](crate::Path) (the target of a lens group)
//! and [`PropertyLens`](crate::PropertyLens) (one declared property) are
//! optionals over [`serde_json::Value`]: reading may fail silently when a
//! segment is missing, while setting always succeeds by creating the missing
//! intermediate records.
//!
//! # Laws
//!
//! When the element is present:
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    optional.set(source.clone(), optional.get_option(&source).unwrap().clone()) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    optional.get_option(&optional.set(source, value)) == Some(&value)
//!    ```

/// An optic focusing on an element that may be absent.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Attempts to get a reference to the focused element.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Sets the focused element, building any missing structure on the way.
    ///
    /// The source is consumed; callers holding a borrowed source clone it
    /// first, which is what keeps the caller's copy untouched.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused element if present.
    ///
    /// Returns `Some` with the modified source if the element is present,
    /// `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let maybe_value = self.get_option(&source).cloned();
        maybe_value.map(|value| {
            let new_value = function(value);
            self.set(source, new_value)
        })
    }

    /// Modifies the focused element if present, otherwise returns the source unchanged.
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        match self.get_option(&source).cloned() {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Whether the focused element exists.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }
}
