//! Paths into nested records.
//!
//! A [`Path`] is an ordered list of property names; `["a", "b"]` locates
//! `record.a.b`. Resolution walks through objects only and yields `None` as
//! soon as a segment is missing or an intermediate value is not a record.
//! Assignment creates every missing (or non-record) intermediate as an empty
//! record.

use std::fmt;

use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::optic::Optional;

/// Inline capacity for path segments; deeper paths spill to the heap.
const INLINE_SEGMENTS: usize = 4;

/// An ordered sequence of property names locating a sub-record.
///
/// The empty path focuses on the record itself.
///
/// # Example
///
/// ```
/// use lens_groups::Path;
/// use serde_json::json;
///
/// let path = Path::new(["myBrother", "hisPets"]);
/// let record = json!({"myBrother": {"hisPets": {"cat": "tom"}}});
/// assert_eq!(path.resolve(&record), Some(&json!({"cat": "tom"})));
/// assert_eq!(Path::root().resolve(&record), Some(&record));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Path {
    segments: SmallVec<[String; INLINE_SEGMENTS]>,
}

impl Path {
    /// The empty path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a path from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this is the empty path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`Path::is_root`].
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// `self ++ [name]`.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_owned());
        Self { segments }
    }

    /// `self ++ suffix`.
    #[must_use]
    pub fn concat(&self, suffix: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(suffix.segments.iter().cloned());
        Self { segments }
    }

    /// Walks `record` along the path.
    ///
    /// The root path returns `record` itself, whatever its shape.
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(record, |current, segment| current.as_object()?.get(segment))
    }

    /// Returns `record` with the value at this path replaced by `value`.
    ///
    /// Missing intermediates, and intermediates that are not records, become
    /// empty records. Existing keys keep their position.
    #[must_use]
    pub fn assign(&self, mut record: Value, value: Value) -> Value {
        assign_segments(&mut record, &self.segments, value);
        record
    }
}

fn assign_segments(target: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *target = value;
        return;
    };
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        let slot = map.entry(head.clone()).or_insert(Value::Null);
        assign_segments(slot, rest, value);
    }
}

impl Optional<Value, Value> for Path {
    fn get_option<'a>(&self, source: &'a Value) -> Option<&'a Value> {
        self.resolve(source)
    }

    fn set(&self, source: Value, value: Value) -> Value {
        self.assign(source, value)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            formatter.write_str("<root>")
        } else {
            formatter.write_str(&self.segments.join("."))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<S: Into<String>> From<Vec<S>> for Path {
    fn from(segments: Vec<S>) -> Self {
        Self::new(segments)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Path {
    fn from(segments: [S; N]) -> Self {
        Self::new(segments)
    }
}

impl From<&[&str]> for Path {
    fn from(segments: &[&str]) -> Self {
        Self::new(segments.iter().copied())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
