//! Property-based tests for the `Optional` laws of paths and property lenses.
//!
//! - **GetOptionSet Law**: when present, setting the viewed value back is identity
//! - **SetGetOption Law**: after setting, the focus holds the set value
//! - **Modify**: `modify_option` is `set` of the modified value when present, `None` otherwise

use lens_groups::{LensGroup, LensGroupDescriptor, Optional, Path};
use proptest::prelude::*;
use serde_json::{json, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,5}".prop_map(Value::String),
    ]
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{1,2}", 0..4)
}

/// A record with `value` planted at `segments`, next to some unrelated data.
fn planted(segments: &[String], value: Value) -> Value {
    Path::new(segments.iter().cloned()).assign(json!({"zz": [1, 2]}), value)
}

proptest! {
    #[test]
    fn prop_path_get_option_set_law(segments in segments(), value in leaf()) {
        let path = Path::new(segments.clone());
        let source = planted(&segments, value);
        let current = path.get_option(&source).cloned();
        prop_assert!(current.is_some());
        let result = path.set(source.clone(), current.unwrap_or_default());
        prop_assert_eq!(result, source);
    }

    #[test]
    fn prop_path_set_get_option_law(
        segments in segments(),
        value in leaf(),
        replacement in leaf(),
    ) {
        let path = Path::new(segments.clone());
        let source = planted(&segments, value);
        let result = path.set(source, replacement.clone());
        prop_assert_eq!(path.get_option(&result), Some(&replacement));
    }

    #[test]
    fn prop_property_lens_set_get_option_law(
        segments in segments(),
        replacement in leaf(),
    ) {
        let group = LensGroup::create(
            LensGroupDescriptor::new(["name"]).with_path(segments),
        )
        .unwrap();
        let lens = group.lens("name").unwrap();
        let result = Optional::set(lens, json!({}), replacement.clone());
        prop_assert_eq!(lens.get_option(&result), Some(&replacement));
        prop_assert!(lens.is_present(&result));
    }

    #[test]
    fn prop_modify_option_agrees_with_set(
        segments in segments(),
        value in leaf(),
        replacement in leaf(),
    ) {
        let path = Path::new(segments.clone());
        let source = planted(&segments, value);
        let modified = path.modify_option(source.clone(), |_| replacement.clone());
        prop_assert_eq!(modified, Some(path.set(source, replacement)));
    }

    #[test]
    fn prop_modify_option_misses_absent_focus(segments in segments()) {
        let path = Path::new(segments).child("missing");
        let result = path.modify_option(json!({"zz": [1, 2]}), |_| json!("changed"));
        prop_assert_eq!(result, None);
    }

    #[test]
    fn prop_modify_or_identity_leaves_missing_alone(segments in segments()) {
        let path = Path::new(segments).child("missing");
        let source = json!({"zz": [1, 2]});
        let result = path.modify_or_identity(source.clone(), |_| json!("changed"));
        prop_assert_eq!(result, source);
    }
}
