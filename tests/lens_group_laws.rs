//! Property-based tests for lens group laws.
//!
//! - **Immutability**: writes and clones never change their input
//! - **viewOr nil semantics**: the fallback appears exactly for missing or `null`
//! - **View/default consistency**: `view_or_def` is the default on nil, `view` otherwise
//! - **Specialization round trip**: removing what was added restores `def()`
//! - **Path algebra**: appending and prepending compose as concatenation
//! - **Validation subset rule**: a missing required property always fails

use std::sync::Arc;

use lens_groups::diagnostics::SilentSink;
use lens_groups::{validators, LensGroup, LensGroupDescriptor, Path};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// =============================================================================
// Strategies
// =============================================================================

const PROPS: [&str; 4] = ["id", "name", "color", "mood"];

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 8, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..3)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// A record holding an arbitrary subset of the declared properties plus noise.
fn record() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec(prop::option::of(value()), PROPS.len()),
        prop::collection::btree_map("[A-Z]{1,3}", scalar(), 0..3),
    )
        .prop_map(|(values, noise)| {
            let mut record: Map<String, Value> = noise.into_iter().collect();
            for (name, value) in PROPS.iter().zip(values) {
                if let Some(value) = value {
                    record.insert((*name).to_owned(), value);
                }
            }
            Value::Object(record)
        })
}

fn segments() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,4}", 0..4)
}

fn group_with_defaults(defaults: Vec<Value>) -> LensGroup {
    LensGroup::create_with_sink(
        LensGroupDescriptor::new(PROPS).with_defaults(defaults),
        Arc::new(SilentSink),
    )
    .unwrap()
}

fn prop_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PROPS.to_vec())
}

// =============================================================================
// Immutability
// =============================================================================

proptest! {
    #[test]
    fn prop_writes_never_mutate_input(
        defaults in prop::collection::vec(value(), 0..=4),
        record in record(),
        prop in prop_name(),
        new_value in value(),
    ) {
        let group = group_with_defaults(defaults);
        let before = record.clone();

        let _ = group.set(prop, new_value.clone(), &record);
        let _ = group.set_l([prop], [new_value.clone()], &record);
        let _ = group.set_o(&json!({ prop: new_value.clone() }), &record);
        let _ = group.set_target(new_value, &record);
        let _ = group.clone_of(&record);
        let _ = group.clone_with_def(&record);
        let _ = group.add_def(&record);

        prop_assert_eq!(record, before);
    }

    #[test]
    fn prop_set_then_view(record in record(), prop in prop_name(), new_value in value()) {
        let group = group_with_defaults(Vec::new());
        let updated = group.set(prop, new_value.clone(), &record);
        prop_assert_eq!(group.view(prop, &updated), Some(&new_value));
    }
}

// =============================================================================
// viewOr / viewOrDef
// =============================================================================

proptest! {
    #[test]
    fn prop_view_or_nil_semantics(record in record(), prop in prop_name(), fallback in value()) {
        let group = group_with_defaults(Vec::new());
        let viewed = group.view(prop, &record);
        let expected = match viewed {
            None | Some(Value::Null) => &fallback,
            Some(value) => value,
        };
        prop_assert_eq!(group.view_or(&fallback, prop, &record), Some(expected));
    }

    #[test]
    fn prop_view_default_consistency(
        defaults in prop::collection::vec(value(), 4),
        record in record(),
        prop in prop_name(),
    ) {
        let group = group_with_defaults(defaults);
        let default = group.lens(prop).and_then(|lens| lens.default_value());
        let viewed = group.view(prop, &record);
        let expected = match viewed {
            None | Some(Value::Null) => default,
            Some(_) => viewed,
        };
        prop_assert_eq!(group.view_or_def(prop, &record), expected);
    }
}

// =============================================================================
// Specialization
// =============================================================================

proptest! {
    #[test]
    fn prop_add_remove_round_trip(
        defaults in prop::collection::vec(value(), 0..=4),
        added in prop::collection::btree_map("[A-Z]{1,4}", value(), 0..4),
    ) {
        let group = group_with_defaults(defaults);
        let names: Vec<String> = added.keys().cloned().collect();
        let descriptor = LensGroupDescriptor::new(names.clone())
            .with_defaults(added.into_values());

        let round_trip = group.add(descriptor).unwrap().remove(&names);
        prop_assert_eq!(round_trip.def(), group.def());
    }

    #[test]
    fn prop_path_algebra(a in segments(), b in segments()) {
        let group = group_with_defaults(Vec::new());
        let expected = Path::new(a.iter().chain(&b).cloned());

        let appended = group.append_path(a.clone()).append_path(b.clone());
        let prepended = group.append_path(b).prepend_path(a);

        prop_assert_eq!(appended.path(), &expected);
        prop_assert_eq!(prepended.path(), &expected);
    }

    #[test]
    fn prop_root_path_target_is_identity(record in record(), target in value()) {
        let group = group_with_defaults(Vec::new()).append_path(["x"]).replace_path(Path::root());
        prop_assert_eq!(group.view_target(&record), Some(&record));
        prop_assert_eq!(group.set_target(target.clone(), &record), target);
    }
}

// =============================================================================
// Validation
// =============================================================================

proptest! {
    #[test]
    fn prop_missing_required_is_invalid(record in record()) {
        let group = LensGroup::create_with_sink(
            LensGroupDescriptor::new(PROPS)
                .with_validators(PROPS.map(|_| validators::any()))
                .with_required([true, false, false, false])
                .with_extra_props(true),
            Arc::new(SilentSink),
        )
        .unwrap();
        let mut record = record;
        if let Value::Object(fields) = &mut record {
            fields.remove("id");
        }
        prop_assert!(group.is_invalid(&record));
    }
}
