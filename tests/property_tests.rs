//! Property-based tests: round-trip guarantees over generated value
//! trees, complementing the scenario tests.

use eml::{Eml, EmlMap, EmlOptions, Scalar, Value};
use proptest::prelude::*;

fn dedup(items: Vec<Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

// Strings are constrained to what the line-oriented format can carry:
// no newlines or pipes, and no surrounding whitespace (trimmed away on
// read). Floats are finite so their Display form parses back bit-equal.
fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<u8>().prop_map(Scalar::Byte),
        any::<i64>().prop_map(Scalar::Int),
        any::<i32>().prop_map(Scalar::Int32),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(Scalar::Float),
        "[a-zA-Z0-9 _.:+-]{0,12}".prop_map(|s| Scalar::Str(s.trim().to_string())),
        (1970i32..2100, 1u32..13, 1u32..29).prop_map(|(y, m, d)| {
            Scalar::Date(chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap())
        }),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = scalar_strategy().prop_map(Value::Scalar);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::vec(scalar_strategy().prop_map(Value::Scalar), 0..4)
                .prop_map(|items| Value::Set(dedup(items))),
            prop::collection::vec(scalar_strategy().prop_map(Value::Scalar), 0..4)
                .prop_map(|items| Value::FrozenSet(dedup(items))),
            prop::collection::vec((scalar_strategy(), inner), 0..4)
                .prop_map(|pairs| Value::Dict(pairs.into_iter().collect::<EmlMap>())),
        ]
    })
}

fn round_trips(value: &Value) -> bool {
    let mut doc = Eml::new();
    doc.set_list("v", vec![value.clone()]).unwrap();
    let text = eml::to_string(&doc);
    match eml::from_str(&text) {
        Ok(back) => back.get_list("v") == vec![value.clone()],
        Err(e) => {
            eprintln!("decode failed: {e}");
            eprintln!("encoded was:\n{text}");
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_scalar_round_trips(scalar in scalar_strategy()) {
        prop_assert!(round_trips(&Value::Scalar(scalar)));
    }

    #[test]
    fn prop_value_tree_round_trips(value in value_strategy()) {
        prop_assert!(round_trips(&value));
    }

    #[test]
    fn prop_alignment_is_cosmetic(value in value_strategy()) {
        let mut doc = Eml::new();
        doc.set_list("v", vec![value]).unwrap();
        let aligned = eml::from_str(&eml::to_string(&doc)).unwrap();
        let compact = eml::from_str(&eml::to_string_with_options(
            &doc,
            EmlOptions::new().with_align(false),
        ))
        .unwrap();
        prop_assert_eq!(aligned.get_list("v"), compact.get_list("v"));
    }

    #[test]
    fn prop_int_entries_round_trip(n in any::<i64>()) {
        let mut doc = Eml::new();
        doc.set_int("n", n).unwrap();
        let back = eml::from_str(&eml::to_string(&doc)).unwrap();
        prop_assert_eq!(back.get_int("n"), Some(n));
    }

    #[test]
    fn prop_float_entries_round_trip(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let mut doc = Eml::new();
        doc.set_float("f", f).unwrap();
        let back = eml::from_str(&eml::to_string(&doc)).unwrap();
        prop_assert_eq!(back.get_float("f"), Some(f));
    }
}
