//! Property-based tests for the modifier algebra and the union/intersection laws

use proptest::prelude::*;
use serde_json::Value;
use shapeguard::modifiers::{optional, readonly, required};
use shapeguard::prelude::*;
use shapeguard::testing::arb_value;

fn base_guard() -> impl Strategy<Value = Guard> {
    prop::sample::select(vec![
        string(),
        number(),
        boolean(),
        null(),
        array_of(number()),
        record_of(string()),
        object_of([("a", number())]),
        tuple_of([string(), number()]),
        literal_one_of([1, 2]),
    ])
}

proptest! {
    #[test]
    fn prop_optional_is_idempotent(g in base_guard(), v in arb_value()) {
        let once = optional(g);
        let twice = optional(once.clone());
        prop_assert!(twice.ptr_eq(&once));
        prop_assert_eq!(once.accepts(&v), twice.accepts(&v));
    }

    #[test]
    fn prop_required_of_non_optional_is_identity(g in base_guard()) {
        prop_assert!(required(g.clone()).ptr_eq(&g));
    }

    #[test]
    fn prop_required_inverts_optional(g in base_guard(), v in arb_value()) {
        let round_trip = required(optional(g.clone()));
        prop_assert!(round_trip.ptr_eq(&g));
        prop_assert_eq!(round_trip.accepts(&v), g.accepts(&v));
        prop_assert_eq!(round_trip.accepts_missing(), g.accepts_missing());
    }

    #[test]
    fn prop_optional_adds_only_missing(g in base_guard(), v in arb_value()) {
        let opt = optional(g.clone());
        prop_assert!(opt.accepts_missing());
        prop_assert_eq!(opt.accepts(&v), g.accepts(&v));
    }

    #[test]
    fn prop_readonly_is_idempotent_and_transparent(g in base_guard(), v in arb_value()) {
        let once = readonly(g.clone());
        prop_assert!(readonly(once.clone()).ptr_eq(&once));
        prop_assert_eq!(once.accepts(&v), g.accepts(&v));
    }

    #[test]
    fn prop_modifiers_commute(g in base_guard(), v in arb_value()) {
        let a = readonly(optional(g.clone()));
        let b = optional(readonly(g.clone()));
        prop_assert_eq!(a.facets(), b.facets());
        prop_assert_eq!(a.accepts(&v), b.accepts(&v));

        let ra = required(a);
        let rb = required(b);
        prop_assert_eq!(ra.facets(), rb.facets());
        prop_assert_eq!(ra.accepts(&v), g.accepts(&v));
        prop_assert_eq!(rb.accepts(&v), g.accepts(&v));
    }

    #[test]
    fn prop_one_of_is_disjunction(p in base_guard(), q in base_guard(), v in arb_value()) {
        let union = one_of([p.clone(), q.clone()]);
        prop_assert_eq!(union.accepts(&v), p.accepts(&v) || q.accepts(&v));
    }

    #[test]
    fn prop_all_of_is_conjunction(p in base_guard(), q in base_guard(), v in arb_value()) {
        let both = all_of([p.clone(), q.clone()]);
        prop_assert_eq!(both.accepts(&v), p.accepts(&v) && q.accepts(&v));
    }

    #[test]
    fn prop_strict_rejects_unknown_keys(v in arb_value()) {
        let loose = object_of([("a", optional(number()))]);
        let strict = object_of_with([("a", optional(number()))], ObjectOptions::strict());
        let has_other_key = v
            .as_object()
            .is_some_and(|map| map.keys().any(|key| key != "a"));
        prop_assert_eq!(strict.accepts(&v), loose.accepts(&v) && !has_other_key);
    }

    #[test]
    fn prop_tuple_rejects_wrong_length(items in prop::collection::vec(any::<i32>(), 0..6)) {
        let pair = tuple_of([number(), number()]);
        let value = Value::from(items.clone());
        prop_assert_eq!(pair.accepts(&value), items.len() == 2);
    }

    #[test]
    fn prop_guards_never_mutate_values(g in base_guard(), v in arb_value()) {
        let before = v.clone();
        let _ = optional(g).accepts(&v);
        prop_assert_eq!(before, v);
    }
}
