//! Testing utilities for guards
//!
//! Assertion macros that report the guard's name and a rendering of the
//! value when they fail, plus (with the `proptest` feature) a strategy for
//! arbitrary JSON values.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::{array_of, assert_accepts, assert_rejects, number};
//!
//! let numbers = array_of(number());
//! assert_accepts!(numbers, json!([1, 2]));
//! assert_rejects!(numbers, json!(["1"]));
//! ```

/// Assert that a guard accepts a value.
///
/// Pass `missing` instead of a value to assert that a missing value is
/// accepted.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::modifiers::optional;
/// use shapeguard::{assert_accepts, string};
///
/// assert_accepts!(string(), json!("hello"));
/// assert_accepts!(optional(string()), missing);
/// ```
#[macro_export]
macro_rules! assert_accepts {
    ($guard:expr, missing) => {{
        let guard: &$crate::Guard = &$guard;
        if !guard.accepts_missing() {
            panic!(
                "Expected {} to accept {}",
                guard.name(),
                $crate::naming::describe_slot(None)
            );
        }
    }};
    ($guard:expr, $value:expr) => {{
        let guard: &$crate::Guard = &$guard;
        let value: $crate::Value = $value;
        if !guard.accepts(&value) {
            panic!(
                "Expected {} to accept {}",
                guard.name(),
                $crate::naming::describe_slot(Some(&value))
            );
        }
    }};
}

/// Assert that a guard rejects a value.
///
/// Pass `missing` instead of a value to assert that a missing value is
/// rejected.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{assert_rejects, string};
///
/// assert_rejects!(string(), json!(1));
/// assert_rejects!(string(), missing);
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($guard:expr, missing) => {{
        let guard: &$crate::Guard = &$guard;
        if guard.accepts_missing() {
            panic!(
                "Expected {} to reject {}",
                guard.name(),
                $crate::naming::describe_slot(None)
            );
        }
    }};
    ($guard:expr, $value:expr) => {{
        let guard: &$crate::Guard = &$guard;
        let value: $crate::Value = $value;
        if guard.accepts(&value) {
            panic!(
                "Expected {} to reject {}",
                guard.name(),
                $crate::naming::describe_slot(Some(&value))
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy for arbitrary JSON values, nested up to three levels.
///
/// Object keys are drawn from a small alphabet so that generated objects
/// often share keys with a descriptor under test.
#[cfg(feature = "proptest")]
pub fn arb_value() -> BoxedStrategy<serde_json::Value> {
    use serde_json::Value;

    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use crate::modifiers::optional;
    use crate::{number, string};
    use serde_json::json;

    #[test]
    fn test_assert_accepts_passes() {
        assert_accepts!(number(), json!(1));
        assert_accepts!(optional(number()), missing);
    }

    #[test]
    #[should_panic(expected = "Expected string to accept undefined")]
    fn test_assert_accepts_missing_fails() {
        assert_accepts!(string(), missing);
    }

    #[test]
    #[should_panic(expected = "Expected number to accept \"1\"")]
    fn test_assert_accepts_fails() {
        assert_accepts!(number(), json!("1"));
    }

    #[test]
    fn test_assert_rejects_passes() {
        assert_rejects!(string(), json!(null));
        assert_rejects!(string(), missing);
    }

    #[test]
    #[should_panic(expected = "Expected optional(string) to reject undefined")]
    fn test_assert_rejects_fails() {
        assert_rejects!(optional(string()), missing);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::arb_value;
        use crate::unknown;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arb_value_is_always_accepted_by_unknown(value in arb_value()) {
                prop_assert!(unknown().accepts(&value));
            }
        }
    }
}
