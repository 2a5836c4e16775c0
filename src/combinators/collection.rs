//! Array, tuple and record combinators

use serde_json::Value;

use super::join_names;
use crate::guard::{Guard, Predicate};
use crate::leaf::unknown;
use crate::metadata::{lookup, Factory, FactoryMeta, MetaArg};

/// Guard for arrays whose every element passes `element`.
///
/// An empty array passes vacuously. Checking stops at the first failing
/// element.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{array_of, number};
///
/// let numbers = array_of(number());
/// assert!(numbers.accepts(&json!([1, 2, 3])));
/// assert!(numbers.accepts(&json!([])));
/// assert!(!numbers.accepts(&json!([1, "2"])));
/// assert!(!numbers.accepts(&json!({"0": 1})));
/// assert_eq!(numbers.name(), "array_of(number)");
/// ```
pub fn array_of(element: Guard) -> Guard {
    let check = element.clone();
    Guard::builder(format!("array_of({})", element.name()))
        .metadata(FactoryMeta::new(
            Factory::ArrayOf,
            vec![MetaArg::Guard(element)],
        ))
        .build(move |value: Option<&Value>| match value {
            Some(Value::Array(items)) => items.iter().all(|item| check.check(Some(item))),
            _ => false,
        })
}

/// Guard for arrays of exactly `elements.len()` items, each passing the
/// guard at its position.
///
/// A length mismatch rejects before any element is checked.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{boolean, number, string, tuple_of};
///
/// let row = tuple_of([number(), string(), boolean()]);
/// assert!(row.accepts(&json!([0, "a", true])));
/// assert!(!row.accepts(&json!([0, "a"])));
/// assert!(!row.accepts(&json!([0, "a", true, 1])));
/// assert!(!row.accepts(&json!(["a", 0, true])));
/// ```
pub fn tuple_of(elements: impl IntoIterator<Item = Guard>) -> Guard {
    let elements: Vec<Guard> = elements.into_iter().collect();
    let name = format!("tuple_of({})", join_names(&elements));
    let check = elements.clone();

    Guard::builder(name)
        .metadata(FactoryMeta::new(
            Factory::TupleOf,
            vec![MetaArg::Guards(elements)],
        ))
        .build(move |value: Option<&Value>| match value {
            Some(Value::Array(items)) => items.len() == check.len() && check_positions(&check, items),
            _ => false,
        })
}

/// Guard for arrays that start with the positional `elements` and continue
/// with a tail checked by `rest`.
///
/// The array must have at least `elements.len()` items. The tail after the
/// positional head is handed to `rest` as one array, so `rest` is usually
/// itself an array guard.
///
/// When `rest` was built by [`array_of`], its element guard runs over the
/// tail in place. Any other `rest` guard receives a copy of the tail, which
/// costs time and memory proportional to the tail's size on every check.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{array_of, number, string, tuple_of_rest};
///
/// let command = tuple_of_rest([string()], array_of(number()));
/// assert!(command.accepts(&json!(["sum", 1, 2, 3])));
/// assert!(command.accepts(&json!(["sum"])));
/// assert!(!command.accepts(&json!(["sum", 1, "2"])));
/// assert!(!command.accepts(&json!([])));
/// ```
pub fn tuple_of_rest(elements: impl IntoIterator<Item = Guard>, rest: Guard) -> Guard {
    let elements: Vec<Guard> = elements.into_iter().collect();
    let name = if elements.is_empty() {
        format!("tuple_of(...{})", rest.name())
    } else {
        format!("tuple_of({}, ...{})", join_names(&elements), rest.name())
    };
    let check = elements.clone();
    let check_rest = rest.clone();
    let tail_element = lookup(&rest)
        .filter(|meta| meta.factory() == Factory::ArrayOf)
        .and_then(FactoryMeta::first_guard)
        .cloned();

    Guard::builder(name)
        .metadata(FactoryMeta::new(
            Factory::TupleOf,
            vec![MetaArg::Guards(elements), MetaArg::Guard(rest)],
        ))
        .build(move |value: Option<&Value>| match value {
            Some(Value::Array(items)) => {
                if items.len() < check.len() || !check_positions(&check, items) {
                    return false;
                }
                let tail = &items[check.len()..];
                match &tail_element {
                    Some(element) => tail.iter().all(|item| element.check(Some(item))),
                    None => check_rest.check(Some(&Value::Array(tail.to_vec()))),
                }
            }
            _ => false,
        })
}

fn check_positions(guards: &[Guard], items: &[Value]) -> bool {
    guards
        .iter()
        .zip(items)
        .all(|(guard, item)| guard.check(Some(item)))
}

/// Guard for arrays of exactly `len` items, each passing `element`.
///
/// Pass `None` to accept anything in each slot.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{number, uniform_tuple_of};
///
/// let point = uniform_tuple_of(3, number());
/// assert!(point.accepts(&json!([1, 2, 3])));
/// assert!(!point.accepts(&json!([1, 2, "x"])));
/// assert!(!point.accepts(&json!([1, 2])));
///
/// let pair = uniform_tuple_of(2, None);
/// assert!(pair.accepts(&json!([null, "a"])));
/// ```
pub fn uniform_tuple_of(len: usize, element: impl Into<Option<Guard>>) -> Guard {
    let element = element.into().unwrap_or_else(unknown);
    let check = element.clone();

    Guard::builder(format!("uniform_tuple_of({}, {})", len, element.name()))
        .metadata(FactoryMeta::new(
            Factory::UniformTupleOf,
            vec![MetaArg::Count(len), MetaArg::Guard(element)],
        ))
        .build(move |value: Option<&Value>| match value {
            Some(Value::Array(items)) => {
                items.len() == len && items.iter().all(|item| check.check(Some(item)))
            }
            _ => false,
        })
}

/// Guard for objects whose every value passes `values`. Keys are not
/// constrained.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{number, record_of};
///
/// let scores = record_of(number());
/// assert!(scores.accepts(&json!({"alice": 3, "bob": 5})));
/// assert!(scores.accepts(&json!({})));
/// assert!(!scores.accepts(&json!({"alice": "3"})));
/// assert!(!scores.accepts(&json!([3, 5])));
/// assert!(!scores.accepts(&json!(null)));
/// ```
pub fn record_of(values: Guard) -> Guard {
    let check = values.clone();
    Guard::builder(format!("record_of({})", values.name()))
        .metadata(FactoryMeta::new(
            Factory::RecordOf,
            vec![MetaArg::Guard(values)],
        ))
        .build(move |value: Option<&Value>| match value {
            Some(Value::Object(map)) => map.values().all(|item| check.check(Some(item))),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{boolean, number, string};
    use crate::metadata::lookup;
    use crate::modifiers::optional;
    use serde_json::json;

    #[test]
    fn test_array_of_rejects_missing() {
        let g = array_of(number());
        assert!(!g.accepts_missing());
        assert!(!g.accepts(&json!(null)));
    }

    #[test]
    fn test_array_of_optional_elements_still_need_values() {
        let g = array_of(optional(number()));
        assert!(g.accepts(&json!([1, 2])));
        assert!(!g.accepts(&json!([1, null])));
    }

    #[test]
    fn test_nested_arrays() {
        let g = array_of(array_of(string()));
        assert!(g.accepts(&json!([["a"], [], ["b", "c"]])));
        assert!(!g.accepts(&json!([["a"], [1]])));
        assert_eq!(g.name(), "array_of(array_of(string))");
    }

    #[test]
    fn test_tuple_of_length_mismatch() {
        let g = tuple_of([number(), string()]);
        assert!(g.accepts(&json!([1, "a"])));
        assert!(!g.accepts(&json!([1])));
        assert!(!g.accepts(&json!([1, "a", "b"])));
        assert_eq!(g.name(), "tuple_of(number, string)");
    }

    #[test]
    fn test_empty_tuple() {
        let g = tuple_of(Vec::new());
        assert!(g.accepts(&json!([])));
        assert!(!g.accepts(&json!([1])));
    }

    #[test]
    fn test_tuple_with_duplicate_positions() {
        let n = number();
        let g = tuple_of([n.clone(), n]);
        assert!(g.accepts(&json!([1, 2])));
        assert!(!g.accepts(&json!([1])));
    }

    #[test]
    fn test_tuple_rest_receives_tail_as_array() {
        let tail_len_two = Guard::new("pair", |value: Option<&Value>| {
            value.and_then(Value::as_array).is_some_and(|a| a.len() == 2)
        });
        let g = tuple_of_rest([boolean()], tail_len_two);
        assert!(g.accepts(&json!([true, 1, 2])));
        assert!(!g.accepts(&json!([true, 1])));
        assert!(!g.accepts(&json!([1, 1, 2])));
        assert_eq!(g.name(), "tuple_of(boolean, ...pair)");
    }

    #[test]
    fn test_tuple_rest_array_of_checks_tail_in_place() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let counted = Guard::new("counted", move |value: Option<&Value>| {
            counter.fetch_add(1, Ordering::SeqCst);
            value.is_some_and(Value::is_number)
        });
        let g = tuple_of_rest([string()], array_of(counted));

        assert!(g.accepts(&json!(["x", 1, 2, 3])));
        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert!(!g.accepts(&json!(["x", 1, "2"])));
        assert!(g.accepts(&json!(["x"])));
    }

    #[test]
    fn test_tuple_rest_metadata() {
        let rest = array_of(string());
        let g = tuple_of_rest([number()], rest.clone());
        let meta = lookup(&g).unwrap();
        assert_eq!(meta.factory(), Factory::TupleOf);
        assert_eq!(meta.args()[0].as_guards().unwrap().len(), 1);
        assert!(meta.args()[1].as_guard().unwrap().ptr_eq(&rest));
    }

    #[test]
    fn test_uniform_tuple_of() {
        let g = uniform_tuple_of(2, string());
        assert!(g.accepts(&json!(["a", "b"])));
        assert!(!g.accepts(&json!(["a"])));
        assert_eq!(g.name(), "uniform_tuple_of(2, string)");

        let any = uniform_tuple_of(0, None);
        assert!(any.accepts(&json!([])));
        assert_eq!(any.name(), "uniform_tuple_of(0, unknown)");
    }

    #[test]
    fn test_record_of_with_nested_shape() {
        let g = record_of(array_of(number()));
        assert!(g.accepts(&json!({"a": [1], "b": []})));
        assert!(!g.accepts(&json!({"a": [1], "b": null})));
    }
}
