//! Unions, intersections and negation

use serde_json::Value;

use super::join_names;
use crate::guard::{Guard, Predicate};
use crate::metadata::{Factory, FactoryMeta, MetaArg};
use crate::modifiers;

/// Guard that passes when at least one member passes.
///
/// Members run in list order and checking stops at the first success. An
/// empty union rejects everything.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{null, number, one_of, string};
///
/// let id = one_of([string(), number()]);
/// assert!(id.accepts(&json!("a1")));
/// assert!(id.accepts(&json!(7)));
/// assert!(!id.accepts(&json!(null)));
/// assert_eq!(id.name(), "one_of(string, number)");
/// ```
pub fn one_of(members: impl IntoIterator<Item = Guard>) -> Guard {
    let members: Vec<Guard> = members.into_iter().collect();
    let check = members.clone();

    Guard::builder(format!("one_of({})", join_names(&members)))
        .metadata(FactoryMeta::new(
            Factory::OneOf,
            vec![MetaArg::Guards(members)],
        ))
        .build(move |value: Option<&Value>| check.iter().any(|guard| guard.check(value)))
}

/// Guard that passes when every member passes.
///
/// Members run in list order and checking stops at the first failure. An
/// empty intersection accepts everything.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{all_of, number, object_of, string};
///
/// let named = object_of([("name", string())]);
/// let aged = object_of([("age", number())]);
/// let person = all_of([named, aged]);
///
/// assert!(person.accepts(&json!({"name": "ada", "age": 36})));
/// assert!(!person.accepts(&json!({"name": "ada"})));
/// ```
pub fn all_of(members: impl IntoIterator<Item = Guard>) -> Guard {
    let members: Vec<Guard> = members.into_iter().collect();
    let check = members.clone();

    Guard::builder(format!("all_of({})", join_names(&members)))
        .metadata(FactoryMeta::new(
            Factory::AllOf,
            vec![MetaArg::Guards(members)],
        ))
        .build(move |value: Option<&Value>| check.iter().all(|guard| guard.check(value)))
}

/// Guard that passes exactly when `inner` fails.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{not, null};
///
/// let present = not(null());
/// assert!(present.accepts(&json!(0)));
/// assert!(!present.accepts(&json!(null)));
/// assert!(present.accepts_missing());
/// ```
pub fn not(inner: Guard) -> Guard {
    let check = inner.clone();
    Guard::builder(format!("not({})", inner.name()))
        .metadata(FactoryMeta::new(Factory::Not, vec![MetaArg::Guard(inner)]))
        .build(move |value: Option<&Value>| !check.check(value))
}

fn flatten(guard: Guard, factory: Factory) -> Vec<Guard> {
    let members = guard
        .metadata()
        .filter(|meta| meta.factory() == factory)
        .and_then(|meta| meta.args().first())
        .and_then(MetaArg::as_guards)
        .map(<[Guard]>::to_vec);
    members.unwrap_or_else(|| vec![guard])
}

/// Method-chaining sugar over the combinators and modifiers.
///
/// `or` and `and` flatten: `a.or(b).or(c)` builds one three-member union
/// rather than a nested one.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{null, number, string, GuardExt};
///
/// let g = string().or(number()).or(null());
/// assert_eq!(g.name(), "one_of(string, number, null)");
/// assert!(g.accepts(&json!(null)));
///
/// let maybe = number().optional();
/// assert!(maybe.accepts_missing());
/// assert!(maybe.required().ptr_eq(&number()));
/// ```
pub trait GuardExt: Sized {
    /// Union with another guard.
    fn or(self, other: Guard) -> Guard;

    /// Intersection with another guard.
    fn and(self, other: Guard) -> Guard;

    /// Negate.
    fn not(self) -> Guard;

    /// See [`modifiers::optional`].
    fn optional(self) -> Guard;

    /// See [`modifiers::required`].
    fn required(self) -> Guard;

    /// See [`modifiers::readonly`].
    fn readonly(self) -> Guard;
}

impl GuardExt for Guard {
    fn or(self, other: Guard) -> Guard {
        let mut members = flatten(self, Factory::OneOf);
        members.push(other);
        one_of(members)
    }

    fn and(self, other: Guard) -> Guard {
        let mut members = flatten(self, Factory::AllOf);
        members.push(other);
        all_of(members)
    }

    fn not(self) -> Guard {
        not(self)
    }

    fn optional(self) -> Guard {
        modifiers::optional(self)
    }

    fn required(self) -> Guard {
        modifiers::required(self)
    }

    fn readonly(self) -> Guard {
        modifiers::readonly(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::{boolean, integer, null, number, string, unknown};
    use crate::metadata::lookup;
    use serde_json::json;

    #[test]
    fn test_one_of() {
        let g = one_of([string(), boolean()]);
        assert!(g.accepts(&json!("a")));
        assert!(g.accepts(&json!(false)));
        assert!(!g.accepts(&json!(1)));
    }

    #[test]
    fn test_all_of() {
        let g = all_of([number(), integer()]);
        assert!(g.accepts(&json!(2)));
        assert!(!g.accepts(&json!(2.5)));
        assert!(!g.accepts(&json!("2")));
    }

    #[test]
    fn test_empty_union_and_intersection() {
        assert!(!one_of(Vec::new()).accepts(&json!(1)));
        assert!(all_of(Vec::new()).accepts(&json!(1)));
        assert!(all_of(Vec::new()).accepts_missing());
    }

    #[test]
    fn test_union_sees_missing_values() {
        let g = one_of([crate::leaf::undefined(), string()]);
        assert!(g.accepts_missing());
        assert!(!g.is_optional());
    }

    #[test]
    fn test_not() {
        let g = not(unknown());
        assert!(!g.accepts(&json!(1)));
        assert!(!g.accepts_missing());
        assert_eq!(lookup(&g).unwrap().factory(), Factory::Not);
    }

    #[test]
    fn test_or_flattens_unions() {
        let g = string().or(number()).or(null());
        let meta = lookup(&g).unwrap();
        assert_eq!(meta.factory(), Factory::OneOf);
        assert_eq!(meta.args()[0].as_guards().unwrap().len(), 3);
    }

    #[test]
    fn test_and_does_not_flatten_unions() {
        let union = string().or(number());
        let g = union.clone().and(not(null()));
        let members = lookup(&g).unwrap().args()[0].as_guards().unwrap().to_vec();
        assert_eq!(members.len(), 2);
        assert!(members[0].ptr_eq(&union));
        assert_eq!(g.name(), "all_of(one_of(string, number), not(null))");
    }

    #[test]
    fn test_order_does_not_change_outcome() {
        let values = [json!(1), json!("a"), json!(null), json!([])];
        let ab = one_of([string(), number()]);
        let ba = one_of([number(), string()]);
        for v in &values {
            assert_eq!(ab.accepts(v), ba.accepts(v));
        }
    }
}
