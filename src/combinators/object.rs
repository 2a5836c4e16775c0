//! Object combinator

use std::collections::HashSet;

use serde_json::Value;

use crate::guard::{Guard, Predicate};
use crate::metadata::{Factory, FactoryMeta, MetaArg};

/// Options for [`object_of_with`].
///
/// Loose (the default) permits keys that the descriptor does not name.
/// Strict rejects them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ObjectOptions {
    /// Reject objects with keys not named by the descriptor.
    pub strict: bool,
}

impl ObjectOptions {
    /// Extra keys are rejected.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Extra keys are permitted.
    pub fn loose() -> Self {
        Self { strict: false }
    }
}

/// Guard for objects with the given named fields; extra keys are permitted.
///
/// A missing key is checked as a missing value, so only optional field
/// guards let a key be left out. If the descriptor names a key twice, the
/// later guard replaces the earlier one in place.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::modifiers::optional;
/// use shapeguard::{number, object_of, string};
///
/// let user = object_of([("id", number()), ("nick", optional(string()))]);
/// assert!(user.accepts(&json!({"id": 1})));
/// assert!(user.accepts(&json!({"id": 1, "nick": "ada", "extra": true})));
/// assert!(!user.accepts(&json!({"nick": "ada"})));
/// assert!(!user.accepts(&json!({"id": 1, "nick": 2})));
/// ```
pub fn object_of<K>(fields: impl IntoIterator<Item = (K, Guard)>) -> Guard
where
    K: Into<String>,
{
    object_of_with(fields, ObjectOptions::default())
}

/// Guard for objects with the given named fields, under explicit options.
///
/// In strict mode an object is also rejected when it has more keys than
/// the descriptor or any key the descriptor does not name. Fields the
/// descriptor marks optional may still be absent.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::{number, object_of_with, ObjectOptions};
///
/// let exact = object_of_with([("a", number())], ObjectOptions::strict());
/// assert!(exact.accepts(&json!({"a": 1})));
/// assert!(!exact.accepts(&json!({"a": 1, "b": 2})));
/// assert_eq!(exact.name(), "object_of({a: number}, strict)");
/// ```
pub fn object_of_with<K>(fields: impl IntoIterator<Item = (K, Guard)>, options: ObjectOptions) -> Guard
where
    K: Into<String>,
{
    let mut descriptor: Vec<(String, Guard)> = Vec::new();
    for (key, guard) in fields {
        let key = key.into();
        match descriptor.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = guard,
            None => descriptor.push((key, guard)),
        }
    }

    let body = descriptor
        .iter()
        .map(|(key, guard)| format!("{}: {}", key, guard.name()))
        .collect::<Vec<_>>()
        .join(", ");
    let name = if options.strict {
        format!("object_of({{{}}}, strict)", body)
    } else {
        format!("object_of({{{}}})", body)
    };

    let check = descriptor.clone();
    let known: HashSet<String> = descriptor.iter().map(|(key, _)| key.clone()).collect();

    Guard::builder(name)
        .metadata(FactoryMeta::new(
            Factory::ObjectOf,
            vec![MetaArg::Fields(descriptor), MetaArg::Options(options)],
        ))
        .build(move |value: Option<&Value>| {
            let Some(Value::Object(map)) = value else {
                return false;
            };
            if options.strict
                && (map.len() > check.len() || map.keys().any(|key| !known.contains(key)))
            {
                return false;
            }
            check.iter().all(|(key, guard)| guard.check(map.get(key)))
        })
}
