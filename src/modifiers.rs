//! Optional, required and readonly modifiers
//!
//! Modifiers flip a guard's facets. They decide what to do by reading the
//! facets and the recorded [`FactoryMeta`], never by probing how the guard
//! behaves:
//!
//! | call | guard already... | result |
//! |---|---|---|
//! | [`optional`] | optional | the same guard |
//! | [`optional`] | not optional | new guard, also accepts a missing value |
//! | [`required`] | not optional | the same guard |
//! | [`required`] | built by `optional` | the wrapped guard itself |
//! | [`required`] | readonly over optional | `readonly(required(inner))` |
//! | [`readonly`] | readonly | the same guard |
//! | [`readonly`] | not readonly | new guard, same acceptance |
//!
//! Wrapping never drops a facet: `optional` keeps the readonly flag and
//! `readonly` keeps the optional flag.
//!
//! # Laws
//!
//! ```text
//! optional(optional(p)) == optional(p)      (same guard)
//! readonly(readonly(p)) == readonly(p)      (same guard)
//! required(optional(p)) == p                (same guard)
//! required(p)           == p                when p is not optional
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::modifiers::{optional, readonly, required};
//! use shapeguard::string;
//!
//! let maybe_name = optional(string());
//! assert!(maybe_name.accepts_missing());
//! assert!(optional(maybe_name.clone()).ptr_eq(&maybe_name));
//! assert!(required(maybe_name).ptr_eq(&string()));
//!
//! let frozen = readonly(string());
//! assert!(frozen.is_readonly());
//! assert!(frozen.accepts(&json!("x")));
//! ```
//!
//! [`FactoryMeta`]: crate::metadata::FactoryMeta

use serde_json::Value;

use crate::error::ContractError;
use crate::guard::{Facets, Guard, Predicate};
use crate::metadata::{Factory, FactoryMeta, MetaArg};

/// Let a guard also accept a missing value.
///
/// Returns `guard` unchanged if it already carries the optional facet.
pub fn optional(guard: Guard) -> Guard {
    if guard.is_optional() {
        #[cfg(feature = "tracing")]
        tracing::debug!(guard = %guard.name(), "already optional");
        return guard;
    }

    let check = guard.clone();
    Guard::builder(format!("optional({})", guard.name()))
        .facets(guard.facets().with_optional())
        .metadata(FactoryMeta::new(
            Factory::Optional,
            vec![MetaArg::Guard(guard)],
        ))
        .build(move |value: Option<&Value>| value.is_none() || check.check(value))
}

/// Remove one optional layer from a guard.
///
/// Returns `guard` unchanged if it is not optional. A guard built by
/// [`optional`] yields the exact guard it wrapped.
///
/// A guard marked optional by hand (see
/// [`GuardBuilder::optional`](crate::GuardBuilder::optional)) records no
/// wrapped guard, so there is nothing to unwrap. It is returned unchanged
/// and still accepts a missing value; use [`try_required`] to treat that
/// case as an error.
pub fn required(guard: Guard) -> Guard {
    match try_required(guard.clone()) {
        Ok(unwrapped) => unwrapped,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(guard = %guard.name(), "{}", _err);
            guard
        }
    }
}

/// Remove one optional layer, failing if the guard's optional facet was not
/// set by [`optional`].
///
/// # Example
///
/// ```rust
/// use serde_json::Value;
/// use shapeguard::modifiers::{optional, try_required};
/// use shapeguard::{ContractError, Guard, number};
///
/// assert!(try_required(optional(number())).unwrap().ptr_eq(&number()));
///
/// let hand_made = Guard::builder("maybe_number")
///     .optional()
///     .build(|value: Option<&Value>| value.map_or(true, Value::is_number));
/// assert_eq!(
///     try_required(hand_made).unwrap_err(),
///     ContractError::UnknownOptional { guard: "maybe_number".to_string() },
/// );
/// ```
pub fn try_required(guard: Guard) -> Result<Guard, ContractError> {
    if !guard.is_optional() {
        #[cfg(feature = "tracing")]
        tracing::debug!(guard = %guard.name(), "already required");
        return Ok(guard);
    }

    let wrapped = guard
        .metadata()
        .and_then(|meta| meta.first_guard().map(|inner| (meta.factory(), inner.clone())));

    match wrapped {
        Some((Factory::Optional, inner)) => Ok(inner),
        Some((Factory::Readonly, inner)) => Ok(readonly(try_required(inner)?)),
        _ => Err(ContractError::UnknownOptional {
            guard: guard.name().to_owned(),
        }),
    }
}

/// Mark a guard as describing a read-only field.
///
/// Acceptance is unchanged. Returns `guard` unchanged if it already carries
/// the readonly facet. The wrapped guard, with its own metadata, stays
/// reachable through the new guard's metadata.
pub fn readonly(guard: Guard) -> Guard {
    if guard.is_readonly() {
        #[cfg(feature = "tracing")]
        tracing::debug!(guard = %guard.name(), "already readonly");
        return guard;
    }

    let facets = Facets {
        readonly: true,
        ..guard.facets()
    };
    let check = guard.clone();
    Guard::builder(format!("readonly({})", guard.name()))
        .facets(facets)
        .metadata(FactoryMeta::new(
            Factory::Readonly,
            vec![MetaArg::Guard(guard)],
        ))
        .build(move |value: Option<&Value>| check.check(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{base, is_produced_by, lookup};
    use crate::{number, object_of, string};
    use serde_json::json;

    fn hand_made_optional() -> Guard {
        Guard::builder("maybe_string")
            .optional()
            .build(|value: Option<&Value>| matches!(value, None | Some(Value::String(_))))
    }

    #[test]
    fn test_optional_accepts_missing_and_base() {
        let g = optional(number());
        assert!(g.accepts_missing());
        assert!(g.accepts(&json!(1)));
        assert!(!g.accepts(&json!(null)));
        assert!(!g.accepts(&json!("1")));
        assert_eq!(g.name(), "optional(number)");
        assert!(is_produced_by(&g, Factory::Optional));
    }

    #[test]
    fn test_optional_is_idempotent() {
        let once = optional(string());
        let twice = optional(once.clone());
        assert!(twice.ptr_eq(&once));
    }

    #[test]
    fn test_optional_on_hand_made_optional_is_noop() {
        let g = hand_made_optional();
        assert!(optional(g.clone()).ptr_eq(&g));
    }

    #[test]
    fn test_required_unwraps_exactly_one_layer() {
        let base_guard = string();
        let wrapped = optional(base_guard.clone());
        let unwrapped = required(wrapped);
        assert!(unwrapped.ptr_eq(&base_guard));
        assert!(!unwrapped.accepts_missing());
    }

    #[test]
    fn test_required_on_non_optional_is_noop() {
        let g = object_of([("a", number())]);
        assert!(required(g.clone()).ptr_eq(&g));
        assert!(try_required(g.clone()).unwrap().ptr_eq(&g));
    }

    #[test]
    fn test_required_on_hand_made_optional_is_noop() {
        let g = hand_made_optional();
        let same = required(g.clone());
        assert!(same.ptr_eq(&g));
        assert!(same.accepts_missing());
        assert_eq!(
            try_required(g).unwrap_err(),
            ContractError::UnknownOptional {
                guard: "maybe_string".to_string()
            }
        );
    }

    #[test]
    fn test_readonly_keeps_acceptance() {
        let g = readonly(number());
        assert!(g.is_readonly());
        assert!(!g.is_optional());
        assert!(g.accepts(&json!(1)));
        assert!(!g.accepts(&json!("1")));
        assert!(!g.accepts_missing());
        assert_eq!(g.name(), "readonly(number)");
    }

    #[test]
    fn test_readonly_is_idempotent() {
        let once = readonly(number());
        assert!(readonly(once.clone()).ptr_eq(&once));
    }

    #[test]
    fn test_facets_survive_wrapping() {
        let ro_opt = readonly(optional(number()));
        assert!(ro_opt.is_readonly());
        assert!(ro_opt.is_optional());
        assert!(ro_opt.accepts_missing());

        let opt_ro = optional(readonly(number()));
        assert!(opt_ro.is_readonly());
        assert!(opt_ro.is_optional());

        // each already carries both facets
        assert!(optional(ro_opt.clone()).ptr_eq(&ro_opt));
        assert!(readonly(opt_ro.clone()).ptr_eq(&opt_ro));
    }

    #[test]
    fn test_required_through_readonly() {
        let inner = number();
        let g = readonly(optional(inner.clone()));
        let r = required(g);
        assert!(r.is_readonly());
        assert!(!r.is_optional());
        assert!(!r.accepts_missing());
        assert!(is_produced_by(&r, Factory::Readonly));
        assert!(lookup(&r).unwrap().first_guard().unwrap().ptr_eq(&inner));
    }

    #[test]
    fn test_required_of_optional_readonly_recovers_readonly() {
        let ro = readonly(string());
        let g = optional(ro.clone());
        assert!(required(g).ptr_eq(&ro));
    }

    #[test]
    fn test_readonly_keeps_inner_metadata_reachable() {
        let inner = object_of([("a", number())]);
        let g = readonly(inner.clone());
        let wrapped = lookup(&g).unwrap().first_guard().unwrap();
        assert!(is_produced_by(wrapped, Factory::ObjectOf));
        assert!(base(&g).ptr_eq(&inner));
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_required_on_hand_made_optional_warns() {
            let g = hand_made_optional();
            let _ = required(g);
            assert!(logs_contain("cannot be unwrapped"));
        }
    }
}
