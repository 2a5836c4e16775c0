//! Leaf guards
//!
//! Single-kind checks with no combinator behavior. Each constructor returns a
//! process-wide cached guard, so `string().ptr_eq(&string())` holds.

use std::sync::OnceLock;

use serde_json::Value;

use crate::guard::{Guard, Predicate};

fn cached<P>(cell: &'static OnceLock<Guard>, name: &str, predicate: P) -> Guard
where
    P: Predicate + 'static,
{
    cell.get_or_init(|| Guard::new(name, predicate)).clone()
}

/// Predicate that accepts anything, including a missing value.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUnknown;

impl Predicate for IsUnknown {
    #[inline]
    fn check(&self, _value: Option<&Value>) -> bool {
        true
    }
}

/// Guard that accepts anything, including a missing value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::unknown;
///
/// assert!(unknown().accepts(&json!({"any": "thing"})));
/// assert!(unknown().accepts_missing());
/// ```
pub fn unknown() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "unknown", IsUnknown)
}

/// Predicate that accepts only a missing value.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUndefined;

impl Predicate for IsUndefined {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        value.is_none()
    }
}

/// Guard that accepts only a missing value.
pub fn undefined() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "undefined", IsUndefined)
}

/// Predicate that accepts only `null`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNull;

impl Predicate for IsNull {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Null))
    }
}

/// Guard that accepts only `null`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::null;
///
/// assert!(null().accepts(&json!(null)));
/// assert!(!null().accepts_missing());
/// ```
pub fn null() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "null", IsNull)
}

/// Predicate that accepts `null` or a missing value.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNullish;

impl Predicate for IsNullish {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, None | Some(Value::Null))
    }
}

/// Guard that accepts `null` or a missing value.
pub fn nullish() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "nullish", IsNullish)
}

/// Predicate that accepts booleans.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsBoolean;

impl Predicate for IsBoolean {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Bool(_)))
    }
}

/// Guard that accepts booleans.
pub fn boolean() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "boolean", IsBoolean)
}

/// Predicate that accepts numbers.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNumber;

impl Predicate for IsNumber {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Number(_)))
    }
}

/// Guard that accepts numbers.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::number;
///
/// assert!(number().accepts(&json!(1)));
/// assert!(number().accepts(&json!(-2.5)));
/// assert!(!number().accepts(&json!("1")));
/// ```
pub fn number() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "number", IsNumber)
}

/// Predicate that accepts numbers with no fractional part.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsInteger;

impl Predicate for IsInteger {
    fn check(&self, value: Option<&Value>) -> bool {
        match value {
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => true,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
            _ => false,
        }
    }
}

/// Guard that accepts numbers with no fractional part, so `2.0` counts.
pub fn integer() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "integer", IsInteger)
}

/// Predicate that accepts strings.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsString;

impl Predicate for IsString {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::String(_)))
    }
}

/// Guard that accepts strings.
pub fn string() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "string", IsString)
}

/// Predicate that accepts any array.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsArray;

impl Predicate for IsArray {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Array(_)))
    }
}

/// Guard that accepts any array, whatever its elements.
pub fn array() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "array", IsArray)
}

/// Predicate that accepts any object.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsRecord;

impl Predicate for IsRecord {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        matches!(value, Some(Value::Object(_)))
    }
}

/// Guard that accepts any object, whatever its fields. Arrays and `null`
/// are not records.
pub fn record() -> Guard {
    static GUARD: OnceLock<Guard> = OnceLock::new();
    cached(&GUARD, "record", IsRecord)
}
