//! Literal combinators

use serde_json::{Number, Value};

use crate::guard::Guard;
use crate::metadata::{Factory, FactoryMeta, MetaArg};
use crate::naming::describe_literal;

/// A primitive value a guard can match exactly.
///
/// Numbers compare by exact numeric value. Two integers are compared as
/// integers, so neighbours above 2^53 stay distinct. A float equals an
/// integer only when it represents that integer exactly, so `1` and `1.0`
/// are the same literal. A `NaN` literal matches nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// A missing value.
    Undefined,
    /// `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
}

impl Literal {
    /// Whether `value` is exactly this literal.
    pub fn matches(&self, value: Option<&Value>) -> bool {
        match (self, value) {
            (Literal::Undefined, None) => true,
            (Literal::Null, Some(Value::Null)) => true,
            (Literal::Bool(expected), Some(Value::Bool(actual))) => expected == actual,
            (Literal::Int(expected), Some(Value::Number(actual))) => {
                integer_matches(i128::from(*expected), actual)
            }
            (Literal::UInt(expected), Some(Value::Number(actual))) => {
                integer_matches(i128::from(*expected), actual)
            }
            (Literal::Float(expected), Some(Value::Number(actual))) => {
                float_matches(*expected, actual)
            }
            (Literal::String(expected), Some(Value::String(actual))) => expected == actual,
            _ => false,
        }
    }
}

fn integer_of(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

fn integer_matches(expected: i128, actual: &Number) -> bool {
    match integer_of(actual) {
        Some(actual) => actual == expected,
        None => actual
            .as_f64()
            .is_some_and(|actual| float_is_integer(actual, expected)),
    }
}

fn float_matches(expected: f64, actual: &Number) -> bool {
    match integer_of(actual) {
        Some(actual) => float_is_integer(expected, actual),
        None => actual.as_f64().is_some_and(|actual| actual == expected),
    }
}

// Exact in both directions: `as` saturates and rounds, so check the round trip.
fn float_is_integer(float: f64, integer: i128) -> bool {
    float.fract() == 0.0 && float as i128 == integer && integer as f64 == float
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Int(i64::from(value))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::UInt(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

/// Guard that accepts exactly one primitive value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::literal_of;
///
/// let v2 = literal_of(2);
/// assert!(v2.accepts(&json!(2)));
/// assert!(v2.accepts(&json!(2.0)));
/// assert!(!v2.accepts(&json!("2")));
/// assert_eq!(v2.name(), "literal_of(2)");
///
/// let kind = literal_of("circle");
/// assert!(kind.accepts(&json!("circle")));
/// ```
pub fn literal_of(literal: impl Into<Literal>) -> Guard {
    let literal = literal.into();
    let check = literal.clone();

    Guard::builder(format!("literal_of({})", describe_literal(&literal)))
        .metadata(FactoryMeta::new(
            Factory::LiteralOf,
            vec![MetaArg::Literal(literal)],
        ))
        .build(move |value: Option<&Value>| check.matches(value))
}

/// Guard that accepts any one of a set of primitive values.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::literal_one_of;
///
/// let level = literal_one_of(["debug", "info", "warn"]);
/// assert!(level.accepts(&json!("info")));
/// assert!(!level.accepts(&json!("trace")));
/// assert_eq!(level.name(), r#"literal_one_of("debug", "info", "warn")"#);
/// ```
pub fn literal_one_of<I>(literals: I) -> Guard
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let literals: Vec<Literal> = literals.into_iter().map(Into::into).collect();
    let name = format!(
        "literal_one_of({})",
        literals
            .iter()
            .map(describe_literal)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let check = literals.clone();

    Guard::builder(name)
        .metadata(FactoryMeta::new(
            Factory::LiteralOneOf,
            vec![MetaArg::Literals(literals)],
        ))
        .build(move |value: Option<&Value>| check.iter().any(|literal| literal.matches(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::lookup;
    use serde_json::json;

    #[test]
    fn test_literal_null_and_undefined() {
        let n = literal_of(Literal::Null);
        assert!(n.accepts(&json!(null)));
        assert!(!n.accepts_missing());

        let u = literal_of(Literal::Undefined);
        assert!(u.accepts_missing());
        assert!(!u.accepts(&json!(null)));
    }

    #[test]
    fn test_literal_bool_is_not_number() {
        let t = literal_of(true);
        assert!(t.accepts(&json!(true)));
        assert!(!t.accepts(&json!(1)));
    }

    #[test]
    fn test_literal_number_compares_by_value() {
        let g = literal_of(0.5);
        assert!(g.accepts(&json!(0.5)));
        assert!(!g.accepts(&json!(1)));
        assert!(literal_of(-3i64).accepts(&json!(-3)));
    }

    #[test]
    fn test_large_integers_compare_exactly() {
        let g = literal_of(9_007_199_254_740_993i64);
        assert!(g.accepts(&json!(9_007_199_254_740_993i64)));
        assert!(!g.accepts(&json!(9_007_199_254_740_992i64)));
        assert!(!g.accepts(&json!(9_007_199_254_740_992.0)));

        let max = literal_of(u64::MAX);
        assert!(max.accepts(&json!(u64::MAX)));
        assert!(!max.accepts(&json!(u64::MAX - 1)));
        assert!(!max.accepts(&json!(-1)));
    }

    #[test]
    fn test_integral_floats_match_integers() {
        assert!(literal_of(1).accepts(&json!(1.0)));
        assert!(literal_of(1.0).accepts(&json!(1)));
        assert!(literal_of(2u64).accepts(&json!(2)));
        assert!(!literal_of(1.5).accepts(&json!(1)));
        assert!(!literal_of(1).accepts(&json!(1.5)));
    }

    #[test]
    fn test_nan_matches_nothing() {
        let g = literal_of(f64::NAN);
        assert!(!g.accepts(&json!(0)));
        assert!(!g.accepts(&json!(null)));
    }

    #[test]
    fn test_literal_never_matches_containers() {
        let g = literal_of("a");
        assert!(!g.accepts(&json!(["a"])));
        assert!(!g.accepts(&json!({"a": "a"})));
    }

    #[test]
    fn test_literal_one_of_mixed() {
        let g = literal_one_of([Literal::from(1), Literal::from("one"), Literal::Null]);
        assert!(g.accepts(&json!(1)));
        assert!(g.accepts(&json!("one")));
        assert!(g.accepts(&json!(null)));
        assert!(!g.accepts(&json!(2)));
        assert!(!g.accepts_missing());
    }

    #[test]
    fn test_literal_one_of_empty_rejects_all() {
        let g = literal_one_of(Vec::<Literal>::new());
        assert!(!g.accepts(&json!(null)));
        assert_eq!(g.name(), "literal_one_of()");
    }

    #[test]
    fn test_literal_metadata() {
        let g = literal_of("x");
        match &lookup(&g).unwrap().args()[0] {
            MetaArg::Literal(literal) => assert_eq!(literal, &Literal::from("x")),
            other => panic!("expected literal, got {:?}", other),
        }
    }
}
