//! Construction metadata for guards
//!
//! Each combinator records which factory produced a guard and with what
//! arguments. The record lives on the guard itself and never changes once
//! set. Guards written by hand usually carry none, and every consumer treats
//! "no metadata" as its own case rather than as an error.
//!
//! # Example
//!
//! ```rust
//! use shapeguard::metadata::{self, Factory};
//! use shapeguard::{array_of, string};
//!
//! let tags = array_of(string());
//! assert!(metadata::is_produced_by(&tags, Factory::ArrayOf));
//!
//! let meta = metadata::lookup(&tags).unwrap();
//! assert_eq!(meta.first_guard().unwrap().name(), "string");
//! assert!(metadata::lookup(&string()).is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::combinators::{Literal, ObjectOptions};
use crate::error::ContractError;
use crate::guard::Guard;

/// Identity of the factory that produced a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factory {
    /// [`array_of`](crate::array_of)
    ArrayOf,
    /// [`tuple_of`](crate::tuple_of) and [`tuple_of_rest`](crate::tuple_of_rest)
    TupleOf,
    /// [`uniform_tuple_of`](crate::uniform_tuple_of)
    UniformTupleOf,
    /// [`record_of`](crate::record_of)
    RecordOf,
    /// [`object_of`](crate::object_of) and [`object_of_with`](crate::object_of_with)
    ObjectOf,
    /// [`one_of`](crate::one_of)
    OneOf,
    /// [`all_of`](crate::all_of)
    AllOf,
    /// [`not`](crate::not)
    Not,
    /// [`literal_of`](crate::literal_of)
    LiteralOf,
    /// [`literal_one_of`](crate::literal_one_of)
    LiteralOneOf,
    /// [`modifiers::optional`](crate::modifiers::optional)
    Optional,
    /// [`modifiers::readonly`](crate::modifiers::readonly)
    Readonly,
    /// A factory defined outside this crate.
    Custom(&'static str),
}

impl Factory {
    /// Stable name of the factory.
    pub fn name(&self) -> &'static str {
        match self {
            Factory::ArrayOf => "array_of",
            Factory::TupleOf => "tuple_of",
            Factory::UniformTupleOf => "uniform_tuple_of",
            Factory::RecordOf => "record_of",
            Factory::ObjectOf => "object_of",
            Factory::OneOf => "one_of",
            Factory::AllOf => "all_of",
            Factory::Not => "not",
            Factory::LiteralOf => "literal_of",
            Factory::LiteralOneOf => "literal_one_of",
            Factory::Optional => "optional",
            Factory::Readonly => "readonly",
            Factory::Custom(name) => name,
        }
    }
}

impl fmt::Display for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One construction argument, as recorded in [`FactoryMeta`].
#[derive(Clone, Debug)]
pub enum MetaArg {
    /// A single guard.
    Guard(Guard),
    /// An ordered list of guards.
    Guards(Vec<Guard>),
    /// Named fields of an object descriptor, in declaration order.
    Fields(Vec<(String, Guard)>),
    /// A literal value.
    Literal(Literal),
    /// A set of literal values.
    Literals(Vec<Literal>),
    /// A count, such as a tuple length.
    Count(usize),
    /// Object checking options.
    Options(ObjectOptions),
}

impl MetaArg {
    /// The guard held by this argument, if it is a single guard.
    pub fn as_guard(&self) -> Option<&Guard> {
        match self {
            MetaArg::Guard(guard) => Some(guard),
            _ => None,
        }
    }

    /// The guards held by this argument, if it is a guard list.
    pub fn as_guards(&self) -> Option<&[Guard]> {
        match self {
            MetaArg::Guards(guards) => Some(guards),
            _ => None,
        }
    }
}

/// How a guard was built: the factory and the arguments it was given.
#[derive(Clone, Debug)]
pub struct FactoryMeta {
    factory: Factory,
    args: Vec<MetaArg>,
}

impl FactoryMeta {
    /// Describe a construction.
    pub fn new(factory: Factory, args: Vec<MetaArg>) -> Self {
        Self { factory, args }
    }

    /// The factory that produced the guard.
    #[inline]
    pub fn factory(&self) -> Factory {
        self.factory
    }

    /// The recorded arguments, in call order.
    #[inline]
    pub fn args(&self) -> &[MetaArg] {
        &self.args
    }

    /// The first argument, when it is a single guard.
    ///
    /// For the modifier factories this is the wrapped guard.
    pub fn first_guard(&self) -> Option<&Guard> {
        self.args.first().and_then(MetaArg::as_guard)
    }
}

/// Attach metadata to a guard that has none, returning the same guard.
///
/// The recorded construction of a guard is fixed once observable, so this
/// fails if the guard already carries metadata or if another handle to it
/// exists.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use shapeguard::metadata::{self, Factory, FactoryMeta};
/// use shapeguard::Guard;
///
/// let port = Guard::new("port", |value: Option<&Value>| {
///     value.and_then(Value::as_u64).is_some_and(|n| n <= 65535)
/// });
/// let port = metadata::attach(port, FactoryMeta::new(Factory::Custom("port"), vec![])).unwrap();
///
/// assert!(metadata::is_produced_by(&port, Factory::Custom("port")));
/// assert!(port.accepts(&json!(8080)));
/// ```
pub fn attach(mut guard: Guard, metadata: FactoryMeta) -> Result<Guard, ContractError> {
    if let Some(existing) = guard.metadata() {
        return Err(ContractError::MetadataAlreadyAttached {
            guard: guard.name().to_owned(),
            factory: existing.factory(),
        });
    }

    let name = guard.name().to_owned();
    match Arc::get_mut(&mut guard.inner) {
        Some(inner) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(factory = %metadata.factory(), guard = %inner.name, "attached metadata");

            inner.metadata = Some(metadata);
            Ok(guard)
        }
        None => Err(ContractError::SharedGuard { guard: name }),
    }
}

/// Look up a guard's construction metadata.
#[inline]
pub fn lookup(guard: &Guard) -> Option<&FactoryMeta> {
    guard.metadata()
}

/// Whether the guard was produced by the given factory.
pub fn is_produced_by(guard: &Guard, factory: Factory) -> bool {
    guard.metadata().is_some_and(|meta| meta.factory() == factory)
}

/// Follow optional/readonly wrappers down to the guard they wrap.
///
/// Returns the guard itself when it is not a modifier wrapper.
///
/// # Example
///
/// ```rust
/// use shapeguard::metadata;
/// use shapeguard::modifiers::{optional, readonly};
/// use shapeguard::number;
///
/// let base = number();
/// let wrapped = readonly(optional(base.clone()));
/// assert!(metadata::base(&wrapped).ptr_eq(&base));
/// ```
pub fn base(guard: &Guard) -> &Guard {
    let mut current = guard;
    while let Some(meta) = current.metadata() {
        let inner = match meta.factory() {
            Factory::Optional | Factory::Readonly => meta.first_guard(),
            _ => None,
        };
        match inner {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}
