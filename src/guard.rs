//! Core guard handle and predicate capability
//!
//! A [`Guard`] is an immutable, cheaply clonable handle around a predicate
//! over untyped JSON values. Every guard carries three things fixed at
//! construction:
//!
//! - a display name, computed once (for diagnostics only)
//! - its [`Facets`] (optional / readonly capability flags)
//! - optionally, the [`FactoryMeta`] describing which combinator built it
//!
//! Identity is pointer identity: clones of a guard are the *same* guard,
//! and [`Guard::ptr_eq`] observes that.
//!
//! # Missing values
//!
//! Guards are applied to `Option<&Value>`. `None` stands for a value that is
//! not there at all (a missing object key); `Some(&Value::Null)` is an
//! explicit `null`.
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use shapeguard::Guard;
//!
//! let even = Guard::new("even", |value: Option<&Value>| {
//!     value.and_then(Value::as_i64).is_some_and(|n| n % 2 == 0)
//! });
//!
//! assert!(even.accepts(&json!(4)));
//! assert!(!even.accepts(&json!(3)));
//! assert!(!even.accepts_missing());
//! assert_eq!(even.name(), "even");
//! ```

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Rejected;
use crate::metadata::FactoryMeta;

/// A predicate over a possibly-missing JSON value.
///
/// This is the capability every guard wraps. It is implemented for plain
/// closures, for the leaf predicate types, and for [`Guard`] itself.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use shapeguard::Predicate;
///
/// let present = |value: Option<&Value>| value.is_some();
/// assert!(present.check(Some(&json!(null))));
/// assert!(!present.check(None));
/// ```
pub trait Predicate: Send + Sync {
    /// Check whether the value satisfies this predicate.
    fn check(&self, value: Option<&Value>) -> bool;
}

// Blanket impl for closures
impl<F> Predicate for F
where
    F: Fn(Option<&Value>) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        self(value)
    }
}

/// Independent capability flags attached to a guard.
///
/// - `optional`: the guard already accepts a missing value
/// - `readonly`: the guarded field must not be reassigned after validation
///
/// A guard may carry both, either, or neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Facets {
    /// The guard accepts a missing value in addition to its base shape.
    pub optional: bool,
    /// The guard describes a field that is read-only once validated.
    pub readonly: bool,
}

impl Facets {
    /// No facets.
    pub const NONE: Facets = Facets {
        optional: false,
        readonly: false,
    };

    /// Return these facets with `optional` set.
    #[inline]
    pub fn with_optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    /// Return these facets with `readonly` set.
    #[inline]
    pub fn with_readonly(self) -> Self {
        Self {
            readonly: true,
            ..self
        }
    }
}

pub(crate) struct Inner {
    pub(crate) name: String,
    pub(crate) facets: Facets,
    pub(crate) metadata: Option<FactoryMeta>,
    predicate: Box<dyn Predicate>,
}

/// A named, immutable predicate over untyped JSON values.
///
/// Guards are built by leaf constructors (such as [`string`](crate::string))
/// and by combinators (such as [`array_of`](crate::array_of)). Construction
/// allocates, so build a guard once and reuse it.
#[derive(Clone)]
pub struct Guard {
    pub(crate) inner: Arc<Inner>,
}

impl Guard {
    /// Create a guard with no facets and no factory metadata.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::{json, Value};
    /// use shapeguard::Guard;
    ///
    /// let non_empty = Guard::new("non_empty_string", |value: Option<&Value>| {
    ///     value.and_then(Value::as_str).is_some_and(|s| !s.is_empty())
    /// });
    /// assert!(non_empty.accepts(&json!("x")));
    /// assert!(!non_empty.accepts(&json!("")));
    /// ```
    pub fn new<P>(name: impl Into<String>, predicate: P) -> Self
    where
        P: Predicate + 'static,
    {
        GuardBuilder::new(name).build_predicate(predicate)
    }

    /// Start building a guard with explicit facets or metadata.
    pub fn builder(name: impl Into<String>) -> GuardBuilder {
        GuardBuilder::new(name)
    }

    /// Check a present value.
    #[inline]
    pub fn accepts(&self, value: &Value) -> bool {
        self.inner.predicate.check(Some(value))
    }

    /// Check whether a missing value is accepted.
    #[inline]
    pub fn accepts_missing(&self) -> bool {
        self.inner.predicate.check(None)
    }

    /// Check a value, consuming it and handing it back on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use shapeguard::number;
    ///
    /// assert_eq!(number().validate(json!(3)).unwrap(), json!(3));
    /// let rejected = number().validate(json!("3")).unwrap_err();
    /// assert_eq!(rejected.shape(), "number");
    /// ```
    pub fn validate(&self, value: Value) -> Result<Value, Rejected> {
        if self.accepts(&value) {
            Ok(value)
        } else {
            Err(Rejected::new(self.name(), value))
        }
    }

    /// Display name, fixed at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Capability flags of this guard.
    #[inline]
    pub fn facets(&self) -> Facets {
        self.inner.facets
    }

    /// Whether the guard carries the optional facet.
    #[inline]
    pub fn is_optional(&self) -> bool {
        self.inner.facets.optional
    }

    /// Whether the guard carries the readonly facet.
    #[inline]
    pub fn is_readonly(&self) -> bool {
        self.inner.facets.readonly
    }

    /// Construction metadata, if a known factory built this guard.
    #[inline]
    pub fn metadata(&self) -> Option<&FactoryMeta> {
        self.inner.metadata.as_ref()
    }

    /// Whether both handles refer to the same guard.
    #[inline]
    pub fn ptr_eq(&self, other: &Guard) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Predicate for Guard {
    #[inline]
    fn check(&self, value: Option<&Value>) -> bool {
        self.inner.predicate.check(value)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("name", &self.inner.name)
            .field("facets", &self.inner.facets)
            .field(
                "factory",
                &self.inner.metadata.as_ref().map(FactoryMeta::factory),
            )
            .finish()
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}

/// Builder for guards with explicit facets or factory metadata.
///
/// Facets set here are taken on trust: marking a guard optional does not
/// change what it accepts.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use shapeguard::Guard;
///
/// let maybe_flag = Guard::builder("maybe_flag")
///     .optional()
///     .build(|value: Option<&Value>| matches!(value, None | Some(Value::Bool(_))));
///
/// assert!(maybe_flag.is_optional());
/// assert!(maybe_flag.accepts_missing());
/// assert!(maybe_flag.accepts(&json!(true)));
/// ```
#[derive(Debug)]
pub struct GuardBuilder {
    name: String,
    facets: Facets,
    metadata: Option<FactoryMeta>,
}

impl GuardBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            facets: Facets::NONE,
            metadata: None,
        }
    }

    /// Mark the guard as already accepting missing values.
    pub fn optional(mut self) -> Self {
        self.facets.optional = true;
        self
    }

    /// Mark the guard as read-only.
    pub fn readonly(mut self) -> Self {
        self.facets.readonly = true;
        self
    }

    /// Replace all facets.
    pub fn facets(mut self, facets: Facets) -> Self {
        self.facets = facets;
        self
    }

    /// Record how the guard was constructed.
    pub fn metadata(mut self, metadata: FactoryMeta) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Finish with a closure.
    pub fn build<F>(self, f: F) -> Guard
    where
        F: Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.build_predicate(f)
    }

    /// Finish with any [`Predicate`].
    pub fn build_predicate<P>(self, predicate: P) -> Guard
    where
        P: Predicate + 'static,
    {
        #[cfg(feature = "tracing")]
        if let Some(meta) = &self.metadata {
            tracing::trace!(factory = %meta.factory(), guard = %self.name, "registered guard");
        }

        Guard {
            inner: Arc::new(Inner {
                name: self.name,
                facets: self.facets,
                metadata: self.metadata,
                predicate: Box::new(predicate),
            }),
        }
    }
}
