//! Checked values: carrying a guard's verdict in the type system
//!
//! A guard answers `true` or `false` and then forgets. [`Checked<S>`] keeps
//! the answer: it holds a `Value` that is known to conform to the shape `S`,
//! so code that receives one does not check again.
//!
//! A shape is a marker type implementing [`Shape`], which hands out one
//! cached guard. The [`shape!`](crate::shape) macro declares both.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::narrow::Checked;
//! use shapeguard::{number, object_of, shape, string};
//!
//! shape!(pub Point => object_of([("x", number()), ("y", number())]));
//! shape!(Label => string());
//!
//! fn norm(p: &Checked<Point>) -> f64 {
//!     // x and y are known to be numbers
//!     let x = p["x"].as_f64().unwrap_or_default();
//!     let y = p["y"].as_f64().unwrap_or_default();
//!     (x * x + y * y).sqrt()
//! }
//!
//! let p = Checked::<Point>::new(json!({"x": 3, "y": 4})).unwrap();
//! assert_eq!(norm(&p), 5.0);
//!
//! let err = Checked::<Point>::new(json!({"x": 3})).unwrap_err();
//! assert_eq!(err.shape(), "object_of({x: number, y: number})");
//! assert!(Checked::<Label>::new(json!(1)).is_err());
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::error::Rejected;
use crate::guard::Guard;

/// A named shape with one cached guard.
///
/// Implementors should build the guard once, for example with a
/// `std::sync::OnceLock`, since every combinator call allocates.
///
/// # Example
///
/// ```rust
/// use std::sync::OnceLock;
/// use shapeguard::narrow::Shape;
/// use shapeguard::{array_of, string, Guard};
///
/// struct Tags;
///
/// impl Shape for Tags {
///     fn guard() -> &'static Guard {
///         static GUARD: OnceLock<Guard> = OnceLock::new();
///         GUARD.get_or_init(|| array_of(string()))
///     }
/// }
///
/// assert_eq!(Tags::guard().name(), "array_of(string)");
/// ```
pub trait Shape: 'static {
    /// The guard values of this shape pass.
    fn guard() -> &'static Guard;
}

/// Declare a [`Shape`] marker type with a lazily built, cached guard.
///
/// ```rust
/// use shapeguard::narrow::Shape;
/// use shapeguard::{number, shape, uniform_tuple_of};
///
/// shape!(
///     /// An RGB triple.
///     pub Rgb => uniform_tuple_of(3, number())
/// );
///
/// assert!(Rgb::guard().ptr_eq(Rgb::guard()));
/// ```
///
/// [`Shape`]: crate::narrow::Shape
#[macro_export]
macro_rules! shape {
    ($(#[$attr:meta])* $vis:vis $name:ident => $guard:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        $vis struct $name;

        impl $crate::narrow::Shape for $name {
            fn guard() -> &'static $crate::Guard {
                static GUARD: ::std::sync::OnceLock<$crate::Guard> = ::std::sync::OnceLock::new();
                GUARD.get_or_init(|| $guard)
            }
        }
    };
}

/// A JSON value known to conform to shape `S`.
///
/// Dereferences to the underlying [`Value`].
pub struct Checked<S> {
    value: Value,
    _shape: PhantomData<fn() -> S>,
}

impl<S: Shape> Checked<S> {
    /// Check a value against `S`, keeping it on success.
    pub fn new(value: Value) -> Result<Self, Rejected> {
        let value = S::guard().validate(value)?;
        Ok(Self {
            value,
            _shape: PhantomData,
        })
    }

    /// Whether a value would pass, without taking it.
    pub fn conforms(value: &Value) -> bool {
        S::guard().accepts(value)
    }
}

impl<S> Checked<S> {
    /// Get a reference to the inner value.
    #[inline]
    pub fn get(&self) -> &Value {
        &self.value
    }

    /// Consume the checked value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl<S> fmt::Debug for Checked<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checked")
            .field("value", &self.value)
            .field("shape", &std::any::type_name::<S>())
            .finish()
    }
}

impl<S> Clone for Checked<S> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _shape: PhantomData,
        }
    }
}

impl<S> PartialEq for Checked<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S> Eq for Checked<S> {}

impl<S> AsRef<Value> for Checked<S> {
    fn as_ref(&self) -> &Value {
        &self.value
    }
}

impl<S> std::ops::Deref for Checked<S> {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.value
    }
}

impl<S> fmt::Display for Checked<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl<S: Shape> TryFrom<Value> for Checked<S> {
    type Error = Rejected;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
