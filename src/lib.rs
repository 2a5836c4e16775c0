//! # Shapeguard
//!
//! Composable runtime guards for untyped JSON values.
//!
//! Data that crosses a trust boundary (parsed JSON, IPC payloads,
//! configuration) arrives as a [`serde_json::Value`]. Shapeguard builds
//! [`Guard`]s that decide whether such a value has the shape you expect,
//! from small pieces:
//!
//! - **Leaves**: [`string`], [`number`], [`boolean`], [`null`], ...
//! - **Combinators**: [`array_of`], [`tuple_of`], [`record_of`],
//!   [`object_of`], [`one_of`], [`all_of`], [`literal_of`], ...
//! - **Modifiers**: [`modifiers::optional`], [`modifiers::required`],
//!   [`modifiers::readonly`]
//!
//! Guards only classify. They never parse, coerce or transform the value.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use shapeguard::modifiers::optional;
//! use shapeguard::prelude::*;
//!
//! let user = object_of([
//!     ("id", number()),
//!     ("name", string()),
//!     ("tags", optional(array_of(string()))),
//!     ("role", literal_one_of(["admin", "member"])),
//! ]);
//!
//! assert!(user.accepts(&json!({"id": 1, "name": "ada", "role": "admin"})));
//! assert!(user.accepts(&json!({"id": 1, "name": "ada", "role": "member", "tags": ["x"]})));
//! assert!(!user.accepts(&json!({"id": 1, "name": "ada", "role": "owner"})));
//! ```
//!
//! ## Metadata
//!
//! Every combinator records which factory built a guard and from what (see
//! [`metadata`]). That record is what lets the modifiers stay idempotent:
//! `optional(optional(p))` is `optional(p)`, and `required(optional(p))` is
//! `p` itself.
//!
//! ## Caching
//!
//! Each combinator call allocates a new guard. Build guards once and reuse
//! them, for example through [`shape!`] and [`narrow::Checked`].
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for guard registration and modifier
//!   decisions
//! - `serde`: `Serialize`/`Deserialize` for [`narrow::Checked`]
//! - `proptest`: [`testing::arb_value`] for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod error;
pub mod guard;
pub mod leaf;
pub mod metadata;
pub mod modifiers;
pub mod naming;
pub mod narrow;
pub mod testing;

// Re-exports
pub use combinators::{
    all_of, array_of, literal_of, literal_one_of, not, object_of, object_of_with, one_of,
    record_of, tuple_of, tuple_of_rest, uniform_tuple_of, GuardExt, Literal, ObjectOptions,
};
pub use error::{ContractError, Rejected};
pub use guard::{Facets, Guard, GuardBuilder, Predicate};
pub use leaf::{
    array, boolean, integer, null, nullish, number, record, string, undefined, unknown,
};
pub use serde_json::Value;

/// Every leaf guard and combinator under one namespace.
///
/// ```rust
/// use serde_json::json;
/// use shapeguard::predicates as is;
///
/// let pair = is::tuple_of([is::string(), is::number()]);
/// assert!(pair.accepts(&json!(["a", 1])));
/// ```
pub mod predicates {
    pub use crate::combinators::{
        all_of, array_of, literal_of, literal_one_of, not, object_of, object_of_with, one_of,
        record_of, tuple_of, tuple_of_rest, uniform_tuple_of,
    };
    pub use crate::leaf::{
        array, boolean, integer, null, nullish, number, record, string, undefined, unknown,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{
        all_of, array_of, literal_of, literal_one_of, object_of, object_of_with, one_of,
        record_of, tuple_of, tuple_of_rest, uniform_tuple_of, GuardExt, Literal, ObjectOptions,
    };
    pub use crate::guard::{Guard, Predicate};
    pub use crate::leaf::{
        array, boolean, integer, null, nullish, number, record, string, undefined, unknown,
    };
    pub use crate::narrow::{Checked, Shape};
}
