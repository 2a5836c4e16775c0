//! Error types
//!
//! Checking a value never fails: guards answer `true` or `false`. The errors
//! here cover the two remaining cases:
//!
//! - [`ContractError`]: a guard was misused at construction time
//! - [`Rejected`]: a value was asked to *be* a shape and did not conform

use std::fmt;

use serde_json::Value;

use crate::metadata::Factory;
use crate::naming::describe;

/// A construction-time contract violation.
///
/// These are programming errors in how guards are assembled, never
/// statements about the data being checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    /// Metadata was attached to a guard that already records its construction.
    MetadataAlreadyAttached {
        /// Display name of the guard.
        guard: String,
        /// Factory already recorded on the guard.
        factory: Factory,
    },
    /// Metadata was attached to a guard that other handles can observe.
    SharedGuard {
        /// Display name of the guard.
        guard: String,
    },
    /// An optional guard was asked to become required, but nothing records
    /// which guard it wraps.
    UnknownOptional {
        /// Display name of the guard.
        guard: String,
    },
}

impl fmt::Display for ContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractError::MetadataAlreadyAttached { guard, factory } => write!(
                f,
                "guard `{}` already records its construction by `{}`",
                guard, factory
            ),
            ContractError::SharedGuard { guard } => write!(
                f,
                "cannot attach metadata to guard `{}` while other handles to it exist",
                guard
            ),
            ContractError::UnknownOptional { guard } => write!(
                f,
                "guard `{}` is optional but was not built by `optional`, so it cannot be unwrapped",
                guard
            ),
        }
    }
}

impl std::error::Error for ContractError {}

/// A value that did not conform to the shape it was checked against.
///
/// Holds the value so the caller can recover it.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejected {
    shape: String,
    value: Value,
}

impl Rejected {
    /// Create a rejection for the named shape.
    pub fn new(shape: impl Into<String>, value: Value) -> Self {
        Self {
            shape: shape.into(),
            value,
        }
    }

    /// Display name of the shape the value failed.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The rejected value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Recover the rejected value.
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} does not conform to {}",
            describe(&self.value),
            self.shape
        )
    }
}

impl std::error::Error for Rejected {}
