//! Serde support for checked values (feature-gated)
//!
//! [`Checked<S>`] serializes as its inner value and deserializes by reading
//! any JSON value and then checking it against `S`.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use shapeguard::narrow::Checked;
//! use shapeguard::{number, object_of, shape};
//!
//! shape!(Point => object_of([("x", number()), ("y", number())]));
//!
//! #[derive(Deserialize)]
//! struct Request {
//!     origin: Checked<Point>,
//! }
//!
//! let ok: Request = serde_json::from_str(r#"{"origin": {"x": 0, "y": 0}}"#).unwrap();
//! let bad: Result<Request, _> = serde_json::from_str(r#"{"origin": {"x": 0}}"#);
//! assert!(bad.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Checked, Shape};

impl<S> Serialize for Checked<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, S: Shape> Deserialize<'de> for Checked<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Checked::new(value).map_err(serde::de::Error::custom)
    }
}
