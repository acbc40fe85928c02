//! Info pairs — the atomic exchange unit
//!
//! An [`Info`] binds one validated key to one tagged value: a single
//! logical attribute assignment between producer and consumer.

use crate::key::Key;
use crate::status::{Result, Status};
use crate::value::{Value, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One attribute assignment: a bounded key plus a tagged value.
///
/// # Examples
///
/// ```
/// use attrex_core::{Info, Value};
///
/// let info = Info::bind_str("attrex.rank", Value::from(3u32)).unwrap();
/// assert_eq!(info.key().as_str(), "attrex.rank");
/// assert_eq!(info.value().as_uint32(), Ok(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    key: Key,
    value: Value,
}

impl Info {
    /// Bind a validated key to a value, taking ownership of both.
    ///
    /// Fails with `InvalidVal` if the value nests past `MAX_DEPTH`. On
    /// failure nothing is bound; the inputs are dropped whole.
    pub fn bind(key: Key, value: Value) -> Result<Self> {
        if value.depth() + 1 > MAX_DEPTH {
            return Err(Status::InvalidVal);
        }
        Ok(Info { key, value })
    }

    /// Bind a raw key string, validating its length first.
    ///
    /// Fails with `InvalidKeyLength` / `InvalidKey` exactly as
    /// [`Key::new`] does.
    pub fn bind_str(key: impl Into<String>, value: Value) -> Result<Self> {
        Info::bind(Key::new(key)?, value)
    }

    /// The bound key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consume the pair, yielding the value.
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Consume the pair, yielding both halves.
    pub fn into_parts(self) -> (Key, Value) {
        (self.key, self.value)
    }

    /// Release the owned value payload, leaving the key bound to `Undef`.
    ///
    /// Idempotent.
    pub fn release(&mut self) {
        self.value.release();
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
