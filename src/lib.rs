//! attrex — attribute exchange data model
//!
//! A self-describing, dynamically-typed key/value container for passing
//! process-launch and job-topology metadata between a system-level
//! process manager and the processes it launches.
//!
//! The model is small and deliberate: a tagged value ([`Value`]) with a
//! closed discriminant vocabulary ([`DataType`]), bounded keys with a
//! reserved-prefix catalog ([`Key`], [`types::reserved`]), a closed
//! ABI-stable status space ([`Status`]), and the composite records
//! external launch logic consumes ([`Info`], [`Range`], [`App`],
//! [`ModexData`]). Transports, schedulers and wire codecs live elsewhere;
//! they speak entirely in these types.
//!
//! # Example
//!
//! ```
//! use attrex::{reserved, Info, Value};
//!
//! // A resource manager publishes this process's rank.
//! let info = Info::bind_str(reserved::RANK, Value::from(3u32)).unwrap();
//!
//! // A consumer reads it back, type-checked against the discriminant.
//! assert_eq!(info.value().as_uint32(), Ok(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;

pub use types::*;
