//! Core types for the attrex attribute exchange model
//!
//! This crate defines the self-describing, dynamically-typed key/value
//! container used to pass process-launch and job-topology metadata
//! between a process manager and the processes it launches:
//!
//! - [`Status`]: the closed, ABI-stable outcome space (success is zero,
//!   failures are contiguous negatives)
//! - [`Key`] / [`Namespace`]: bounded identifiers with a reserved-prefix
//!   convention and a static reserved-key catalog
//! - [`Value`]: the tagged value, one variant per payload discriminant
//! - [`ValueArray`]: homogeneous, length-tagged value sequences
//! - [`Info`]: one (key, value) attribute assignment
//! - [`Scope`]: visibility metadata for published data
//! - [`Range`], [`App`], [`ModexData`]: composite records for job launch
//! - [`Release`] and the callback contracts in [`callback`]
//!
//! Transport, rank/host assignment, topology discovery and wire encoding
//! are external collaborators: this crate only defines the data they
//! carry and the contracts governing construction, copying and release.
//! Every value has exactly one owner at a time; ownership transfers
//! explicitly, copies are deep, and release is recursive and idempotent.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod callback;
pub mod info;
pub mod key;
pub mod record;
pub mod scope;
pub mod status;
pub mod value;

pub use array::ValueArray;
pub use callback::{ErrorHandler, Release, ValueCallback};
pub use info::Info;
pub use key::{Key, Namespace, MAX_KEY_LEN, MAX_NS_LEN, MAX_VAL_LEN, RESERVED_PREFIX};
pub use record::{App, ModexData, Range};
pub use scope::Scope;
pub use status::{Result, Status};
pub use value::{DataType, TimeVal, Value, MAX_DEPTH};
