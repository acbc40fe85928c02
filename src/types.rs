//! Public types for the attrex unified API.
//!
//! This module re-exports types from the core crate with a clean public
//! interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Core value types
pub use attrex_core::DataType;
pub use attrex_core::TimeVal;
pub use attrex_core::Value;
pub use attrex_core::ValueArray;

// Status space and the crate-wide result alias
pub use attrex_core::Result;
pub use attrex_core::Status;

// Keys, namespaces and the reserved catalog
pub use attrex_core::key::reserved;
pub use attrex_core::Key;
pub use attrex_core::Namespace;
pub use attrex_core::{MAX_KEY_LEN, MAX_NS_LEN, MAX_VAL_LEN, RESERVED_PREFIX};

// Exchange unit and scope metadata
pub use attrex_core::Info;
pub use attrex_core::Scope;

// Composite records for job launch
pub use attrex_core::{App, ModexData, Range};

// Transport-facing contracts
pub use attrex_core::{ErrorHandler, Release, ValueCallback};

// Nesting bound for composite values
pub use attrex_core::MAX_DEPTH;
