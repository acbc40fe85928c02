//! Outcome statuses for the attribute exchange model
//!
//! The status space is closed and ABI-stable: success is exactly `0`,
//! every failure is strictly negative, and the values are contiguous down
//! to [`Status::MIN`]. A raw integer is a legal status iff
//! `Status::MIN <= v <= 0`, so validation is a single range check with no
//! lookup table. New statuses may only be appended at the negative
//! boundary; existing values never move.
//!
//! This enumeration is the sole error vocabulary of the crate: every
//! fallible operation returns [`Result`], and no other error type crosses
//! the exchange boundary. Serialization statuses (pack/unpack) are defined
//! here even though the codec itself lives in an external layer, so one
//! error channel spans both.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the exchange model.
pub type Result<T> = std::result::Result<T, Status>;

/// Outcome of an exchange-model operation.
///
/// `Success` is the unique zero value; all other members are strictly
/// negative and unique. Fallible APIs return `Result<T, Status>` and never
/// construct `Err(Status::Success)` — the success member exists so the
/// full ABI space can be represented, iterated and carried in data.
///
/// # Examples
///
/// ```
/// use attrex_core::Status;
///
/// assert_eq!(Status::Success.code(), 0);
/// assert_eq!(Status::from_code(-6), Some(Status::TypeMismatch));
/// assert_eq!(Status::from_code(Status::MIN - 1), None);
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    /// Unpacking read past the end of the provided buffer.
    #[error("read past end of buffer while unpacking")]
    UnpackReadPastEndOfBuffer = -38,
    /// Communication with the peer failed.
    #[error("communication failure")]
    CommFailure = -37,
    /// The requested operation is not implemented.
    #[error("not implemented")]
    NotImplemented = -36,
    /// The requested capability is not supported.
    #[error("not supported")]
    NotSupported = -35,
    /// The requested item was not found.
    #[error("not found")]
    NotFound = -34,
    /// No server is available to service the request.
    #[error("server not available")]
    ServerNotAvailable = -33,
    /// The namespace identifier is malformed or over-length.
    #[error("invalid namespace")]
    InvalidNamespace = -32,
    /// A size argument is invalid.
    #[error("invalid size")]
    InvalidSize = -31,
    /// A key/value pair handle is invalid.
    #[error("invalid key/value pair")]
    InvalidKeyval = -30,
    /// The number of parsed elements disagrees with the declared count.
    #[error("invalid number of parsed elements")]
    InvalidNumParsed = -29,
    /// The argument list is invalid.
    #[error("invalid arguments")]
    InvalidArgs = -28,
    /// The number of arguments is invalid.
    #[error("invalid number of arguments")]
    InvalidNumArgs = -27,
    /// A length argument is invalid.
    #[error("invalid length")]
    InvalidLength = -26,
    /// A value exceeds its maximum permitted length.
    #[error("invalid value length")]
    InvalidValLength = -25,
    /// A value failed validation.
    #[error("invalid value")]
    InvalidVal = -24,
    /// A key exceeds its maximum permitted length.
    #[error("invalid key length")]
    InvalidKeyLength = -23,
    /// A key failed validation.
    #[error("invalid key")]
    InvalidKey = -22,
    /// A single argument is invalid.
    #[error("invalid argument")]
    InvalidArg = -21,
    /// Memory allocation failed.
    #[error("out of memory")]
    NoMem = -20,
    /// Initialization failed or was never performed.
    #[error("initialization failure")]
    Init = -19,
    /// The requested data value was not found.
    #[error("data value not found")]
    DataValueNotFound = -18,
    /// A required resource is exhausted.
    #[error("out of resource")]
    OutOfResource = -17,
    /// A required resource is busy; retry later.
    #[error("resource busy")]
    ResourceBusy = -16,
    /// A parameter is outside its permitted range.
    #[error("bad parameter")]
    BadParam = -15,
    /// The failure is described by the captured errno.
    #[error("error recorded in errno")]
    InErrno = -14,
    /// The peer is unreachable.
    #[error("peer unreachable")]
    Unreach = -13,
    /// The operation timed out.
    #[error("timeout")]
    Timeout = -12,
    /// The caller lacks permission for the operation.
    #[error("no permissions")]
    NoPermissions = -11,
    /// Packed data disagrees with the declared layout.
    #[error("pack mismatch")]
    PackMismatch = -10,
    /// Packing data failed.
    #[error("pack failure")]
    PackFailure = -9,
    /// Unpacking data failed.
    #[error("unpack failure")]
    UnpackFailure = -8,
    /// The unpack destination is too small for the data.
    #[error("inadequate space while unpacking")]
    UnpackInadequateSpace = -7,
    /// A value's live discriminant differs from the one requested.
    #[error("type mismatch")]
    TypeMismatch = -6,
    /// No entry exists for the named process.
    #[error("process entry not found")]
    ProcEntryNotFound = -5,
    /// The discriminant is not a known data type.
    #[error("unknown data type")]
    UnknownDataType = -4,
    /// The operation would block.
    #[error("operation would block")]
    WouldBlock = -3,
    /// The item already exists.
    #[error("already exists")]
    Exists = -2,
    /// Generic catch-all failure.
    #[error("error")]
    Error = -1,
    /// The operation completed successfully.
    #[error("success")]
    Success = 0,
}

impl Status {
    /// The most negative legal status code.
    ///
    /// Equal to the negated count of non-success members; the space is
    /// contiguous from here up to `0`.
    pub const MIN: i32 = -38;

    /// The ABI value of this status.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// True iff this is the success status.
    pub fn is_success(self) -> bool {
        self == Status::Success
    }

    /// Look up the status for a raw ABI code.
    ///
    /// Returns `None` for any code outside `MIN..=0`; every code inside
    /// the range maps to exactly one member.
    pub fn from_code(code: i32) -> Option<Status> {
        let status = match code {
            -38 => Status::UnpackReadPastEndOfBuffer,
            -37 => Status::CommFailure,
            -36 => Status::NotImplemented,
            -35 => Status::NotSupported,
            -34 => Status::NotFound,
            -33 => Status::ServerNotAvailable,
            -32 => Status::InvalidNamespace,
            -31 => Status::InvalidSize,
            -30 => Status::InvalidKeyval,
            -29 => Status::InvalidNumParsed,
            -28 => Status::InvalidArgs,
            -27 => Status::InvalidNumArgs,
            -26 => Status::InvalidLength,
            -25 => Status::InvalidValLength,
            -24 => Status::InvalidVal,
            -23 => Status::InvalidKeyLength,
            -22 => Status::InvalidKey,
            -21 => Status::InvalidArg,
            -20 => Status::NoMem,
            -19 => Status::Init,
            -18 => Status::DataValueNotFound,
            -17 => Status::OutOfResource,
            -16 => Status::ResourceBusy,
            -15 => Status::BadParam,
            -14 => Status::InErrno,
            -13 => Status::Unreach,
            -12 => Status::Timeout,
            -11 => Status::NoPermissions,
            -10 => Status::PackMismatch,
            -9 => Status::PackFailure,
            -8 => Status::UnpackFailure,
            -7 => Status::UnpackInadequateSpace,
            -6 => Status::TypeMismatch,
            -5 => Status::ProcEntryNotFound,
            -4 => Status::UnknownDataType,
            -3 => Status::WouldBlock,
            -2 => Status::Exists,
            -1 => Status::Error,
            0 => Status::Success,
            _ => return None,
        };
        Some(status)
    }

    /// Iterate every member of the status space, most negative first.
    pub fn all() -> impl Iterator<Item = Status> {
        (Self::MIN..=0).filter_map(Status::from_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_success_is_unique_zero() {
        assert_eq!(Status::Success.code(), 0);
        assert!(Status::Success.is_success());
        for s in Status::all() {
            if s != Status::Success {
                assert!(s.code() < 0, "{:?} must be negative", s);
                assert!(!s.is_success());
            }
        }
    }

    #[test]
    fn test_space_is_contiguous_and_closed() {
        let mut seen = HashSet::new();
        for code in Status::MIN..=0 {
            let s = Status::from_code(code).expect("every in-range code is legal");
            assert_eq!(s.code(), code);
            assert!(seen.insert(code), "duplicate code {}", code);
        }
        assert_eq!(seen.len(), (-Status::MIN as usize) + 1);
        assert_eq!(Status::from_code(Status::MIN - 1), None);
        assert_eq!(Status::from_code(1), None);
    }

    #[test]
    fn test_all_iterates_whole_space() {
        let all: Vec<Status> = Status::all().collect();
        assert_eq!(all.len(), 39);
        assert_eq!(all.first(), Some(&Status::UnpackReadPastEndOfBuffer));
        assert_eq!(all.last(), Some(&Status::Success));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Status::TypeMismatch.to_string(), "type mismatch");
        assert_eq!(Status::InvalidKeyLength.to_string(), "invalid key length");
        assert_eq!(Status::Success.to_string(), "success");
    }

    #[test]
    fn test_serde_round_trip() {
        for s in Status::all() {
            let json = serde_json::to_string(&s).unwrap();
            let back: Status = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    proptest! {
        #[test]
        fn prop_from_code_total_on_range(code in Status::MIN..=0i32) {
            let s = Status::from_code(code).unwrap();
            prop_assert_eq!(s.code(), code);
        }

        #[test]
        fn prop_from_code_rejects_out_of_range(code in any::<i32>()) {
            prop_assume!(code < Status::MIN || code > 0);
            prop_assert!(Status::from_code(code).is_none());
        }
    }
}
