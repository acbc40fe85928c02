//! Tagged values — the unit of data exchange
//!
//! A [`Value`] is a closed sum type: the variant is the discriminant, and
//! the compiler enforces that exactly the matching payload exists. Typed
//! accessors verify the live discriminant at the API boundary and fail
//! with `TypeMismatch` rather than reinterpreting memory.
//!
//! Ownership follows the exchange model's contract: a value owns its
//! payload exclusively, `Clone` is a deep copy (owned buffers duplicated,
//! arrays re-allocated and their elements copied recursively, never
//! aliased), and [`Value::release`] drops every owned buffer and resets
//! the slot to `Undef`. Overwriting via [`Value::set`] releases the old
//! payload first; the implementation enforces this, not the caller.

use crate::array::ValueArray;
use crate::info::Info;
use crate::record::{App, ModexData, Range};
use crate::status::{Result, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum nesting depth of composite values.
///
/// Bounds the recursion of deep copy and release; construction of a
/// composite that would exceed it fails with `InvalidVal`.
pub const MAX_DEPTH: usize = 32;

/// Discriminant vocabulary for [`Value`] payloads.
///
/// Numeric tags are ABI-stable; new kinds may only be appended. The
/// composite tail (`Range`..`Modex`) is shared with the external encoding
/// layer, which uses the same vocabulary to describe packed records.
/// `Keyval` is reserved for that layer and has no in-memory payload here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum DataType {
    /// Absence marker; the value owns nothing.
    Undef = 0,
    /// A single byte of data.
    Byte = 1,
    /// An owned string.
    String = 2,
    /// A size quantity.
    Size = 3,
    /// An operating-system process id.
    Pid = 4,
    /// Platform-native signed integer.
    Int = 5,
    /// 8-bit signed integer.
    Int8 = 6,
    /// 16-bit signed integer.
    Int16 = 7,
    /// 32-bit signed integer.
    Int32 = 8,
    /// 64-bit signed integer.
    Int64 = 9,
    /// Platform-native unsigned integer.
    Uint = 10,
    /// 8-bit unsigned integer.
    Uint8 = 11,
    /// 16-bit unsigned integer.
    Uint16 = 12,
    /// 32-bit unsigned integer.
    Uint32 = 13,
    /// 64-bit unsigned integer.
    Uint64 = 14,
    /// Single-precision floating point.
    Float = 15,
    /// Double-precision floating point.
    Double = 16,
    /// Seconds + microseconds timestamp pair.
    Timeval = 17,
    /// Absolute point in time.
    Time = 18,
    /// Opaque topology handle.
    Topology = 19,
    /// A nested value — an attribute that is itself a full value.
    Value = 20,
    /// Homogeneous array of values.
    Array = 21,
    /// Rank range record.
    Range = 22,
    /// App descriptor record.
    App = 23,
    /// Info pair.
    Info = 24,
    /// Opaque byte buffer.
    Buffer = 25,
    /// Reserved for the external store layer; carries no payload here.
    Keyval = 26,
    /// Modex record.
    Modex = 27,
}

impl DataType {
    /// The ABI value of this discriminant.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up the discriminant for a raw ABI code.
    pub fn from_code(code: u32) -> Option<DataType> {
        let dt = match code {
            0 => DataType::Undef,
            1 => DataType::Byte,
            2 => DataType::String,
            3 => DataType::Size,
            4 => DataType::Pid,
            5 => DataType::Int,
            6 => DataType::Int8,
            7 => DataType::Int16,
            8 => DataType::Int32,
            9 => DataType::Int64,
            10 => DataType::Uint,
            11 => DataType::Uint8,
            12 => DataType::Uint16,
            13 => DataType::Uint32,
            14 => DataType::Uint64,
            15 => DataType::Float,
            16 => DataType::Double,
            17 => DataType::Timeval,
            18 => DataType::Time,
            19 => DataType::Topology,
            20 => DataType::Value,
            21 => DataType::Array,
            22 => DataType::Range,
            23 => DataType::App,
            24 => DataType::Info,
            25 => DataType::Buffer,
            26 => DataType::Keyval,
            27 => DataType::Modex,
            _ => return None,
        };
        Some(dt)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Seconds + microseconds timestamp pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeVal {
    /// Whole seconds.
    pub sec: i64,
    /// Microseconds within the second.
    pub usec: i32,
}

impl TimeVal {
    /// Create a timestamp pair.
    pub fn new(sec: i64, usec: i32) -> Self {
        TimeVal { sec, usec }
    }
}

/// A dynamically-typed exchange value.
///
/// One variant per payload-carrying discriminant. The variant *is* the
/// discriminant, so "no other field may be read while a differing
/// discriminant is set" holds by construction.
///
/// # Examples
///
/// ```
/// use attrex_core::{DataType, Status, Value};
///
/// let v = Value::from(3u32);
/// assert_eq!(v.data_type(), DataType::Uint32);
/// assert_eq!(v.as_uint32(), Ok(3));
/// assert_eq!(v.as_string(), Err(Status::TypeMismatch));
///
/// let mut v = Value::from("hostname-a");
/// v.release();
/// assert_eq!(v, Value::Undef);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absence marker; owns nothing, release is a no-op.
    #[default]
    Undef,
    /// A single byte.
    Byte(u8),
    /// Owned string.
    String(String),
    /// Size quantity.
    Size(usize),
    /// Process id.
    Pid(u32),
    /// Platform-native signed integer.
    Int(i32),
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// Platform-native unsigned integer.
    Uint(u32),
    /// 8-bit unsigned integer.
    Uint8(u8),
    /// 16-bit unsigned integer.
    Uint16(u16),
    /// 32-bit unsigned integer.
    Uint32(u32),
    /// 64-bit unsigned integer.
    Uint64(u64),
    /// Single-precision float.
    Float(f32),
    /// Double-precision float.
    Double(f64),
    /// Seconds + microseconds pair.
    Timeval(TimeVal),
    /// Absolute time.
    Time(DateTime<Utc>),
    /// Opaque topology handle.
    Topology(Vec<u8>),
    /// Nested value.
    Nested(Box<Value>),
    /// Homogeneous array of values.
    Array(ValueArray),
    /// Rank range record.
    Range(Range),
    /// App descriptor record.
    App(Box<App>),
    /// Info pair.
    Info(Box<Info>),
    /// Opaque byte buffer.
    Buffer(Vec<u8>),
    /// Modex record.
    Modex(Box<ModexData>),
}

// From impls for the payload types that map to exactly one discriminant.
// u8/i32/u32/usize map to several kinds and go through named constructors
// instead, keeping discriminant and static type in lock-step.
macro_rules! unambiguous_from {
    ($(($ty:ty, $variant:ident)),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

unambiguous_from!(
    (i8, Int8),
    (i16, Int16),
    (i64, Int64),
    (u16, Uint16),
    (u64, Uint64),
    (f32, Float),
    (f64, Double),
    (String, String),
    (TimeVal, Timeval),
    (DateTime<Utc>, Time),
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::Uint8(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint32(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Size(v)
    }
}

// Copy accessors for the fixed-width kinds. Each verifies the live
// discriminant and fails with TypeMismatch on any other variant.
macro_rules! scalar_accessors {
    ($(($as_fn:ident, $variant:ident, $ty:ty)),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!(
                    "Payload of a `", stringify!($variant),
                    "` value; `TypeMismatch` for any other discriminant."
                )]
                pub fn $as_fn(&self) -> Result<$ty> {
                    match self {
                        Value::$variant(v) => Ok(*v),
                        _ => Err(Status::TypeMismatch),
                    }
                }
            )*
        }
    };
}

scalar_accessors!(
    (as_byte, Byte, u8),
    (as_size, Size, usize),
    (as_pid, Pid, u32),
    (as_int, Int, i32),
    (as_int8, Int8, i8),
    (as_int16, Int16, i16),
    (as_int32, Int32, i32),
    (as_int64, Int64, i64),
    (as_uint, Uint, u32),
    (as_uint8, Uint8, u8),
    (as_uint16, Uint16, u16),
    (as_uint32, Uint32, u32),
    (as_uint64, Uint64, u64),
    (as_float, Float, f32),
    (as_double, Double, f64),
    (as_timeval, Timeval, TimeVal),
    (as_time, Time, DateTime<Utc>),
);

// Borrowing accessors for the owned-payload kinds.
macro_rules! ref_accessors {
    ($(($as_fn:ident, $variant:ident, $ty:ty, $conv:expr)),* $(,)?) => {
        impl Value {
            $(
                #[doc = concat!(
                    "Payload of a `", stringify!($variant),
                    "` value; `TypeMismatch` for any other discriminant."
                )]
                pub fn $as_fn(&self) -> Result<$ty> {
                    match self {
                        Value::$variant(v) => Ok($conv(v)),
                        _ => Err(Status::TypeMismatch),
                    }
                }
            )*
        }
    };
}

ref_accessors!(
    (as_string, String, &str, String::as_str),
    (as_topology, Topology, &[u8], Vec::as_slice),
    (as_buffer, Buffer, &[u8], Vec::as_slice),
    (as_nested, Nested, &Value, Box::as_ref),
    (as_array, Array, &ValueArray, |v| v),
    (as_range, Range, &Range, |v| v),
    (as_app, App, &App, Box::as_ref),
    (as_info, Info, &Info, Box::as_ref),
    (as_modex, Modex, &ModexData, Box::as_ref),
);

impl Value {
    /// The absence marker.
    pub fn undef() -> Self {
        Value::Undef
    }

    /// A single-byte value, distinct from [`Value::Uint8`].
    pub fn byte(v: u8) -> Self {
        Value::Byte(v)
    }

    /// A platform-native signed integer, distinct from [`Value::Int32`].
    pub fn int(v: i32) -> Self {
        Value::Int(v)
    }

    /// A platform-native unsigned integer, distinct from
    /// [`Value::Uint32`].
    pub fn uint(v: u32) -> Self {
        Value::Uint(v)
    }

    /// A process-id value.
    pub fn pid(v: u32) -> Self {
        Value::Pid(v)
    }

    /// An owned string value.
    pub fn string(v: impl Into<String>) -> Self {
        Value::String(v.into())
    }

    /// An opaque byte buffer value.
    pub fn buffer(v: impl Into<Vec<u8>>) -> Self {
        Value::Buffer(v.into())
    }

    /// An opaque topology handle value.
    pub fn topology(v: impl Into<Vec<u8>>) -> Self {
        Value::Topology(v.into())
    }

    /// Wrap a value inside a nested-value attribute.
    ///
    /// Fails with `InvalidVal` if the result would exceed [`MAX_DEPTH`].
    pub fn nested(inner: Value) -> Result<Self> {
        if inner.depth() + 1 > MAX_DEPTH {
            return Err(Status::InvalidVal);
        }
        Ok(Value::Nested(Box::new(inner)))
    }

    /// The live discriminant of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Undef => DataType::Undef,
            Value::Byte(_) => DataType::Byte,
            Value::String(_) => DataType::String,
            Value::Size(_) => DataType::Size,
            Value::Pid(_) => DataType::Pid,
            Value::Int(_) => DataType::Int,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Uint(_) => DataType::Uint,
            Value::Uint8(_) => DataType::Uint8,
            Value::Uint16(_) => DataType::Uint16,
            Value::Uint32(_) => DataType::Uint32,
            Value::Uint64(_) => DataType::Uint64,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Timeval(_) => DataType::Timeval,
            Value::Time(_) => DataType::Time,
            Value::Topology(_) => DataType::Topology,
            Value::Nested(_) => DataType::Value,
            Value::Array(_) => DataType::Array,
            Value::Range(_) => DataType::Range,
            Value::App(_) => DataType::App,
            Value::Info(_) => DataType::Info,
            Value::Buffer(_) => DataType::Buffer,
            Value::Modex(_) => DataType::Modex,
        }
    }

    /// True for the absence marker.
    pub fn is_undef(&self) -> bool {
        matches!(self, Value::Undef)
    }

    /// Overwrite this value.
    ///
    /// The previously owned payload, if any, is released before the new
    /// one is installed; the caller never has to free the old buffer.
    pub fn set(&mut self, new: Value) {
        *self = new;
    }

    /// Move the payload out, leaving the absence marker behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Release every owned buffer recursively and reset to `Undef`.
    ///
    /// Idempotent: releasing an already-released (or scalar) value is a
    /// no-op.
    pub fn release(&mut self) {
        *self = Value::Undef;
    }

    /// Nesting depth of this value: 0 for scalars and flat buffers, one
    /// more than the deepest constituent for composites.
    pub fn depth(&self) -> usize {
        match self {
            Value::Nested(inner) => 1 + inner.depth(),
            Value::Array(arr) => {
                1 + arr.iter().map(Value::depth).max().unwrap_or(0)
            }
            Value::Info(info) => 1 + info.value().depth(),
            Value::App(app) => {
                1 + app
                    .info_entries()
                    .iter()
                    .map(|i| i.value().depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Byte(v) => write!(f, "{:#04x}", v),
            Value::String(v) => write!(f, "{}", v),
            Value::Size(v) => write!(f, "{}", v),
            Value::Pid(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Int64(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Uint8(v) => write!(f, "{}", v),
            Value::Uint16(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Uint64(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Timeval(tv) => write!(f, "{}.{:06}s", tv.sec, tv.usec),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339()),
            Value::Topology(b) => write!(f, "topology[{} bytes]", b.len()),
            Value::Nested(inner) => write!(f, "value({})", inner),
            Value::Array(arr) => {
                write!(f, "array[{} x {}]", arr.len(), arr.elem_type())
            }
            Value::Range(r) => {
                write!(f, "range({}, {} ranks)", r.namespace(), r.ranks().len())
            }
            Value::App(app) => write!(f, "app({})", app.cmd()),
            Value::Info(info) => write!(f, "info({})", info.key()),
            Value::Buffer(b) => write!(f, "buffer[{} bytes]", b.len()),
            Value::Modex(m) => {
                write!(f, "modex({}:{}, {} bytes)", m.namespace(), m.rank(), m.blob().len())
            }
        }
    }
}
