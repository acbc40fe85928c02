//! Homogeneous value arrays
//!
//! An array carries the discriminant of its elements, the element count,
//! and ownership of the elements themselves. All elements share exactly
//! one discriminant; mixing is rejected when the array is built, so an
//! array in hand is always homogeneous.

use crate::status::{Result, Status};
use crate::value::{DataType, Value, MAX_DEPTH};
use serde::{Deserialize, Serialize};

/// A homogeneous, length-tagged sequence of [`Value`]s.
///
/// Used to express multi-valued attributes. An empty array allocates
/// nothing.
///
/// # Examples
///
/// ```
/// use attrex_core::{DataType, Status, Value, ValueArray};
///
/// let arr = ValueArray::build(
///     DataType::Uint32,
///     vec![Value::from(1u32), Value::from(2u32)],
/// )
/// .unwrap();
/// assert_eq!(arr.len(), 2);
/// assert_eq!(arr.element_at(1).unwrap().as_uint32(), Ok(2));
/// assert_eq!(arr.element_at(2).unwrap_err(), Status::BadParam);
///
/// let mixed = ValueArray::build(
///     DataType::Uint32,
///     vec![Value::from(1u32), Value::from("nope")],
/// );
/// assert_eq!(mixed.unwrap_err(), Status::InvalidVal);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueArray {
    elem_type: DataType,
    elems: Vec<Value>,
}

impl Default for ValueArray {
    fn default() -> Self {
        ValueArray {
            elem_type: DataType::Undef,
            elems: Vec::new(),
        }
    }
}

impl ValueArray {
    /// An empty array of the given element type.
    ///
    /// No allocation is performed; `count == 0` requires none.
    pub fn empty(elem_type: DataType) -> Self {
        ValueArray {
            elem_type,
            elems: Vec::new(),
        }
    }

    /// Build an array, taking ownership of the elements.
    ///
    /// Fails with `UnknownDataType` for element types that cannot carry
    /// elements (`Undef`, reserved `Keyval`), with `InvalidVal` if any
    /// element's discriminant differs from `elem_type`, and with
    /// `InvalidVal` if the result would nest past [`MAX_DEPTH`]. On
    /// failure nothing is kept; the input is dropped whole.
    pub fn build(elem_type: DataType, elems: Vec<Value>) -> Result<Self> {
        if matches!(elem_type, DataType::Undef | DataType::Keyval) {
            return Err(Status::UnknownDataType);
        }
        if elems.iter().any(|e| e.data_type() != elem_type) {
            return Err(Status::InvalidVal);
        }
        let elem_depth = elems.iter().map(Value::depth).max().unwrap_or(0);
        if elem_depth + 1 > MAX_DEPTH {
            return Err(Status::InvalidVal);
        }
        Ok(ValueArray { elem_type, elems })
    }

    /// The shared discriminant of the elements.
    pub fn elem_type(&self) -> DataType {
        self.elem_type
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// True iff the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The element at `index`, or `BadParam` when `index >= count`.
    pub fn element_at(&self, index: usize) -> Result<&Value> {
        self.elems.get(index).ok_or(Status::BadParam)
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elems.iter()
    }

    /// Release every element recursively, then the backing buffer.
    ///
    /// Leaves an empty `Undef`-typed array; idempotent.
    pub fn release(&mut self) {
        self.elems = Vec::new();
        self.elem_type = DataType::Undef;
    }
}

impl<'a> IntoIterator for &'a ValueArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl IntoIterator for ValueArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}
