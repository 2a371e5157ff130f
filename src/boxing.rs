// src/boxing.rs
//! Heterogeneous value boxing.
//!
//! A [`BoxedValue`] holds any one aggregate by value and remembers which kind
//! it is. Unboxing into the wrong kind is an error, never a reinterpretation.
//! Boxes can be archived to bytes with `bincode`; every lane keeps its exact
//! bit pattern through the archive.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConversionError, Result};
use crate::numerics::{
    Float2, Float3, Float3x3, Float4, Float4x4, Int2, Int3, Int4, Quaternion, Rotor,
};

/// Which aggregate a [`BoxedValue`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int2,
    Int3,
    Int4,
    Float2,
    Float3,
    Float4,
    Float3x3,
    Float4x4,
    Quaternion,
    Rotor,
}

/// One aggregate, boxed by value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoxedValue {
    Int2(Int2),
    Int3(Int3),
    Int4(Int4),
    Float2(Float2),
    Float3(Float3),
    Float4(Float4),
    Float3x3(Float3x3),
    Float4x4(Float4x4),
    Quaternion(Quaternion),
    Rotor(Rotor),
}

impl BoxedValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            BoxedValue::Int2(_) => ValueKind::Int2,
            BoxedValue::Int3(_) => ValueKind::Int3,
            BoxedValue::Int4(_) => ValueKind::Int4,
            BoxedValue::Float2(_) => ValueKind::Float2,
            BoxedValue::Float3(_) => ValueKind::Float3,
            BoxedValue::Float4(_) => ValueKind::Float4,
            BoxedValue::Float3x3(_) => ValueKind::Float3x3,
            BoxedValue::Float4x4(_) => ValueKind::Float4x4,
            BoxedValue::Quaternion(_) => ValueKind::Quaternion,
            BoxedValue::Rotor(_) => ValueKind::Rotor,
        }
    }

    /// Unboxes into `T`, failing with `KindMismatch` if the box holds
    /// another kind.
    pub fn unbox<T>(self) -> Result<T>
    where
        T: TryFrom<BoxedValue, Error = ConversionError>,
    {
        T::try_from(self)
    }

    /// Archives the box with the standard bincode configuration.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| ConversionError::Encode(e.to_string()))
    }

    /// Restores a box archived by [`BoxedValue::to_bytes`]. The whole input
    /// must be consumed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (value, read): (Self, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard()).map_err(|e| {
                warn!(error = %e, len = bytes.len(), "failed to decode boxed value");
                ConversionError::Decode(e.to_string())
            })?;

        if read != bytes.len() {
            warn!(read, len = bytes.len(), "trailing bytes after boxed value");
            return Err(ConversionError::Decode(format!(
                "{} trailing bytes after boxed {:?}",
                bytes.len() - read,
                value.kind()
            )));
        }
        Ok(value)
    }
}

macro_rules! boxing {
    ($($name:ident),+ $(,)?) => {
        $(
            impl From<$name> for BoxedValue {
                fn from(value: $name) -> Self {
                    BoxedValue::$name(value)
                }
            }

            impl TryFrom<BoxedValue> for $name {
                type Error = ConversionError;

                fn try_from(boxed: BoxedValue) -> Result<Self> {
                    match boxed {
                        BoxedValue::$name(value) => Ok(value),
                        other => {
                            debug!(
                                expected = ?ValueKind::$name,
                                found = ?other.kind(),
                                "boxed value kind mismatch"
                            );
                            Err(ConversionError::KindMismatch {
                                expected: ValueKind::$name,
                                found: other.kind(),
                            })
                        }
                    }
                }
            }
        )+
    };
}

boxing!(Int2, Int3, Int4, Float2, Float3, Float4, Float3x3, Float4x4, Quaternion, Rotor);
