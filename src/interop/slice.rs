// src/interop/slice.rs
// Variable-length vector conversions (`&[T]`, `Vec<T>`).
//
// An aggregate only accepts exactly as many elements as it has lanes. The
// panicking `from_slice` treats a mismatch as a caller bug; `TryFrom` reports
// it as a `ConversionError` for data that has not been validated yet.

use tracing::error;

use crate::error::ConversionError;
use crate::numerics::{
    Float2, Float3, Float3x3, Float4, Float4x4, Int2, Int3, Int4, Quaternion, Rotor,
};

fn length_mismatch<T>(expected: usize, actual: usize) -> ConversionError {
    ConversionError::LengthMismatch {
        target: short_type_name::<T>(),
        expected,
        actual,
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

macro_rules! slice_conversion {
    ($name:ident, $t:ty, $n:expr, |$array:ident| $build:expr, |$value:ident| $flatten:expr) => {
        impl $name {
            /// Builds the aggregate from exactly the right number of elements.
            ///
            /// # Panics
            ///
            /// Panics if `slice.len()` differs from the element count. Use
            /// `TryFrom<&[_]>` to handle the mismatch instead.
            pub fn from_slice(slice: &[$t]) -> Self {
                match Self::try_from(slice) {
                    Ok(value) => value,
                    Err(err) => {
                        error!(%err, "rejecting variable-length vector");
                        panic!("precondition violated: {err}");
                    }
                }
            }

            /// The elements as a variable-length vector.
            pub fn to_vec(&self) -> Vec<$t> {
                let $value = *self;
                $flatten
            }
        }

        impl TryFrom<&[$t]> for $name {
            type Error = ConversionError;

            fn try_from(slice: &[$t]) -> Result<Self, ConversionError> {
                let $array: [$t; $n] = slice
                    .try_into()
                    .map_err(|_| length_mismatch::<$name>($n, slice.len()))?;
                Ok($build)
            }
        }

        impl TryFrom<Vec<$t>> for $name {
            type Error = ConversionError;

            fn try_from(vec: Vec<$t>) -> Result<Self, ConversionError> {
                Self::try_from(vec.as_slice())
            }
        }

        impl From<$name> for Vec<$t> {
            fn from(value: $name) -> Self {
                value.to_vec()
            }
        }
    };
}

slice_conversion!(Int2, i32, 2, |a| Int2::from(a), |v| v.to_array().to_vec());
slice_conversion!(Int3, i32, 3, |a| Int3::from(a), |v| v.to_array().to_vec());
slice_conversion!(Int4, i32, 4, |a| Int4::from(a), |v| v.to_array().to_vec());
slice_conversion!(Float2, f32, 2, |a| Float2::from(a), |v| v.to_array().to_vec());
slice_conversion!(Float3, f32, 3, |a| Float3::from(a), |v| v.to_array().to_vec());
slice_conversion!(Float4, f32, 4, |a| Float4::from(a), |v| v.to_array().to_vec());
slice_conversion!(Quaternion, f32, 4, |a| Quaternion::from(a), |q| q.to_array().to_vec());
slice_conversion!(Rotor, f32, 4, |a| Rotor::from(a), |r| r.to_array().to_vec());

// Matrices take their elements in row-major order.
slice_conversion!(
    Float3x3,
    f32,
    9,
    |a| Float3x3::from_rows_array(core::array::from_fn(|r| core::array::from_fn(|c| a[r * 3 + c]))),
    |m| m.to_rows_array().concat()
);
slice_conversion!(
    Float4x4,
    f32,
    16,
    |a| Float4x4::from_rows_array(core::array::from_fn(|r| core::array::from_fn(|c| a[r * 4 + c]))),
    |m| m.to_rows_array().concat()
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_converts() {
        assert_eq!(Float3::from_slice(&[1.0, 2.0, 3.0]), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(Int2::try_from(vec![4, -5]), Ok(Int2::new(4, -5)));
        assert_eq!(Rotor::from_slice(&[0.0, 0.0, 0.0, 1.0]), Rotor::IDENTITY);
    }

    #[test]
    fn test_mismatch_reports_error() {
        let err = Float3::try_from(&[1.0f32, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            ConversionError::LengthMismatch { target: "Float3", expected: 3, actual: 2 }
        );

        let err = Int4::try_from(vec![1, 2, 3, 4, 5]).unwrap_err();
        assert!(matches!(err, ConversionError::LengthMismatch { expected: 4, actual: 5, .. }));
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_from_slice_panics_on_short_input() {
        let _ = Float3::from_slice(&[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_from_slice_panics_on_long_input() {
        let _ = Quaternion::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_matrix_row_major_order() {
        let elements: Vec<f32> = (0..9).map(|i| i as f32).collect();
        let m = Float3x3::from_slice(&elements);
        assert_eq!(m.row(1), Float3::new(3.0, 4.0, 5.0));
        assert_eq!(m.to_vec(), elements);

        let elements: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let m = Float4x4::try_from(elements.clone()).unwrap();
        assert_eq!(m.m31, 13.0);
        assert_eq!(Vec::from(m), elements);

        assert!(Float4x4::try_from(&elements[..9]).is_err());
    }

    #[test]
    fn test_to_vec() {
        assert_eq!(Int3::new(1, 2, 3).to_vec(), vec![1, 2, 3]);
        assert_eq!(Vec::<f32>::from(Float2::new(0.5, -0.5)), vec![0.5, -0.5]);
    }
}
