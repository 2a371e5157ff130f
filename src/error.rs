// src/error.rs
// Errors for the fallible conversion paths.

use crate::boxing::ValueKind;

/// Errors that can occur when converting into an aggregate from a dynamically
/// sized or dynamically typed source
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Length mismatch: {target} needs exactly {expected} elements, got {actual}")]
    LengthMismatch {
        target: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Kind mismatch: expected a boxed {expected:?}, found {found:?}")]
    KindMismatch { expected: ValueKind, found: ValueKind },

    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ConversionError::LengthMismatch { target: "Float3", expected: 3, actual: 2 };
        assert_eq!(e.to_string(), "Length mismatch: Float3 needs exactly 3 elements, got 2");

        let e = ConversionError::KindMismatch {
            expected: ValueKind::Int2,
            found: ValueKind::Float2,
        };
        assert_eq!(e.to_string(), "Kind mismatch: expected a boxed Int2, found Float2");
    }
}
