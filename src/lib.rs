//! # Vuckt - Small Fixed-Size Vector Math
//!
//! Vuckt provides integer and floating-point vectors, square matrices,
//! quaternions and rotors as plain value types with a fixed memory layout.
//! Every aggregate converts losslessly to and from its glam SIMD counterpart,
//! so it can be handed to SIMD code without reinterpretation.
//!
//! ## Core Features
//!
//! - **Vectors**: `Int2/3/4` (wrapping arithmetic) and `Float2/3/4` (IEEE 754)
//! - **Matrices**: row-major `Float3x3` and `Float4x4`
//! - **Rotations**: `Quaternion` and `Rotor`
//! - **Interop**: glam SIMD and engine types, variable-length vectors, value
//!   boxing with a bincode archive, plus optional `mint` and `kurbo` support
//!
//! ## Quick Start
//!
//! ```rust
//! use vuckt::{BoxedValue, Float3, Int4, Quaternion, SimdConvert};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Integer lanes wrap instead of trapping
//! let (sum, overflowed) = Int4::splat(i32::MAX).overflowing_add(Int4::ONE);
//! assert!(overflowed);
//! assert_eq!(sum, Int4::splat(i32::MIN));
//!
//! // Scalars broadcast to every lane
//! let v = Float3::new(1.0, 2.0, 3.0) * 2.0;
//!
//! // Rotate a quarter turn around Z
//! let q = Quaternion::from_angle_axis(std::f32::consts::FRAC_PI_2, Float3::Z);
//! let rotated = q.rotate(Float3::X);
//! assert!((rotated - Float3::Y).length() < 1e-6);
//!
//! // Round trip through the SIMD type keeps every bit
//! let simd = v.to_simd();
//! assert_eq!(Float3::from_simd(simd), v);
//!
//! // Box, archive and restore
//! let bytes = BoxedValue::from(v).to_bytes()?;
//! let restored: Float3 = BoxedValue::from_bytes(&bytes)?.unbox()?;
//! assert_eq!(restored, v);
//! # Ok(())
//! # }
//! ```

pub mod boxing;
pub mod error;
pub mod interop;
pub mod numerics;

pub use boxing::{BoxedValue, ValueKind};
pub use error::{ConversionError, Result};
pub use interop::{SimdConvert, SimdFloat3x3, SimdFloat4x4};
pub use numerics::*;
