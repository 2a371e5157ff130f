// src/interop/mod.rs
//! Conversions between the aggregates and external representations.
//!
//! - [`simd`]: the glam SIMD types. Layout-compatible, bit-exact round trips.
//! - [`engine`]: glam host engine types (`Vec3`, `Mat3`, `Mat4`, `DMat4`,
//!   `DQuat`). Element-wise, by meaning.
//! - [`slice`]: variable-length vectors. The element count must match.
//! - `mint` and `kurbo` conversions behind the features of the same name.

pub mod engine;
pub mod simd;
pub mod slice;

#[cfg(feature = "kurbo")]
pub mod kurbo;
#[cfg(feature = "mint")]
pub mod mint;

pub use simd::{SimdConvert, SimdFloat3x3, SimdFloat4x4};
