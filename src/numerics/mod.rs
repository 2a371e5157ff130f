// src/numerics/mod.rs
// Value types: vectors, matrices, quaternions and rotors, one file per family
// under `types`, re-exported flat.

pub mod types {
    pub mod matrix;
    pub mod quaternion;
    pub mod rotor;
    pub mod traits;
    pub mod vector;
}

pub use types::matrix::{Float3x3, Float4x4};
pub use types::quaternion::{CubicMethod, Quaternion, RotationOrder, SlerpMethod};
pub use types::rotor::Rotor;
pub use types::traits::{FloatScalar, IntScalar, Scalar};
pub use types::vector::{Float2, Float3, Float4, Int2, Int3, Int4};
