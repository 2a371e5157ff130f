// src/numerics/types/matrix.rs
// Row-major Float3x3 / Float4x4 with SIMD-width rows.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use super::quaternion::{Quaternion, RotationOrder};
use super::vector::{Float3, Float4};

/// Operations shared by both matrix sizes, written against the row vectors.
///
/// All arithmetic here is element-wise; there is deliberately no matrix
/// product, transpose or inverse.
macro_rules! impl_matrix_common {
    ($name:ident, $row:ident, $n:literal) => {
        impl $name {
            /// Row `index` as a vector. Panics if `index >= N`.
            #[inline]
            pub fn row(&self, index: usize) -> $row {
                self.row_vectors()[index]
            }

            /// Column `index` as a vector. Panics if `index >= N`.
            pub fn col(&self, index: usize) -> $row {
                let rows = self.row_vectors();
                $row::from(core::array::from_fn::<f32, $n, _>(|r| rows[r][index]))
            }

            /// Build from column vectors.
            pub fn from_cols_array(cols: [$row; $n]) -> Self {
                Self::from_row_vectors(core::array::from_fn(|r| {
                    $row::from(core::array::from_fn::<f32, $n, _>(|c| cols[c][r]))
                }))
            }

            /// Rows as nested arrays, `array[row][col]`.
            pub fn to_rows_array(&self) -> [[f32; $n]; $n] {
                self.row_vectors().map(|r| r.to_array())
            }

            pub fn from_rows_array(rows: [[f32; $n]; $n]) -> Self {
                Self::from_row_vectors(rows.map($row::from))
            }

            /// Matrix with `diagonal` on the main diagonal and zero elsewhere.
            pub fn from_diagonal(diagonal: $row) -> Self {
                Self::from_rows_array(core::array::from_fn(|r| {
                    core::array::from_fn(|c| if r == c { diagonal[r] } else { 0.0 })
                }))
            }

            /// Outer product `a ⊗ b`: element `(i, j)` is `a[i] * b[j]`, so
            /// column `j` equals `a * b[j]`.
            pub fn outer_product(a: $row, b: $row) -> Self {
                Self::from_cols_array(core::array::from_fn(|j| a * b[j]))
            }

            pub fn is_finite(&self) -> bool {
                self.row_vectors().iter().all(|r| r.is_finite())
            }

            /// True when any element is NaN.
            pub fn is_nan(&self) -> bool {
                self.row_vectors().iter().any(|r| r.is_nan())
            }

            fn zip_rows(self, rhs: Self, f: impl Fn($row, $row) -> $row) -> Self {
                let (a, b) = (self.row_vectors(), rhs.row_vectors());
                Self::from_row_vectors(core::array::from_fn(|i| f(a[i], b[i])))
            }

            fn map_rows(self, f: impl Fn($row) -> $row) -> Self {
                Self::from_row_vectors(self.row_vectors().map(f))
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                self.zip_rows(rhs, |a, b| a + b)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                self.zip_rows(rhs, |a, b| a - b)
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                self.map_rows(|r| -r)
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                self.map_rows(|r| r * rhs)
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, rhs: $name) -> $name {
                rhs.map_rows(|r| self * r)
            }
        }

        impl MulAssign<f32> for $name {
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl Div<f32> for $name {
            type Output = Self;

            fn div(self, rhs: f32) -> Self {
                self.map_rows(|r| r / rhs)
            }
        }

        impl DivAssign<f32> for $name {
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.row_vectors() == other.row_vectors()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("rows", &self.to_rows_array())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(\n")?;
                for row in self.to_rows_array() {
                    f.write_str("\t")?;
                    for (c, value) in row.iter().enumerate() {
                        if c > 0 {
                            f.write_str(", ")?;
                        }
                        fmt::Display::fmt(value, f)?;
                    }
                    f.write_str("\n")?;
                }
                f.write_str(")")
            }
        }

        impl From<[[f32; $n]; $n]> for $name {
            fn from(rows: [[f32; $n]; $n]) -> Self {
                Self::from_rows_array(rows)
            }
        }

        impl From<$name> for [[f32; $n]; $n] {
            fn from(m: $name) -> Self {
                m.to_rows_array()
            }
        }

        // Serialized as nested row arrays.
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.to_rows_array().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let rows = <[[f32; $n]; $n]>::deserialize(deserializer)?;
                Ok(Self::from_rows_array(rows))
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                let (a, b) = (self.row_vectors(), other.row_vectors());
                a.iter().zip(b.iter()).all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                let (a, b) = (self.row_vectors(), other.row_vectors());
                a.iter()
                    .zip(b.iter())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }

        impl UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                4
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                let (a, b) = (self.row_vectors(), other.row_vectors());
                a.iter().zip(b.iter()).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
            }
        }
    };
}

/// 3x3 float matrix, `m{row}{col}`.
///
/// Each row is padded to 16 bytes so that the whole matrix has the layout of
/// three SIMD rows (48 bytes). The padding lanes are private and always zero.
#[derive(Copy, Clone, Default)]
#[repr(C, align(16))]
pub struct Float3x3 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    _pad0: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    _pad1: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    _pad2: f32,
}

impl Float3x3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);

    /// Construct from nine elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32,
        m10: f32, m11: f32, m12: f32,
        m20: f32, m21: f32, m22: f32,
    ) -> Self {
        Self {
            m00, m01, m02, _pad0: 0.0,
            m10, m11, m12, _pad1: 0.0,
            m20, m21, m22, _pad2: 0.0,
        }
    }

    /// Construct a new matrix from 3 rows
    #[inline]
    pub const fn from_rows(r0: Float3, r1: Float3, r2: Float3) -> Self {
        Self::new(r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z)
    }

    /// Construct a new matrix from 3 columns
    #[inline]
    pub const fn from_cols(c0: Float3, c1: Float3, c2: Float3) -> Self {
        Self::new(c0.x, c1.x, c2.x, c0.y, c1.y, c2.y, c0.z, c1.z, c2.z)
    }

    #[inline]
    pub const fn row_vectors(&self) -> [Float3; 3] {
        [
            Float3::new(self.m00, self.m01, self.m02),
            Float3::new(self.m10, self.m11, self.m12),
            Float3::new(self.m20, self.m21, self.m22),
        ]
    }

    #[inline]
    pub const fn from_row_vectors(rows: [Float3; 3]) -> Self {
        Self::from_rows(rows[0], rows[1], rows[2])
    }

    /// Rotation matrix for a unit quaternion.
    pub fn from_quaternion(q: Quaternion) -> Self {
        let (x, y, z, w) = (q.ix, q.iy, q.iz, q.r);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Self::new(
            1.0 - (yy + zz), xy - wz, xz + wy,
            xy + wz, 1.0 - (xx + zz), yz - wx,
            xz - wy, yz + wx, 1.0 - (xx + yy),
        )
    }

    /// Rotation of `angle` radians around `axis`.
    pub fn from_angle_axis(angle: f32, axis: Float3) -> Self {
        Self::from_quaternion(Quaternion::from_angle_axis(angle, axis))
    }

    /// Per-axis rotations by `angles` composed in `order`, first axis first.
    pub fn from_euler_angles(angles: Float3, order: RotationOrder) -> Self {
        Self::from_quaternion(Quaternion::from_euler_angles(angles, order))
    }
}

impl_matrix_common!(Float3x3, Float3, 3);

/// 4x4 float matrix, `m{row}{col}`, 64 bytes.
#[derive(Copy, Clone, Default)]
#[repr(C, align(16))]
pub struct Float4x4 {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m03: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m20: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m30: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Float4x4 {
    pub const ZERO: Self = Self::from_rows(Float4::ZERO, Float4::ZERO, Float4::ZERO, Float4::ZERO);
    pub const IDENTITY: Self = Self::from_rows(Float4::X, Float4::Y, Float4::Z, Float4::W);

    /// Construct from sixteen elements in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        }
    }

    #[inline]
    pub const fn from_rows(r0: Float4, r1: Float4, r2: Float4, r3: Float4) -> Self {
        Self::new(
            r0.x, r0.y, r0.z, r0.w,
            r1.x, r1.y, r1.z, r1.w,
            r2.x, r2.y, r2.z, r2.w,
            r3.x, r3.y, r3.z, r3.w,
        )
    }

    #[inline]
    pub const fn from_cols(c0: Float4, c1: Float4, c2: Float4, c3: Float4) -> Self {
        Self::new(
            c0.x, c1.x, c2.x, c3.x,
            c0.y, c1.y, c2.y, c3.y,
            c0.z, c1.z, c2.z, c3.z,
            c0.w, c1.w, c2.w, c3.w,
        )
    }

    #[inline]
    pub const fn row_vectors(&self) -> [Float4; 4] {
        [
            Float4::new(self.m00, self.m01, self.m02, self.m03),
            Float4::new(self.m10, self.m11, self.m12, self.m13),
            Float4::new(self.m20, self.m21, self.m22, self.m23),
            Float4::new(self.m30, self.m31, self.m32, self.m33),
        ]
    }

    #[inline]
    pub const fn from_row_vectors(rows: [Float4; 4]) -> Self {
        Self::from_rows(rows[0], rows[1], rows[2], rows[3])
    }

    /// Homogeneous rotation matrix for a unit quaternion.
    pub fn from_quaternion(q: Quaternion) -> Self {
        Self::from_mat3(Float3x3::from_quaternion(q))
    }

    /// Homogeneous matrix with `m` as the upper-left block and identity
    /// elsewhere.
    pub fn from_mat3(m: Float3x3) -> Self {
        let [r0, r1, r2] = m.row_vectors();
        Self::from_rows(r0.extend(0.0), r1.extend(0.0), r2.extend(0.0), Float4::W)
    }

    pub fn from_angle_axis(angle: f32, axis: Float3) -> Self {
        Self::from_mat3(Float3x3::from_angle_axis(angle, axis))
    }

    pub fn from_euler_angles(angles: Float3, order: RotationOrder) -> Self {
        Self::from_mat3(Float3x3::from_euler_angles(angles, order))
    }

    /// Non-uniform scale along the three axes.
    pub fn from_scale(scale: Float3) -> Self {
        Self::from_diagonal(scale.extend(1.0))
    }

    /// Translation, stored in the last column.
    pub fn from_translation(translation: Float3) -> Self {
        Self::from_cols(Float4::X, Float4::Y, Float4::Z, translation.extend(1.0))
    }

    /// Transform that scales a point, then rotates it by the unit quaternion
    /// `rotation`, then translates it.
    pub fn from_scale_rotation_translation(scale: Float3, rotation: Quaternion, translation: Float3) -> Self {
        let r = Float3x3::from_quaternion(rotation);
        Self::from_cols(
            (r.col(0) * scale.x).extend(0.0),
            (r.col(1) * scale.y).extend(0.0),
            (r.col(2) * scale.z).extend(0.0),
            translation.extend(1.0),
        )
    }

    /// Upper-left 3x3 block.
    pub fn truncate(&self) -> Float3x3 {
        let [r0, r1, r2, _] = self.row_vectors();
        Float3x3::from_rows(r0.truncate(), r1.truncate(), r2.truncate())
    }
}

impl_matrix_common!(Float4x4, Float4, 4);
