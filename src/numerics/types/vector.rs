// src/numerics/types/vector.rs
// Fixed-size integer and float vectors: Int2/Int3/Int4, Float2/Float3/Float4.
//
// Every lane operation goes through `Scalar`, so integer vectors wrap exactly
// like SIMD lanes do and float vectors follow IEEE-754.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use super::traits::{FloatScalar, IntScalar, Scalar};

/// Expands to the lane type; lets tuple types be spelled once per field.
macro_rules! lane_ty {
    ($_field:ident, $t:ty) => {
        $t
    };
}

macro_rules! vector_binop {
    ($name:ident, $op:ident, $f:ident, $lane:ident, $op_assign:ident, $f_assign:ident, [$($field:ident),+]) => {
        impl $op for $name {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: Self) -> Self {
                Self { $($field: self.$field.$lane(rhs.$field)),+ }
            }
        }

        impl $op_assign for $name {
            #[inline]
            fn $f_assign(&mut self, rhs: Self) {
                *self = $op::$f(*self, rhs);
            }
        }
    };
}

/// Scalar broadcast in both operand orders: `v op s` and `s op v`.
macro_rules! vector_scalar_binop {
    ($name:ident, $t:ty, $op:ident, $f:ident, $lane:ident, $op_assign:ident, $f_assign:ident, [$($field:ident),+]) => {
        impl $op<$t> for $name {
            type Output = Self;

            #[inline]
            fn $f(self, rhs: $t) -> Self {
                Self { $($field: self.$field.$lane(rhs)),+ }
            }
        }

        impl $op<$name> for $t {
            type Output = $name;

            #[inline]
            fn $f(self, rhs: $name) -> $name {
                $name { $($field: self.$lane(rhs.$field)),+ }
            }
        }

        impl $op_assign<$t> for $name {
            #[inline]
            fn $f_assign(&mut self, rhs: $t) {
                *self = $op::$f(*self, rhs);
            }
        }
    };
}

macro_rules! impl_vector {
    ($name:ident, $t:ty, $n:literal, [$($field:ident : $idx:tt : $with:ident),+]) => {
        impl $name {
            /// All lanes zero.
            pub const ZERO: Self = Self::splat(<$t as Scalar>::ZERO);
            /// All lanes one.
            pub const ONE: Self = Self::splat(<$t as Scalar>::ONE);
            /// All lanes negative one.
            pub const NEG_ONE: Self = Self::splat(<$t as Scalar>::NEG_ONE);
            /// Number of lanes.
            pub const LANES: usize = $n;

            #[inline]
            pub const fn new($($field: $t),+) -> Self {
                Self { $($field),+ }
            }

            /// Every lane set to `value`.
            #[inline]
            pub const fn splat(value: $t) -> Self {
                Self { $($field: value),+ }
            }

            #[inline]
            pub const fn to_array(&self) -> [$t; $n] {
                [$(self.$field),+]
            }

            $(
                /// Copy of `self` with one lane replaced.
                #[inline]
                pub fn $with(self, $field: $t) -> Self {
                    Self { $field, ..self }
                }
            )+

            /// Lane-wise minimum.
            #[inline]
            pub fn min(self, rhs: Self) -> Self {
                Self { $($field: self.$field.lane_min(rhs.$field)),+ }
            }

            /// Lane-wise maximum.
            #[inline]
            pub fn max(self, rhs: Self) -> Self {
                Self { $($field: self.$field.lane_max(rhs.$field)),+ }
            }

            /// Lane-wise `min(max(self, lo), hi)`. Never panics, even when a
            /// lane of `lo` exceeds the matching lane of `hi`.
            #[inline]
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                self.max(lo).min(hi)
            }

            pub fn min_element(self) -> $t {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, Scalar::lane_min)
            }

            pub fn max_element(self) -> $t {
                let [first, rest @ ..] = self.to_array();
                rest.into_iter().fold(first, Scalar::lane_max)
            }

            /// True when every lane of `self` is less than the matching lane
            /// of `rhs`. This is a partial order, not a lexicographic one.
            #[inline]
            pub fn all_lt(self, rhs: Self) -> bool {
                true $(&& self.$field < rhs.$field)+
            }

            #[inline]
            pub fn all_le(self, rhs: Self) -> bool {
                true $(&& self.$field <= rhs.$field)+
            }

            #[inline]
            pub fn all_gt(self, rhs: Self) -> bool {
                true $(&& self.$field > rhs.$field)+
            }

            #[inline]
            pub fn all_ge(self, rhs: Self) -> bool {
                true $(&& self.$field >= rhs.$field)+
            }
        }

        vector_binop!($name, Add, add, lane_add, AddAssign, add_assign, [$($field),+]);
        vector_binop!($name, Sub, sub, lane_sub, SubAssign, sub_assign, [$($field),+]);
        vector_binop!($name, Mul, mul, lane_mul, MulAssign, mul_assign, [$($field),+]);
        vector_binop!($name, Div, div, lane_div, DivAssign, div_assign, [$($field),+]);
        vector_binop!($name, Rem, rem, lane_rem, RemAssign, rem_assign, [$($field),+]);

        vector_scalar_binop!($name, $t, Mul, mul, lane_mul, MulAssign, mul_assign, [$($field),+]);
        vector_scalar_binop!($name, $t, Div, div, lane_div, DivAssign, div_assign, [$($field),+]);
        vector_scalar_binop!($name, $t, Rem, rem, lane_rem, RemAssign, rem_assign, [$($field),+]);

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($field: self.$field.lane_neg()),+ }
            }
        }

        impl Index<usize> for $name {
            type Output = $t;

            fn index(&self, index: usize) -> &$t {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} lanes but the index is {}",
                        stringify!($name), $n, index
                    ),
                }
            }
        }

        impl IndexMut<usize> for $name {
            fn index_mut(&mut self, index: usize) -> &mut $t {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} lanes but the index is {}",
                        stringify!($name), $n, index
                    ),
                }
            }
        }

        // Conversions between the vector and arrays [T; N]

        impl From<[$t; $n]> for $name {
            #[inline]
            fn from(array: [$t; $n]) -> Self {
                Self { $($field: array[$idx]),+ }
            }
        }

        impl From<&[$t; $n]> for $name {
            #[inline]
            fn from(array: &[$t; $n]) -> Self {
                Self { $($field: array[$idx]),+ }
            }
        }

        impl From<$name> for [$t; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl From<&$name> for [$t; $n] {
            #[inline]
            fn from(v: &$name) -> Self {
                v.to_array()
            }
        }

        // Conversions between the vector and tuples

        impl From<($(lane_ty!($field, $t),)+)> for $name {
            #[inline]
            fn from(tuple: ($(lane_ty!($field, $t),)+)) -> Self {
                Self { $($field: tuple.$idx),+ }
            }
        }

        impl From<&($(lane_ty!($field, $t),)+)> for $name {
            #[inline]
            fn from(tuple: &($(lane_ty!($field, $t),)+)) -> Self {
                Self { $($field: tuple.$idx),+ }
            }
        }

        impl From<$name> for ($(lane_ty!($field, $t),)+) {
            #[inline]
            fn from(v: $name) -> Self {
                ($(v.$field,)+)
            }
        }

        impl From<&$name> for ($(lane_ty!($field, $t),)+) {
            #[inline]
            fn from(v: &$name) -> Self {
                ($(v.$field,)+)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                for (i, lane) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(lane, f)?;
                }
                f.write_str(")")
            }
        }

        // Serialized as a plain tuple of lanes.
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                ($(&self.$field,)+).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let ($($field,)+) = <($(lane_ty!($field, $t),)+)>::deserialize(deserializer)?;
                Ok(Self { $($field),+ })
            }
        }
    };
}

macro_rules! impl_int_vector {
    ($name:ident, $float:ident, [$($field:ident),+]) => {
        impl $name {
            /// Lane-wise wrapping add plus whether any lane overflowed.
            pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                let mut overflow = false;
                let value = Self {
                    $($field: {
                        let (lane, o) = self.$field.overflowing_lane_add(rhs.$field);
                        overflow |= o;
                        lane
                    }),+
                };
                (value, overflow)
            }

            pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                let mut overflow = false;
                let value = Self {
                    $($field: {
                        let (lane, o) = self.$field.overflowing_lane_sub(rhs.$field);
                        overflow |= o;
                        lane
                    }),+
                };
                (value, overflow)
            }

            pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                let mut overflow = false;
                let value = Self {
                    $($field: {
                        let (lane, o) = self.$field.overflowing_lane_mul(rhs.$field);
                        overflow |= o;
                        lane
                    }),+
                };
                (value, overflow)
            }

            /// Lane-wise division. A zero divisor does not panic here: the
            /// lane keeps its dividend and the overflow flag is set.
            pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
                let mut overflow = false;
                let value = Self {
                    $($field: {
                        let (lane, o) = self.$field.overflowing_lane_div(rhs.$field);
                        overflow |= o;
                        lane
                    }),+
                };
                (value, overflow)
            }

            /// Lane-wise remainder, reporting a zero divisor like `overflowing_div`.
            pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
                let mut overflow = false;
                let value = Self {
                    $($field: {
                        let (lane, o) = self.$field.overflowing_lane_rem(rhs.$field);
                        overflow |= o;
                        lane
                    }),+
                };
                (value, overflow)
            }

            /// Converts each float lane, saturating at the `i32` range; NaN
            /// lanes become zero.
            pub fn from_float_saturating(v: $float) -> Self {
                Self { $($field: IntScalar::saturating_from_f32(v.$field)),+ }
            }

            /// Sum of the absolute lane values (taxicab length). Absolute values
            /// are taken as `u32` so `i32::MIN` counts as 2³¹; the sum wraps.
            pub fn l1_norm(self) -> u32 {
                0u32 $(.wrapping_add(self.$field.unsigned_abs()))+
            }

            /// Largest absolute lane value (uniform norm).
            pub fn linf_norm(self) -> u32 {
                0u32 $(.max(self.$field.unsigned_abs()))+
            }

            /// Taxicab distance between two points, measured lane by lane
            /// without the intermediate `i32` subtraction.
            pub fn taxicab_distance(self, other: Self) -> u32 {
                0u32 $(.wrapping_add(self.$field.abs_diff(other.$field)))+
            }
        }

        impl From<$name> for $float {
            /// Lane-wise `i32 -> f32` conversion (rounds to nearest).
            #[inline]
            fn from(v: $name) -> Self {
                $float { $($field: v.$field as f32),+ }
            }
        }
    };
}

macro_rules! impl_float_vector {
    ($name:ident, [$($field:ident),+]) => {
        impl $name {
            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                FloatScalar::sqrt(self.length_squared())
            }

            /// Unit-length copy of `self`. A zero vector yields NaN lanes.
            #[inline]
            pub fn normalize(self) -> Self {
                self / self.length()
            }

            pub fn is_finite(self) -> bool {
                true $(&& FloatScalar::is_finite(self.$field))+
            }

            /// True when any lane is NaN.
            pub fn is_nan(self) -> bool {
                false $(|| FloatScalar::is_nan(self.$field))+
            }
        }

        impl AbsDiffEq for $name {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                true $(&& self.$field.abs_diff_eq(&other.$field, epsilon))+
            }
        }

        impl RelativeEq for $name {
            fn default_max_relative() -> f32 {
                f32::EPSILON
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                true $(&& self.$field.relative_eq(&other.$field, epsilon, max_relative))+
            }
        }

        impl UlpsEq for $name {
            fn default_max_ulps() -> u32 {
                4
            }

            fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                true $(&& self.$field.ulps_eq(&other.$field, epsilon, max_ulps))+
            }
        }
    };
}

macro_rules! swizzles {
    ($name:ident => $target:ident { $($f:ident: $($lane:ident),+;)+ }) => {
        impl $name {
            $(
                #[inline]
                pub const fn $f(self) -> $target {
                    $target::new($(self.$lane),+)
                }
            )+
        }
    };
}

/// Two 32-bit signed integers. Layout matches `glam::IVec2`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(8))]
pub struct Int2 {
    pub x: i32,
    pub y: i32,
}

/// Three 32-bit signed integers, 12 bytes with no trailing padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Int3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C, align(16))]
pub struct Int4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

/// A 2D float vector, also used for points and sizes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(8))]
pub struct Float2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D float vector.
///
/// The struct is padded to 16 bytes with 16-byte alignment so it occupies the
/// same storage as a SIMD register (`glam::Vec3A`). The padding lane is not a
/// field and never takes part in equality or arithmetic.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C, align(16))]
pub struct Float4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_vector!(Int2, i32, 2, [x: 0: with_x, y: 1: with_y]);
impl_vector!(Int3, i32, 3, [x: 0: with_x, y: 1: with_y, z: 2: with_z]);
impl_vector!(Int4, i32, 4, [x: 0: with_x, y: 1: with_y, z: 2: with_z, w: 3: with_w]);
impl_vector!(Float2, f32, 2, [x: 0: with_x, y: 1: with_y]);
impl_vector!(Float3, f32, 3, [x: 0: with_x, y: 1: with_y, z: 2: with_z]);
impl_vector!(Float4, f32, 4, [x: 0: with_x, y: 1: with_y, z: 2: with_z, w: 3: with_w]);

impl_int_vector!(Int2, Float2, [x, y]);
impl_int_vector!(Int3, Float3, [x, y, z]);
impl_int_vector!(Int4, Float4, [x, y, z, w]);

impl_float_vector!(Float2, [x, y]);
impl_float_vector!(Float3, [x, y, z]);
impl_float_vector!(Float4, [x, y, z, w]);

swizzles!(Int3 => Int2 { xy: x, y; xz: x, z; yz: y, z; });
swizzles!(Int4 => Int2 { xy: x, y; xz: x, z; xw: x, w; yz: y, z; yw: y, w; zw: z, w; });
swizzles!(Int4 => Int3 { xyz: x, y, z; xyw: x, y, w; xzw: x, z, w; yzw: y, z, w; });
swizzles!(Float3 => Float2 { xy: x, y; xz: x, z; yz: y, z; });
swizzles!(Float4 => Float2 { xy: x, y; xz: x, z; xw: x, w; yz: y, z; yw: y, w; zw: z, w; });
swizzles!(Float4 => Float3 { xyz: x, y, z; xyw: x, y, w; xzw: x, z, w; yzw: y, z, w; });

impl Int2 {
    pub const X: Self = Self::new(1, 0);
    pub const Y: Self = Self::new(0, 1);
    pub const NEG_X: Self = Self::new(-1, 0);
    pub const NEG_Y: Self = Self::new(0, -1);

    #[inline]
    pub const fn extend(self, z: i32) -> Int3 {
        Int3::new(self.x, self.y, z)
    }
}

impl Int3 {
    pub const X: Self = Self::new(1, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0);
    pub const Z: Self = Self::new(0, 0, 1);
    pub const NEG_X: Self = Self::new(-1, 0, 0);
    pub const NEG_Y: Self = Self::new(0, -1, 0);
    pub const NEG_Z: Self = Self::new(0, 0, -1);

    #[inline]
    pub const fn extend(self, w: i32) -> Int4 {
        Int4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn truncate(self) -> Int2 {
        self.xy()
    }
}

impl Int4 {
    pub const X: Self = Self::new(1, 0, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0, 0);
    pub const Z: Self = Self::new(0, 0, 1, 0);
    pub const W: Self = Self::new(0, 0, 0, 1);
    pub const NEG_X: Self = Self::new(-1, 0, 0, 0);
    pub const NEG_Y: Self = Self::new(0, -1, 0, 0);
    pub const NEG_Z: Self = Self::new(0, 0, -1, 0);
    pub const NEG_W: Self = Self::new(0, 0, 0, -1);

    #[inline]
    pub const fn truncate(self) -> Int3 {
        self.xyz()
    }
}

impl Float2 {
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0);

    #[inline]
    pub const fn extend(self, z: f32) -> Float3 {
        Float3::new(self.x, self.y, z)
    }
}

impl Float3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn extend(self, w: f32) -> Float4 {
        Float4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub const fn truncate(self) -> Float2 {
        self.xy()
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// Exterior (wedge) product. The result holds the bivector components
    /// in `(xy, xz, yz)` order.
    #[inline]
    pub fn wedge(self, rhs: Self) -> Self {
        Self::new(
            self.x * rhs.y - self.y * rhs.x,
            self.x * rhs.z - self.z * rhs.x,
            self.y * rhs.z - self.z * rhs.y,
        )
    }
}

impl Float4 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    pub const NEG_W: Self = Self::new(0.0, 0.0, 0.0, -1.0);

    #[inline]
    pub const fn truncate(self) -> Float3 {
        self.xyz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_int_component_arithmetic() {
        let a = Int2::new(7, -3);
        let b = Int2::new(2, 5);
        assert_eq!(a + b, Int2::new(9, 2));
        assert_eq!(a - b, Int2::new(5, -8));
        assert_eq!(a * b, Int2::new(14, -15));
        assert_eq!(a / b, Int2::new(3, 0));
        assert_eq!(a % b, Int2::new(1, -3));
        assert_eq!(-a, Int2::new(-7, 3));
    }

    #[test]
    fn test_int_arithmetic_wraps() {
        let max = Int3::splat(i32::MAX);
        assert_eq!(max + Int3::ONE, Int3::splat(i32::MIN));
        assert_eq!(Int3::splat(i32::MIN) - Int3::ONE, max);
        assert_eq!(-Int3::splat(i32::MIN), Int3::splat(i32::MIN));
        assert_eq!(max * Int3::splat(2), Int3::splat(-2));
        assert_eq!(Int3::splat(i32::MIN) / Int3::NEG_ONE, Int3::splat(i32::MIN));
    }

    #[test]
    #[should_panic]
    fn test_int_division_by_zero_panics() {
        let _ = Int2::new(1, 1) / Int2::new(1, 0);
    }

    #[test]
    fn test_overflowing_ops() {
        let (v, o) = Int2::new(i32::MAX, 1).overflowing_add(Int2::new(1, 1));
        assert_eq!(v, Int2::new(i32::MIN, 2));
        assert!(o);

        let (v, o) = Int2::new(4, 9).overflowing_sub(Int2::new(1, 1));
        assert_eq!(v, Int2::new(3, 8));
        assert!(!o);

        let (v, o) = Int4::new(6, 8, 10, 12).overflowing_div(Int4::new(2, 0, 5, 3));
        assert_eq!(v, Int4::new(3, 8, 2, 4));
        assert!(o);

        let (v, o) = Int3::new(i32::MIN, 7, 1).overflowing_rem(Int3::new(-1, 4, 1));
        assert_eq!(v, Int3::new(0, 3, 0));
        assert!(o);

        let (_, o) = Int3::splat(-179_424_720).overflowing_mul(Int3::splat(2_038_074_496));
        assert!(o);
    }

    #[test]
    fn test_float_component_arithmetic() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Float3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Float3::new(3.0, 3.0, 3.0));
        assert_eq!(a * b, Float3::new(4.0, 10.0, 18.0));
        assert_eq!(b / Float3::splat(2.0), Float3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_float_modulus_takes_dividend_sign() {
        let r = Float2::new(5.5, -5.5) % Float2::new(2.0, 2.0);
        assert_eq!(r, Float2::new(1.5, -1.5));
    }

    #[test]
    fn test_float_division_by_zero_is_ieee() {
        let r = Float2::new(1.0, -1.0) / Float2::ZERO;
        assert_eq!(r, Float2::new(f32::INFINITY, f32::NEG_INFINITY));
        assert!((Float2::ONE % Float2::ZERO).is_nan());
    }

    #[test]
    fn test_scalar_broadcast_both_orders() {
        let v = Float4::new(1.0, -2.0, 3.5, 8.0);
        assert_eq!(v * 2.0, v * Float4::splat(2.0));
        assert_eq!(2.0f32 * v, Float4::splat(2.0) * v);
        assert_eq!(v / 4.0, v / Float4::splat(4.0));
        assert_eq!(8.0f32 / v, Float4::splat(8.0) / v);
        assert_eq!(v % 3.0, v % Float4::splat(3.0));
        assert_eq!(7.0f32 % v, Float4::splat(7.0) % v);

        let i = Int3::new(9, -4, 12);
        assert_eq!(i * 3, Int3::new(27, -12, 36));
        assert_eq!(36i32 / i, Int3::new(4, -9, 3));
        assert_eq!(10i32 % i, Int3::new(1, 2, 10));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = Int2::new(3, 4);
        v += Int2::ONE;
        v *= 2;
        v -= Int2::new(1, 1);
        v %= 4;
        assert_eq!(v, Int2::new(3, 1));

        let mut f = Float3::ONE;
        f /= 2.0;
        f *= Float3::new(2.0, 4.0, 6.0);
        assert_eq!(f, Float3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_partial_order_comparisons() {
        let a = Int2::new(1, 5);
        let b = Int2::new(2, 5);
        assert!(!a.all_lt(b));
        assert!(a.all_le(b));
        assert!(!a.all_gt(b));
        assert!(!a.all_ge(b));
        assert!(b.all_ge(a));

        // Neither vector dominates the other.
        let c = Float2::new(0.0, 3.0);
        let d = Float2::new(1.0, 2.0);
        assert!(!c.all_le(d));
        assert!(!c.all_ge(d));
    }

    #[test]
    fn test_equality_is_all_lanes() {
        assert_ne!(Float2::new(f32::NAN, 0.0), Float2::new(f32::NAN, 0.0));
        assert_eq!(Float2::new(0.0, 1.0), Float2::new(-0.0, 1.0));
        assert_ne!(Int4::new(1, 2, 3, 4), Int4::new(1, 2, 3, 5));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Int4::W, Int4::new(0, 0, 0, 1));
        assert_eq!(Float3::NEG_Z, Float3::new(0.0, 0.0, -1.0));
        assert_eq!(Float2::NEG_ONE, Float2::new(-1.0, -1.0));
        assert_eq!(Int3::ZERO, Int3::default());
    }

    #[test]
    fn test_index_and_with() {
        let mut v = Float4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[3], 4.0);
        v[1] = 9.0;
        assert_eq!(v.with_z(-1.0), Float4::new(1.0, 9.0, -1.0, 4.0));
        assert_eq!(Int3::ONE.with_y(5), Int3::new(1, 5, 1));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range_panics() {
        let v = Int2::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn test_min_max_clamp() {
        let a = Float3::new(1.0, 5.0, -2.0);
        let b = Float3::new(3.0, 4.0, -1.0);
        assert_eq!(a.min(b), Float3::new(1.0, 4.0, -2.0));
        assert_eq!(a.max(b), Float3::new(3.0, 5.0, -1.0));
        assert_eq!(
            Int2::new(-10, 10).clamp(Int2::new(-1, -1), Int2::new(1, 1)),
            Int2::new(-1, 1)
        );
        assert_eq!(Int4::new(3, -7, 2, 9).min_element(), -7);
        assert_eq!(Float2::new(0.5, 0.25).max_element(), 0.5);
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Int3 = (1, 2, 3).into();
        assert_eq!(v, Int3::new(1, 2, 3));
        let back: (i32, i32, i32) = v.into();
        assert_eq!(back, (1, 2, 3));

        let arr = [1.0f32, 2.0, 3.0, 4.0];
        let f = Float4::from(&arr);
        let out: [f32; 4] = (&f).into();
        assert_eq!(out, arr);
    }

    #[test]
    fn test_swizzles_extend_truncate() {
        let v = Float4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.yw(), Float2::new(2.0, 4.0));
        assert_eq!(v.xzw(), Float3::new(1.0, 3.0, 4.0));
        assert_eq!(v.truncate().truncate(), Float2::new(1.0, 2.0));
        assert_eq!(Int2::new(1, 2).extend(3).extend(4), Int4::new(1, 2, 3, 4));
        assert_eq!(Int3::new(1, 2, 3).xz(), Int2::new(1, 3));
    }

    #[test]
    fn test_geometry() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Float3::X.cross(Float3::Y), Float3::Z);
        assert_eq!(a.wedge(b), Float3::new(-3.0, -6.0, -3.0));
        assert_abs_diff_eq!(Float2::new(3.0, 4.0).length(), 5.0);
        assert_abs_diff_eq!(
            Float2::new(3.0, 4.0).normalize(),
            Float2::new(0.6, 0.8),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_int_norms() {
        let v = Int3::new(-3, 4, -5);
        assert_eq!(v.l1_norm(), 12u32);
        assert_eq!(v.linf_norm(), 5u32);
        assert_eq!(Int2::new(1, 1).taxicab_distance(Int2::new(-2, 5)), 7u32);
    }

    #[test]
    fn test_int_norms_at_i32_min() {
        let v = Int2::new(i32::MIN, 3);
        assert_eq!(v.linf_norm(), 2_147_483_648u32);
        assert_eq!(v.l1_norm(), 2_147_483_651u32);
        assert_eq!(Int4::splat(i32::MIN).linf_norm(), 1u32 << 31);

        let far = Int2::new(i32::MIN, 0).taxicab_distance(Int2::new(i32::MAX, 0));
        assert_eq!(far, u32::MAX);
    }

    #[test]
    fn test_int_float_conversions() {
        let f = Float2::new(f32::INFINITY, -2.7);
        assert_eq!(Int2::from_float_saturating(f), Int2::new(i32::MAX, -2));
        assert_eq!(
            Int3::from_float_saturating(Float3::new(f32::NAN, -1e20, 0.5)),
            Int3::new(0, i32::MIN, 0)
        );
        assert_eq!(Float4::from(Int4::new(1, -2, 3, -4)), Float4::new(1.0, -2.0, 3.0, -4.0));
    }

    #[test]
    fn test_finite_and_nan() {
        assert!(Float3::ONE.is_finite());
        assert!(!Float3::new(1.0, f32::INFINITY, 0.0).is_finite());
        assert!(Float2::new(0.0, f32::NAN).is_nan());
        assert!(!Float4::ZERO.is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Int2::new(1, -2).to_string(), "(1, -2)");
        assert_eq!(Float3::new(1.5, 0.0, -2.25).to_string(), "(1.5, 0, -2.25)");
        assert_eq!(format!("{:.1}", Float2::new(1.0, 2.0)), "(1.0, 2.0)");
    }

    #[test]
    fn test_hash_int_vectors() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Int2::new(1, 2));
        set.insert(Int2::new(1, 2));
        set.insert(Int2::new(2, 1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let v = Float3::new(1.0, f32::NEG_INFINITY, -0.0);
        let config = bincode::config::standard();

        let encoded = bincode::serde::encode_to_vec(v, config).expect("encode failed");
        assert!(!encoded.is_empty());

        let (decoded, _): (Float3, usize) =
            bincode::serde::decode_from_slice(&encoded, config).expect("decode failed");
        assert_eq!(decoded.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));

        let i = Int4::new(i32::MIN, -1, 0, i32::MAX);
        let encoded = bincode::serde::encode_to_vec(i, config).expect("encode failed");
        let (decoded, _): (Int4, usize) =
            bincode::serde::decode_from_slice(&encoded, config).expect("decode failed");
        assert_eq!(decoded, i);
    }
}
