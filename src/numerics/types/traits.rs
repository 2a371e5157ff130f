// src/numerics/types/traits.rs
// Lane scalar traits shared by every aggregate in `types`.

use core::fmt::{Debug, Display};

/// Scalar is the element type of a vector lane.
///
/// Lane arithmetic follows what the matching SIMD instruction does: integer
/// lanes wrap on overflow, float lanes follow IEEE-754.
pub trait Scalar:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    fn lane_div(self, rhs: Self) -> Self;
    fn lane_rem(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;

    /// Lane minimum. For floats, a NaN operand yields the other operand.
    fn lane_min(self, rhs: Self) -> Self;
    fn lane_max(self, rhs: Self) -> Self;
}

/// Integer lanes.
///
/// `lane_div` and `lane_rem` still panic on a zero divisor, the same as the
/// native integer operators.
impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const NEG_ONE: Self = -1;

    #[inline]
    fn lane_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }
    #[inline]
    fn lane_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }
    #[inline]
    fn lane_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }
    #[inline]
    fn lane_div(self, rhs: Self) -> Self { self.wrapping_div(rhs) }
    #[inline]
    fn lane_rem(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }
    #[inline]
    fn lane_neg(self) -> Self { self.wrapping_neg() }
    #[inline]
    fn lane_min(self, rhs: Self) -> Self { Ord::min(self, rhs) }
    #[inline]
    fn lane_max(self, rhs: Self) -> Self { Ord::max(self, rhs) }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NEG_ONE: Self = -1.0;

    #[inline]
    fn lane_add(self, rhs: Self) -> Self { self + rhs }
    #[inline]
    fn lane_sub(self, rhs: Self) -> Self { self - rhs }
    #[inline]
    fn lane_mul(self, rhs: Self) -> Self { self * rhs }
    #[inline]
    fn lane_div(self, rhs: Self) -> Self { self / rhs }
    // `%` on f32 is the truncated remainder (C `fmodf`): the result takes the
    // sign of the dividend.
    #[inline]
    fn lane_rem(self, rhs: Self) -> Self { self % rhs }
    #[inline]
    fn lane_neg(self) -> Self { -self }
    #[inline]
    fn lane_min(self, rhs: Self) -> Self { f32::min(self, rhs) }
    #[inline]
    fn lane_max(self, rhs: Self) -> Self { f32::max(self, rhs) }
}

/// Marker for integer lanes, used to gate the overflow-reporting operations.
pub trait IntScalar: Scalar + Eq + core::hash::Hash {
    fn overflowing_lane_add(self, rhs: Self) -> (Self, bool);
    fn overflowing_lane_sub(self, rhs: Self) -> (Self, bool);
    fn overflowing_lane_mul(self, rhs: Self) -> (Self, bool);
    /// Division by zero reports an overflow and leaves the dividend untouched.
    fn overflowing_lane_div(self, rhs: Self) -> (Self, bool);
    /// Remainder by zero reports an overflow and leaves the dividend untouched.
    fn overflowing_lane_rem(self, rhs: Self) -> (Self, bool);
    /// Saturating conversion from a float lane; NaN maps to zero.
    fn saturating_from_f32(value: f32) -> Self;
}

impl IntScalar for i32 {
    #[inline]
    fn overflowing_lane_add(self, rhs: Self) -> (Self, bool) { self.overflowing_add(rhs) }
    #[inline]
    fn overflowing_lane_sub(self, rhs: Self) -> (Self, bool) { self.overflowing_sub(rhs) }
    #[inline]
    fn overflowing_lane_mul(self, rhs: Self) -> (Self, bool) { self.overflowing_mul(rhs) }

    #[inline]
    fn overflowing_lane_div(self, rhs: Self) -> (Self, bool) {
        if rhs == 0 {
            (self, true)
        } else {
            self.overflowing_div(rhs)
        }
    }

    #[inline]
    fn overflowing_lane_rem(self, rhs: Self) -> (Self, bool) {
        if rhs == 0 {
            (self, true)
        } else {
            self.overflowing_rem(rhs)
        }
    }

    #[inline]
    fn saturating_from_f32(value: f32) -> Self {
        // `as` saturates at the type bounds and maps NaN to 0.
        value as i32
    }
}

/// Marker for floating point lanes.
pub trait FloatScalar: Scalar {
    fn sqrt(self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

impl FloatScalar for f32 {
    #[inline]
    fn sqrt(self) -> Self { f32::sqrt(self) }
    #[inline]
    fn is_finite(self) -> bool { f32::is_finite(self) }
    #[inline]
    fn is_nan(self) -> bool { f32::is_nan(self) }
}
