// src/numerics/types/rotor.rs
// 3D rotor: bivector part (b01, b02, b12) and scalar part s.
//
// Rotor composition is a geometric product and is not exposed as an operator.

use core::f32::consts::FRAC_1_SQRT_2;
use core::fmt;

use serde::{Deserialize, Serialize};

use super::matrix::Float3x3;
use super::quaternion::OPPOSED_TOLERANCE;
use super::vector::{Float3, Float4};

/// A rotor in the even subalgebra of 3D geometric algebra.
///
/// `b01` is the xy-plane component, `b02` the xz-plane component and `b12`
/// the yz-plane component. A rotor built from an angle rotates by that angle;
/// no unit-length invariant is enforced.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Rotor {
    pub b01: f32,
    pub b02: f32,
    pub b12: f32,
    pub s: f32,
}

impl Rotor {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const ROTATION_90_AROUND_X: Self = Self::new(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2);
    pub const ROTATION_90_AROUND_Y: Self = Self::new(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
    pub const ROTATION_90_AROUND_Z: Self = Self::new(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

    pub const ROTATION_180_AROUND_X: Self = Self::new(0.0, 0.0, -1.0, 0.0);
    pub const ROTATION_180_AROUND_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const ROTATION_180_AROUND_Z: Self = Self::new(-1.0, 0.0, 0.0, 0.0);

    pub const ROTATION_270_AROUND_X: Self = Self::new(0.0, 0.0, -FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
    pub const ROTATION_270_AROUND_Y: Self = Self::new(0.0, FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2);
    pub const ROTATION_270_AROUND_Z: Self = Self::new(-FRAC_1_SQRT_2, 0.0, 0.0, -FRAC_1_SQRT_2);

    #[inline]
    pub const fn new(b01: f32, b02: f32, b12: f32, s: f32) -> Self {
        Self { b01, b02, b12, s }
    }

    #[inline]
    pub const fn from_parts(bivector: Float3, scalar: f32) -> Self {
        Self::new(bivector.x, bivector.y, bivector.z, scalar)
    }

    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.b01, self.b02, self.b12, self.s]
    }

    #[inline]
    pub const fn scalar_part(&self) -> f32 {
        self.s
    }

    #[inline]
    pub const fn bivector_part(&self) -> Float3 {
        Float3::new(self.b01, self.b02, self.b12)
    }

    /// Rotation of `angle` radians in the plane given by bivector components
    /// `(xy, xz, yz)`.
    pub fn from_angle_plane(angle: f32, plane: Float3) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        // The sandwich product puts b on the left of v, so the sign flips.
        Self::from_parts(plane * -sin, cos)
    }

    /// Rotation of `angle` radians around unit `axis`.
    pub fn from_angle_axis(angle: f32, axis: Float3) -> Self {
        Self::from_angle_plane(angle, Float3::new(axis.z, -axis.y, axis.x))
    }

    /// Rotor taking unit vector `from` onto unit vector `to`.
    ///
    /// Opposed vectors span no plane, so the result has NaN lanes. Use
    /// `from_rotation_arc_with_axis` when the inputs may be opposed.
    pub fn from_rotation_arc(from: Float3, to: Float3) -> Self {
        Self::from_parts(to.wedge(from), 1.0 + from.dot(to)).normalize()
    }

    /// Like `from_rotation_arc`, for vectors of any length, with a caller
    /// supplied axis for the half turn between opposed vectors.
    pub fn from_rotation_arc_with_axis(from: Float3, to: Float3, opposed_axis: Float3) -> Self {
        let (from, to) = (from.normalize(), to.normalize());
        if from.dot(to) < -1.0 + OPPOSED_TOLERANCE {
            Self::from_angle_axis(core::f32::consts::PI, opposed_axis)
        } else {
            Self::from_rotation_arc(from, to)
        }
    }

    /// Geometric product `a b` of two vectors: wedge as bivector, dot as scalar.
    pub fn from_geometric_product(a: Float3, b: Float3) -> Self {
        Self::from_parts(a.wedge(b), a.dot(b))
    }

    /// Reverse (negated bivector part); the inverse rotation of a unit rotor.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_parts(-self.bivector_part(), self.s)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        Float4::from(self).length_squared()
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn normalize(self) -> Self {
        Self::from(Float4::from(self) * self.length().recip())
    }

    /// Rotates `v` with the sandwich product `R v R†`.
    pub fn rotate(self, v: Float3) -> Float3 {
        let q = Float3::new(
            self.s * v.x + v.y * self.b01 + v.z * self.b02,
            self.s * v.y - v.x * self.b01 + v.z * self.b12,
            self.s * v.z - v.x * self.b02 - v.y * self.b12,
        );
        let trivector = -(v.x * self.b12) + v.y * self.b02 - v.z * self.b01;

        Float3::new(
            self.s * q.x + q.y * self.b01 + q.z * self.b02 - trivector * self.b12,
            self.s * q.y - q.x * self.b01 + trivector * self.b02 + q.z * self.b12,
            self.s * q.z - trivector * self.b01 - q.x * self.b02 - q.y * self.b12,
        )
    }

    /// Rotation matrix whose columns are the rotated basis vectors.
    pub fn to_rotation_matrix(self) -> Float3x3 {
        Float3x3::from_cols(
            self.rotate(Float3::X),
            self.rotate(Float3::Y),
            self.rotate(Float3::Z),
        )
    }

    pub fn is_finite(self) -> bool {
        Float4::from(self).is_finite()
    }
}

impl From<[f32; 4]> for Rotor {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Rotor> for [f32; 4] {
    fn from(r: Rotor) -> Self {
        r.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Rotor {
    fn from((b01, b02, b12, s): (f32, f32, f32, f32)) -> Self {
        Self::new(b01, b02, b12, s)
    }
}

impl From<Rotor> for (f32, f32, f32, f32) {
    fn from(r: Rotor) -> Self {
        (r.b01, r.b02, r.b12, r.s)
    }
}

impl From<Float4> for Rotor {
    fn from(v: Float4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Rotor> for Float4 {
    fn from(r: Rotor) -> Self {
        Float4::new(r.b01, r.b02, r.b12, r.s)
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Float4::from(*self), f)
    }
}

impl Serialize for Rotor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.b01, &self.b02, &self.b12, &self.s).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rotor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (b01, b02, b12, s) = <(f32, f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Self::new(b01, b02, b12, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::quaternion::Quaternion;
    use approx::assert_abs_diff_eq;
    use core::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_presets_match_quaternion_presets() {
        let pairs = [
            (Rotor::ROTATION_90_AROUND_X, Quaternion::ROTATION_90_AROUND_X),
            (Rotor::ROTATION_90_AROUND_Y, Quaternion::ROTATION_90_AROUND_Y),
            (Rotor::ROTATION_90_AROUND_Z, Quaternion::ROTATION_90_AROUND_Z),
            (Rotor::ROTATION_180_AROUND_X, Quaternion::ROTATION_180_AROUND_X),
            (Rotor::ROTATION_180_AROUND_Y, Quaternion::ROTATION_180_AROUND_Y),
            (Rotor::ROTATION_180_AROUND_Z, Quaternion::ROTATION_180_AROUND_Z),
            (Rotor::ROTATION_270_AROUND_X, Quaternion::ROTATION_270_AROUND_X),
            (Rotor::ROTATION_270_AROUND_Y, Quaternion::ROTATION_270_AROUND_Y),
            (Rotor::ROTATION_270_AROUND_Z, Quaternion::ROTATION_270_AROUND_Z),
        ];
        let v = Float3::new(0.25, -1.5, 2.0);
        for (rotor, quaternion) in pairs {
            assert_abs_diff_eq!(rotor.rotate(v), quaternion.rotate(v), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_angle_axis_matches_presets() {
        let r = Rotor::from_angle_axis(FRAC_PI_2, Float3::Z);
        assert_abs_diff_eq!(Float4::from(r), Float4::from(Rotor::ROTATION_90_AROUND_Z), epsilon = 1e-6);
        let r = Rotor::from_angle_axis(FRAC_PI_2, Float3::X);
        assert_abs_diff_eq!(Float4::from(r), Float4::from(Rotor::ROTATION_90_AROUND_X), epsilon = 1e-6);
        let r = Rotor::from_angle_axis(FRAC_PI_2, Float3::Y);
        assert_abs_diff_eq!(Float4::from(r), Float4::from(Rotor::ROTATION_90_AROUND_Y), epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_arc() {
        let r = Rotor::from_rotation_arc(Float3::X, Float3::Y);
        assert_abs_diff_eq!(r.rotate(Float3::X), Float3::Y, epsilon = 1e-6);

        let r = Rotor::from_rotation_arc_with_axis(Float3::Y * 2.0, Float3::NEG_Y, Float3::X);
        assert_abs_diff_eq!(r.rotate(Float3::Y), Float3::NEG_Y, epsilon = 1e-6);
        assert_abs_diff_eq!(r.rotate(Float3::X), Float3::X, epsilon = 1e-6);
    }

    #[test]
    fn test_rotation_arc_between_opposed_vectors() {
        let r = Rotor::from_rotation_arc(Float3::Z, Float3::NEG_Z);
        assert!(!Float4::from(r).is_finite());

        let r = Rotor::from_rotation_arc_with_axis(Float3::Z, Float3::NEG_Z, Float3::Y);
        assert_abs_diff_eq!(r.rotate(Float3::Z), Float3::NEG_Z, epsilon = 1e-6);
    }

    #[test]
    fn test_reverse_undoes_rotation() {
        let r = Rotor::from_angle_axis(1.1, Float3::new(0.0, 0.6, 0.8));
        let v = Float3::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(r.reverse().rotate(r.rotate(v)), v, epsilon = 1e-5);
    }

    #[test]
    fn test_parts_and_length() {
        let r = Rotor::new(1.0, 2.0, 2.0, 4.0);
        assert_eq!(r.scalar_part(), 4.0);
        assert_eq!(r.bivector_part(), Float3::new(1.0, 2.0, 2.0));
        assert_eq!(r.length(), 5.0);
        assert_abs_diff_eq!(r.normalize().length(), 1.0, epsilon = 1e-6);
        assert_eq!(r.reverse(), Rotor::new(-1.0, -2.0, -2.0, 4.0));
    }

    #[test]
    fn test_geometric_product() {
        let r = Rotor::from_geometric_product(Float3::X, Float3::Y);
        assert_eq!(r, Rotor::new(1.0, 0.0, 0.0, 0.0));
        let r = Rotor::from_geometric_product(Float3::X, Float3::X * 2.0);
        assert_eq!(r, Rotor::new(0.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn test_rotation_matrix_matches_quaternion() {
        let r = Rotor::from_angle_axis(PI / 3.0, Float3::Y);
        let q = Quaternion::from_angle_axis(PI / 3.0, Float3::Y);
        assert_abs_diff_eq!(r.to_rotation_matrix(), Float3x3::from_quaternion(q), epsilon = 1e-6);
        assert_eq!(Rotor::IDENTITY.to_rotation_matrix(), Float3x3::IDENTITY);
    }

    #[test]
    fn test_equality_is_fieldwise() {
        assert_eq!(Rotor::IDENTITY, Rotor::from([0.0, 0.0, 0.0, 1.0]));
        assert_ne!(Rotor::new(f32::NAN, 0.0, 0.0, 1.0), Rotor::new(f32::NAN, 0.0, 0.0, 1.0));
    }
}
