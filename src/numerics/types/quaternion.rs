// src/numerics/types/quaternion.rs
// Float quaternion with imaginary part (ix, iy, iz) and real part r.

use core::f32::consts::FRAC_1_SQRT_2;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};

use super::vector::{Float3, Float4};

/// Dot products below `-1 + OPPOSED_TOLERANCE` count as opposed vectors.
pub(crate) const OPPOSED_TOLERANCE: f32 = 1e-6;

/// Order in which per-axis Euler rotations are applied, first axis first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationOrder {
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    #[default]
    Zxy,
    Zyx,
}

/// Which of the two great-circle arcs `slerp` follows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlerpMethod {
    #[default]
    Shortest,
    Longest,
}

/// Curve used by `Quaternion::interpolate_cubic` through four keys.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CubicMethod {
    /// Spherical Bézier curve from the first key to the last, with the two
    /// middle keys as control points.
    #[default]
    Bezier,
    /// Squad spline segment from the second key to the third, with the outer
    /// keys as neighbours that shape the tangents.
    Spline,
}

/// A quaternion. No unit-length invariant is enforced; rotation helpers
/// document where they expect one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Quaternion {
    pub ix: f32,
    pub iy: f32,
    pub iz: f32,
    pub r: f32,
}

impl Quaternion {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const ROTATION_90_AROUND_X: Self = Self::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
    pub const ROTATION_90_AROUND_Y: Self = Self::new(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
    pub const ROTATION_90_AROUND_Z: Self = Self::new(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2);

    pub const ROTATION_180_AROUND_X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const ROTATION_180_AROUND_Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const ROTATION_180_AROUND_Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    pub const ROTATION_270_AROUND_X: Self = Self::new(-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
    pub const ROTATION_270_AROUND_Y: Self = Self::new(0.0, -FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
    pub const ROTATION_270_AROUND_Z: Self = Self::new(0.0, 0.0, -FRAC_1_SQRT_2, FRAC_1_SQRT_2);

    #[inline]
    pub const fn new(ix: f32, iy: f32, iz: f32, r: f32) -> Self {
        Self { ix, iy, iz, r }
    }

    #[inline]
    pub const fn from_parts(imaginary: Float3, real: f32) -> Self {
        Self::new(imaginary.x, imaginary.y, imaginary.z, real)
    }

    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.ix, self.iy, self.iz, self.r]
    }

    #[inline]
    pub const fn real_part(&self) -> f32 {
        self.r
    }

    #[inline]
    pub const fn imaginary_part(&self) -> Float3 {
        Float3::new(self.ix, self.iy, self.iz)
    }

    /// Rotation of `angle` radians around `axis`. The axis is normalized here.
    pub fn from_angle_axis(angle: f32, axis: Float3) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::from_parts(axis.normalize() * sin, cos)
    }

    /// Rotation angle in radians, in `[0, 2π]`.
    pub fn angle(&self) -> f32 {
        2.0 * self.imaginary_part().length().atan2(self.r)
    }

    /// Rotation axis. The identity has no axis and yields NaN lanes.
    pub fn axis(&self) -> Float3 {
        self.imaginary_part().normalize()
    }

    pub fn to_angle_axis(&self) -> (f32, Float3) {
        (self.angle(), self.axis())
    }

    /// Composes per-axis rotations by `angles` (radians, one per axis) in the
    /// given `order`, first axis applied first.
    pub fn from_euler_angles(angles: Float3, order: RotationOrder) -> Self {
        let (sx, cx) = (angles.x * 0.5).sin_cos();
        let (sy, cy) = (angles.y * 0.5).sin_cos();
        let (sz, cz) = (angles.z * 0.5).sin_cos();
        let x = Self::new(sx, 0.0, 0.0, cx);
        let y = Self::new(0.0, sy, 0.0, cy);
        let z = Self::new(0.0, 0.0, sz, cz);

        let [first, second, third] = match order {
            RotationOrder::Xyz => [x, y, z],
            RotationOrder::Xzy => [x, z, y],
            RotationOrder::Yxz => [y, x, z],
            RotationOrder::Yzx => [y, z, x],
            RotationOrder::Zxy => [z, x, y],
            RotationOrder::Zyx => [z, y, x],
        };
        third * second * first
    }

    /// Shortest rotation taking unit vector `from` onto unit vector `to`.
    ///
    /// Opposed vectors get a half turn around an arbitrary perpendicular axis.
    pub fn from_rotation_arc(from: Float3, to: Float3) -> Self {
        let dot = from.dot(to);
        if dot < -1.0 + OPPOSED_TOLERANCE {
            let mut axis = Float3::X.cross(from);
            if axis.length_squared() < 1e-6 {
                axis = Float3::Y.cross(from);
            }
            return Self::from_angle_axis(core::f32::consts::PI, axis);
        }
        Self::from_parts(from.cross(to), 1.0 + dot).normalize()
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

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.ix * rhs.ix + self.iy * rhs.iy + self.iz * rhs.iz + self.r * rhs.r
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn normalize(self) -> Self {
        self * self.length().recip()
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.ix, -self.iy, -self.iz, self.r)
    }

    /// Multiplicative inverse, `conjugate / |q|²`.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// Rotates `v` by this (unit) quaternion.
    pub fn rotate(self, v: Float3) -> Float3 {
        let u = self.imaginary_part();
        let t = u.cross(v) * 2.0;
        v + t * self.r + u.cross(t)
    }

    /// Applies the inverse rotation.
    pub fn unrotate(self, v: Float3) -> Float3 {
        self.inverse().rotate(v)
    }

    /// Spherical linear interpolation from `self` (at `t == 0`) to `to`
    /// (at `t == 1`) along the arc chosen by `method`.
    ///
    /// The longest arc between two equal rotations is a full turn around an
    /// undefined axis: when `Longest` leaves the endpoints antipodal the
    /// result has NaN lanes.
    pub fn slerp(self, to: Self, t: f32, method: SlerpMethod) -> Self {
        let flip = match method {
            SlerpMethod::Shortest => self.dot(to) < 0.0,
            SlerpMethod::Longest => self.dot(to) >= 0.0,
        };
        let end = if flip { -to } else { to };
        if (self + end).length_squared() == 0.0 {
            return Self::new(f32::NAN, f32::NAN, f32::NAN, f32::NAN);
        }
        self.slerp_arc(end, t)
    }

    /// Slerp along the arc through `self` and `end` as given, no sign flip.
    fn slerp_arc(self, end: Self, t: f32) -> Self {
        // Angle between the endpoints as 4-vectors, stable near 0.
        let angle = 2.0 * (self - end).length().atan2((self + end).length());
        let s = 1.0 - t;
        let base = sinc(angle);
        (self * (sinc(s * angle) * s / base) + end * (sinc(t * angle) * t / base)).normalize()
    }

    /// Interpolates through four keys with the curve chosen by `method`.
    ///
    /// `Bezier` runs from `q0` (at `t == 0`) to `q3` (at `t == 1`) and only
    /// passes near `q1` and `q2`. `Spline` runs from `q1` to `q2`; chaining
    /// segments over a key sequence gives a curve with continuous tangents.
    /// Neighbouring keys should share a hemisphere (non-negative dot).
    pub fn interpolate_cubic(q0: Self, q1: Self, q2: Self, q3: Self, t: f32, method: CubicMethod) -> Self {
        match method {
            CubicMethod::Bezier => {
                let q01 = q0.slerp_arc(q1, t);
                let q12 = q1.slerp_arc(q2, t);
                let q23 = q2.slerp_arc(q3, t);
                q01.slerp_arc(q12, t).slerp_arc(q12.slerp_arc(q23, t), t)
            }
            CubicMethod::Spline => {
                let a = Self::spline_control(q0, q1, q2);
                let b = Self::spline_control(q1, q2, q3);
                q1.slerp_arc(q2, t).slerp_arc(a.slerp_arc(b, t), 2.0 * t * (1.0 - t))
            }
        }
    }

    // s = key * exp(-(ln(key⁻¹ next) + ln(key⁻¹ prev)) / 4)
    fn spline_control(prev: Self, key: Self, next: Self) -> Self {
        let inv = key.inverse();
        let tangent = ((inv * next).ln() + (inv * prev).ln()) * -0.25;
        (key * tangent.exp()).normalize()
    }

    /// Natural logarithm. For a unit quaternion this is
    /// `(axis * angle / 2, 0)`.
    pub fn ln(self) -> Self {
        let v = self.imaginary_part();
        let v_len = v.length();
        let half_angle = v_len.atan2(self.r);
        let scale = if v_len > 0.0 { half_angle / v_len } else { 0.0 };
        Self::from_parts(v * scale, self.length().ln())
    }

    /// Exponential, the inverse of `ln`.
    pub fn exp(self) -> Self {
        let v = self.imaginary_part();
        let theta = v.length();
        let e = self.r.exp();
        Self::from_parts(v * (sinc(theta) * e), theta.cos() * e)
    }

    pub fn is_finite(self) -> bool {
        Float4::from(self).is_finite()
    }

    pub fn is_nan(self) -> bool {
        Float4::from(self).is_nan()
    }
}

fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.ix + rhs.ix, self.iy + rhs.iy, self.iz + rhs.iz, self.r + rhs.r)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.ix - rhs.ix, self.iy - rhs.iy, self.iz - rhs.iz, self.r - rhs.r)
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.ix, -self.iy, -self.iz, -self.r)
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.r * b.ix + a.ix * b.r + a.iy * b.iz - a.iz * b.iy,
            a.r * b.iy - a.ix * b.iz + a.iy * b.r + a.iz * b.ix,
            a.r * b.iz + a.ix * b.iy - a.iy * b.ix + a.iz * b.r,
            a.r * b.r - a.ix * b.ix - a.iy * b.iy - a.iz * b.iz,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `a / b` is `a * b.inverse()`.
impl Div for Quaternion {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for Quaternion {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.ix * scale, self.iy * scale, self.iz * scale, self.r * scale)
    }
}

impl MulAssign<f32> for Quaternion {
    fn mul_assign(&mut self, scale: f32) {
        *self = *self * scale;
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;

    fn div(self, inverse_scale: f32) -> Self {
        self * inverse_scale.recip()
    }
}

impl DivAssign<f32> for Quaternion {
    fn div_assign(&mut self, inverse_scale: f32) {
        *self = *self / inverse_scale;
    }
}

impl Mul<Float3> for Quaternion {
    type Output = Float3;

    fn mul(self, v: Float3) -> Float3 {
        self.rotate(v)
    }
}

impl From<[f32; 4]> for Quaternion {
    fn from(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl From<Quaternion> for [f32; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<(f32, f32, f32, f32)> for Quaternion {
    fn from((ix, iy, iz, r): (f32, f32, f32, f32)) -> Self {
        Self::new(ix, iy, iz, r)
    }
}

impl From<Quaternion> for (f32, f32, f32, f32) {
    fn from(q: Quaternion) -> Self {
        (q.ix, q.iy, q.iz, q.r)
    }
}

impl From<Float4> for Quaternion {
    fn from(v: Float4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Quaternion> for Float4 {
    fn from(q: Quaternion) -> Self {
        Float4::new(q.ix, q.iy, q.iz, q.r)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Float4::from(*self), f)
    }
}

impl Serialize for Quaternion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.ix, &self.iy, &self.iz, &self.r).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quaternion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (ix, iy, iz, r) = <(f32, f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Self::new(ix, iy, iz, r))
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        Float4::from(*self).abs_diff_eq(&Float4::from(*other), epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        Float4::from(*self).relative_eq(&Float4::from(*other), epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        Float4::from(*self).ulps_eq(&Float4::from(*other), epsilon, max_ulps)
    }
}
