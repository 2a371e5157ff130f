// src/interop/engine.rs
// Conversions to the host engine value types in glam.
//
// These types are not layout-compatible with the aggregates (`Vec3` is 12
// bytes, the matrices are column-major, the double-precision types are wider),
// so every conversion maps elements by meaning, one field at a time.

use glam::{DMat4, DQuat, DVec4, Mat3, Mat4, Vec3, Vec4};

use crate::numerics::{Float3, Float3x3, Float4, Float4x4, Quaternion};

// 3D scene vector (packed, 12 bytes)

impl From<Float3> for Vec3 {
    fn from(v: Float3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Float3 {
    fn from(v: Vec3) -> Self {
        Float3::new(v.x, v.y, v.z)
    }
}

// 3D engine matrices (column-major): engine column `c`, row `r` is `m{r}{c}`.

impl From<Float3x3> for Mat3 {
    fn from(m: Float3x3) -> Self {
        Mat3::from_cols(m.col(0).into(), m.col(1).into(), m.col(2).into())
    }
}

impl From<Mat3> for Float3x3 {
    fn from(m: Mat3) -> Self {
        Float3x3::from_cols(m.x_axis.into(), m.y_axis.into(), m.z_axis.into())
    }
}

impl From<Float4x4> for Mat4 {
    fn from(m: Float4x4) -> Self {
        Mat4::from_cols(
            Vec4::from(m.col(0)),
            Vec4::from(m.col(1)),
            Vec4::from(m.col(2)),
            Vec4::from(m.col(3)),
        )
    }
}

impl From<Mat4> for Float4x4 {
    fn from(m: Mat4) -> Self {
        Float4x4::from_cols(
            m.x_axis.into(),
            m.y_axis.into(),
            m.z_axis.into(),
            m.w_axis.into(),
        )
    }
}

// 3D transform (double precision, column-major)

fn widen(v: Float4) -> DVec4 {
    DVec4::new(v.x.into(), v.y.into(), v.z.into(), v.w.into())
}

fn narrow(v: DVec4) -> Float4 {
    Float4::new(v.x as f32, v.y as f32, v.z as f32, v.w as f32)
}

impl From<Float4x4> for DMat4 {
    fn from(m: Float4x4) -> Self {
        DMat4::from_cols(widen(m.col(0)), widen(m.col(1)), widen(m.col(2)), widen(m.col(3)))
    }
}

/// Narrows each element to `f32` (round to nearest).
impl From<DMat4> for Float4x4 {
    fn from(m: DMat4) -> Self {
        Float4x4::from_cols(narrow(m.x_axis), narrow(m.y_axis), narrow(m.z_axis), narrow(m.w_axis))
    }
}

// Motion quaternion (double precision)

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        DQuat::from_xyzw(q.ix.into(), q.iy.into(), q.iz.into(), q.r.into())
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Quaternion::new(q.x as f32, q.y as f32, q.z as f32, q.w as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_vec3_round_trip() {
        let v = Float3::new(1.0, -2.0, 3.5);
        let engine: Vec3 = v.into();
        assert_eq!(engine, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Float3::from(engine), v);
    }

    #[test]
    fn test_mat3_maps_elements_not_storage() {
        let m = Float3x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let engine = Mat3::from(m);
        // Engine row 0 equals our row 0 even though storage is column-major.
        assert_eq!(engine.row(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(engine.col(0), Vec3::new(1.0, 4.0, 7.0));
        assert_eq!(Float3x3::from(engine), m);
    }

    #[test]
    fn test_mat4_transforms_like_engine() {
        let q = Quaternion::from_angle_axis(0.9, Float3::new(1.0, 2.0, -1.0));
        let ours = Float4x4::from_quaternion(q);
        let engine = Mat4::from(ours);
        let expected = Mat4::from_quat(glam::Quat::from_xyzw(q.ix, q.iy, q.iz, q.r));
        assert!(engine.abs_diff_eq(expected, 1e-6));
        assert_eq!(Float4x4::from(engine), ours);
    }

    #[test]
    fn test_transform_round_trip() {
        let m = Float4x4::new(
            1.0, 0.0, 0.0, 10.0,
            0.0, 1.0, 0.0, -4.0,
            0.0, 0.0, 1.0, 0.5,
            0.0, 0.0, 0.0, 1.0,
        );
        let transform = DMat4::from(m);
        // Translation lives in the last engine column.
        assert_eq!(transform.w_axis, DVec4::new(10.0, -4.0, 0.5, 1.0));
        assert_eq!(Float4x4::from(transform), m);
    }

    #[test]
    fn test_motion_quaternion_round_trip() {
        let q = Quaternion::ROTATION_90_AROUND_Y;
        let motion = DQuat::from(q);
        assert_eq!(motion.w, f64::from(core::f32::consts::FRAC_1_SQRT_2));
        assert_eq!(Quaternion::from(motion), q);

        let rotated = Quaternion::from(motion).rotate(Float3::Z);
        assert_abs_diff_eq!(rotated, Float3::X, epsilon = 1e-6);
    }
}
