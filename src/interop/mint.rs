// src/interop/mint.rs
// Conversions to and from the mint interop types (feature "mint").

use crate::numerics::{Float2, Float3, Float3x3, Float4, Float4x4, Int2, Int3, Int4, Quaternion};

macro_rules! mint_vector {
    ($ours:ident, $mint:ident<$t:ty>, [$($field:ident),+]) => {
        impl From<$ours> for mint::$mint<$t> {
            fn from(v: $ours) -> Self {
                mint::$mint { $($field: v.$field),+ }
            }
        }

        impl From<mint::$mint<$t>> for $ours {
            fn from(v: mint::$mint<$t>) -> Self {
                $ours::new($(v.$field),+)
            }
        }
    };
}

mint_vector!(Int2, Vector2<i32>, [x, y]);
mint_vector!(Int3, Vector3<i32>, [x, y, z]);
mint_vector!(Int4, Vector4<i32>, [x, y, z, w]);
mint_vector!(Int2, Point2<i32>, [x, y]);
mint_vector!(Int3, Point3<i32>, [x, y, z]);

mint_vector!(Float2, Vector2<f32>, [x, y]);
mint_vector!(Float3, Vector3<f32>, [x, y, z]);
mint_vector!(Float4, Vector4<f32>, [x, y, z, w]);
mint_vector!(Float2, Point2<f32>, [x, y]);
mint_vector!(Float3, Point3<f32>, [x, y, z]);

// Scene quaternion (single precision)

impl From<Quaternion> for mint::Quaternion<f32> {
    fn from(q: Quaternion) -> Self {
        mint::Quaternion {
            v: q.imaginary_part().into(),
            s: q.r,
        }
    }
}

impl From<mint::Quaternion<f32>> for Quaternion {
    fn from(q: mint::Quaternion<f32>) -> Self {
        Quaternion::new(q.v.x, q.v.y, q.v.z, q.s)
    }
}

// Controller attitude quaternion (double precision)

impl From<Quaternion> for mint::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        mint::Quaternion {
            v: mint::Vector3 {
                x: q.ix.into(),
                y: q.iy.into(),
                z: q.iz.into(),
            },
            s: q.r.into(),
        }
    }
}

impl From<mint::Quaternion<f64>> for Quaternion {
    fn from(q: mint::Quaternion<f64>) -> Self {
        Quaternion::new(q.v.x as f32, q.v.y as f32, q.v.z as f32, q.s as f32)
    }
}

// Matrices: mint row matrices hold rows, column matrices hold columns.

impl From<Float3x3> for mint::RowMatrix3<f32> {
    fn from(m: Float3x3) -> Self {
        let [x, y, z] = m.row_vectors().map(mint::Vector3::from);
        mint::RowMatrix3 { x, y, z }
    }
}

impl From<mint::RowMatrix3<f32>> for Float3x3 {
    fn from(m: mint::RowMatrix3<f32>) -> Self {
        Float3x3::from_rows(m.x.into(), m.y.into(), m.z.into())
    }
}

impl From<Float3x3> for mint::ColumnMatrix3<f32> {
    fn from(m: Float3x3) -> Self {
        mint::ColumnMatrix3 {
            x: m.col(0).into(),
            y: m.col(1).into(),
            z: m.col(2).into(),
        }
    }
}

impl From<mint::ColumnMatrix3<f32>> for Float3x3 {
    fn from(m: mint::ColumnMatrix3<f32>) -> Self {
        Float3x3::from_cols(m.x.into(), m.y.into(), m.z.into())
    }
}

impl From<Float4x4> for mint::RowMatrix4<f32> {
    fn from(m: Float4x4) -> Self {
        let [x, y, z, w] = m.row_vectors().map(mint::Vector4::from);
        mint::RowMatrix4 { x, y, z, w }
    }
}

impl From<mint::RowMatrix4<f32>> for Float4x4 {
    fn from(m: mint::RowMatrix4<f32>) -> Self {
        Float4x4::from_rows(m.x.into(), m.y.into(), m.z.into(), m.w.into())
    }
}

impl From<Float4x4> for mint::ColumnMatrix4<f32> {
    fn from(m: Float4x4) -> Self {
        mint::ColumnMatrix4 {
            x: m.col(0).into(),
            y: m.col(1).into(),
            z: m.col(2).into(),
            w: m.col(3).into(),
        }
    }
}

impl From<mint::ColumnMatrix4<f32>> for Float4x4 {
    fn from(m: mint::ColumnMatrix4<f32>) -> Self {
        Float4x4::from_cols(m.x.into(), m.y.into(), m.z.into(), m.w.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_and_points() {
        let p: mint::Point3<f32> = Float3::new(1.0, 2.0, 3.0).into();
        assert_eq!((p.x, p.y, p.z), (1.0, 2.0, 3.0));
        assert_eq!(Float3::from(p), Float3::new(1.0, 2.0, 3.0));

        let v: mint::Vector4<i32> = Int4::new(i32::MIN, 0, 1, i32::MAX).into();
        assert_eq!(Int4::from(v), Int4::new(i32::MIN, 0, 1, i32::MAX));
    }

    #[test]
    fn test_quaternions() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.9);
        let scene: mint::Quaternion<f32> = q.into();
        assert_eq!(scene.s, 0.9);
        assert_eq!(Quaternion::from(scene), q);

        let attitude: mint::Quaternion<f64> = q.into();
        assert_eq!(attitude.v.z, f64::from(0.3f32));
        assert_eq!(Quaternion::from(attitude), q);
    }

    #[test]
    fn test_row_and_column_matrices() {
        let m = Float3x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let rows: mint::RowMatrix3<f32> = m.into();
        let cols: mint::ColumnMatrix3<f32> = m.into();
        assert_eq!(rows.y.x, 4.0);
        assert_eq!(cols.y.x, 2.0);
        assert_eq!(Float3x3::from(rows), m);
        assert_eq!(Float3x3::from(cols), m);

        let m = Float4x4::from_quaternion(Quaternion::ROTATION_90_AROUND_X);
        let cols: mint::ColumnMatrix4<f32> = m.into();
        assert_eq!(Float4x4::from(cols), m);
        let rows: mint::RowMatrix4<f32> = m.into();
        assert_eq!(Float4x4::from(rows), m);
    }
}
