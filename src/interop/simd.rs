// src/interop/simd.rs
// Conversions between the aggregates and the glam SIMD types.
//
// Every conversion is a plain field-by-field copy. No arithmetic touches the
// lanes, so the bit pattern of each field survives a round trip (NaN payloads,
// signed zeros, infinities and i32::MIN included). The layout assertions
// below keep the two representations the same size, so the aggregate can be
// placed wherever the SIMD value was stored.

use core::mem::{align_of, size_of};

use glam::{IVec2, IVec3, IVec4, Quat, Vec2, Vec3A, Vec4};

use crate::numerics::{
    Float2, Float3, Float3x3, Float4, Float4x4, Int2, Int3, Int4, Quaternion, Rotor,
};

/// Three SIMD rows, the platform form of a `Float3x3`.
pub type SimdFloat3x3 = [Vec3A; 3];

/// Four SIMD rows, the platform form of a `Float4x4`.
pub type SimdFloat4x4 = [Vec4; 4];

/// An aggregate with a layout-compatible SIMD counterpart.
pub trait SimdConvert: Copy {
    type Simd: Copy;

    fn to_simd(self) -> Self::Simd;
    fn from_simd(simd: Self::Simd) -> Self;
}

macro_rules! assert_layout {
    ($ours:ty, $simd:ty) => {
        const _: () = {
            assert!(size_of::<$ours>() == size_of::<$simd>());
            assert!(align_of::<$ours>() >= align_of::<$simd>());
        };
    };
}

/// Wires `SimdConvert` plus `From` in both directions.
macro_rules! simd_conversion {
    ($ours:ty, $simd:ty, |$a:ident| $to:expr, |$b:ident| $from:expr) => {
        assert_layout!($ours, $simd);

        impl SimdConvert for $ours {
            type Simd = $simd;

            #[inline]
            fn to_simd(self) -> $simd {
                let $a = self;
                $to
            }

            #[inline]
            fn from_simd(simd: $simd) -> Self {
                let $b = simd;
                $from
            }
        }

        impl From<$ours> for $simd {
            #[inline]
            fn from(value: $ours) -> Self {
                value.to_simd()
            }
        }

        impl From<$simd> for $ours {
            #[inline]
            fn from(simd: $simd) -> Self {
                <$ours>::from_simd(simd)
            }
        }
    };
}

simd_conversion!(Int2, IVec2, |v| IVec2::new(v.x, v.y), |s| Int2::new(s.x, s.y));
simd_conversion!(Int3, IVec3, |v| IVec3::new(v.x, v.y, v.z), |s| Int3::new(s.x, s.y, s.z));
simd_conversion!(
    Int4,
    IVec4,
    |v| IVec4::new(v.x, v.y, v.z, v.w),
    |s| Int4::new(s.x, s.y, s.z, s.w)
);

simd_conversion!(Float2, Vec2, |v| Vec2::new(v.x, v.y), |s| Float2::from(s.to_array()));
simd_conversion!(Float3, Vec3A, |v| Vec3A::new(v.x, v.y, v.z), |s| Float3::from(s.to_array()));
simd_conversion!(
    Float4,
    Vec4,
    |v| Vec4::new(v.x, v.y, v.z, v.w),
    |s| Float4::from(s.to_array())
);

simd_conversion!(
    Quaternion,
    Quat,
    |q| Quat::from_xyzw(q.ix, q.iy, q.iz, q.r),
    |s| Quaternion::from(s.to_array())
);

// Rotors have no dedicated SIMD type; they travel as a plain 4-lane vector in
// (b01, b02, b12, s) order.
simd_conversion!(
    Rotor,
    Vec4,
    |r| Vec4::new(r.b01, r.b02, r.b12, r.s),
    |s| Rotor::from(s.to_array())
);

simd_conversion!(
    Float3x3,
    SimdFloat3x3,
    |m| m.row_vectors().map(Float3::to_simd),
    |rows| Float3x3::from_row_vectors(rows.map(Float3::from_simd))
);

simd_conversion!(
    Float4x4,
    SimdFloat4x4,
    |m| m.row_vectors().map(Float4::to_simd),
    |rows| Float4x4::from_row_vectors(rows.map(Float4::from_simd))
);
