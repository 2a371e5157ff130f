// src/interop/kurbo.rs
// 2D point / size / vector conversions for kurbo (feature "kurbo").
//
// kurbo works in f64: widening is exact, narrowing rounds to nearest.

use kurbo::{Point, Size, Vec2};

use crate::numerics::Float2;

impl From<Float2> for Point {
    fn from(v: Float2) -> Self {
        Point::new(v.x.into(), v.y.into())
    }
}

impl From<Point> for Float2 {
    fn from(p: Point) -> Self {
        Float2::new(p.x as f32, p.y as f32)
    }
}

impl From<Float2> for Vec2 {
    fn from(v: Float2) -> Self {
        Vec2::new(v.x.into(), v.y.into())
    }
}

impl From<Vec2> for Float2 {
    fn from(v: Vec2) -> Self {
        Float2::new(v.x as f32, v.y as f32)
    }
}

/// `x` maps to `width`, `y` to `height`.
impl From<Float2> for Size {
    fn from(v: Float2) -> Self {
        Size::new(v.x.into(), v.y.into())
    }
}

impl From<Size> for Float2 {
    fn from(s: Size) -> Self {
        Float2::new(s.width as f32, s.height as f32)
    }
}
