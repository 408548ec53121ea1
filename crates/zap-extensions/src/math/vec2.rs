// math/vec2.rs
//
// Copy-and-modify helpers for glam::Vec2.
//
// glam already ships inherent `with_x` / `with_y`; with identical semantics
// those win in method-call syntax, the trait versions stay reachable as
// `Vec2Ext::with_x(v, ..)` for generic callers.

use glam::{Vec2, Vec3};
use super::scalar::{clamp, ScalarExt};

/// Extension methods for [`Vec2`].
pub trait Vec2Ext {
    /// Replace the supplied components, copying the rest.
    fn with_components(self, x: Option<f32>, y: Option<f32>) -> Vec2;

    fn with_x(self, x: f32) -> Vec2;
    fn with_y(self, y: f32) -> Vec2;
    fn with_xy(self, x: f32, y: f32) -> Vec2;
    fn with_xy_vec(self, value: Vec2) -> Vec2;
    fn with_xy_splat(self, value: f32) -> Vec2;

    /// Components in swapped order.
    fn get_yx(self) -> Vec2;

    /// Promote to 3D with `x` inserted at index 0.
    fn insert_x(self, x: f32) -> Vec3;
    /// Promote to 3D with `y` inserted at index 1.
    fn insert_y(self, y: f32) -> Vec3;
    /// Promote to 3D with `z` appended.
    fn insert_z(self, z: f32) -> Vec3;

    fn min_value(self) -> f32;
    fn max_value(self) -> f32;
    /// Index of the larger component. Ties resolve to 0.
    fn max_value_index(self) -> usize;
    /// Index of the smaller component. Ties resolve to 0.
    fn min_value_index(self) -> usize;

    /// Remap each component from `[min1, max1]` to `[min2, max2]`.
    fn remap_range(self, min1: f32, max1: f32, min2: f32, max2: f32) -> Vec2;
    fn component_abs(self) -> Vec2;

    fn add_scalar(self, value: f32) -> Vec2;
    fn add_xy(self, x: f32, y: f32) -> Vec2;
    fn sub_scalar(self, value: f32) -> Vec2;
    fn sub_xy(self, x: f32, y: f32) -> Vec2;
    fn sub_vec(self, value: Vec2) -> Vec2;

    fn clamp_scalar(self, min: f32, max: f32) -> Vec2;
    fn clamp01(self) -> Vec2;

    /// Whether X and Y are approximately equal.
    fn is_uniform(self) -> bool;
}

impl Vec2Ext for Vec2 {
    fn with_components(mut self, x: Option<f32>, y: Option<f32>) -> Vec2 {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        self
    }

    fn with_x(self, x: f32) -> Vec2 {
        self.with_components(Some(x), None)
    }

    fn with_y(self, y: f32) -> Vec2 {
        self.with_components(None, Some(y))
    }

    fn with_xy(self, x: f32, y: f32) -> Vec2 {
        self.with_components(Some(x), Some(y))
    }

    fn with_xy_vec(self, value: Vec2) -> Vec2 {
        self.with_components(Some(value.x), Some(value.y))
    }

    fn with_xy_splat(self, value: f32) -> Vec2 {
        self.with_components(Some(value), Some(value))
    }

    fn get_yx(self) -> Vec2 {
        Vec2::new(self[1], self[0])
    }

    fn insert_x(self, x: f32) -> Vec3 {
        Vec3::new(x, self.x, self.y)
    }

    fn insert_y(self, y: f32) -> Vec3 {
        Vec3::new(self.x, y, self.y)
    }

    fn insert_z(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }

    fn min_value(self) -> f32 {
        self.x.min(self.y)
    }

    fn max_value(self) -> f32 {
        self.x.max(self.y)
    }

    fn max_value_index(self) -> usize {
        if self.x >= self.y { 0 } else { 1 }
    }

    fn min_value_index(self) -> usize {
        if self.x <= self.y { 0 } else { 1 }
    }

    fn remap_range(self, min1: f32, max1: f32, min2: f32, max2: f32) -> Vec2 {
        Vec2::new(
            self.x.remap(min1, max1, min2, max2),
            self.y.remap(min1, max1, min2, max2),
        )
    }

    fn component_abs(self) -> Vec2 {
        Vec2::new(self.x.abs(), self.y.abs())
    }

    fn add_scalar(self, value: f32) -> Vec2 {
        Vec2::new(self.x + value, self.y + value)
    }

    fn add_xy(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.x + x, self.y + y)
    }

    fn sub_scalar(self, value: f32) -> Vec2 {
        Vec2::new(self.x - value, self.y - value)
    }

    fn sub_xy(self, x: f32, y: f32) -> Vec2 {
        Vec2::new(self.x - x, self.y - y)
    }

    fn sub_vec(self, value: Vec2) -> Vec2 {
        self.sub_xy(value.x, value.y)
    }

    fn clamp_scalar(self, min: f32, max: f32) -> Vec2 {
        Vec2::new(clamp(self.x, min, max), clamp(self.y, min, max))
    }

    fn clamp01(self) -> Vec2 {
        self.clamp_scalar(0.0, 1.0)
    }

    fn is_uniform(self) -> bool {
        self.x.approximately(self.y)
    }
}
