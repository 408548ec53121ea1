// math/vec3.rs
//
// Copy-and-modify helpers for glam::Vec3.

use glam::{Vec2, Vec3, Vec4};
use super::scalar::{clamp, ScalarExt};

/// Extension methods for [`Vec3`].
///
/// `min_value`, `max_value` and `component_abs` only look at X and Y.
/// Existing callers rely on that, so it is kept; compare against
/// `Vec3::min_element` / `Vec3::abs` when all three axes matter.
pub trait Vec3Ext {
    /// Replace the supplied components, copying the rest.
    fn with_components(self, x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Vec3;

    fn with_x(self, x: f32) -> Vec3;
    fn with_y(self, y: f32) -> Vec3;
    fn with_z(self, z: f32) -> Vec3;

    fn with_xy(self, x: f32, y: f32) -> Vec3;
    fn with_xy_vec(self, value: Vec2) -> Vec3;
    fn with_xy_splat(self, value: f32) -> Vec3;
    fn with_xz(self, x: f32, z: f32) -> Vec3;
    fn with_xz_vec(self, value: Vec2) -> Vec3;
    fn with_xz_splat(self, value: f32) -> Vec3;
    fn with_yz(self, y: f32, z: f32) -> Vec3;
    fn with_yz_vec(self, value: Vec2) -> Vec3;
    fn with_yz_splat(self, value: f32) -> Vec3;
    fn with_xyz(self, x: f32, y: f32, z: f32) -> Vec3;
    fn with_xyz_vec(self, value: Vec3) -> Vec3;
    fn with_xyz_splat(self, value: f32) -> Vec3;

    fn get_xy(self) -> Vec2;
    fn get_xz(self) -> Vec2;
    fn get_yz(self) -> Vec2;
    fn get_xzy(self) -> Vec3;
    fn get_yxz(self) -> Vec3;
    fn get_yzx(self) -> Vec3;
    fn get_zxy(self) -> Vec3;
    fn get_zyx(self) -> Vec3;

    fn insert_x(self, x: f32) -> Vec4;
    fn insert_y(self, y: f32) -> Vec4;
    fn insert_z(self, z: f32) -> Vec4;
    fn insert_w(self, w: f32) -> Vec4;

    /// Smaller of X and Y. Z is not considered.
    fn min_value(self) -> f32;
    /// Larger of X and Y. Z is not considered.
    fn max_value(self) -> f32;
    /// 0 if X is strictly the largest, else 1 if Y > Z, else 2.
    fn max_value_index(self) -> usize;
    /// 0 if X is strictly the smallest, else 1 if Y < Z, else 2.
    fn min_value_index(self) -> usize;

    fn remap_range(self, min1: f32, max1: f32, min2: f32, max2: f32) -> Vec3;
    /// Absolute X and Y. The result's Z is always 0.
    fn component_abs(self) -> Vec3;

    fn add_scalar(self, value: f32) -> Vec3;
    fn add_xyz(self, x: f32, y: f32, z: f32) -> Vec3;
    fn sub_scalar(self, value: f32) -> Vec3;
    fn sub_xyz(self, x: f32, y: f32, z: f32) -> Vec3;

    fn clamp_scalar(self, min: f32, max: f32) -> Vec3;
    fn clamp01(self) -> Vec3;

    fn is_uniform(self) -> bool;
}

fn reorder(v: Vec3, a: usize, b: usize, c: usize) -> Vec3 {
    Vec3::new(v[a], v[b], v[c])
}

impl Vec3Ext for Vec3 {
    fn with_components(mut self, x: Option<f32>, y: Option<f32>, z: Option<f32>) -> Vec3 {
        if let Some(x) = x {
            self.x = x;
        }
        if let Some(y) = y {
            self.y = y;
        }
        if let Some(z) = z {
            self.z = z;
        }
        self
    }

    fn with_x(self, x: f32) -> Vec3 {
        self.with_components(Some(x), None, None)
    }

    fn with_y(self, y: f32) -> Vec3 {
        self.with_components(None, Some(y), None)
    }

    fn with_z(self, z: f32) -> Vec3 {
        self.with_components(None, None, Some(z))
    }

    fn with_xy(self, x: f32, y: f32) -> Vec3 {
        self.with_components(Some(x), Some(y), None)
    }

    fn with_xy_vec(self, value: Vec2) -> Vec3 {
        self.with_xy(value.x, value.y)
    }

    fn with_xy_splat(self, value: f32) -> Vec3 {
        self.with_xy(value, value)
    }

    fn with_xz(self, x: f32, z: f32) -> Vec3 {
        self.with_components(Some(x), None, Some(z))
    }

    fn with_xz_vec(self, value: Vec2) -> Vec3 {
        self.with_xz(value.x, value.y)
    }

    fn with_xz_splat(self, value: f32) -> Vec3 {
        self.with_xz(value, value)
    }

    fn with_yz(self, y: f32, z: f32) -> Vec3 {
        self.with_components(None, Some(y), Some(z))
    }

    fn with_yz_vec(self, value: Vec2) -> Vec3 {
        self.with_yz(value.x, value.y)
    }

    fn with_yz_splat(self, value: f32) -> Vec3 {
        self.with_yz(value, value)
    }

    fn with_xyz(self, x: f32, y: f32, z: f32) -> Vec3 {
        self.with_components(Some(x), Some(y), Some(z))
    }

    fn with_xyz_vec(self, value: Vec3) -> Vec3 {
        self.with_xyz(value.x, value.y, value.z)
    }

    fn with_xyz_splat(self, value: f32) -> Vec3 {
        self.with_xyz(value, value, value)
    }

    fn get_xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    fn get_xz(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    fn get_yz(self) -> Vec2 {
        Vec2::new(self.y, self.z)
    }

    fn get_xzy(self) -> Vec3 {
        reorder(self, 0, 2, 1)
    }

    fn get_yxz(self) -> Vec3 {
        reorder(self, 1, 0, 2)
    }

    fn get_yzx(self) -> Vec3 {
        reorder(self, 1, 2, 0)
    }

    fn get_zxy(self) -> Vec3 {
        reorder(self, 2, 0, 1)
    }

    fn get_zyx(self) -> Vec3 {
        reorder(self, 2, 1, 0)
    }

    fn insert_x(self, x: f32) -> Vec4 {
        Vec4::new(x, self.x, self.y, self.z)
    }

    fn insert_y(self, y: f32) -> Vec4 {
        Vec4::new(self.x, y, self.y, self.z)
    }

    fn insert_z(self, z: f32) -> Vec4 {
        Vec4::new(self.x, self.y, z, self.z)
    }

    fn insert_w(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    fn min_value(self) -> f32 {
        self.x.min(self.y)
    }

    fn max_value(self) -> f32 {
        self.x.max(self.y)
    }

    fn max_value_index(self) -> usize {
        if self.x > self.y && self.x > self.z {
            0
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }

    fn min_value_index(self) -> usize {
        if self.x < self.y && self.x < self.z {
            0
        } else if self.y < self.z {
            1
        } else {
            2
        }
    }

    fn remap_range(self, min1: f32, max1: f32, min2: f32, max2: f32) -> Vec3 {
        Vec3::new(
            self.x.remap(min1, max1, min2, max2),
            self.y.remap(min1, max1, min2, max2),
            self.z.remap(min1, max1, min2, max2),
        )
    }

    fn component_abs(self) -> Vec3 {
        Vec3::new(self.x.abs(), self.y.abs(), 0.0)
    }

    fn add_scalar(self, value: f32) -> Vec3 {
        Vec3::new(self.x + value, self.y + value, self.z + value)
    }

    fn add_xyz(self, x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(self.x + x, self.y + y, self.z + z)
    }

    fn sub_scalar(self, value: f32) -> Vec3 {
        Vec3::new(self.x - value, self.y - value, self.z - value)
    }

    fn sub_xyz(self, x: f32, y: f32, z: f32) -> Vec3 {
        Vec3::new(self.x - x, self.y - y, self.z - z)
    }

    fn clamp_scalar(self, min: f32, max: f32) -> Vec3 {
        Vec3::new(
            clamp(self.x, min, max),
            clamp(self.y, min, max),
            clamp(self.z, min, max),
        )
    }

    fn clamp01(self) -> Vec3 {
        self.clamp_scalar(0.0, 1.0)
    }

    fn is_uniform(self) -> bool {
        self.x.approximately(self.y) && self.y.approximately(self.z)
    }
}
