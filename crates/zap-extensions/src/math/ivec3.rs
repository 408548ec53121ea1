// math/ivec3.rs
//
// Copy-and-modify helpers for glam::IVec3. Arithmetic wraps on overflow.

use glam::{IVec2, IVec3, IVec4};

use super::scalar::clamp;

/// Extension methods for [`IVec3`].
///
/// As with the float version, `min_value` and `max_value` only compare X
/// and Y. `component_abs` covers all three axes.
pub trait IVec3Ext {
    fn with_components(self, x: Option<i32>, y: Option<i32>, z: Option<i32>) -> IVec3;

    fn with_x(self, x: i32) -> IVec3;
    fn with_y(self, y: i32) -> IVec3;
    fn with_z(self, z: i32) -> IVec3;

    fn with_xy(self, x: i32, y: i32) -> IVec3;
    fn with_xy_vec(self, value: IVec2) -> IVec3;
    fn with_xy_splat(self, value: i32) -> IVec3;
    fn with_xz(self, x: i32, z: i32) -> IVec3;
    fn with_xz_vec(self, value: IVec2) -> IVec3;
    fn with_xz_splat(self, value: i32) -> IVec3;
    fn with_yz(self, y: i32, z: i32) -> IVec3;
    fn with_yz_vec(self, value: IVec2) -> IVec3;
    fn with_yz_splat(self, value: i32) -> IVec3;
    fn with_xyz(self, x: i32, y: i32, z: i32) -> IVec3;
    fn with_xyz_vec(self, value: IVec3) -> IVec3;
    fn with_xyz_splat(self, value: i32) -> IVec3;

    fn get_xy(self) -> IVec2;
    fn get_xz(self) -> IVec2;
    fn get_yz(self) -> IVec2;
    fn get_xzy(self) -> IVec3;
    fn get_yxz(self) -> IVec3;
    fn get_yzx(self) -> IVec3;
    fn get_zxy(self) -> IVec3;
    fn get_zyx(self) -> IVec3;

    fn insert_x(self, x: i32) -> IVec4;
    fn insert_y(self, y: i32) -> IVec4;
    fn insert_z(self, z: i32) -> IVec4;
    fn insert_w(self, w: i32) -> IVec4;

    /// Smaller of X and Y.
    fn min_value(self) -> i32;
    /// Larger of X and Y.
    fn max_value(self) -> i32;
    fn max_value_index(self) -> usize;
    fn min_value_index(self) -> usize;

    fn component_abs(self) -> IVec3;
    fn add_scalar(self, value: i32) -> IVec3;
    fn add_xyz(self, x: i32, y: i32, z: i32) -> IVec3;
    fn sub_scalar(self, value: i32) -> IVec3;
    fn sub_xyz(self, x: i32, y: i32, z: i32) -> IVec3;
    fn clamp_scalar(self, min: i32, max: i32) -> IVec3;

    fn is_uniform(self) -> bool;
}

fn reorder(v: IVec3, a: usize, b: usize, c: usize) -> IVec3 {
    IVec3::new(v[a], v[b], v[c])
}

impl IVec3Ext for IVec3 {
    fn with_components(mut self, x: Option<i32>, y: Option<i32>, z: Option<i32>) -> IVec3 {
        self.x = x.unwrap_or(self.x);
        self.y = y.unwrap_or(self.y);
        self.z = z.unwrap_or(self.z);
        self
    }

    fn with_x(self, x: i32) -> IVec3 {
        self.with_components(Some(x), None, None)
    }

    fn with_y(self, y: i32) -> IVec3 {
        self.with_components(None, Some(y), None)
    }

    fn with_z(self, z: i32) -> IVec3 {
        self.with_components(None, None, Some(z))
    }

    fn with_xy(self, x: i32, y: i32) -> IVec3 {
        self.with_components(Some(x), Some(y), None)
    }

    fn with_xy_vec(self, value: IVec2) -> IVec3 {
        self.with_xy(value.x, value.y)
    }

    fn with_xy_splat(self, value: i32) -> IVec3 {
        self.with_xy(value, value)
    }

    fn with_xz(self, x: i32, z: i32) -> IVec3 {
        self.with_components(Some(x), None, Some(z))
    }

    fn with_xz_vec(self, value: IVec2) -> IVec3 {
        self.with_xz(value.x, value.y)
    }

    fn with_xz_splat(self, value: i32) -> IVec3 {
        self.with_xz(value, value)
    }

    fn with_yz(self, y: i32, z: i32) -> IVec3 {
        self.with_components(None, Some(y), Some(z))
    }

    fn with_yz_vec(self, value: IVec2) -> IVec3 {
        self.with_yz(value.x, value.y)
    }

    fn with_yz_splat(self, value: i32) -> IVec3 {
        self.with_yz(value, value)
    }

    fn with_xyz(self, x: i32, y: i32, z: i32) -> IVec3 {
        self.with_components(Some(x), Some(y), Some(z))
    }

    fn with_xyz_vec(self, value: IVec3) -> IVec3 {
        self.with_xyz(value.x, value.y, value.z)
    }

    fn with_xyz_splat(self, value: i32) -> IVec3 {
        self.with_xyz(value, value, value)
    }

    fn get_xy(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    fn get_xz(self) -> IVec2 {
        IVec2::new(self.x, self.z)
    }

    fn get_yz(self) -> IVec2 {
        IVec2::new(self.y, self.z)
    }

    fn get_xzy(self) -> IVec3 {
        reorder(self, 0, 2, 1)
    }

    fn get_yxz(self) -> IVec3 {
        reorder(self, 1, 0, 2)
    }

    fn get_yzx(self) -> IVec3 {
        reorder(self, 1, 2, 0)
    }

    fn get_zxy(self) -> IVec3 {
        reorder(self, 2, 0, 1)
    }

    fn get_zyx(self) -> IVec3 {
        reorder(self, 2, 1, 0)
    }

    fn insert_x(self, x: i32) -> IVec4 {
        IVec4::new(x, self.x, self.y, self.z)
    }

    fn insert_y(self, y: i32) -> IVec4 {
        IVec4::new(self.x, y, self.y, self.z)
    }

    fn insert_z(self, z: i32) -> IVec4 {
        IVec4::new(self.x, self.y, z, self.z)
    }

    fn insert_w(self, w: i32) -> IVec4 {
        IVec4::new(self.x, self.y, self.z, w)
    }

    fn min_value(self) -> i32 {
        self.x.min(self.y)
    }

    fn max_value(self) -> i32 {
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

    fn component_abs(self) -> IVec3 {
        IVec3::new(self.x.wrapping_abs(), self.y.wrapping_abs(), self.z.wrapping_abs())
    }

    fn add_scalar(self, value: i32) -> IVec3 {
        self.add_xyz(value, value, value)
    }

    fn add_xyz(self, x: i32, y: i32, z: i32) -> IVec3 {
        IVec3::new(
            self.x.wrapping_add(x),
            self.y.wrapping_add(y),
            self.z.wrapping_add(z),
        )
    }

    fn sub_scalar(self, value: i32) -> IVec3 {
        self.sub_xyz(value, value, value)
    }

    fn sub_xyz(self, x: i32, y: i32, z: i32) -> IVec3 {
        IVec3::new(
            self.x.wrapping_sub(x),
            self.y.wrapping_sub(y),
            self.z.wrapping_sub(z),
        )
    }

    fn clamp_scalar(self, min: i32, max: i32) -> IVec3 {
        IVec3::new(
            clamp(self.x, min, max),
            clamp(self.y, min, max),
            clamp(self.z, min, max),
        )
    }

    fn is_uniform(self) -> bool {
        self.x == self.y && self.y == self.z
    }
}
