// math/ivec2.rs
//
// Copy-and-modify helpers for glam::IVec2. Arithmetic wraps on overflow.

use glam::{IVec2, IVec3};

use super::scalar::clamp;

/// Extension methods for [`IVec2`].
pub trait IVec2Ext {
    fn with_components(self, x: Option<i32>, y: Option<i32>) -> IVec2;
    fn with_x(self, x: i32) -> IVec2;
    fn with_y(self, y: i32) -> IVec2;
    fn with_xy(self, x: i32, y: i32) -> IVec2;

    fn get_yx(self) -> IVec2;

    fn insert_x(self, x: i32) -> IVec3;
    fn insert_y(self, y: i32) -> IVec3;
    fn insert_z(self, z: i32) -> IVec3;

    fn min_value(self) -> i32;
    fn max_value(self) -> i32;
    /// Ties resolve to 0.
    fn max_value_index(self) -> usize;
    /// Ties resolve to 0.
    fn min_value_index(self) -> usize;

    fn component_abs(self) -> IVec2;
    fn add_scalar(self, value: i32) -> IVec2;
    fn add_xy(self, x: i32, y: i32) -> IVec2;
    fn sub_scalar(self, value: i32) -> IVec2;
    fn sub_xy(self, x: i32, y: i32) -> IVec2;
    fn clamp_scalar(self, min: i32, max: i32) -> IVec2;

    fn is_uniform(self) -> bool;
}

impl IVec2Ext for IVec2 {
    fn with_components(mut self, x: Option<i32>, y: Option<i32>) -> IVec2 {
        self.x = x.unwrap_or(self.x);
        self.y = y.unwrap_or(self.y);
        self
    }

    fn with_x(self, x: i32) -> IVec2 {
        self.with_components(Some(x), None)
    }

    fn with_y(self, y: i32) -> IVec2 {
        self.with_components(None, Some(y))
    }

    fn with_xy(self, x: i32, y: i32) -> IVec2 {
        self.with_components(Some(x), Some(y))
    }

    fn get_yx(self) -> IVec2 {
        IVec2::new(self.y, self.x)
    }

    fn insert_x(self, x: i32) -> IVec3 {
        IVec3::new(x, self.x, self.y)
    }

    fn insert_y(self, y: i32) -> IVec3 {
        IVec3::new(self.x, y, self.y)
    }

    fn insert_z(self, z: i32) -> IVec3 {
        IVec3::new(self.x, self.y, z)
    }

    fn min_value(self) -> i32 {
        self.x.min(self.y)
    }

    fn max_value(self) -> i32 {
        self.x.max(self.y)
    }

    fn max_value_index(self) -> usize {
        if self.x >= self.y { 0 } else { 1 }
    }

    fn min_value_index(self) -> usize {
        if self.x <= self.y { 0 } else { 1 }
    }

    fn component_abs(self) -> IVec2 {
        IVec2::new(self.x.wrapping_abs(), self.y.wrapping_abs())
    }

    fn add_scalar(self, value: i32) -> IVec2 {
        self.add_xy(value, value)
    }

    fn add_xy(self, x: i32, y: i32) -> IVec2 {
        IVec2::new(self.x.wrapping_add(x), self.y.wrapping_add(y))
    }

    fn sub_scalar(self, value: i32) -> IVec2 {
        self.sub_xy(value, value)
    }

    fn sub_xy(self, x: i32, y: i32) -> IVec2 {
        IVec2::new(self.x.wrapping_sub(x), self.y.wrapping_sub(y))
    }

    fn clamp_scalar(self, min: i32, max: i32) -> IVec2 {
        IVec2::new(clamp(self.x, min, max), clamp(self.y, min, max))
    }

    fn is_uniform(self) -> bool {
        self.x == self.y
    }
}
