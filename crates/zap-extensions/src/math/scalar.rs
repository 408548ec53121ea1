// math/scalar.rs
//
// Scalar helpers shared by the vector extensions.

/// `value` limited to `[min, max]`, checking the lower bound first.
///
/// Never panics: reversed bounds yield `min` or `max`, and a NaN bound is
/// ignored.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Extension methods for `f32`.
pub trait ScalarExt {
    /// Linearly remap `self` from `[min1, max1]` to `[min2, max2]`.
    ///
    /// The input range is not validated: `max1 == min1` yields an infinite
    /// or NaN result.
    fn remap(self, min1: f32, max1: f32, min2: f32, max2: f32) -> f32;

    /// Relative approximate equality, tolerant of rounding noise at any magnitude.
    fn approximately(self, other: f32) -> bool;
}

impl ScalarExt for f32 {
    #[inline]
    fn remap(self, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
        (self - min1) / (max1 - min1) * (max2 - min2) + min2
    }

    #[inline]
    fn approximately(self, other: f32) -> bool {
        let tolerance = (1e-6 * self.abs().max(other.abs())).max(f32::EPSILON * 8.0);
        (other - self).abs() < tolerance
    }
}
