// math/color.rs
//
// RGBA colors in float and byte form, plus channel replacement.
//
// Usage:
//   let tint = Color::WHITE.with_rg(0.2, 0.9);
//   let faded = Color32::new(255, 0, 0, 255).with_a(128);

use bytemuck::{Pod, Zeroable};
use glam::Vec4;
use serde::{Deserialize, Serialize};

/// RGBA color with normalized float channels in [0, 1].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Interpolate towards `other`. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color32> for Color {
    fn from(c: Color32) -> Self {
        Self::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a as f32 / 255.0,
        )
    }
}

/// RGBA color with 8-bit channels in [0, 255].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const CLEAR: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Replace the supplied channels with wide integers. Values above 255
    /// saturate; negative values leave the channel unchanged.
    pub fn with_clamped(
        self,
        r: Option<i32>,
        g: Option<i32>,
        b: Option<i32>,
        a: Option<i32>,
    ) -> Self {
        let valid = |v: Option<i32>| v.filter(|v| *v >= 0).map(|v| v.min(u8::MAX as i32) as u8);
        self.with_channels(valid(r), valid(g), valid(b), valid(a))
    }
}

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_byte(c.r), to_byte(c.g), to_byte(c.b), to_byte(c.a))
    }
}

/// Copy-and-replace editing of color channels.
///
/// Only `with_channels` needs implementing; the named combinations are
/// shorthands for it. A `None` channel is copied from `self` unchanged.
pub trait ChannelEdit: Sized + Copy {
    type Channel: Copy;

    fn with_channels(
        self,
        r: Option<Self::Channel>,
        g: Option<Self::Channel>,
        b: Option<Self::Channel>,
        a: Option<Self::Channel>,
    ) -> Self;

    fn with_r(self, r: Self::Channel) -> Self {
        self.with_channels(Some(r), None, None, None)
    }

    fn with_g(self, g: Self::Channel) -> Self {
        self.with_channels(None, Some(g), None, None)
    }

    fn with_b(self, b: Self::Channel) -> Self {
        self.with_channels(None, None, Some(b), None)
    }

    fn with_a(self, a: Self::Channel) -> Self {
        self.with_channels(None, None, None, Some(a))
    }

    fn with_rg(self, r: Self::Channel, g: Self::Channel) -> Self {
        self.with_channels(Some(r), Some(g), None, None)
    }

    fn with_rb(self, r: Self::Channel, b: Self::Channel) -> Self {
        self.with_channels(Some(r), None, Some(b), None)
    }

    fn with_ra(self, r: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(Some(r), None, None, Some(a))
    }

    fn with_gb(self, g: Self::Channel, b: Self::Channel) -> Self {
        self.with_channels(None, Some(g), Some(b), None)
    }

    fn with_ga(self, g: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(None, Some(g), None, Some(a))
    }

    fn with_ba(self, b: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(None, None, Some(b), Some(a))
    }

    fn with_rgb(self, r: Self::Channel, g: Self::Channel, b: Self::Channel) -> Self {
        self.with_channels(Some(r), Some(g), Some(b), None)
    }

    fn with_rga(self, r: Self::Channel, g: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(Some(r), Some(g), None, Some(a))
    }

    fn with_rba(self, r: Self::Channel, b: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(Some(r), None, Some(b), Some(a))
    }

    fn with_gba(self, g: Self::Channel, b: Self::Channel, a: Self::Channel) -> Self {
        self.with_channels(None, Some(g), Some(b), Some(a))
    }

    fn with_rgba(
        self,
        r: Self::Channel,
        g: Self::Channel,
        b: Self::Channel,
        a: Self::Channel,
    ) -> Self {
        self.with_channels(Some(r), Some(g), Some(b), Some(a))
    }
}

impl ChannelEdit for Color {
    type Channel = f32;

    /// Supplied channels are capped at 1. Negative or NaN values count as
    /// not supplied.
    fn with_channels(
        mut self,
        r: Option<f32>,
        g: Option<f32>,
        b: Option<f32>,
        a: Option<f32>,
    ) -> Self {
        let valid = |v: Option<f32>| v.filter(|v| *v >= 0.0).map(|v| v.min(1.0));
        if let Some(r) = valid(r) {
            self.r = r;
        }
        if let Some(g) = valid(g) {
            self.g = g;
        }
        if let Some(b) = valid(b) {
            self.b = b;
        }
        if let Some(a) = valid(a) {
            self.a = a;
        }
        self
    }
}

impl ChannelEdit for Color32 {
    type Channel = u8;

    fn with_channels(
        mut self,
        r: Option<u8>,
        g: Option<u8>,
        b: Option<u8>,
        a: Option<u8>,
    ) -> Self {
        self.r = r.unwrap_or(self.r);
        self.g = g.unwrap_or(self.g);
        self.b = b.unwrap_or(self.b);
        self.a = a.unwrap_or(self.a);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_rg_replaces_two_channels() {
        let c = Color::WHITE.with_rg(0.2, 0.9);
        assert_eq!(c, Color::new(0.2, 0.9, 1.0, 1.0));
    }

    #[test]
    fn unset_channels_are_bit_identical() {
        let src = Color::new(0.123_456, 0.654_321, 0.333_333, 0.777_777);
        let out = src.with_b(0.5);
        assert_eq!(out.r.to_bits(), src.r.to_bits());
        assert_eq!(out.g.to_bits(), src.g.to_bits());
        assert_eq!(out.a.to_bits(), src.a.to_bits());
        assert_eq!(out.b, 0.5);
    }

    #[test]
    fn float_channels_clamp_to_one() {
        let c = Color::CLEAR.with_rgba(1.5, 0.25, 40.0, 1.0);
        assert_eq!(c, Color::new(1.0, 0.25, 1.0, 1.0));
    }

    #[test]
    fn negative_float_channel_is_ignored() {
        let src = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(src.with_a(-1.0), src);
        assert_eq!(src.with_rgba(-0.5, 0.9, -0.0, -2.0), Color::new(0.1, 0.9, 0.0, 0.4));
        assert_eq!(src.with_channels(Some(-1.0), None, Some(f32::NEG_INFINITY), None), src);
    }

    #[test]
    fn nan_channel_is_ignored() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4).with_g(f32::NAN);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn every_named_combination_touches_only_its_channels() {
        let src = Color::new(0.1, 0.2, 0.3, 0.4);
        let v = 0.9;
        assert_eq!(src.with_r(v), Color::new(v, 0.2, 0.3, 0.4));
        assert_eq!(src.with_g(v), Color::new(0.1, v, 0.3, 0.4));
        assert_eq!(src.with_b(v), Color::new(0.1, 0.2, v, 0.4));
        assert_eq!(src.with_a(v), Color::new(0.1, 0.2, 0.3, v));
        assert_eq!(src.with_rb(v, v), Color::new(v, 0.2, v, 0.4));
        assert_eq!(src.with_ra(v, v), Color::new(v, 0.2, 0.3, v));
        assert_eq!(src.with_gb(v, v), Color::new(0.1, v, v, 0.4));
        assert_eq!(src.with_ga(v, v), Color::new(0.1, v, 0.3, v));
        assert_eq!(src.with_ba(v, v), Color::new(0.1, 0.2, v, v));
        assert_eq!(src.with_rgb(v, v, v), Color::new(v, v, v, 0.4));
        assert_eq!(src.with_rga(v, v, v), Color::new(v, v, 0.3, v));
        assert_eq!(src.with_rba(v, v, v), Color::new(v, 0.2, v, v));
        assert_eq!(src.with_gba(v, v, v), Color::new(0.1, v, v, v));
    }

    #[test]
    fn byte_channels_replace() {
        let c = Color32::new(10, 20, 30, 40).with_gb(200, 0);
        assert_eq!(c, Color32::new(10, 200, 0, 40));
        assert_eq!(c.with_rgba(1, 2, 3, 4), Color32::new(1, 2, 3, 4));
    }

    #[test]
    fn with_clamped_saturates_wide_values() {
        let c = Color32::new(10, 20, 30, 40).with_clamped(Some(300), None, Some(0), Some(128));
        assert_eq!(c, Color32::new(255, 20, 0, 128));
    }

    #[test]
    fn with_clamped_ignores_negative_values() {
        let src = Color32::new(10, 20, 30, 40);
        assert_eq!(src.with_clamped(Some(-1), Some(-5), Some(-300), Some(i32::MIN)), src);
        assert_eq!(src.with_clamped(Some(-1), Some(7), None, Some(-1)), Color32::new(10, 7, 30, 40));
    }

    #[test]
    fn lerp_clamps_t() {
        let a = Color::CLEAR;
        let b = Color::WHITE;
        assert_eq!(a.lerp(b, 0.5), Color::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn byte_float_conversion() {
        let c: Color = Color32::new(255, 0, 51, 255).into();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);

        let back: Color32 = c.into();
        assert_eq!(back, Color32::new(255, 0, 51, 255));

        let over: Color32 = Color::new(2.0, -1.0, 0.5, 1.0).into();
        assert_eq!(over, Color32::new(255, 0, 128, 255));
    }

    #[test]
    fn vec4_conversion() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(Color::from(c.to_vec4()), c);
    }
}
