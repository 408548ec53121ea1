use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::component::Component;
use crate::error::LayoutError;
use crate::extensions::anchor::{AnchorPreset, PivotPreset};

/// Rectangle placed relative to its parent rectangle.
///
/// Anchors and pivot are fractions of the parent/own size; offsets are the
/// distances from the anchors to the rectangle's lower-left (`offset_min`)
/// and upper-right (`offset_max`) corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectTransform {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub anchored_position: Vec2,
    pub offset_min: Vec2,
    pub offset_max: Vec2,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self {
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
            pivot: Vec2::splat(0.5),
            anchored_position: Vec2::ZERO,
            offset_min: Vec2::ZERO,
            offset_max: Vec2::ZERO,
        }
    }
}

impl Component for RectTransform {}

impl RectTransform {
    pub fn set_left(&mut self, left: f32) {
        self.offset_min.x = left;
    }

    /// Inset from the right edge; stored negated in `offset_max.x`.
    pub fn set_right(&mut self, right: f32) {
        self.offset_max.x = -right;
    }

    /// Inset from the top edge; stored negated in `offset_max.y`.
    pub fn set_top(&mut self, top: f32) {
        self.offset_max.y = -top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.offset_min.y = bottom;
    }

    /// Move the anchors to `preset` and place the rectangle at
    /// `(offset_x, offset_y)` from them.
    pub fn set_anchor(&mut self, preset: AnchorPreset, offset_x: i32, offset_y: i32) {
        self.anchored_position = Vec2::new(offset_x as f32, offset_y as f32);
        if let Some((min, max)) = preset.anchors() {
            self.anchor_min = min;
            self.anchor_max = max;
        }
    }

    /// `set_anchor` from a raw preset discriminant. An unknown value is an
    /// error and leaves the rectangle untouched.
    pub fn set_anchor_raw(&mut self, preset: u8, offset_x: i32, offset_y: i32) -> Result<(), LayoutError> {
        let preset = AnchorPreset::try_from(preset).inspect_err(|e| log::warn!("set_anchor_raw: {e}"))?;
        self.set_anchor(preset, offset_x, offset_y);
        Ok(())
    }

    pub fn set_pivot(&mut self, preset: PivotPreset) {
        self.pivot = preset.pivot();
    }

    /// `set_pivot` from a raw preset discriminant. An unknown value is ignored.
    pub fn set_pivot_raw(&mut self, preset: u8) {
        if let Some(preset) = PivotPreset::from_u8(preset) {
            self.set_pivot(preset);
        }
    }
}
