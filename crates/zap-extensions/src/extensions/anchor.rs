// extensions/anchor.rs
//
// Named anchor/pivot presets for RectTransform, plus a JSON-loadable layout
// description that applies them.
//
// Usage:
//   let layout = RectLayout::from_json(r#"{ "anchor": "top_right", "pivot": "top_right" }"#)?;
//   layout.apply(&mut rect);

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::components::rect_transform::RectTransform;
use crate::error::LayoutError;

/// Where a rectangle's anchors sit inside its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum AnchorPreset {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
    /// Selectable but leaves the anchors as they are.
    BottomStretch = 9,
    VertStretchLeft = 10,
    VertStretchRight = 11,
    VertStretchCenter = 12,
    HorStretchTop = 13,
    HorStretchMiddle = 14,
    HorStretchBottom = 15,
    StretchAll = 16,
}

impl AnchorPreset {
    pub const COUNT: usize = 17;

    pub const ALL: [AnchorPreset; Self::COUNT] = [
        Self::TopLeft, Self::TopCenter, Self::TopRight,
        Self::MiddleLeft, Self::MiddleCenter, Self::MiddleRight,
        Self::BottomLeft, Self::BottomCenter, Self::BottomRight,
        Self::BottomStretch,
        Self::VertStretchLeft, Self::VertStretchRight, Self::VertStretchCenter,
        Self::HorStretchTop, Self::HorStretchMiddle, Self::HorStretchBottom,
        Self::StretchAll,
    ];

    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// `(anchor_min, anchor_max)` fractions, or None for presets that keep
    /// the current anchors.
    pub fn anchors(self) -> Option<(Vec2, Vec2)> {
        let (min, max) = match self {
            Self::TopLeft =>           ((0.0, 1.0), (0.0, 1.0)),
            Self::TopCenter =>         ((0.5, 1.0), (0.5, 1.0)),
            Self::TopRight =>          ((1.0, 1.0), (1.0, 1.0)),
            Self::MiddleLeft =>        ((0.0, 0.5), (0.0, 0.5)),
            Self::MiddleCenter =>      ((0.5, 0.5), (0.5, 0.5)),
            Self::MiddleRight =>       ((1.0, 0.5), (1.0, 0.5)),
            Self::BottomLeft =>        ((0.0, 0.0), (0.0, 0.0)),
            Self::BottomCenter =>      ((0.5, 0.0), (0.5, 0.0)),
            Self::BottomRight =>       ((1.0, 0.0), (1.0, 0.0)),
            Self::HorStretchTop =>     ((0.0, 1.0), (1.0, 1.0)),
            Self::HorStretchMiddle =>  ((0.0, 0.5), (1.0, 0.5)),
            Self::HorStretchBottom =>  ((0.0, 0.0), (1.0, 0.0)),
            Self::VertStretchLeft =>   ((0.0, 0.0), (0.0, 1.0)),
            Self::VertStretchCenter => ((0.5, 0.0), (0.5, 1.0)),
            Self::VertStretchRight =>  ((1.0, 0.0), (1.0, 1.0)),
            Self::StretchAll =>        ((0.0, 0.0), (1.0, 1.0)),
            Self::BottomStretch => return None,
        };
        Some((Vec2::new(min.0, min.1), Vec2::new(max.0, max.1)))
    }
}

impl TryFrom<u8> for AnchorPreset {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(LayoutError::AnchorOutOfRange(value))
    }
}

/// Where a rectangle's pivot sits inside the rectangle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PivotPreset {
    TopLeft = 0,
    TopCenter = 1,
    TopRight = 2,
    MiddleLeft = 3,
    MiddleCenter = 4,
    MiddleRight = 5,
    BottomLeft = 6,
    BottomCenter = 7,
    BottomRight = 8,
}

impl PivotPreset {
    pub const COUNT: usize = 9;

    pub const ALL: [PivotPreset; Self::COUNT] = [
        Self::TopLeft, Self::TopCenter, Self::TopRight,
        Self::MiddleLeft, Self::MiddleCenter, Self::MiddleRight,
        Self::BottomLeft, Self::BottomCenter, Self::BottomRight,
    ];

    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn pivot(self) -> Vec2 {
        let x = match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => 0.5,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => 1.0,
        };
        let y = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 1.0,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => 0.5,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 0.0,
        };
        Vec2::new(x, y)
    }
}

/// Declarative layout for one rectangle, typically loaded from a UI file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectLayout {
    pub anchor: AnchorPreset,
    #[serde(default)]
    pub pivot: Option<PivotPreset>,
    /// Anchored position in whole pixels.
    #[serde(default)]
    pub offset: IVec2,
    #[serde(default)]
    pub left: Option<f32>,
    #[serde(default)]
    pub right: Option<f32>,
    #[serde(default)]
    pub top: Option<f32>,
    #[serde(default)]
    pub bottom: Option<f32>,
}

impl RectLayout {
    pub fn new(anchor: AnchorPreset) -> Self {
        Self {
            anchor,
            pivot: None,
            offset: IVec2::ZERO,
            left: None,
            right: None,
            top: None,
            bottom: None,
        }
    }

    /// Parse a layout from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_pivot(mut self, pivot: PivotPreset) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_offset(mut self, offset: IVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Anchor first, then pivot, then the explicit edge insets.
    pub fn apply(&self, rect: &mut RectTransform) {
        rect.set_anchor(self.anchor, self.offset.x, self.offset.y);
        if let Some(pivot) = self.pivot {
            rect.set_pivot(pivot);
        }
        if let Some(left) = self.left {
            rect.set_left(left);
        }
        if let Some(right) = self.right {
            rect.set_right(right);
        }
        if let Some(top) = self.top {
            rect.set_top(top);
        }
        if let Some(bottom) = self.bottom {
            rect.set_bottom(bottom);
        }
    }
}
