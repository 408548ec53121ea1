use serde::{Deserialize, Serialize};

/// Entity layer: a bucket index used for filtering.
///
/// There are 32 layers, `0..=31`. A few indices have conventional names;
/// everything else is game-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Layer(u8);

impl Layer {
    /// Total number of layers.
    pub const COUNT: usize = 32;

    pub const DEFAULT: Self = Self(0);
    pub const TRANSPARENT_FX: Self = Self(1);
    pub const IGNORE_RAYCAST: Self = Self(2);
    pub const WATER: Self = Self(4);
    pub const UI: Self = Self(5);

    /// Convert from a u8 value to a Layer.
    /// Returns None if the value is out of range.
    pub fn from_u8(value: u8) -> Option<Self> {
        ((value as usize) < Self::COUNT).then_some(Self(value))
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }

    /// Single-bit mask for this layer, for combining into layer masks.
    pub fn mask(self) -> u32 {
        1 << self.0
    }
}

impl TryFrom<u8> for Layer {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("layer {value} is out of range 0..{}", Self::COUNT))
    }
}

impl From<Layer> for u8 {
    fn from(layer: Layer) -> u8 {
        layer.0
    }
}
