use serde::{Deserialize, Serialize};

use crate::components::component::{Behaviour, Component};
use crate::math::color::Color;

/// Anything in the UI drawn with a tint color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Graphic {
    pub color: Color,
    pub enabled: bool,
    /// Whether pointer input hits this graphic.
    #[serde(default = "default_raycast_target")]
    pub raycast_target: bool,
}

fn default_raycast_target() -> bool {
    true
}

impl Default for Graphic {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            enabled: true,
            raycast_target: true,
        }
    }
}

impl Graphic {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_raycast_target(mut self, raycast_target: bool) -> Self {
        self.raycast_target = raycast_target;
        self
    }
}

impl Component for Graphic {
    fn as_behaviour(&self) -> Option<&dyn Behaviour> {
        Some(self)
    }

    fn as_behaviour_mut(&mut self) -> Option<&mut dyn Behaviour> {
        Some(self)
    }
}

impl Behaviour for Graphic {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_white_and_enabled() {
        let g = Graphic::default();
        assert_eq!(g.color, Color::WHITE);
        assert!(g.is_enabled());
        assert!(g.raycast_target);
    }

    #[test]
    fn deserialize_fills_raycast_default() {
        let json = r#"{ "color": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 0.5 }, "enabled": false }"#;
        let g: Graphic = serde_json::from_str(json).unwrap();
        assert_eq!(g.color, Color::new(1.0, 0.0, 0.0, 0.5));
        assert!(!g.enabled);
        assert!(g.raycast_target);
    }
}
