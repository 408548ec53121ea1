pub mod api;
pub mod components;
pub mod core;
pub mod error;
pub mod extensions;
pub mod math;

// Re-export key types at crate root for convenience
pub use api::types::EntityId;
pub use components::component::{AsAny, Behaviour, Component, ComponentKind};
pub use components::entity::Entity;
pub use components::graphic::Graphic;
pub use components::layer::Layer;
pub use components::rect_transform::RectTransform;
pub use core::hierarchy::Hierarchy;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use error::{LayoutError, SceneError};

// Value helpers
pub use math::{
    ChannelEdit, Color, Color32,
    Vec2Ext, Vec3Ext, IVec2Ext, IVec3Ext,
    ScalarExt,
};

// Extensions
pub use extensions::{
    AnchorPreset, PivotPreset, RectLayout,
    ColorFade, FadeId, FadeState, FadeStatus,
};
