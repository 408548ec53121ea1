// math/mod.rs
//
// Pure value helpers: colors, glam vector extensions, scalar remap.
// Nothing here touches Entity/Scene.

pub mod color;
pub mod ivec2;
pub mod ivec3;
pub mod scalar;
pub mod vec2;
pub mod vec3;

pub use color::{ChannelEdit, Color, Color32};
pub use ivec2::IVec2Ext;
pub use ivec3::IVec3Ext;
pub use scalar::ScalarExt;
pub use vec2::Vec2Ext;
pub use vec3::Vec3Ext;
