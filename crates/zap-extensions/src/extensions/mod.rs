// extensions/mod.rs
//
// UI-facing helpers layered on the component model.
// Games opt in by creating these themselves; core never calls into them.

pub mod anchor;
pub mod fade;

pub use anchor::{AnchorPreset, PivotPreset, RectLayout};
pub use fade::{ColorFade, FadeId, FadeState, FadeStatus};
