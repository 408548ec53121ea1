// error.rs
//
// Contract-violation errors. Lookups that can simply miss return Option instead.

use thiserror::Error;

use crate::api::types::EntityId;

/// Errors raised by scene and component helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The component was found but has no enabled flag to toggle.
    #[error("component `{type_name}` is not a behaviour and cannot be enabled or disabled")]
    NotBehaviour { type_name: &'static str },
    #[error("entity {0:?} is not in the scene")]
    EntityNotFound(EntityId),
    #[error("entity {0:?} is already in the scene")]
    DuplicateEntity(EntityId),
    /// Re-parenting would make an entity its own ancestor.
    #[error("cannot parent {child:?} under {parent:?}: it would create a cycle")]
    HierarchyCycle { child: EntityId, parent: EntityId },
}

/// Errors raised by rectangle layout helpers.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("anchor preset {0} is out of range")]
    AnchorOutOfRange(u8),
    #[error("invalid layout description: {0}")]
    Parse(#[from] serde_json::Error),
}
