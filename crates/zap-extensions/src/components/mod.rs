pub mod component;
pub mod entity;
pub mod graphic;
pub mod layer;
pub mod rect_transform;
