pub mod hierarchy;
pub mod scene;
pub mod time;
