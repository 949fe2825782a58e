pub mod arena;
pub mod physics_world;
pub mod render;

pub use arena::{BodyArena, BodyHandle};
pub use physics_world::World;
pub use render::{RenderItem, RenderShape};
