pub mod body;
pub mod controls;

pub use body::{Body, BodyKind};
pub use controls::Controls;
