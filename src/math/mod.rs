pub mod rotation;
pub mod vec2;

pub use rotation::Rotation2x2;
pub use vec2::Vec2;
