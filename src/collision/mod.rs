pub mod detection;
pub mod manifold;

// Re-export key types
pub use detection::{collide, sat, SatResult};
pub use manifold::CollisionManifold;
