//! Two-dimensional rigid-body simulation built on the Separating Axis Theorem.
//!
//! Bodies are assembled from convex components (lines, circles, rectangles and
//! triangles), live in a [`World`] and advance one fixed step per [`World::tick`].

pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionManifold, SatResult};
pub use common::BodyConfig;
pub use error::{EngineError, EngineResult};
pub use math::{Rotation2x2, Vec2};
pub use objects::{Body, BodyKind, Controls};
pub use shapes::{Circle, Line, Rectangle, Shape, Triangle};
pub use world::{BodyHandle, RenderItem, RenderShape, World};
