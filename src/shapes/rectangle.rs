use crate::math::{rotation::Rotation2x2, vec2::Vec2};

/// Oriented rectangle built from one edge (the "spine") and a width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub vertices: [Vec2; 4],
    pub dir: Vec2,
    pub ref_dir: Vec2,
    pub length: f64,
    pub width: f64,
    /// Center.
    pub pos: Vec2,
}

impl Rectangle {
    /// `a -> b` is one edge; the rectangle extends `width` along that edge's normal.
    pub fn new(a: Vec2, b: Vec2, width: f64) -> Self {
        let dir = (b - a).unit();
        let length = a.distance(b);
        let pos = a + dir * (length / 2.0) + dir.normal() * (width / 2.0);
        let mut rect = Self {
            vertices: [Vec2::ZERO; 4],
            dir,
            ref_dir: dir,
            length,
            width,
            pos,
        };
        rect.recompute_vertices(0.0);
        rect
    }

    /// Rotates the reference direction by `angle` and rebuilds the corners around `pos`.
    pub fn recompute_vertices(&mut self, angle: f64) {
        self.dir = Rotation2x2::new(angle).multiply_vec(self.ref_dir);
        let along = self.dir * (self.length / 2.0);
        let across = self.dir.normal() * (self.width / 2.0);
        self.vertices = [
            self.pos - along + across,
            self.pos - along - across,
            self.pos + along - across,
            self.pos + along + across,
        ];
    }
}
