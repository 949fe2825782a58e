use crate::math::{rotation::Rotation2x2, vec2::Vec2};

/// A straight segment; walls are made of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub vertices: [Vec2; 2],
    pub dir: Vec2,
    pub ref_dir: Vec2,
    pub length: f64,
    /// Midpoint.
    pub pos: Vec2,
}

impl Line {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        let dir = (b - a).unit();
        Self {
            vertices: [a, b],
            dir,
            ref_dir: dir,
            length: a.distance(b),
            pos: (a + b) / 2.0,
        }
    }

    /// Re-derives both endpoints around `pos` with the reference direction rotated by `angle`.
    pub fn recompute_vertices(&mut self, angle: f64) {
        self.dir = Rotation2x2::new(angle).multiply_vec(self.ref_dir);
        let half = self.dir * (self.length / 2.0);
        self.vertices = [self.pos - half, self.pos + half];
    }
}
