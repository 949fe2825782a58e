use crate::math::{rotation::Rotation2x2, vec2::Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
    /// Centroid.
    pub pos: Vec2,
    pub dir: Vec2,
    pub ref_dir: Vec2,
    /// Offsets of each vertex from the centroid, taken at construction.
    pub ref_diam: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        let pos = (a + b + c) / 3.0;
        let dir = (a - pos).unit();
        Self {
            vertices: [a, b, c],
            pos,
            dir,
            ref_dir: dir,
            ref_diam: [a - pos, b - pos, c - pos],
        }
    }

    /// Rotates the stored offsets and the reference direction around the centroid.
    pub fn recompute_vertices(&mut self, angle: f64) {
        let rot = Rotation2x2::new(angle);
        self.dir = rot.multiply_vec(self.ref_dir);
        for (vertex, offset) in self.vertices.iter_mut().zip(self.ref_diam.iter()) {
            *vertex = self.pos + rot.multiply_vec(*offset);
        }
    }

    /// Edges in winding order: `v1 - v0`, `v2 - v1`, `v0 - v2`.
    pub fn edges(&self) -> [Vec2; 3] {
        let [a, b, c] = self.vertices;
        [b - a, c - b, a - c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_triangle_centroid_and_direction() {
        let tri = Triangle::new(Vec2::new(0.0, 3.0), Vec2::new(-3.0, -3.0), Vec2::new(3.0, -3.0));
        assert!((tri.pos.x - 0.0).abs() < EPSILON);
        assert!((tri.pos.y - -1.0).abs() < EPSILON);
        // first vertex straight above the centroid
        assert!((tri.dir.x - 0.0).abs() < EPSILON);
        assert!((tri.dir.y - 1.0).abs() < EPSILON);
        assert_eq!(tri.ref_diam[0], Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_triangle_recompute_half_turn() {
        let mut tri = Triangle::new(Vec2::new(0.0, 2.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0));
        tri.recompute_vertices(PI);
        assert!((tri.vertices[0].x - 0.0).abs() < EPSILON);
        assert!((tri.vertices[0].y - -2.0).abs() < EPSILON);
        assert!((tri.vertices[1].x - 1.0).abs() < EPSILON);
        assert!((tri.vertices[1].y - 1.0).abs() < EPSILON);
        assert!((tri.dir.y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_recompute_translates_with_pos() {
        let mut tri = Triangle::new(Vec2::new(0.0, 2.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, -1.0));
        tri.pos = Vec2::new(10.0, 10.0);
        tri.recompute_vertices(0.0);
        assert!((tri.vertices[0].x - 10.0).abs() < EPSILON);
        assert!((tri.vertices[0].y - 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_triangle_edges_close_the_loop() {
        let tri = Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0));
        let [e0, e1, e2] = tri.edges();
        let sum = e0 + e1 + e2;
        assert!(sum.magnitude() < EPSILON);
    }
}
