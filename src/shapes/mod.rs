pub mod circle;
pub mod line;
pub mod rectangle;
pub mod triangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::math::vec2::Vec2;

/// A convex component attached to a body's frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
    Rectangle(Rectangle),
    Triangle(Triangle),
}

/// Interval covered by a shape along an axis, plus the vertex sitting at its minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
    pub min_vertex: Vec2,
}

impl Projection {
    /// Projects a set of points onto `axis`. The first point wins ties for `min_vertex`.
    pub fn of_points(points: &[Vec2], axis: Vec2) -> Self {
        let first = points.first().copied().unwrap_or(Vec2::ZERO);
        let mut projection = Projection {
            min: axis.dot(first),
            max: axis.dot(first),
            min_vertex: first,
        };
        for &p in points.iter().skip(1) {
            let d = axis.dot(p);
            if d < projection.min {
                projection.min = d;
                projection.min_vertex = p;
            }
            if d > projection.max {
                projection.max = d;
            }
        }
        projection
    }

    /// True when one interval lies strictly inside the other.
    pub fn nests_with(&self, other: &Projection) -> bool {
        (self.max > other.max && self.min < other.min)
            || (self.max < other.max && self.min > other.min)
    }
}

impl Shape {
    /// World-space reference point (center, midpoint or centroid).
    pub fn position(&self) -> Vec2 {
        match self {
            Shape::Line(l) => l.pos,
            Shape::Circle(c) => c.pos,
            Shape::Rectangle(r) => r.pos,
            Shape::Triangle(t) => t.pos,
        }
    }

    pub fn set_position(&mut self, pos: Vec2) {
        match self {
            Shape::Line(l) => l.pos = pos,
            Shape::Circle(c) => c.pos = pos,
            Shape::Rectangle(r) => r.pos = pos,
            Shape::Triangle(t) => t.pos = pos,
        }
    }

    /// Regenerates world vertices for the current position rotated by `angle`.
    /// Circles have nothing to rotate.
    pub fn recompute_vertices(&mut self, angle: f64) {
        match self {
            Shape::Line(l) => l.recompute_vertices(angle),
            Shape::Circle(_) => {}
            Shape::Rectangle(r) => r.recompute_vertices(angle),
            Shape::Triangle(t) => t.recompute_vertices(angle),
        }
    }

    /// Fixed world-space vertices. Circles have none; see [`Circle::probe_points`].
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Shape::Line(l) => &l.vertices,
            Shape::Circle(_) => &[],
            Shape::Rectangle(r) => &r.vertices,
            Shape::Triangle(t) => &t.vertices,
        }
    }

    /// Facing direction, `None` for circles.
    pub fn direction(&self) -> Option<Vec2> {
        match self {
            Shape::Line(l) => Some(l.dir),
            Shape::Circle(_) => None,
            Shape::Rectangle(r) => Some(r.dir),
            Shape::Triangle(t) => Some(t.dir),
        }
    }

    /// Number of separating axes this shape contributes to a SAT query.
    pub fn axis_count(&self) -> usize {
        match self {
            Shape::Line(_) | Shape::Circle(_) => 1,
            Shape::Rectangle(_) => 2,
            Shape::Triangle(_) => 3,
        }
    }

    pub fn project(&self, axis: Vec2) -> Projection {
        match self {
            Shape::Circle(c) => Projection::of_points(&c.probe_points(axis), axis),
            _ => Projection::of_points(self.vertices(), axis),
        }
    }

    /// Vertex closest to `point`; the first one wins ties.
    pub fn closest_vertex_to(&self, point: Vec2) -> Vec2 {
        match self {
            Shape::Circle(c) => c.pos,
            _ => {
                let mut closest = Vec2::ZERO;
                let mut min_dist = f64::INFINITY;
                for &v in self.vertices() {
                    let dist = point.distance(v);
                    if dist < min_dist {
                        min_dist = dist;
                        closest = v;
                    }
                }
                closest
            }
        }
    }
}
