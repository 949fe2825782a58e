use crate::math::vec2::Vec2;
use crate::objects::body::{Body, BodyKind};
use crate::shapes::Shape;
use crate::world::BodyHandle;

/// Drawable outline of one component, in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderShape {
    Line { start: Vec2, end: Vec2 },
    Circle { center: Vec2, radius: f64 },
    Polygon { vertices: Vec<Vec2> },
}

impl From<&Shape> for RenderShape {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Line(l) => RenderShape::Line {
                start: l.vertices[0],
                end: l.vertices[1],
            },
            Shape::Circle(c) => RenderShape::Circle {
                center: c.pos,
                radius: c.radius,
            },
            Shape::Rectangle(r) => RenderShape::Polygon {
                vertices: r.vertices.to_vec(),
            },
            Shape::Triangle(t) => RenderShape::Polygon {
                vertices: t.vertices.to_vec(),
            },
        }
    }
}

/// Everything a renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub handle: BodyHandle,
    pub kind: BodyKind,
    pub color: String,
    pub player: bool,
    pub shapes: Vec<RenderShape>,
}

impl RenderItem {
    pub fn new(handle: BodyHandle, body: &Body) -> Self {
        Self {
            handle,
            kind: body.kind(),
            color: body.color.clone(),
            player: body.player,
            shapes: body.comp.iter().map(RenderShape::from).collect(),
        }
    }
}
