use crate::error::{check_dimension, check_mass, EngineError, EngineResult};
use crate::math::vec2::Vec2;
use crate::objects::controls::Controls;
use crate::shapes::{Circle, Line, Rectangle, Shape, Triangle};
use serde::{Deserialize, Serialize};

/// The closed set of body variants. Each one fixes which shapes make up the
/// body, how its inertia is derived and how intent flags steer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Ball,
    Capsule,
    Box,
    Star,
    Wall,
}

impl BodyKind {
    /// Walls never move, never steer and never integrate.
    pub fn is_static(self) -> bool {
        matches!(self, BodyKind::Wall)
    }

    /// Elongated bodies thrust along their facing and turn through angular velocity;
    /// balls steer along the world axes.
    pub fn steers_by_facing(self) -> bool {
        matches!(self, BodyKind::Capsule | BodyKind::Box | BodyKind::Star)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    kind: BodyKind,
    /// Components, rigidly attached to the body frame. The first one is the
    /// reference component whose direction is the body's facing.
    pub comp: Vec<Shape>,

    // Primary state
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub angle: f64, // Radians
    pub angular_velocity: f64, // Radians per tick

    // Physical properties, fixed at construction
    pub mass: f64,
    pub inv_mass: f64,    // 0.0 for immovable bodies
    pub inertia: f64,
    pub inv_inertia: f64, // 0.0 for immovable or non-rotating bodies

    // Tunables
    pub elasticity: f64,
    pub friction: f64,
    pub ang_friction: f64,
    pub max_speed: f64, // 0 = uncapped
    pub key_force: f64,
    pub ang_key_force: f64,

    pub controls: Controls,
    pub layer: u32, // 0 collides with every layer
    pub color: String,
    /// Marks the input-controlled body. No physical effect.
    pub player: bool,
}

impl Body {
    pub const DEFAULT_KEY_FORCE: f64 = 1.0;
    pub const DEFAULT_ANG_KEY_FORCE: f64 = 0.1;

    fn assemble(kind: BodyKind, comp: Vec<Shape>, position: Vec2, mass: f64) -> Self {
        let mut body = Self {
            kind,
            comp,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            inv_mass: if mass == 0.0 { 0.0 } else { 1.0 / mass },
            inertia: 0.0,
            inv_inertia: 0.0,
            elasticity: 1.0,
            friction: 0.0,
            ang_friction: 0.0,
            max_speed: 0.0,
            key_force: Self::DEFAULT_KEY_FORCE,
            ang_key_force: Self::DEFAULT_ANG_KEY_FORCE,
            controls: Controls::none(),
            layer: 0,
            color: String::new(),
            player: false,
        };
        body.inertia = body.inertia_from_geometry();
        body.inv_inertia = if mass == 0.0 || body.inertia == 0.0 {
            0.0
        } else {
            1.0 / body.inertia
        };
        body.sync_shapes();
        body
    }

    /// A single circle. Treated as a point mass for rotation.
    pub fn new_ball(x: f64, y: f64, radius: f64, mass: f64) -> EngineResult<Self> {
        let radius = check_dimension("radius", radius)?;
        let mass = check_mass(mass)?;
        let center = Vec2::new(x, y);
        Ok(Self::assemble(
            BodyKind::Ball,
            vec![Shape::Circle(Circle::new(center, radius))],
            center,
            mass,
        ))
    }

    /// A rectangle capped by two circles of `radius` centered on `(x1, y1)` and `(x2, y2)`.
    pub fn new_capsule(x1: f64, y1: f64, x2: f64, y2: f64, radius: f64, mass: f64) -> EngineResult<Self> {
        let radius = check_dimension("radius", radius)?;
        let mass = check_mass(mass)?;
        let start = Vec2::new(x1, y1);
        let end = Vec2::new(x2, y2);
        if start == end {
            return Err(EngineError::DegenerateGeometry("capsule endpoints coincide"));
        }
        let offset = (end - start).unit().normal() * radius;
        let rect = Rectangle::new(end + offset, start + offset, 2.0 * radius);
        let center = rect.pos;
        Ok(Self::assemble(
            BodyKind::Capsule,
            vec![
                Shape::Rectangle(rect),
                Shape::Circle(Circle::new(start, radius)),
                Shape::Circle(Circle::new(end, radius)),
            ],
            center,
            mass,
        ))
    }

    /// A rectangle whose edge runs from `(x1, y1)` to `(x2, y2)`, extended by `width`.
    pub fn new_box(x1: f64, y1: f64, x2: f64, y2: f64, width: f64, mass: f64) -> EngineResult<Self> {
        let width = check_dimension("width", width)?;
        let mass = check_mass(mass)?;
        let a = Vec2::new(x1, y1);
        let b = Vec2::new(x2, y2);
        if a == b {
            return Err(EngineError::DegenerateGeometry("box edge endpoints coincide"));
        }
        let rect = Rectangle::new(a, b, width);
        let center = rect.pos;
        Ok(Self::assemble(BodyKind::Box, vec![Shape::Rectangle(rect)], center, mass))
    }

    /// Two overlapping equilateral triangles with circumradius `radius`.
    pub fn new_star(x: f64, y: f64, radius: f64, mass: f64) -> EngineResult<Self> {
        let radius = check_dimension("radius", radius)?;
        let mass = check_mass(mass)?;
        let center = Vec2::new(x, y);
        let up = Vec2::new(0.0, -1.0);
        let side = up.normal() * (radius * 3f64.sqrt() / 2.0);
        let pointing_up = Triangle::new(
            center + up * radius,
            center - up * (radius / 2.0) - side,
            center - up * (radius / 2.0) + side,
        );
        let pointing_down = Triangle::new(
            center - up * radius,
            center + up * (radius / 2.0) - side,
            center + up * (radius / 2.0) + side,
        );
        Ok(Self::assemble(
            BodyKind::Star,
            vec![Shape::Triangle(pointing_up), Shape::Triangle(pointing_down)],
            center,
            mass,
        ))
    }

    /// An immovable segment.
    pub fn new_wall(x1: f64, y1: f64, x2: f64, y2: f64) -> EngineResult<Self> {
        let a = Vec2::new(x1, y1);
        let b = Vec2::new(x2, y2);
        if a == b {
            return Err(EngineError::DegenerateGeometry("wall endpoints coincide"));
        }
        let line = Line::new(a, b);
        let midpoint = line.pos;
        Ok(Self::assemble(BodyKind::Wall, vec![Shape::Line(line)], midpoint, 0.0))
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Facing direction of the reference component; `None` for balls.
    pub fn facing(&self) -> Option<Vec2> {
        self.comp.first().and_then(Shape::direction)
    }

    /// Moment of inertia approximated from the component geometry.
    pub fn inertia_from_geometry(&self) -> f64 {
        match (self.kind, self.comp.first()) {
            (BodyKind::Capsule, Some(Shape::Rectangle(r))) => {
                let w = r.width;
                self.mass * ((2.0 * w).powi(2) + (r.length + 2.0 * w).powi(2)) / 12.0
            }
            (BodyKind::Box, Some(Shape::Rectangle(r))) => {
                self.mass * (r.width.powi(2) + r.length.powi(2)) / 12.0
            }
            (BodyKind::Star, Some(Shape::Triangle(t))) => {
                let circumradius = t.ref_diam[0].magnitude();
                self.mass * (2.0 * circumradius).powi(2) / 12.0
            }
            _ => 0.0,
        }
    }

    /// Converts the held intent flags into acceleration (and, for elongated
    /// bodies, angular velocity).
    pub fn apply_intent(&mut self) {
        if self.kind.is_static() {
            return;
        }
        let c = self.controls;
        let k = self.key_force;
        if self.kind.steers_by_facing() {
            let dir = self.facing().unwrap_or(Vec2::ZERO);
            if c.up {
                self.acceleration = dir * -k;
            }
            if c.down {
                self.acceleration = dir * k;
            }
            if c.left {
                self.angular_velocity = -self.ang_key_force;
            }
            if c.right {
                self.angular_velocity = self.ang_key_force;
            }
            if !c.up && !c.down {
                self.acceleration = Vec2::ZERO;
            }
        } else {
            if c.left {
                self.acceleration.x = -k;
            }
            if c.up {
                self.acceleration.y = -k;
            }
            if c.right {
                self.acceleration.x = k;
            }
            if c.down {
                self.acceleration.y = k;
            }
            if !c.left && !c.right {
                self.acceleration.x = 0.0;
            }
            if !c.up && !c.down {
                self.acceleration.y = 0.0;
            }
        }
    }

    /// Moves the body (and all of its shapes) to `position`, optionally also setting the angle.
    pub fn set_position(&mut self, position: Vec2, angle: Option<f64>) {
        self.position = position;
        if let Some(angle) = angle {
            self.angle = angle;
        }
        self.sync_shapes();
    }

    /// Places every component at the body's current position and angle.
    pub fn sync_shapes(&mut self) {
        let (position, angle) = (self.position, self.angle);
        for shape in self.comp.iter_mut() {
            shape.set_position(position);
            shape.recompute_vertices(angle);
        }
        if self.kind == BodyKind::Capsule {
            if let Some(Shape::Rectangle(rect)) = self.comp.first() {
                let half = rect.dir * (rect.length / 2.0);
                self.comp[1].set_position(position - half);
                self.comp[2].set_position(position + half);
            }
        }
    }

    /// Both bodies may touch: equal layers, or either is on the catch-all layer 0.
    pub fn shares_layer_with(&self, other: &Body) -> bool {
        self.layer == other.layer || self.layer == 0 || other.layer == 0
    }
}
