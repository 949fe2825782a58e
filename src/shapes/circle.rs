use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f64) -> Self {
        Self { pos, radius }
    }

    /// The two extremal points along `axis`: `[center - r·axis, center + r·axis]`.
    /// A circle has no facing, so its outline along any SAT axis is defined this way.
    pub fn probe_points(&self, axis: Vec2) -> [Vec2; 2] {
        let axis = axis.unit();
        [self.pos - axis * self.radius, self.pos + axis * self.radius]
    }
}
