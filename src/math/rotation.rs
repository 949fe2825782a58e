use super::vec2::Vec2;

/// 2x2 rotation matrix `[[cos, -sin], [sin, cos]]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation2x2 {
    pub data: [[f64; 2]; 2],
}

impl Rotation2x2 {
    /// Builds the matrix rotating counter-clockwise by `angle` radians.
    pub fn new(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self {
            data: [[cos_a, -sin_a], [sin_a, cos_a]],
        }
    }

    /// Creates the identity rotation.
    pub fn identity() -> Self {
        Self::new(0.0)
    }

    /// Applies the rotation to a vector.
    pub fn multiply_vec(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.data[0][0] * v.x + self.data[0][1] * v.y,
            self.data[1][0] * v.x + self.data[1][1] * v.y,
        )
    }
}

impl Default for Rotation2x2 {
    fn default() -> Self {
        Self::identity()
    }
}
