use crate::collision::detection::SatResult;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::world::BodyHandle;
use log::trace;

/// One contact between two bodies, detected during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
    /// Unit normal; moving `body_a` along it separates the pair.
    pub normal: Vec2,
    pub penetration: f64,
    /// World-space contact point.
    pub contact: Vec2,
}

impl CollisionManifold {
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, result: SatResult) -> Self {
        Self {
            body_a,
            body_b,
            normal: result.axis,
            penetration: result.penetration,
            contact: result.contact_vertex,
        }
    }

    /// Pushes the bodies apart along the normal, split by inverse mass.
    ///
    /// A pair of immovable bodies has nothing to split and is left alone.
    pub fn resolve_penetration(&self, body_a: &mut Body, body_b: &mut Body) {
        let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
        if total_inv_mass == 0.0 {
            trace!("skipping penetration correction between two immovable bodies {:?}/{:?}", self.body_a, self.body_b);
            return;
        }

        let resolution = self.normal * (self.penetration / total_inv_mass);
        body_a.position += resolution * body_a.inv_mass;
        body_b.position -= resolution * body_b.inv_mass;
        body_a.sync_shapes();
        body_b.sync_shapes();
    }

    /// Exchanges a single impulse at the contact point, including its angular terms.
    ///
    /// Restitution is the smaller elasticity of the two. There is no early exit
    /// for pairs already moving apart.
    pub fn resolve_collision(&self, body_a: &mut Body, body_b: &mut Body) {
        let n = self.normal;

        // --- Contact arms and velocities --- //
        let arm_a = self.contact - body_a.position;
        let arm_b = self.contact - body_b.position;
        let closing_a = body_a.velocity + arm_a.perpendicular() * body_a.angular_velocity;
        let closing_b = body_b.velocity + arm_b.perpendicular() * body_b.angular_velocity;

        let aug_a = arm_a.cross(n).powi(2) * body_a.inv_inertia;
        let aug_b = arm_b.cross(n).powi(2) * body_b.inv_inertia;

        // --- Impulse magnitude --- //
        let sep_vel = (closing_a - closing_b).dot(n);
        let new_sep_vel = -sep_vel * body_a.elasticity.min(body_b.elasticity);
        let denominator = body_a.inv_mass + body_b.inv_mass + aug_a + aug_b;
        if denominator == 0.0 {
            trace!("skipping impulse between two immovable bodies {:?}/{:?}", self.body_a, self.body_b);
            return;
        }
        let impulse = (new_sep_vel - sep_vel) / denominator;
        let impulse_vec = n * impulse;

        trace!(
            "impulse {:.4} along {:?} (sep {:.4} -> {:.4})",
            impulse,
            n,
            sep_vel,
            new_sep_vel
        );

        // --- Apply --- //
        body_a.velocity += impulse_vec * body_a.inv_mass;
        body_b.velocity -= impulse_vec * body_b.inv_mass;
        body_a.angular_velocity += body_a.inv_inertia * arm_a.cross(impulse_vec);
        body_b.angular_velocity -= body_b.inv_inertia * arm_b.cross(impulse_vec);
    }
}
