use crate::objects::body::Body;

/// Advances a body by one tick.
///
/// The acceleration is renormalized to `key_force` so holding two directions
/// at once is not faster than holding one. Velocity is then damped, capped,
/// and applied to the position; the angle advances by the damped angular
/// velocity and the shapes are moved to the new pose.
pub fn integrate(body: &mut Body) {
    if body.kind().is_static() {
        return;
    }

    // --- Linear Motion --- //
    body.acceleration = body.acceleration.unit() * body.key_force;
    body.velocity = body.velocity + body.acceleration;
    body.velocity = body.velocity * (1.0 - body.friction);
    if body.max_speed != 0.0 && body.velocity.magnitude() > body.max_speed {
        body.velocity = body.velocity.unit() * body.max_speed;
    }

    // --- Angular Motion --- //
    body.angular_velocity *= 1.0 - body.ang_friction;

    body.position = body.position + body.velocity;
    body.angle += body.angular_velocity;
    body.sync_shapes();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::objects::controls::Controls;
    const EPSILON: f64 = 1e-9;

    fn ball() -> Body {
        Body::new_ball(0.0, 0.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_integrate_linear_motion_no_force() {
        let mut rb = ball();
        rb.velocity = Vec2::new(10.0, -5.0);

        integrate(&mut rb);

        assert!((rb.position.x - 10.0).abs() < EPSILON);
        assert!((rb.position.y - -5.0).abs() < EPSILON);
        assert_eq!(rb.velocity, Vec2::new(10.0, -5.0)); // Velocity unchanged
        assert_eq!(rb.comp[0].position(), rb.position); // shape follows
    }

    #[test]
    fn test_integrate_acceleration_is_capped_to_key_force() {
        let mut rb = ball();
        rb.controls = Controls { up: true, left: true, ..Controls::none() };
        rb.apply_intent();

        integrate(&mut rb);

        // diagonal thrust has the same magnitude as a single direction
        assert!((rb.velocity.magnitude() - 1.0).abs() < EPSILON);
        let h = 1.0 / 2f64.sqrt();
        assert!((rb.velocity.x - -h).abs() < EPSILON);
        assert!((rb.velocity.y - -h).abs() < EPSILON);
        assert!((rb.position.x - -h).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_friction_damps_velocity() {
        let mut rb = ball();
        rb.friction = 0.1;
        rb.velocity = Vec2::new(10.0, 0.0);

        integrate(&mut rb);

        assert!((rb.velocity.x - 9.0).abs() < EPSILON);
        assert!((rb.position.x - 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_max_speed_clamps() {
        let mut rb = ball();
        rb.max_speed = 3.0;
        rb.velocity = Vec2::new(30.0, 40.0);

        integrate(&mut rb);

        assert!((rb.velocity.magnitude() - 3.0).abs() < EPSILON);
        assert!((rb.velocity.x - 1.8).abs() < EPSILON);
        assert!((rb.velocity.y - 2.4).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_zero_max_speed_is_uncapped() {
        let mut rb = ball();
        rb.velocity = Vec2::new(300.0, 0.0);
        integrate(&mut rb);
        assert!((rb.velocity.x - 300.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_angular_motion() {
        let mut rb = Body::new_box(0.0, 0.0, 4.0, 0.0, 2.0, 1.0).unwrap();
        rb.angular_velocity = 0.2;
        rb.ang_friction = 0.5;
        let before = rb.comp[0].vertices().to_vec();

        integrate(&mut rb);

        assert!((rb.angular_velocity - 0.1).abs() < EPSILON);
        assert!((rb.angle - 0.1).abs() < EPSILON);
        assert_ne!(rb.comp[0].vertices(), &before[..]);
        let dir = rb.facing().unwrap();
        assert!((dir.x - 0.1f64.cos()).abs() < EPSILON);
        assert!((dir.y - 0.1f64.sin()).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_rest_is_idempotent() {
        let mut rb = Body::new_star(10.0, 10.0, 5.0, 1.0).unwrap();
        let initial_state = rb.clone();
        for _ in 0..100 {
            rb.apply_intent();
            integrate(&mut rb);
        }
        assert_eq!(rb, initial_state);
    }

    #[test]
    fn test_integrate_static_object() {
        let mut wall = Body::new_wall(0.0, 0.0, 10.0, 0.0).unwrap();
        wall.velocity = Vec2::new(1.0, 1.0);
        wall.angular_velocity = 1.0;
        let initial_state = wall.clone();

        integrate(&mut wall);

        assert_eq!(wall, initial_state);
    }
}
