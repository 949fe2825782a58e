use crate::collision::{self, CollisionManifold, SatResult};
use crate::common::config::BodyConfig;
use crate::error::{EngineError, EngineResult};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::{Body, Controls};
use crate::world::arena::{BodyArena, BodyHandle};
use crate::world::render::RenderItem;
use log::{debug, trace};

/// Owns every body and advances them one fixed tick at a time.
#[derive(Debug, Clone, Default)]
pub struct World {
    bodies: BodyArena,
    // Manifolds detected during the last tick
    contacts: Vec<CollisionManifold>,
}

impl World {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a detached body and returns its handle.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let kind = body.kind();
        let position = body.position;
        let handle = self.bodies.insert(body);
        debug!("added {:?} at {:?} as {:?}", kind, position, handle);
        handle
    }

    pub fn add_ball(&mut self, x: f64, y: f64, radius: f64, mass: f64) -> EngineResult<BodyHandle> {
        Ok(self.add_body(Body::new_ball(x, y, radius, mass)?))
    }

    pub fn add_capsule(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        radius: f64,
        mass: f64,
    ) -> EngineResult<BodyHandle> {
        Ok(self.add_body(Body::new_capsule(x1, y1, x2, y2, radius, mass)?))
    }

    pub fn add_box(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        mass: f64,
    ) -> EngineResult<BodyHandle> {
        Ok(self.add_body(Body::new_box(x1, y1, x2, y2, width, mass)?))
    }

    pub fn add_star(&mut self, x: f64, y: f64, radius: f64, mass: f64) -> EngineResult<BodyHandle> {
        Ok(self.add_body(Body::new_star(x, y, radius, mass)?))
    }

    pub fn add_wall(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> EngineResult<BodyHandle> {
        Ok(self.add_body(Body::new_wall(x1, y1, x2, y2)?))
    }

    /// Unregisters a body. Its handle, and any manifold naming it, resolve to nothing afterwards.
    pub fn remove(&mut self, handle: BodyHandle) -> EngineResult<Body> {
        let body = self
            .bodies
            .remove(handle)
            .ok_or(EngineError::UnknownBody(handle))?;
        debug!("removed {:?} {:?}", body.kind(), handle);
        Ok(body)
    }

    pub fn body(&self, handle: BodyHandle) -> EngineResult<&Body> {
        self.bodies.get(handle).ok_or(EngineError::UnknownBody(handle))
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> EngineResult<&mut Body> {
        self.bodies
            .get_mut(handle)
            .ok_or(EngineError::UnknownBody(handle))
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Live bodies in registration-slot order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Teleports a body, keeping its angle unless one is given.
    pub fn set_position(&mut self, handle: BodyHandle, x: f64, y: f64, angle: Option<f64>) -> EngineResult<()> {
        self.body_mut(handle)?.set_position(Vec2::new(x, y), angle);
        Ok(())
    }

    pub fn set_controls(&mut self, handle: BodyHandle, controls: Controls) -> EngineResult<()> {
        self.body_mut(handle)?.controls = controls;
        Ok(())
    }

    pub fn configure(&mut self, handle: BodyHandle, config: &BodyConfig) -> EngineResult<()> {
        config.apply_to(self.body_mut(handle)?);
        Ok(())
    }

    /// Deepest overlap between two live bodies, ignoring layers.
    ///
    /// Only strictly positive penetration counts: bodies that merely touch
    /// (zero overlap) give `None`, as do stale handles.
    pub fn collide(&self, a: BodyHandle, b: BodyHandle) -> Option<SatResult> {
        if a == b {
            return None;
        }
        collision::collide(self.bodies.get(a)?, self.bodies.get(b)?)
    }

    /// Manifolds detected by the most recent tick.
    pub fn contacts(&self) -> &[CollisionManifold] {
        &self.contacts
    }

    /// Drawable snapshot of every live body.
    pub fn render_list(&self) -> Vec<RenderItem> {
        self.bodies
            .iter()
            .map(|(handle, body)| RenderItem::new(handle, body))
            .collect()
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        self.contacts.clear();

        // --- Intent and motion --- //
        for (_, body) in self.bodies.iter_mut() {
            body.apply_intent();
        }
        for (_, body) in self.bodies.iter_mut() {
            integrator::integrate(body);
        }

        // --- Detection --- //
        self.check_collisions();

        // --- Resolution --- //
        // Every overlap is corrected before any impulse is exchanged.
        for manifold in &self.contacts {
            if let Some((a, b)) = self.bodies.pair_mut(manifold.body_a, manifold.body_b) {
                manifold.resolve_penetration(a, b);
            }
        }
        for manifold in &self.contacts {
            if let Some((a, b)) = self.bodies.pair_mut(manifold.body_a, manifold.body_b) {
                manifold.resolve_collision(a, b);
            }
        }
    }

    /// Tests every unordered pair of bodies sharing a layer.
    fn check_collisions(&mut self) {
        let handles = self.bodies.handles();
        for (i, &ha) in handles.iter().enumerate() {
            for &hb in &handles[i + 1..] {
                let (Some(body_a), Some(body_b)) = (self.bodies.get(ha), self.bodies.get(hb)) else {
                    continue;
                };
                if !body_a.shares_layer_with(body_b) {
                    continue;
                }
                if let Some(result) = collision::collide(body_a, body_b) {
                    let manifold = CollisionManifold::new(ha, hb, result);
                    trace!(
                        "contact {:?}/{:?}: normal {:?}, penetration {:.4}, at {:?}",
                        ha,
                        hb,
                        manifold.normal,
                        manifold.penetration,
                        manifold.contact
                    );
                    self.contacts.push(manifold);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::BodyKind;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_world_new() {
        let world = World::new();
        assert!(world.is_empty());
        assert!(world.contacts().is_empty());
        assert!(world.render_list().is_empty());
    }

    #[test]
    fn test_add_bodies() {
        let mut world = World::new();
        let ball = world.add_ball(0.0, 0.0, 5.0, 1.0).unwrap();
        let wall = world.add_wall(0.0, 0.0, 10.0, 0.0).unwrap();
        assert_eq!(world.len(), 2);
        assert_eq!(world.body(ball).unwrap().kind(), BodyKind::Ball);
        assert_eq!(world.body(wall).unwrap().kind(), BodyKind::Wall);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut world = World::new();
        assert_eq!(
            world.add_ball(0.0, 0.0, 1.0, -1.0),
            Err(EngineError::InvalidMass(-1.0))
        );
        assert!(matches!(
            world.add_wall(1.0, 1.0, 1.0, 1.0),
            Err(EngineError::DegenerateGeometry(_))
        ));
        assert!(world.is_empty());
    }

    #[test]
    fn test_remove_makes_handle_unknown() {
        let mut world = World::new();
        let h = world.add_star(0.0, 0.0, 3.0, 1.0).unwrap();
        assert!(world.remove(h).is_ok());
        assert_eq!(world.remove(h).unwrap_err(), EngineError::UnknownBody(h));
        assert_eq!(world.set_position(h, 1.0, 1.0, None), Err(EngineError::UnknownBody(h)));
        assert!(world.body(h).is_err());
        assert!(!world.contains(h));
    }

    #[test]
    fn test_set_position_and_controls() {
        let mut world = World::new();
        let h = world.add_box(0.0, 0.0, 4.0, 0.0, 2.0, 1.0).unwrap();
        world.set_position(h, 10.0, 20.0, Some(0.5)).unwrap();
        let body = world.body(h).unwrap();
        assert_eq!(body.position, Vec2::new(10.0, 20.0));
        assert_eq!(body.angle, 0.5);

        let controls = Controls { up: true, ..Controls::none() };
        world.set_controls(h, controls).unwrap();
        assert_eq!(world.body(h).unwrap().controls, controls);
    }

    #[test]
    fn test_configure_applies_overrides() {
        let mut world = World::new();
        let h = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let config = BodyConfig::default().with_layer(3).with_max_speed(2.0);
        world.configure(h, &config).unwrap();
        let body = world.body(h).unwrap();
        assert_eq!(body.layer, 3);
        assert_eq!(body.max_speed, 2.0);
        assert_eq!(body.elasticity, 1.0);
    }

    #[test]
    fn test_tick_moves_bodies() {
        let mut world = World::new();
        let h = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        world.body_mut(h).unwrap().velocity = Vec2::new(1.0, 2.0);
        world.tick();
        world.tick();
        assert_eq!(world.body(h).unwrap().position, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_tick_records_contacts() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_ball(1.5, 0.0, 1.0, 1.0).unwrap();
        world.tick();

        assert_eq!(world.contacts().len(), 1);
        let m = world.contacts()[0];
        assert_eq!((m.body_a, m.body_b), (a, b));
        assert!((m.penetration - 0.5).abs() < EPSILON);
        // pushed apart evenly
        assert!((world.body(a).unwrap().position.x - -0.25).abs() < EPSILON);
        assert!((world.body(b).unwrap().position.x - 1.75).abs() < EPSILON);
    }

    #[test]
    fn test_layers_filter_pairs() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_ball(1.5, 0.0, 1.0, 1.0).unwrap();
        world.body_mut(a).unwrap().layer = 1;
        world.body_mut(b).unwrap().layer = 2;
        world.tick();
        assert!(world.contacts().is_empty());
        // the query ignores layers
        assert!(world.collide(a, b).is_some());

        // layer 0 meets everything
        world.body_mut(b).unwrap().layer = 0;
        world.tick();
        assert_eq!(world.contacts().len(), 1);
    }

    #[test]
    fn test_collide_query_with_stale_handle() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_ball(1.0, 0.0, 1.0, 1.0).unwrap();
        assert!(world.collide(a, a).is_none());
        world.remove(b).unwrap();
        assert!(world.collide(a, b).is_none());
    }

    #[test]
    fn test_touching_is_not_colliding() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_ball(2.0, 0.0, 1.0, 1.0).unwrap();
        assert!(world.collide(a, b).is_none());

        world.set_position(b, 1.99, 0.0, None).unwrap();
        let hit = world.collide(a, b).unwrap();
        assert!((hit.penetration - 0.01).abs() < 1e-6);

        // touching pairs produce no manifold either
        world.set_position(b, 2.0, 0.0, None).unwrap();
        world.tick();
        assert!(world.contacts().is_empty());
    }

    #[test]
    fn test_corrections_precede_impulses() {
        let mut world = World::new();
        // box over x in [0,4], y in [0,2]
        let bx = world.add_box(0.0, 0.0, 4.0, 0.0, 2.0, 1.0).unwrap();
        let ball = world.add_ball(3.0, 3.5, 1.0, 1.0).unwrap();
        world.body_mut(ball).unwrap().velocity = Vec2::new(0.0, -1.0);
        // short wall cutting 0.5 into the box's right side
        let wall = world.add_wall(3.5, 0.5, 3.5, 1.5).unwrap();
        let inv_i = world.body(bx).unwrap().inv_inertia;

        world.tick();

        let contacts = world.contacts();
        assert_eq!(contacts.len(), 2);
        assert_eq!((contacts[0].body_a, contacts[0].body_b), (bx, ball));
        assert_eq!((contacts[1].body_a, contacts[1].body_b), (bx, wall));
        assert!((contacts[0].penetration - 0.5).abs() < EPSILON);
        assert!((contacts[1].penetration - 0.5).abs() < EPSILON);

        // half the ball overlap, then the whole wall overlap
        let box_body = world.body(bx).unwrap();
        assert!((box_body.position.x - 1.5).abs() < EPSILON);
        assert!((box_body.position.y - 0.75).abs() < EPSILON);
        assert!((world.body(ball).unwrap().position.y - 2.75).abs() < EPSILON);

        // ball impulse uses the fully corrected arm (1.5, 0.75)
        let j1 = 2.0 / (2.0 + 2.25 * inv_i);
        let w1 = -1.5 * inv_i * j1;
        // wall impulse sees the spin from the first one through arm (2, -0.25)
        let sep2 = -0.25 * w1;
        let j2 = -2.0 * sep2 / (1.0 + 0.0625 * inv_i);

        assert!((box_body.velocity.x - -j2).abs() < EPSILON);
        assert!((box_body.velocity.y - -j1).abs() < EPSILON);
        assert!((box_body.angular_velocity - (w1 - 0.25 * inv_i * j2)).abs() < EPSILON);
        let ball_body = world.body(ball).unwrap();
        assert!(ball_body.velocity.x.abs() < EPSILON);
        assert!((ball_body.velocity.y - (-1.0 + j1)).abs() < EPSILON);
    }

    #[test]
    fn test_contacts_cleared_next_tick() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_ball(1.5, 0.0, 1.0, 1.0).unwrap();
        world.body_mut(a).unwrap().velocity = Vec2::new(1.0, 0.0);
        world.tick();
        assert_eq!(world.contacts().len(), 1);
        // velocities swapped, b now runs away
        assert!((world.body(b).unwrap().velocity.x - 1.0).abs() < EPSILON);
        world.tick();
        assert!(world.contacts().is_empty());
    }

    #[test]
    fn test_render_list_follows_live_bodies() {
        let mut world = World::new();
        let a = world.add_ball(0.0, 0.0, 1.0, 1.0).unwrap();
        let b = world.add_wall(0.0, 5.0, 10.0, 5.0).unwrap();
        world.body_mut(a).unwrap().color = "red".to_string();
        world.remove(b).unwrap();
        let items = world.render_list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].handle, a);
        assert_eq!(items[0].color, "red");
    }
}
