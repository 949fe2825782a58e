//! Per-body tunables that can be loaded from a config document.

use crate::objects::body::Body;
use serde::{Deserialize, Serialize};

/// Overrides for a body's tunables. Unset fields leave the body untouched.
///
/// Keys are camelCase so a document reads like
/// `{"elasticity": 0.5, "maxSpeed": 3, "angFriction": 0.05, "layer": 2}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyConfig {
    /// Bounce retention on impact. Clamped to [0, 1].
    pub elasticity: Option<f64>,
    /// Linear damping per tick. Clamped to [0, 1].
    pub friction: Option<f64>,
    /// Angular damping per tick. Clamped to [0, 1].
    pub ang_friction: Option<f64>,
    /// Speed cap, 0 = uncapped.
    pub max_speed: Option<f64>,
    /// Collision group, 0 = collides with all.
    pub layer: Option<u32>,
    /// Render hint only.
    pub color: Option<String>,
    pub key_force: Option<f64>,
    pub ang_key_force: Option<f64>,
}

impl BodyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = Some(elasticity);
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn with_ang_friction(mut self, ang_friction: f64) -> Self {
        self.ang_friction = Some(ang_friction);
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = Some(max_speed);
        self
    }

    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_key_force(mut self, key_force: f64) -> Self {
        self.key_force = Some(key_force);
        self
    }

    pub fn with_ang_key_force(mut self, ang_key_force: f64) -> Self {
        self.ang_key_force = Some(ang_key_force);
        self
    }

    /// Writes every set field into `body`, clamping to sane ranges.
    pub fn apply_to(&self, body: &mut Body) {
        if let Some(e) = self.elasticity {
            body.elasticity = e.clamp(0.0, 1.0);
        }
        if let Some(f) = self.friction {
            body.friction = f.clamp(0.0, 1.0);
        }
        if let Some(f) = self.ang_friction {
            body.ang_friction = f.clamp(0.0, 1.0);
        }
        if let Some(s) = self.max_speed {
            body.max_speed = s.max(0.0);
        }
        if let Some(layer) = self.layer {
            body.layer = layer;
        }
        if let Some(color) = &self.color {
            body.color = color.clone();
        }
        if let Some(k) = self.key_force {
            body.key_force = k.max(0.0);
        }
        if let Some(k) = self.ang_key_force {
            body.ang_key_force = k.max(0.0);
        }
    }

    /// Snapshot of a body's current tunables.
    pub fn from_body(body: &Body) -> Self {
        Self {
            elasticity: Some(body.elasticity),
            friction: Some(body.friction),
            ang_friction: Some(body.ang_friction),
            max_speed: Some(body.max_speed),
            layer: Some(body.layer),
            color: Some(body.color.clone()),
            key_force: Some(body.key_force),
            ang_key_force: Some(body.ang_key_force),
        }
    }
}
