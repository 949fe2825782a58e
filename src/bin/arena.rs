//! Headless arena: random bodies bounce around a walled field while a scripted
//! player ball hunts them down. Anything the player touches is removed.
//!
//! Usage: `arena [ticks]` (default 3000). Set `RUST_LOG=debug` or `trace` for
//! registry and contact details.

use log::{info, warn};
use rand::Rng;
use sat_physics::{BodyConfig, BodyHandle, Controls, EngineResult, Vec2, World};
use std::env;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const RANDOM_BODIES: usize = 10;
const DEFAULT_TICKS: usize = 3000;

fn put_walls_around(world: &mut World, x1: f64, y1: f64, x2: f64, y2: f64) -> EngineResult<()> {
    world.add_wall(x1, y1, x2, y1)?;
    world.add_wall(x2, y1, x2, y2)?;
    world.add_wall(x2, y2, x1, y2)?;
    world.add_wall(x1, y2, x1, y1)?;
    Ok(())
}

/// Ball, box, capsule and star in turn, each kind parked at its own corner of the field
/// on its own layer.
fn spawn_random_bodies(world: &mut World, rng: &mut impl Rng) -> EngineResult<Vec<BodyHandle>> {
    let mut spawned = Vec::with_capacity(RANDOM_BODIES);
    for i in 0..RANDOM_BODIES {
        let x0 = rng.gen_range(100..=(WIDTH as i32 - 100)) as f64;
        let y0 = rng.gen_range(100..=(HEIGHT as i32 - 100)) as f64;
        let mut x1 = x0 + rng.gen_range(-50..=50) as f64;
        let y1 = y0 + rng.gen_range(-50..=50) as f64;
        if x1 == x0 && y1 == y0 {
            x1 += 1.0;
        }
        let r = rng.gen_range(10..=30) as f64;
        let m = rng.gen_range(0..=10) as f64;

        let (handle, spot, config) = match i % 4 {
            0 => (
                world.add_ball(x0, y0, r, m)?,
                (100.0, 100.0),
                BodyConfig::new().with_color("red").with_layer(1),
            ),
            1 => (
                world.add_box(x0, y0, x1, y1, r, m)?,
                (200.0, 200.0),
                BodyConfig::new().with_color("blue").with_layer(2),
            ),
            2 => (
                world.add_capsule(x0, y0, x1, y1, r, m)?,
                (300.0, 300.0),
                BodyConfig::new().with_color("lightgreen").with_layer(3),
            ),
            _ => (
                world.add_star(x0, y0, r + 20.0, m)?,
                (400.0, 400.0),
                BodyConfig::new().with_color("yellow").with_layer(4),
            ),
        };
        world.set_position(handle, spot.0, spot.1, None)?;
        world.configure(handle, &config)?;

        let body = world.body_mut(handle)?;
        if body.mass != 0.0 {
            body.velocity = Vec2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        }
        spawned.push(handle);
    }
    Ok(spawned)
}

/// Holds the direction keys that point the player at `target`.
fn chase(from: Vec2, target: Vec2) -> Controls {
    let delta = target - from;
    Controls {
        left: delta.x < -1.0,
        right: delta.x > 1.0,
        up: delta.y < -1.0,
        down: delta.y > 1.0,
        action: false,
    }
}

fn run(ticks: usize) -> EngineResult<()> {
    let mut rng = rand::thread_rng();
    let mut world = World::new();

    put_walls_around(&mut world, 0.0, 0.0, WIDTH, HEIGHT)?;
    let mut targets = spawn_random_bodies(&mut world, &mut rng)?;

    let player = world.add_ball(320.0, 240.0, 10.0, 5.0)?;
    world.configure(player, &BodyConfig::new().with_max_speed(3.0).with_color("#5B2C6F"))?;
    world.body_mut(player)?.player = true;

    info!("arena ready: {} bodies, {} targets", world.len(), targets.len());

    for tick in 0..ticks {
        // --- Game logic --- //
        let mut caught = Vec::new();
        targets.retain(|&target| {
            if world.collide(target, player).is_some() {
                caught.push(target);
                false
            } else {
                true
            }
        });
        for target in caught {
            let body = world.remove(target)?;
            info!("tick {}: player caught a {:?} ({})", tick, body.kind(), body.color);
        }
        if targets.is_empty() {
            info!("tick {}: every target caught", tick);
            return Ok(());
        }

        // --- Input --- //
        let player_pos = world.body(player)?.position;
        let nearest = targets
            .iter()
            .filter_map(|&h| world.body(h).ok())
            .map(|body| body.position)
            .min_by(|a, b| player_pos.distance(*a).total_cmp(&player_pos.distance(*b)));
        let controls = nearest.map_or_else(Controls::none, |target| chase(player_pos, target));
        world.set_controls(player, controls)?;

        world.tick();

        if tick % 300 == 0 {
            let p = world.body(player)?;
            info!(
                "tick {}: player at ({:.1}, {:.1}), {} contacts, {} targets left",
                tick,
                p.position.x,
                p.position.y,
                world.contacts().len(),
                targets.len()
            );
        }
    }

    info!("stopped after {} ticks with {} targets left", ticks, targets.len());
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let ticks = match env::args().nth(1) {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            warn!("could not parse tick count {:?}, using {}", arg, DEFAULT_TICKS);
            DEFAULT_TICKS
        }),
        None => DEFAULT_TICKS,
    };

    if let Err(e) = run(ticks) {
        eprintln!("arena failed: {}", e);
        std::process::exit(1);
    }
}
