use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::body::{Body, Rgba};
use crate::config::{SimConfig, SpawnConfig};

pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Result of [`generate_bodies`].
#[derive(Debug)]
pub struct Placement {
    pub bodies: Vec<Body>,
    /// Indices of bodies placed at their last sample after every attempt overlapped.
    pub degraded: Vec<usize>,
}

/// Build an RNG from `seed`, or from the system clock when `None`.
/// Also returns the seed actually used so the run can be replayed.
pub fn rng_from_seed(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    info!(seed, "seeding random source");
    (StdRng::seed_from_u64(seed), seed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn random_vec3<R: Rng>(rng: &mut R, bound: f32) -> Vec3 {
    Vec3::new(
        rng.random_range(-bound..=bound),
        rng.random_range(-bound..=bound),
        rng.random_range(-bound..=bound),
    )
}

/// Draw `spawn.count` bodies inside the box described by `sim`.
///
/// Each body gets a radius from the configured range, a mass derived from it,
/// and a position inset by its own radius so it starts clear of every wall.
/// Position and velocity are resampled until the body clears all previously
/// placed bodies, up to [`MAX_PLACEMENT_ATTEMPTS`] times.
///
/// Never fails: a body that cannot be placed clear of the others is kept at
/// its last sample, logged, and listed in [`Placement::degraded`].
pub fn generate_bodies<R: Rng>(spawn: &SpawnConfig, sim: &SimConfig, rng: &mut R) -> Placement {
    let half = sim.box_size * 0.5;
    let mut bodies: Vec<Body> = Vec::with_capacity(spawn.count);
    let mut degraded = Vec::new();

    for index in 0..spawn.count {
        let radius = rng.random_range(spawn.radius_min..=spawn.radius_max);
        let bound = half - radius;

        let mut position = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;
        let mut attempts = 0;
        let mut clear = false;
        while !clear && attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            position = random_vec3(rng, bound);
            velocity = random_vec3(rng, spawn.max_speed);
            clear = bodies
                .iter()
                .all(|other| position.distance(other.position) >= radius + other.radius);
        }

        if !clear {
            warn!(index, attempts, "no overlap-free position found; placing body anyway");
            degraded.push(index);
        }

        bodies.push(Body::new(position, velocity, radius, Rgba::random(rng)));
    }

    debug!(count = bodies.len(), degraded = degraded.len(), "bodies placed");
    Placement { bodies, degraded }
}
