mod placement;
mod prefabs;

pub use placement::{generate_bodies, rng_from_seed, Placement, MAX_PLACEMENT_ATTEMPTS};
pub use prefabs::{spawn_bodies, spawn_body};
