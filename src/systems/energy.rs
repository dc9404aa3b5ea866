use hecs::World;

use crate::body::Body;
use crate::components::{Mass, Velocity};

/// Total kinetic energy `Σ ½·m·|v|²` of a body collection.
pub fn total_kinetic_energy(bodies: &[Body]) -> f32 {
    bodies.iter().map(Body::kinetic_energy).sum()
}

/// Total kinetic energy of every entity with a velocity and a mass,
/// recomputed from current state on every call.
pub fn kinetic_energy_system(world: &World) -> f32 {
    world
        .query::<(&Velocity, &Mass)>()
        .iter()
        .map(|(_entity, (velocity, mass))| 0.5 * mass.0 * velocity.0.length_squared())
        .sum()
}
