use hecs::{Entity, World};

use crate::body::Body;
use crate::components::{BodyIndex, Color, Mass, Position, Radius, Velocity};

/// Spawn one sphere entity from a body snapshot.
pub fn spawn_body(world: &mut World, index: usize, body: &Body) -> Entity {
    world.spawn((
        BodyIndex(index),
        Position(body.position),
        Velocity(body.velocity),
        Radius(body.radius),
        Mass(body.mass),
        Color(body.color),
    ))
}

/// Spawn every body with `BodyIndex` equal to its slot in `bodies`.
/// Returns the entities in the same order.
pub fn spawn_bodies(world: &mut World, bodies: &[Body]) -> Vec<Entity> {
    bodies
        .iter()
        .enumerate()
        .map(|(index, body)| spawn_body(world, index, body))
        .collect()
}
