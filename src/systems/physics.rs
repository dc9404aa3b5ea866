use glam::Vec3;
use hecs::{Entity, World};

use super::collision::{resolve_pairs, ContactObserver, PairContact};
use crate::body::Body;
use crate::components::{BodyIndex, Color, CollisionEvent, Mass, Position, Radius, Velocity};
use crate::config::SimConfig;

/// Explicit Euler position update: `position += velocity * dt`.
pub fn integrate(body: &mut Body, dt: f32) {
    body.position += body.velocity * dt;
}

/// Reflect a body off the walls of a box centered on the origin.
///
/// Each axis is tested and corrected on its own, so edge and corner contacts
/// resolve in one call. A crossing axis gets its center clamped so the surface
/// sits on the wall and its velocity component becomes `-v * restitution`.
/// Returns true if any wall was hit.
pub fn resolve_wall_collision(body: &mut Body, half_extents: Vec3, restitution: f32) -> bool {
    let mut hit = false;
    for axis in 0..3 {
        let half = half_extents[axis];
        if body.position[axis] - body.radius < -half {
            body.position[axis] = -half + body.radius;
            body.velocity[axis] = -body.velocity[axis] * restitution;
            hit = true;
        }
        if body.position[axis] + body.radius > half {
            body.position[axis] = half - body.radius;
            body.velocity[axis] = -body.velocity[axis] * restitution;
            hit = true;
        }
    }
    hit
}

/// Advance a body collection by one step: integrate every body, bounce every
/// body off the walls, then resolve all unordered pairs in index order.
pub fn step_bodies<O: ContactObserver + ?Sized>(
    bodies: &mut [Body],
    config: &SimConfig,
    observer: &mut O,
) -> Vec<PairContact> {
    let half_extents = config.half_extents();
    for body in bodies.iter_mut() {
        integrate(body, config.timestep);
        resolve_wall_collision(body, half_extents, config.restitution);
    }
    resolve_pairs(bodies, config.restitution, observer)
}

/// Run one physics step over every body entity in the world.
///
/// Bodies are snapshotted in `BodyIndex` order, stepped, and written back, so
/// the pair order is stable regardless of archetype layout.
pub fn physics_step<O: ContactObserver + ?Sized>(
    world: &mut World,
    config: &SimConfig,
    observer: &mut O,
) -> Vec<CollisionEvent> {
    let (entities, mut bodies) = gather_bodies(world);
    let contacts = step_bodies(&mut bodies, config, observer);
    scatter_bodies(world, &entities, &bodies);

    contacts
        .into_iter()
        .map(|pair| CollisionEvent {
            entity_a: entities[pair.first],
            entity_b: entities[pair.second],
            contact_normal: pair.contact.normal,
            penetration_depth: pair.contact.penetration_depth,
            impulse: pair.contact.impulse,
        })
        .collect()
}

/// Snapshot all body entities, sorted by `BodyIndex`.
pub fn gather_bodies(world: &World) -> (Vec<Entity>, Vec<Body>) {
    let mut rows: Vec<(BodyIndex, Entity, Body)> = world
        .query::<(&BodyIndex, &Position, &Velocity, &Radius, &Mass, &Color)>()
        .iter()
        .map(|(entity, (index, position, velocity, radius, mass, color))| {
            let body = Body {
                position: position.0,
                velocity: velocity.0,
                radius: radius.0,
                mass: mass.0,
                color: color.0,
            };
            (*index, entity, body)
        })
        .collect();
    rows.sort_unstable_by_key(|(index, _, _)| *index);
    rows.into_iter().map(|(_, entity, body)| (entity, body)).unzip()
}

/// Write the mutable part of each body back to its entity.
fn scatter_bodies(world: &mut World, entities: &[Entity], bodies: &[Body]) {
    for (&entity, body) in entities.iter().zip(bodies) {
        if let Ok((position, velocity, color)) =
            world.query_one_mut::<(&mut Position, &mut Velocity, &mut Color)>(entity)
        {
            position.0 = body.position;
            velocity.0 = body.velocity;
            color.0 = body.color;
        }
    }
}
