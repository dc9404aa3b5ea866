use glam::Vec3;
use hecs::Entity;

/// Position of the body in the fixed pair-iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyIndex(pub usize);

/// Sphere center in world space.
pub struct Position(pub Vec3);

/// Linear velocity in world space.
pub struct Velocity(pub Vec3);

/// Sphere radius. Fixed after spawn.
pub struct Radius(pub f32);

/// Mass derived from the radius at spawn.
pub struct Mass(pub f32);

/// Sphere-sphere contact resolved during a physics step.
/// `contact_normal` points from `entity_a` toward `entity_b`.
#[derive(Clone, Copy, Debug)]
pub struct CollisionEvent {
    pub entity_a: Entity,
    pub entity_b: Entity,
    pub contact_normal: Vec3,
    pub penetration_depth: f32,
    pub impulse: f32,
}
