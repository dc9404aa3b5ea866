mod physics;
mod render;

pub use physics::{BodyIndex, CollisionEvent, Mass, Position, Radius, Velocity};
pub use render::Color;
