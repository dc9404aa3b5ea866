//! Elastic collisions of spheres in a cubic box.
//!
//! The library holds the simulation core: the [`body`] value type, validated
//! [`config`], the `hecs` [`components`] a body is stored as, initial
//! placement in [`scene`], and the collision engine in [`systems`]. It does no
//! I/O beyond logging; the `bouncebox` binary drives it once per frame and
//! renders the result.

pub mod body;
pub mod components;
pub mod config;
pub mod scene;
pub mod systems;

pub use body::{Body, Rgba};
pub use config::{ConfigError, SimConfig, SpawnConfig};
