mod collision;
mod energy;
mod physics;

pub use collision::{
    resolve_pair_collision, resolve_pairs, Contact, ContactObserver, PairContact, Recolor,
};
pub use energy::{kinetic_energy_system, total_kinetic_energy};
pub use physics::{
    gather_bodies, integrate, physics_step, resolve_wall_collision, step_bodies,
};
