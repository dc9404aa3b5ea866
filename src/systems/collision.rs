use glam::Vec3;
use rand::Rng;

use crate::body::{Body, Rgba};

/// Sphere-sphere contact that produced an impulse this step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal, pointing from the first body toward the second.
    pub normal: Vec3,
    pub penetration_depth: f32,
    /// Impulse magnitude applied along `normal`.
    pub impulse: f32,
}

/// A [`Contact`] between `bodies[first]` and `bodies[second]`, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairContact {
    pub first: usize,
    pub second: usize,
    pub contact: Contact,
}

/// Hook invoked once for every resolved pair contact.
pub trait ContactObserver {
    fn on_contact(&mut self, a: &mut Body, b: &mut Body, contact: &Contact);
}

/// No-op observer, keeps the step fully deterministic.
impl ContactObserver for () {
    fn on_contact(&mut self, _a: &mut Body, _b: &mut Body, _contact: &Contact) {}
}

/// Flashes both bodies to fresh random colors on contact.
/// Owns its own RNG stream so colors never perturb physics sampling.
pub struct Recolor<R> {
    rng: R,
}

impl<R: Rng> Recolor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ContactObserver for Recolor<R> {
    fn on_contact(&mut self, a: &mut Body, b: &mut Body, _contact: &Contact) {
        a.color = Rgba::random(&mut self.rng);
        b.color = Rgba::random(&mut self.rng);
    }
}

/// Resolve a possible contact between two spheres.
///
/// Applies an impulse along the contact normal and pushes both bodies apart by
/// half the penetration depth each. Returns `None` without touching either body
/// when they do not overlap, share a center, or are already separating.
pub fn resolve_pair_collision(a: &mut Body, b: &mut Body, restitution: f32) -> Option<Contact> {
    let delta = b.position - a.position;
    let dist = delta.length();
    let min_dist = a.radius + b.radius;

    // Coincident centers have no defined normal.
    if dist >= min_dist || dist <= 0.0 {
        return None;
    }

    let normal = delta / dist;
    // Relative velocity of B as seen from A; positive means moving apart.
    let vel_along_normal = (b.velocity - a.velocity).dot(normal);
    if vel_along_normal > 0.0 {
        return None;
    }

    let j = -(1.0 + restitution) * vel_along_normal / (1.0 / a.mass + 1.0 / b.mass);
    let impulse = normal * j;
    a.velocity -= impulse / a.mass;
    b.velocity += impulse / b.mass;

    let depth = min_dist - dist;
    let correction = normal * (depth * 0.5);
    a.position -= correction;
    b.position += correction;

    Some(Contact {
        normal,
        penetration_depth: depth,
        impulse: j,
    })
}

/// Resolve every unordered pair in the order (0,1), (0,2), .. (1,2), ..
/// Later pairs see the state left by earlier ones.
pub fn resolve_pairs<O: ContactObserver + ?Sized>(
    bodies: &mut [Body],
    restitution: f32,
    observer: &mut O,
) -> Vec<PairContact> {
    let mut contacts = Vec::new();
    for first in 0..bodies.len() {
        for second in (first + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(second);
            let (a, b) = (&mut head[first], &mut tail[0]);
            if let Some(contact) = resolve_pair_collision(a, b, restitution) {
                observer.on_contact(a, b, &contact);
                contacts.push(PairContact {
                    first,
                    second,
                    contact,
                });
            }
        }
    }
    contacts
}
