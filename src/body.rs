use glam::Vec3;
use rand::Rng;

/// Display color of a body. Not part of the physics state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Uniform random RGB at full opacity.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::opaque(rng.random(), rng.random(), rng.random())
    }

    /// Normalized RGB for shader uniforms.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }
}

/// Mass of a sphere of the given radius (unit density, constant factor dropped).
pub fn mass_from_radius(radius: f32) -> f32 {
    radius * radius * radius
}

/// A simulated sphere: a point mass with a radius.
///
/// `radius` and `mass` are fixed at creation; `position`, `velocity` and
/// `color` are mutated in place every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub mass: f32,
    pub color: Rgba,
}

impl Body {
    /// Builds a body whose mass is derived from `radius`.
    pub fn new(position: Vec3, velocity: Vec3, radius: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass: mass_from_radius(radius),
            color,
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }

    /// True when the two spheres' surfaces intersect.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }
}

/// True if any unordered pair in `bodies` overlaps.
pub fn any_overlapping(bodies: &[Body]) -> bool {
    bodies
        .iter()
        .enumerate()
        .any(|(i, a)| bodies[i + 1..].iter().any(|b| a.overlaps(b)))
}
