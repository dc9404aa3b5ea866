use approx::{assert_abs_diff_eq, assert_relative_eq};
use bouncebox::body::{Body, Rgba};
use bouncebox::config::SimConfig;
use bouncebox::systems::{
    integrate, resolve_pair_collision, resolve_wall_collision, step_bodies,
};
use glam::Vec3;

/// Build a white body with mass derived from its radius
pub fn sphere(position: [f32; 3], velocity: [f32; 3], radius: f32) -> Body {
    Body::new(position.into(), velocity.into(), radius, Rgba::WHITE)
}

/// Box of edge 200 centered on the origin
pub fn test_config(restitution: f32) -> SimConfig {
    SimConfig {
        box_size: 200.0,
        timestep: 0.03,
        restitution,
    }
}

fn axis_energy(body: &Body, axis: usize) -> f32 {
    0.5 * body.mass * body.velocity[axis] * body.velocity[axis]
}

// ==================================================================================
// Wall collisions
// ==================================================================================

#[test]
fn wall_bounce_never_adds_energy() {
    let half = Vec3::splat(100.0);
    for &cr in &[0.0_f32, 0.25, 0.5, 0.9, 1.0] {
        let mut b = sphere([95.0, 0.0, 0.0], [80.0, 0.0, 0.0], 10.0);
        let before = axis_energy(&b, 0);
        resolve_wall_collision(&mut b, half, cr);
        let after = axis_energy(&b, 0);

        assert!(after <= before, "energy grew for CR = {cr}");
        if cr == 1.0 {
            assert_relative_eq!(after, before);
        } else {
            assert!(after < before, "energy kept for CR = {cr}");
        }
    }
}

#[test]
fn wall_containment_after_outward_motion() {
    let config = test_config(1.0);
    let half = config.half_extents();

    let mut high = sphere([85.0, 0.0, 0.0], [1000.0, 0.0, 0.0], 10.0);
    integrate(&mut high, config.timestep);
    assert!(high.position.x + high.radius > half.x);
    resolve_wall_collision(&mut high, half, config.restitution);
    assert_eq!(high.position.x, half.x - high.radius);
    assert!(high.velocity.x < 0.0);

    let mut low = sphere([0.0, -85.0, 0.0], [0.0, -1000.0, 0.0], 10.0);
    integrate(&mut low, config.timestep);
    resolve_wall_collision(&mut low, half, config.restitution);
    assert_eq!(low.position.y, -half.y + low.radius);
    assert!(low.velocity.y > 0.0);
}

// ==================================================================================
// Pair collisions
// ==================================================================================

#[test]
fn pair_collision_conserves_momentum() {
    let mut a = sphere([0.0, 0.0, 0.0], [30.0, 5.0, -2.0], 12.0);
    let mut b = sphere([15.0, 6.0, 3.0], [-10.0, 0.0, 4.0], 7.0);
    let before = a.momentum() + b.momentum();

    let contact = resolve_pair_collision(&mut a, &mut b, 0.7);
    assert!(contact.is_some());

    let after = a.momentum() + b.momentum();
    let scale = before.length().max(1.0);
    assert!(
        (after - before).length() / scale < 1e-5,
        "momentum drifted from {before:?} to {after:?}"
    );
}

#[test]
fn separating_pair_is_noop() {
    let mut a = sphere([-5.0, 0.0, 0.0], [-20.0, 1.0, 0.0], 10.0);
    let mut b = sphere([5.0, 0.0, 0.0], [20.0, 0.0, 3.0], 10.0);
    let (before_a, before_b) = (a, b);

    assert!(resolve_pair_collision(&mut a, &mut b, 1.0).is_none());
    assert_eq!(a, before_a);
    assert_eq!(b, before_b);
}

#[test]
fn overlapping_pair_ends_exactly_touching() {
    let mut a = sphere([1.0, 2.0, 3.0], [10.0, 0.0, 0.0], 10.0);
    let mut b = sphere([13.0, 7.0, -1.0], [-5.0, -5.0, 0.0], 6.0);
    let before = a.position.distance(b.position);
    assert!(before > 0.0 && before < a.radius + b.radius);

    let contact = resolve_pair_collision(&mut a, &mut b, 1.0).unwrap();
    assert_relative_eq!(contact.penetration_depth, 16.0 - before, epsilon = 1e-5);
    assert_relative_eq!(a.position.distance(b.position), 16.0, epsilon = 1e-4);

    // Called again with the now-touching bodies, nothing changes.
    let (settled_a, settled_b) = (a, b);
    assert!(resolve_pair_collision(&mut a, &mut b, 1.0).is_none());
    assert_eq!(a, settled_a);
    assert_eq!(b, settled_b);
}

#[test]
fn coincident_centers_are_skipped_safely() {
    let mut a = sphere([4.0, 4.0, 4.0], [1.0, 2.0, 3.0], 10.0);
    let mut b = sphere([4.0, 4.0, 4.0], [-1.0, 0.0, 0.0], 5.0);

    assert!(resolve_pair_collision(&mut a, &mut b, 1.0).is_none());
    for body in [&a, &b] {
        assert!(body.position.is_finite());
        assert!(body.velocity.is_finite());
    }
    assert_eq!(a.velocity, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(b.velocity, Vec3::new(-1.0, 0.0, 0.0));
}

#[test]
fn zero_length_normalization_is_zero() {
    assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
}

// ==================================================================================
// Full step
// ==================================================================================

#[test]
fn head_on_equal_masses_swap_velocities() {
    let config = test_config(1.0);
    let mut bodies = [
        sphere([-11.0, 0.0, 0.0], [50.0, 0.0, 0.0], 10.0),
        sphere([11.0, 0.0, 0.0], [-50.0, 0.0, 0.0], 10.0),
    ];
    assert_eq!(bodies[0].mass, bodies[1].mass);

    for body in bodies.iter_mut() {
        integrate(body, config.timestep);
    }
    assert!(bodies[0].position.distance(bodies[1].position) < 20.0);

    let (left, right) = bodies.split_at_mut(1);
    let contact = resolve_pair_collision(&mut left[0], &mut right[0], config.restitution).unwrap();

    assert!(contact.normal.abs_diff_eq(Vec3::X, 1e-6));
    assert!(bodies[0].velocity.abs_diff_eq(Vec3::new(-50.0, 0.0, 0.0), 1e-4));
    assert!(bodies[1].velocity.abs_diff_eq(Vec3::new(50.0, 0.0, 0.0), 1e-4));
    assert_abs_diff_eq!(bodies[0].position.distance(bodies[1].position), 20.0, epsilon = 1e-4);
}

#[test]
fn step_matches_manual_pipeline() {
    let config = test_config(1.0);
    let start = [
        sphere([-11.0, 0.0, 0.0], [50.0, 0.0, 0.0], 10.0),
        sphere([11.0, 0.0, 0.0], [-50.0, 0.0, 0.0], 10.0),
        sphere([60.0, 60.0, 60.0], [0.0, 0.0, 2000.0], 5.0),
    ];

    let mut stepped = start;
    let contacts = step_bodies(&mut stepped, &config, &mut ());
    assert_eq!(contacts.len(), 1);
    assert_eq!((contacts[0].first, contacts[0].second), (0, 1));

    // Third body hits the +Z wall in the same step.
    assert_eq!(stepped[2].position.z, 95.0);
    assert_eq!(stepped[2].velocity.z, -2000.0);
    assert!(stepped[0].velocity.abs_diff_eq(Vec3::new(-50.0, 0.0, 0.0), 1e-4));
}

#[test]
fn inelastic_head_on_stops_relative_motion() {
    let config = test_config(0.0);
    let mut bodies = [
        sphere([-9.0, 0.0, 0.0], [40.0, 0.0, 0.0], 10.0),
        sphere([9.0, 0.0, 0.0], [-40.0, 0.0, 0.0], 10.0),
    ];
    step_bodies(&mut bodies, &config, &mut ());
    assert!(bodies[0].velocity.abs_diff_eq(bodies[1].velocity, 1e-4));
    assert!(bodies[0].velocity.abs_diff_eq(Vec3::ZERO, 1e-4));
}
