// Host-side tests for the particle field update rule.

use glam::Vec3;
use particle_backdrop::core::particles::{wrap, ParticleField};
use particle_backdrop::core::{
    DRIFT_X_FREQUENCY, DRIFT_Y_AMPLITUDE, FIELD_SPIN_X_PER_FRAME, FIELD_SPIN_Y_PER_FRAME,
    PARTICLE_BOUND, PARTICLE_COUNT, PARTICLE_SPREAD, PARTICLE_VELOCITY_SCALE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(seed: u64) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(
        PARTICLE_COUNT,
        PARTICLE_SPREAD,
        PARTICLE_VELOCITY_SCALE,
        &mut rng,
    )
}

fn in_bounds(p: Vec3) -> bool {
    [p.x, p.y, p.z]
        .iter()
        .all(|c| (-PARTICLE_BOUND..=PARTICLE_BOUND).contains(c))
}

#[test]
fn initial_positions_and_velocities_are_within_ranges() {
    let field = make_field(42);
    assert_eq!(field.len(), PARTICLE_COUNT);
    assert_eq!(field.bound(), PARTICLE_BOUND);
    let vmax = PARTICLE_VELOCITY_SCALE * 0.5;
    for (p, v) in field.positions().iter().zip(field.velocities()) {
        assert!(in_bounds(*p), "spawned out of bounds: {:?}", p);
        assert!(v.x.abs() <= vmax && v.y.abs() <= vmax && v.z.abs() <= vmax);
    }
}

#[test]
fn single_step_moves_by_velocity_plus_sine_drift() {
    let mut field = make_field(7);
    let before: Vec<Vec3> = field.positions().to_vec();
    field.advance(0.0);

    for ((p0, p1), v) in before.iter().zip(field.positions()).zip(field.velocities()) {
        assert!(in_bounds(*p1));
        let drift = ((p0.x * DRIFT_X_FREQUENCY) as f64).sin() as f32 * DRIFT_Y_AMPLITUDE;
        let expected = Vec3::new(p0.x + v.x, p0.y + v.y + drift, p0.z + v.z);
        for (got, want) in [(p1.x, expected.x), (p1.y, expected.y), (p1.z, expected.z)] {
            if want > PARTICLE_BOUND {
                assert_eq!(got, -PARTICLE_BOUND);
            } else if want < -PARTICLE_BOUND {
                assert_eq!(got, PARTICLE_BOUND);
            } else {
                assert!((got - want).abs() < 1e-6, "got {} want {}", got, want);
            }
        }
    }
}

#[test]
fn stays_in_bounds_over_many_steps() {
    let mut field = make_field(3);
    for frame in 0..2000 {
        field.advance(frame as f64 * 0.0167);
    }
    assert!(field.positions().iter().all(|p| in_bounds(*p)));

    // Fast movers wrap every few frames.
    let mut fast = ParticleField::from_parts(
        vec![Vec3::new(7.0, -7.0, 0.0), Vec3::new(-7.4, 7.4, 7.4)],
        vec![Vec3::new(3.0, -2.5, 1.7), Vec3::new(-1.1, 0.9, 4.2)],
        PARTICLE_BOUND,
    )
    .unwrap();
    for frame in 0..500 {
        fast.advance(frame as f64);
        assert!(fast.positions().iter().all(|p| in_bounds(*p)));
    }
}

#[test]
fn exiting_a_face_reenters_at_the_opposite_face_exactly() {
    let mut field = ParticleField::from_parts(
        vec![Vec3::new(7.4999, 0.0, -7.4999)],
        vec![Vec3::new(0.001, 0.0, -0.001)],
        PARTICLE_BOUND,
    )
    .unwrap();
    field.advance(0.0);
    let p = field.positions()[0];
    assert_eq!(p.x, -7.5);
    assert_eq!(p.z, 7.5);
}

#[test]
fn wrap_is_not_a_clamp_or_reflection() {
    assert_eq!(wrap(7.6, 7.5), -7.5);
    assert_eq!(wrap(-7.6, 7.5), 7.5);
    assert_eq!(wrap(7.5, 7.5), 7.5);
    assert_eq!(wrap(-7.5, 7.5), -7.5);
    assert_eq!(wrap(1.25, 7.5), 1.25);
}

#[test]
fn velocities_never_change() {
    let mut field = make_field(11);
    let before = field.velocities().to_vec();
    for frame in 0..300 {
        field.advance(frame as f64 * 0.5);
        field.rotate();
    }
    assert_eq!(before, field.velocities());
}

#[test]
fn rotation_accumulates_as_whole_set_transform() {
    let mut field = make_field(5);
    let before = field.positions().to_vec();
    for _ in 0..100 {
        field.rotate();
    }
    assert_eq!(before, field.positions());
    let r = field.rotation();
    assert!((r.x - 100.0 * FIELD_SPIN_X_PER_FRAME).abs() < 1e-6);
    assert!((r.y - 100.0 * FIELD_SPIN_Y_PER_FRAME).abs() < 1e-6);

    let m = field.model_matrix();
    let p = m.transform_point3(Vec3::ZERO);
    assert!(p.length() < 1e-6, "rotation must keep the origin fixed");
}

#[test]
fn mismatched_parts_are_rejected() {
    let err = ParticleField::from_parts(vec![Vec3::ZERO; 2], vec![Vec3::ZERO], PARTICLE_BOUND);
    assert!(err.is_err());
}
