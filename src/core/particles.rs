//! Drifting point field shown behind the page.
//!
//! Positions live in a cube of half-width `spread / 2`. Each frame a point
//! moves by its own fixed velocity plus a small sine drift on Y, then wraps to
//! the opposite face if it left the cube. The whole set additionally spins
//! slowly; that rotation is kept as a model transform and never baked into the
//! positions.

use super::constants::{
    DRIFT_X_FREQUENCY, DRIFT_Y_AMPLITUDE, FIELD_SPIN_X_PER_FRAME, FIELD_SPIN_Y_PER_FRAME,
};
use anyhow::bail;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    bound: f32,
    rotation: Vec2,
}

impl ParticleField {
    /// Allocate `count` points with positions in `[-spread/2, spread/2]` and
    /// velocities in `[-velocity_scale/2, velocity_scale/2]` on every axis.
    pub fn new<R: Rng + ?Sized>(
        count: usize,
        spread: f32,
        velocity_scale: f32,
        rng: &mut R,
    ) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(centered(rng, spread));
            velocities.push(centered(rng, velocity_scale));
        }
        Self {
            positions,
            velocities,
            bound: spread * 0.5,
            rotation: Vec2::ZERO,
        }
    }

    /// Build a field from explicit state. Positions outside the bound are
    /// accepted as-is and will wrap on the next `advance`.
    pub fn from_parts(
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        bound: f32,
    ) -> anyhow::Result<Self> {
        if positions.len() != velocities.len() {
            bail!(
                "{} positions but {} velocities",
                positions.len(),
                velocities.len()
            );
        }
        Ok(Self {
            positions,
            velocities,
            bound,
            rotation: Vec2::ZERO,
        })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }

    /// Accumulated whole-set rotation (x, y) in radians.
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// One simulation step. `elapsed` is the drift phase (scaled wall-clock time).
    pub fn advance(&mut self, elapsed: f64) {
        let b = self.bound;
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            let x0 = p.x;
            *p += *v;
            let phase = elapsed + (x0 * DRIFT_X_FREQUENCY) as f64;
            p.y += (phase.sin() as f32) * DRIFT_Y_AMPLITUDE;
            p.x = wrap(p.x, b);
            p.y = wrap(p.y, b);
            p.z = wrap(p.z, b);
        }
    }

    /// Constant-rate spin of the whole set, applied once per rendered frame.
    pub fn rotate(&mut self) {
        self.rotation.x += FIELD_SPIN_X_PER_FRAME;
        self.rotation.y += FIELD_SPIN_Y_PER_FRAME;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

#[inline]
fn centered<R: Rng + ?Sized>(rng: &mut R, scale: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * scale,
        (rng.gen::<f32>() - 0.5) * scale,
        (rng.gen::<f32>() - 0.5) * scale,
    )
}

/// Hard wraparound: leaving one face re-enters exactly at the opposite one.
#[inline]
pub fn wrap(v: f32, bound: f32) -> f32 {
    if v > bound {
        -bound
    } else if v < -bound {
        bound
    } else {
        v
    }
}
