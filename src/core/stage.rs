//! Owned visual state shared by the frame loop and the event handlers.

use super::camera::CameraRig;
use super::constants::*;
use super::particles::ParticleField;
use super::reveal::RevealSet;
use super::trigger::{ElementBounds, ScrubTween};
use super::tween::{Ease, EntranceTween, Pose};
use rand::Rng;
use smallvec::SmallVec;

/// Layout measurements needed to place scroll triggers.
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub hero: Option<ElementBounds>,
    pub reveals: Vec<ElementBounds>,
}

pub struct Stage {
    pub particles: ParticleField,
    pub camera: CameraRig,
    pub reveals: RevealSet,
    pub parallax: ScrubTween,
    pub hero: EntranceTween,
    has_hero_region: bool,
}

impl Stage {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> anyhow::Result<Self> {
        Ok(Self {
            particles: ParticleField::new(
                PARTICLE_COUNT,
                PARTICLE_SPREAD,
                PARTICLE_VELOCITY_SCALE,
                rng,
            ),
            camera: CameraRig::default(),
            reveals: RevealSet::new(REVEAL_START, REVEAL_END)?,
            parallax: ScrubTween::new(
                CAMERA_START.z,
                PARALLAX_END_Z,
                PARALLAX_START,
                PARALLAX_END,
            )?,
            hero: hero_entrance(),
            has_hero_region: false,
        })
    }

    pub fn on_pointer(&mut self, nx: f32, ny: f32) {
        self.camera.update_target_from_pointer(nx, ny);
    }

    /// Evaluate scroll-linked state. Returns reveal indices that fired now.
    pub fn on_scroll(&mut self, scroll: f64) -> SmallVec<[usize; 8]> {
        if self.has_hero_region {
            self.camera.set_z(self.parallax.value_at(scroll));
        }
        self.camera.sync_target_z();
        self.reveals.update(scroll)
    }

    /// Re-measure triggers, then re-evaluate at the current offset.
    pub fn refresh(&mut self, layout: &PageLayout, scroll: f64) -> SmallVec<[usize; 8]> {
        self.camera
            .set_aspect(layout.viewport_width as f32, layout.viewport_height as f32);
        self.has_hero_region = layout.hero.is_some();
        if let Some(hero) = layout.hero {
            self.parallax.refresh(hero, layout.viewport_height);
        }
        self.reveals.refresh(&layout.reveals, layout.viewport_height);
        self.on_scroll(scroll)
    }

    /// Per-frame motion: particle drift and spin, camera easing.
    pub fn advance_frame(&mut self, elapsed: f64) {
        self.particles.advance(elapsed);
        self.particles.rotate();
        self.camera.advance();
    }
}

pub fn hero_entrance() -> EntranceTween {
    EntranceTween {
        from: Pose {
            opacity: HERO_FROM_OPACITY,
            y_px: HERO_FROM_Y_PX,
        },
        to: Pose {
            opacity: 1.0,
            y_px: 0.0,
        },
        delay_sec: HERO_DELAY_SEC,
        duration_sec: HERO_DURATION_SEC,
        ease: Ease::Power3Out,
    }
}
