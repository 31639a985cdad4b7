/// Easing curves used by the page animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1Out,
    Power3Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Opacity and vertical offset of an animated block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub y_px: f32,
}

impl Pose {
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: lerp(self.opacity, to.opacity, t),
            y_px: lerp(self.y_px, to.y_px, t),
        }
    }

    pub fn opacity_css(self) -> String {
        format!("{:.4}", self.opacity)
    }

    pub fn transform_css(self) -> String {
        format!("translate3d(0px, {:.3}px, 0px)", self.y_px)
    }
}

/// Time-driven one-shot tween with a start delay.
#[derive(Clone, Debug)]
pub struct EntranceTween {
    pub from: Pose,
    pub to: Pose,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub ease: Ease,
}

impl EntranceTween {
    /// Pose `elapsed_sec` seconds after the tween was created.
    pub fn sample(&self, elapsed_sec: f32) -> Pose {
        let local = elapsed_sec - self.delay_sec;
        if local <= 0.0 {
            return self.from;
        }
        if self.duration_sec <= 0.0 || local >= self.duration_sec {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(local / self.duration_sec))
    }

    pub fn is_complete(&self, elapsed_sec: f32) -> bool {
        elapsed_sec >= self.delay_sec + self.duration_sec.max(0.0)
    }
}
