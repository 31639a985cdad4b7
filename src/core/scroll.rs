//! Damped wheel scrolling.
//!
//! Wheel deltas move a *target* offset; every animation frame the current
//! offset is pulled toward it with frame-rate independent damping. Scrolls the
//! smoother did not cause (scrollbar, keyboard, touch) are adopted as-is when
//! no smoothing is in flight.

use super::constants::{
    NATIVE_ECHO_TOLERANCE_PX, SCROLL_LERP, SCROLL_REFERENCE_FPS, SCROLL_SETTLE_PX,
    WHEEL_LINE_HEIGHT_PX, WHEEL_MULTIPLIER,
};

/// Snapshot handed to every scroll listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub scroll: f64,
    pub limit: f64,
    pub velocity: f64,
    pub direction: i8,
    pub progress: f64,
}

/// `WheelEvent.deltaMode` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => WheelDeltaMode::Line,
            2 => WheelDeltaMode::Page,
            _ => WheelDeltaMode::Pixel,
        }
    }
}

#[inline]
pub fn normalize_wheel_delta(delta: f64, mode: WheelDeltaMode, viewport_height: f64) -> f64 {
    let scale = match mode {
        WheelDeltaMode::Pixel => 1.0,
        WheelDeltaMode::Line => WHEEL_LINE_HEIGHT_PX,
        WheelDeltaMode::Page => viewport_height,
    };
    delta * scale * WHEEL_MULTIPLIER
}

/// Frame-rate independent exponential approach of `from` toward `to`.
#[inline]
pub fn damp(from: f64, to: f64, lambda: f64, dt_sec: f64) -> f64 {
    let t = 1.0 - (-lambda * dt_sec).exp();
    from + (to - from) * t
}

/// Whether a wheel gesture is ours to smooth. Horizontal-dominant and zero
/// vertical deltas stay native (carousels, history swipes).
#[inline]
pub fn is_vertical_wheel(delta_x: f64, delta_y: f64) -> bool {
    delta_y != 0.0 && delta_y.abs() >= delta_x.abs()
}

type Listener = Box<dyn FnMut(&ScrollUpdate)>;

pub struct ScrollSmoother {
    current: f64,
    target: f64,
    limit: f64,
    lerp: f64,
    velocity: f64,
    direction: i8,
    smoothing: bool,
    last_time_ms: Option<f64>,
    listeners: Vec<Listener>,
}

impl Default for ScrollSmoother {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl ScrollSmoother {
    pub fn new(initial: f64, limit: f64) -> Self {
        let limit = limit.max(0.0);
        let initial = initial.clamp(0.0, limit);
        Self {
            current: initial,
            target: initial,
            limit,
            lerp: SCROLL_LERP,
            velocity: 0.0,
            direction: 0,
            smoothing: false,
            last_time_ms: None,
            listeners: Vec::new(),
        }
    }

    pub fn scroll(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_smoothing(&self) -> bool {
        self.smoothing
    }

    pub fn on_scroll(&mut self, listener: impl FnMut(&ScrollUpdate) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Accumulate a wheel delta (already normalized to pixels).
    pub fn on_wheel(&mut self, delta_px: f64) {
        if delta_px == 0.0 {
            return;
        }
        self.scroll_to(self.target + delta_px, false);
    }

    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        self.target = offset.clamp(0.0, self.limit);
        if immediate {
            self.smoothing = false;
            self.set_current(self.target);
            self.emit();
        } else {
            self.smoothing = (self.target - self.current).abs() > f64::EPSILON;
        }
    }

    /// A scroll position reported by the host. While smoothing, the host is
    /// only echoing offsets we wrote, so those are ignored.
    ///
    /// Host offsets are authoritative: one past the known limit means the
    /// content grew, and the limit follows it.
    pub fn on_native_scroll(&mut self, offset: f64) {
        if self.smoothing {
            return;
        }
        let offset = offset.max(0.0);
        if offset > self.limit {
            self.limit = offset;
        }
        // Hosts round scroll offsets to device pixels.
        if (offset - self.current).abs() < NATIVE_ECHO_TOLERANCE_PX {
            return;
        }
        self.target = offset;
        self.set_current(offset);
        self.emit();
    }

    /// Advance one frame. Returns the offset to apply to the host when it changed.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let dt_sec = match self.last_time_ms {
            Some(prev) => ((time_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(time_ms);
        if !self.smoothing {
            return None;
        }
        let mut next = damp(
            self.current,
            self.target,
            self.lerp * SCROLL_REFERENCE_FPS,
            dt_sec,
        );
        if (self.target - next).abs() < SCROLL_SETTLE_PX {
            next = self.target;
            self.smoothing = false;
        }
        if next == self.current {
            return None;
        }
        self.set_current(next);
        self.emit();
        Some(self.current)
    }

    fn set_current(&mut self, value: f64) {
        self.velocity = value - self.current;
        self.direction = if self.velocity > 0.0 {
            1
        } else if self.velocity < 0.0 {
            -1
        } else {
            self.direction
        };
        self.current = value;
    }

    pub fn snapshot(&self) -> ScrollUpdate {
        ScrollUpdate {
            scroll: self.current,
            limit: self.limit,
            velocity: self.velocity,
            direction: self.direction,
            progress: if self.limit > 0.0 {
                self.current / self.limit
            } else {
                0.0
            },
        }
    }

    fn emit(&mut self) {
        let update = self.snapshot();
        for listener in &mut self.listeners {
            listener(&update);
        }
    }
}
