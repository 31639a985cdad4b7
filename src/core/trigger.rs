//! Scroll trigger geometry.
//!
//! A trigger position such as `"top 90%"` reads "when the element's top meets
//! the line 90% down the viewport". It resolves to the absolute scroll offset at
//! which that happens, given the element's document-relative bounds.

use super::tween::{lerp, Ease};
use anyhow::{anyhow, bail, Context};

/// A point along an element or the viewport, measured from its top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Fraction of the length (`top` = 0, `center` = 0.5, `bottom` = 1, `N%`).
    Fraction(f64),
    /// Fixed offset in CSS pixels (`Npx` or a bare number).
    Pixels(f64),
}

impl Anchor {
    pub fn parse(token: &str) -> anyhow::Result<Self> {
        let token = token.trim();
        match token {
            "top" => return Ok(Anchor::Fraction(0.0)),
            "center" => return Ok(Anchor::Fraction(0.5)),
            "bottom" => return Ok(Anchor::Fraction(1.0)),
            _ => {}
        }
        if let Some(pct) = token.strip_suffix('%') {
            let v: f64 = pct
                .parse()
                .with_context(|| format!("bad percentage {:?}", token))?;
            return Ok(Anchor::Fraction(v / 100.0));
        }
        let px = token.strip_suffix("px").unwrap_or(token);
        px.parse::<f64>()
            .map(Anchor::Pixels)
            .map_err(|_| anyhow!("unknown trigger anchor {:?}", token))
    }

    #[inline]
    pub fn offset_within(self, length: f64) -> f64 {
        match self {
            Anchor::Fraction(f) => f * length,
            Anchor::Pixels(px) => px,
        }
    }
}

/// `"<element anchor> <viewport anchor>"`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPosition {
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split_whitespace();
        let (Some(el), Some(vp), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("trigger position must have two anchors, got {:?}", input);
        };
        Ok(Self {
            element: Anchor::parse(el)?,
            viewport: Anchor::parse(vp)?,
        })
    }

    /// Scroll offset at which the two anchors line up.
    pub fn resolve(&self, bounds: ElementBounds, viewport_height: f64) -> f64 {
        bounds.top + self.element.offset_within(bounds.height)
            - self.viewport.offset_within(viewport_height)
    }
}

/// Element box in document coordinates (viewport rect top + scroll offset).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn resolve(
        start: &TriggerPosition,
        end: &TriggerPosition,
        bounds: ElementBounds,
        viewport_height: f64,
    ) -> Self {
        Self {
            start: start.resolve(bounds, viewport_height),
            end: end.resolve(bounds, viewport_height),
        }
    }

    /// Linear progress through the range, clamped to [0, 1].
    pub fn progress(&self, scroll: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn contains(&self, scroll: f64) -> bool {
        scroll >= self.start && scroll <= self.end
    }
}

/// Scroll-scrubbed tween: the value is a pure function of scroll offset.
#[derive(Clone, Debug)]
pub struct ScrubTween {
    pub from: f32,
    pub to: f32,
    pub ease: Ease,
    start: TriggerPosition,
    end: TriggerPosition,
    range: ScrollRange,
}

impl ScrubTween {
    pub fn new(from: f32, to: f32, start: &str, end: &str) -> anyhow::Result<Self> {
        Ok(Self {
            from,
            to,
            ease: Ease::Power1Out,
            start: TriggerPosition::parse(start)?,
            end: TriggerPosition::parse(end)?,
            range: ScrollRange::default(),
        })
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    /// Recompute boundaries after layout changes.
    pub fn refresh(&mut self, bounds: ElementBounds, viewport_height: f64) {
        self.range = ScrollRange::resolve(&self.start, &self.end, bounds, viewport_height);
    }

    pub fn value_at(&self, scroll: f64) -> f32 {
        let t = self.range.progress(scroll) as f32;
        lerp(self.from, self.to, self.ease.apply(t))
    }
}
