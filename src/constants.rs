// Host page contract: element ids, selectors and class names.
pub const CANVAS_CONTAINER_ID: &str = "webgl-canvas-container";
pub const HERO_REGION_ID: &str = "hero";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "is-visible";

// Render surface
pub const MAX_PIXEL_RATIO: f64 = 2.0; // cap backing-store scaling on dense displays
pub const MSAA_SAMPLES: u32 = 4;
pub const CANVAS_STYLE: &str =
    "position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; display: block;";
