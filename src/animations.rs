use crate::constants::{HERO_CONTENT_SELECTOR, HERO_REGION_ID, REVEALED_CLASS, REVEAL_SELECTOR};
use crate::core::tween::Pose;
use crate::core::PageLayout;
use crate::dom;
use web_sys as web;

/// Elements the page animations act on, collected once at startup.
pub struct PageTargets {
    pub hero_region: Option<web::Element>,
    pub hero_content: Vec<web::Element>,
    pub reveals: Vec<web::Element>,
}

impl PageTargets {
    pub fn collect(document: &web::Document) -> Self {
        let targets = Self {
            hero_region: document.get_element_by_id(HERO_REGION_ID),
            hero_content: dom::query_all(document, HERO_CONTENT_SELECTOR),
            reveals: dom::query_all(document, REVEAL_SELECTOR),
        };
        log::info!(
            "[triggers] hero_region={} hero_content={} reveals={}",
            targets.hero_region.is_some(),
            targets.hero_content.len(),
            targets.reveals.len()
        );
        targets
    }

    pub fn measure(&self, window: &web::Window, document: &web::Document) -> PageLayout {
        dom::measure_layout(window, document, self.hero_region.as_ref(), &self.reveals)
    }
}

pub fn apply_hero_pose(targets: &PageTargets, pose: Pose) {
    let opacity = pose.opacity_css();
    let transform = pose.transform_css();
    for el in &targets.hero_content {
        dom::set_style_property(el, "opacity", &opacity);
        dom::set_style_property(el, "transform", &transform);
    }
}

/// Mark newly revealed elements. The class is never removed.
pub fn apply_reveals(targets: &PageTargets, fired: &[usize]) {
    for &i in fired {
        if let Some(el) = targets.reveals.get(i) {
            dom::add_class(el, REVEALED_CLASS);
            log::debug!("[reveal] element {} revealed", i);
        }
    }
}
