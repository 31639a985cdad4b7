// Host-side tests for easing and the hero entrance tween.

use particle_backdrop::core::stage::hero_entrance;
use particle_backdrop::core::tween::{Ease, Pose};
use particle_backdrop::core::{HERO_DELAY_SEC, HERO_DURATION_SEC, HERO_FROM_Y_PX};

#[test]
fn eases_hit_both_endpoints() {
    for ease in [Ease::Linear, Ease::Power1Out, Ease::Power3Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn out_eases_front_load_motion() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((Ease::Power3Out.apply(0.5) - 0.9375).abs() < 1e-6);
    let mut prev = 0.0;
    for i in 1..=100 {
        let v = Ease::Power3Out.apply(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn hero_holds_start_pose_during_delay() {
    let tween = hero_entrance();
    let start = tween.sample(0.0);
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.y_px, HERO_FROM_Y_PX);
    assert_eq!(tween.sample(HERO_DELAY_SEC * 0.5), start);
    assert_eq!(tween.sample(HERO_DELAY_SEC), start);
    assert!(!tween.is_complete(HERO_DELAY_SEC));
}

#[test]
fn hero_finishes_fully_visible_in_place() {
    let tween = hero_entrance();
    let end = HERO_DELAY_SEC + HERO_DURATION_SEC;
    assert!(tween.is_complete(end));
    let done = tween.sample(end + 10.0);
    assert_eq!(
        done,
        Pose {
            opacity: 1.0,
            y_px: 0.0
        }
    );
}

#[test]
fn hero_midpoint_follows_power3_out() {
    let tween = hero_entrance();
    let mid = tween.sample(HERO_DELAY_SEC + HERO_DURATION_SEC * 0.5);
    assert!((mid.opacity - 0.9375).abs() < 1e-4);
    assert!((mid.y_px - HERO_FROM_Y_PX * 0.0625).abs() < 1e-3);
}

#[test]
fn pose_css_fragments() {
    let p = Pose {
        opacity: 0.5,
        y_px: 12.0,
    };
    assert_eq!(p.opacity_css(), "0.5000");
    assert_eq!(p.transform_css(), "translate3d(0px, 12.000px, 0px)");
}
