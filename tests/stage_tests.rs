// Host-side scenario tests for the owned visual state.

use particle_backdrop::core::trigger::ElementBounds;
use particle_backdrop::core::{
    PageLayout, Stage, CAMERA_START, PARALLAX_END_Z, PARTICLE_BOUND, PARTICLE_COUNT,
};
use particle_backdrop::core::scroll::ScrollSmoother;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

fn make_stage() -> Stage {
    let mut rng = StdRng::seed_from_u64(42);
    Stage::new(&mut rng).unwrap()
}

fn layout() -> PageLayout {
    PageLayout {
        viewport_width: 1600.0,
        viewport_height: 800.0,
        hero: Some(ElementBounds {
            top: 0.0,
            height: 900.0,
        }),
        reveals: vec![
            ElementBounds {
                top: 300.0,
                height: 100.0,
            },
            ElementBounds {
                top: 1000.0,
                height: 200.0,
            },
        ],
    }
}

#[test]
fn new_stage_matches_scene_constants() {
    let stage = make_stage();
    assert_eq!(stage.particles.len(), PARTICLE_COUNT);
    assert_eq!(stage.camera.position, CAMERA_START);
    assert!(stage.reveals.is_empty());
}

#[test]
fn refresh_sets_aspect_reveals_visible_elements_and_places_camera() {
    let mut stage = make_stage();
    let fired = stage.refresh(&layout(), 0.0);
    assert_eq!(fired.as_slice(), &[0]);
    assert!((stage.camera.aspect - 2.0).abs() < 1e-6);
    assert_eq!(stage.camera.position.z, CAMERA_START.z);
    assert_eq!(stage.camera.target.z, CAMERA_START.z);
}

#[test]
fn scrolling_through_hero_zooms_camera_and_syncs_target() {
    let mut stage = make_stage();
    stage.refresh(&layout(), 0.0);

    let fired = stage.on_scroll(450.0);
    assert_eq!(fired.as_slice(), &[1]);
    assert!((stage.camera.position.z - 4.25).abs() < 1e-5);
    assert_eq!(stage.camera.target.z, stage.camera.position.z);

    stage.on_scroll(5000.0);
    assert_eq!(stage.camera.position.z, PARALLAX_END_Z);

    // Scrolling back restores the depth, never the reveal.
    let fired = stage.on_scroll(0.0);
    assert!(fired.is_empty());
    assert_eq!(stage.camera.position.z, CAMERA_START.z);
    assert_eq!(stage.reveals.revealed_count(), 2);
}

#[test]
fn without_hero_region_depth_is_left_alone() {
    let mut stage = make_stage();
    let mut l = layout();
    l.hero = None;
    stage.refresh(&l, 0.0);
    stage.on_scroll(450.0);
    assert_eq!(stage.camera.position.z, CAMERA_START.z);
}

#[test]
fn frames_ease_camera_toward_pointer_and_keep_particles_bounded() {
    let mut stage = make_stage();
    stage.refresh(&layout(), 300.0);
    let z = stage.camera.position.z;
    stage.on_pointer(1.0, 1.0);
    assert_eq!(stage.camera.target.x, 0.5);
    assert_eq!(stage.camera.target.y, 0.5);
    assert_eq!(stage.camera.target.z, z);

    for frame in 0..600 {
        stage.advance_frame(frame as f64 * 0.001);
    }
    assert!((stage.camera.position.x - 0.5).abs() < 1e-5);
    assert!((stage.camera.position.y - 0.5).abs() < 1e-5);
    assert_eq!(stage.camera.position.z, z);
    assert!(stage.particles.rotation().x > 0.0);
    assert!(stage.particles.positions().iter().all(|p| {
        p.abs().max_element() <= PARTICLE_BOUND
    }));
}

#[test]
fn reveal_below_initial_limit_fires_from_native_scroll() {
    let stage = Rc::new(RefCell::new(make_stage()));
    let fired: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let grown = PageLayout {
        viewport_width: 1600.0,
        viewport_height: 800.0,
        hero: None,
        reveals: vec![ElementBounds {
            top: 2600.0,
            height: 300.0,
        }],
    };
    assert!(stage.borrow_mut().refresh(&grown, 0.0).is_empty());

    // Limit measured before the page finished growing.
    let mut smoother = ScrollSmoother::new(0.0, 1000.0);
    {
        let stage = stage.clone();
        let fired = fired.clone();
        smoother.on_scroll(move |u| {
            let newly = stage.borrow_mut().on_scroll(u.scroll);
            fired.borrow_mut().extend(newly);
        });
    }

    smoother.on_native_scroll(1500.0);
    assert!(fired.borrow().is_empty());
    smoother.on_native_scroll(2500.0);
    assert_eq!(*fired.borrow(), vec![0]);
    assert_eq!(stage.borrow().reveals.revealed_count(), 1);
}
