// Host-side tests for one-shot reveal triggers.

use particle_backdrop::core::reveal::{RevealSet, RevealState, RevealTrigger};
use particle_backdrop::core::trigger::{ElementBounds, ScrollRange};
use particle_backdrop::core::{REVEAL_END, REVEAL_START};

#[test]
fn reveal_fires_once_across_repeated_crossings() {
    let mut t = RevealTrigger::new(ScrollRange {
        start: 280.0,
        end: 1120.0,
    });
    let path = [0.0, 100.0, 300.0, 50.0, 500.0, 2000.0, 0.0, 281.0, 10.0, 1120.0];
    let transitions = path.iter().filter(|s| t.update(**s)).count();
    assert_eq!(transitions, 1);
    assert_eq!(t.state(), RevealState::Revealed);
}

#[test]
fn reveal_stays_pending_above_threshold() {
    let mut t = RevealTrigger::new(ScrollRange {
        start: 280.0,
        end: 1120.0,
    });
    for s in [0.0, 100.0, 279.9] {
        assert!(!t.update(s));
    }
    assert_eq!(t.state(), RevealState::Pending);
    assert!(t.update(280.0));
}

#[test]
fn jumping_past_the_element_still_reveals_it() {
    let mut t = RevealTrigger::new(ScrollRange {
        start: 280.0,
        end: 1120.0,
    });
    assert!(t.update(5000.0));
    assert!(t.is_revealed());
}

fn bounds(top: f64, height: f64) -> ElementBounds {
    ElementBounds { top, height }
}

#[test]
fn set_reports_newly_revealed_indices() {
    let mut set = RevealSet::new(REVEAL_START, REVEAL_END).unwrap();
    set.refresh(
        &[bounds(300.0, 100.0), bounds(1000.0, 200.0), bounds(3000.0, 400.0)],
        800.0,
    );
    assert_eq!(set.len(), 3);

    // First element is already inside the viewport at load.
    assert_eq!(set.update(0.0).as_slice(), &[0]);
    assert!(set.update(0.0).is_empty());
    assert_eq!(set.update(300.0).as_slice(), &[1]);
    assert!(set.update(0.0).is_empty());
    assert_eq!(set.update(4000.0).as_slice(), &[2]);
    assert!(set.update(300.0).is_empty());
    assert_eq!(set.revealed_count(), 3);
}

#[test]
fn refresh_keeps_revealed_state() {
    let mut set = RevealSet::new(REVEAL_START, REVEAL_END).unwrap();
    set.refresh(&[bounds(1000.0, 200.0)], 800.0);
    assert_eq!(set.update(500.0).as_slice(), &[0]);

    // Layout shift pushes the element further down; it must not un-reveal.
    set.refresh(&[bounds(4000.0, 200.0), bounds(5000.0, 100.0)], 600.0);
    assert!(set.triggers()[0].is_revealed());
    assert!(!set.triggers()[1].is_revealed());
    assert!(set.update(0.0).is_empty());

    set.refresh(&[], 600.0);
    assert!(set.is_empty());
}
