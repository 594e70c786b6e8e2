//! Balanced-store invariant over long scripted sessions

use crate::helpers::{RecordingRenderer, primary, secondary, session};
use corrmark::types::PointerEvent;

/// Deterministic pseudo-random event stream (64-bit LCG).
fn scripted_events(seed: u64, count: usize) -> Vec<PointerEvent> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as i32
    };

    (0..count)
        .map(|_| {
            let x = next().rem_euclid(800);
            let y = next().rem_euclid(300);
            if next().rem_euclid(3) == 0 {
                secondary(x, y)
            } else {
                primary(x, y)
            }
        })
        .collect()
}

#[test]
fn test_balanced_whenever_nothing_pending() {
    for seed in [1, 7, 42, 1234, 99_999] {
        let mut machine = session();
        let mut renderer = RecordingRenderer::new();

        for event in scripted_events(seed, 500) {
            machine.handle(event, &mut renderer).expect("no invariant violation");

            let store = machine.store();
            match machine.state().pending_side() {
                None => assert!(store.is_balanced(), "seed {seed}: unbalanced at rest"),
                Some(side) => {
                    assert_eq!(store.len(side), store.len(side.opposite()) + 1, "seed {seed}");
                }
            }
        }
    }
}

#[test]
fn test_pick_up_on_dense_points_relocates_without_errors() {
    let mut machine = session();
    let mut renderer = RecordingRenderer::new();

    // Pairs laid out on a tight grid so pick-ups frequently hit
    for i in 0..20 {
        let (x, y) = (10 + (i % 5) * 4, 10 + (i / 5) * 4);
        machine.handle(primary(x, y), &mut renderer).unwrap();
        machine.handle(primary(400 + x, y), &mut renderer).unwrap();
    }
    for i in 0..50 {
        let (x, y) = (10 + (i % 20), 10 + (i % 15));
        machine.handle(secondary(x, y), &mut renderer).unwrap();
        machine.handle(primary(x + 1, y + 1), &mut renderer).unwrap();
        assert!(machine.store().is_balanced() || machine.state().pending_side().is_some());
    }
    assert!(machine.store().committed_pair_count() >= 20);
}
