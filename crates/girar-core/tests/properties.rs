//! Property-based tests for the dial state machine and scale transforms.
//!
//! Tests the clamping invariant, fold semantics of motion sequences, reset
//! behavior, and mapping round-trips using proptest for randomized input
//! generation.

use girar_core::{DialState, ParamRange};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any starting default in [0, 1] and any sequence of motion deltas,
    /// the value stays in [0, 1] after every accepted sample.
    #[test]
    fn clamping_invariant(
        default in 0.0f32..=1.0f32,
        deltas in prop::collection::vec(-3.0f32..=3.0f32, 1..64),
    ) {
        let mut dial = DialState::new(default).unwrap();
        dial.begin_drag();
        for &d in &deltas {
            let raw = dial.apply_motion(d).expect("dragging accepts motion");
            prop_assert!((0.0..=1.0).contains(&raw), "value {raw} escaped [0,1]");
            prop_assert!(raw.is_finite());
        }
    }

    /// The final value equals the left fold of clamped additions, applied
    /// one sample at a time, not a single clamp over the summed deltas.
    #[test]
    fn motion_is_a_clamped_fold(
        default in 0.0f32..=1.0f32,
        deltas in prop::collection::vec(-2.0f32..=2.0f32, 1..32),
    ) {
        let mut dial = DialState::new(default).unwrap();
        dial.begin_drag();
        let mut expected = default;
        for &d in &deltas {
            expected = (expected + d).clamp(0.0, 1.0);
            prop_assert_eq!(dial.apply_motion(d), Some(expected));
        }
    }

    /// Motion while idle never changes the value and is never accepted,
    /// so no change notification can fire.
    #[test]
    fn idle_ignores_motion(
        default in 0.0f32..=1.0f32,
        deltas in prop::collection::vec(-10.0f32..=10.0f32, 1..16),
    ) {
        let mut dial = DialState::new(default).unwrap();
        for &d in &deltas {
            prop_assert_eq!(dial.apply_motion(d), None);
            prop_assert_eq!(dial.raw_value(), default);
        }
    }

    /// Reset restores the exact construction default regardless of the
    /// drags that happened in between.
    #[test]
    fn reset_restores_default(
        default in 0.0f32..=1.0f32,
        deltas in prop::collection::vec(-2.0f32..=2.0f32, 0..32),
        drag_again in any::<bool>(),
    ) {
        let mut dial = DialState::new(default).unwrap();
        dial.begin_drag();
        for &d in &deltas {
            dial.apply_motion(d);
        }
        dial.end_drag();
        if drag_again {
            dial.begin_drag();
        }
        dial.reset();
        prop_assert_eq!(dial.raw_value().to_bits(), default.to_bits());
        prop_assert_eq!(dial.is_dragging(), drag_again);
    }

    /// A release leaves the dial idle from any state, with or without a
    /// matching press.
    #[test]
    fn release_always_clears_drag(
        default in 0.0f32..=1.0f32,
        pressed in any::<bool>(),
    ) {
        let mut dial = DialState::new(default).unwrap();
        if pressed {
            dial.begin_drag();
        }
        dial.end_drag();
        prop_assert!(!dial.is_dragging());
    }

    /// Logarithmic mapping round-trips within floating-point tolerance over
    /// the whole normalized range.
    #[test]
    fn log_mapping_round_trip(normalized in 0.0f32..=1.0f32) {
        let range = ParamRange::frequency("Freq", 10.0, 20000.0, 440.0);
        let rt = range.normalize(range.denormalize(normalized));
        prop_assert!(
            (rt - normalized).abs() < 1e-4,
            "round-trip of {normalized} gave {rt}"
        );
    }

    /// Linear mapping round-trips and stays inside the domain bounds.
    #[test]
    fn linear_mapping_round_trip(normalized in 0.0f32..=1.0f32) {
        let range = ParamRange::linear("Q", 0.0, 20.0, 1.0);
        let plain = range.denormalize(normalized);
        prop_assert!((range.min..=range.max).contains(&plain));
        let rt = range.normalize(plain);
        prop_assert!((rt - normalized).abs() < 1e-5);
    }
}
