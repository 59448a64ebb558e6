//! Dial interaction state machine.
//!
//! A dial owns one normalized value in `[0, 1]` and a drag flag. Pointer
//! handling reduces to four transitions:
//!
//! - [`begin_drag`](DialState::begin_drag) — press on the hit region
//! - [`apply_motion`](DialState::apply_motion) — relative motion while dragging
//! - [`end_drag`](DialState::end_drag) — release (idempotent)
//! - [`reset`](DialState::reset) — double-activation gesture
//!
//! The state machine is host-agnostic: it knows nothing about pixels,
//! painting, or pointer capture. The GUI layer converts pointer deltas to
//! value-space deltas and forwards them here, then notifies downstream
//! consumers once per accepted motion sample.

use thiserror::Error;

/// Errors raised when constructing a dial or validating its range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DialError {
    /// The construction-time default value was NaN or infinite.
    #[error("default value must be finite, got {0}")]
    NonFiniteDefault(f32),

    /// A parameter range descriptor failed validation.
    #[error("invalid range for '{name}': {reason}")]
    InvalidRange {
        /// Name of the offending range.
        name: &'static str,
        /// Why validation rejected it.
        reason: &'static str,
    },
}

/// Drag state machine for one dial instance.
///
/// Two states, `Idle` and `Dragging`. Motion is only accepted while
/// dragging; every accepted sample clamps the value to `[0, 1]`. The
/// default supplied at construction is immutable and restored verbatim by
/// [`reset`](Self::reset), not reclamped, so an out-of-range (but finite)
/// default survives a drag/reset round trip bit-exactly.
#[derive(Debug, Clone)]
pub struct DialState {
    /// Normalized position, the sole source of truth for rendering and
    /// external notification.
    raw: f32,
    /// Immutable construction-time snapshot for the reset gesture.
    default: f32,
    /// True only between a press and the matching release.
    dragging: bool,
}

impl DialState {
    /// Create a dial state resting at `default`.
    ///
    /// The default is accepted unclamped; only non-finite values are
    /// rejected, since they would poison every later clamp.
    pub fn new(default: f32) -> Result<Self, DialError> {
        if !default.is_finite() {
            return Err(DialError::NonFiniteDefault(default));
        }
        Ok(Self {
            raw: default,
            default,
            dragging: false,
        })
    }

    /// Current normalized value.
    #[inline]
    pub fn raw_value(&self) -> f32 {
        self.raw
    }

    /// The construction-time default.
    #[inline]
    pub fn default_value(&self) -> f32 {
        self.default
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Press on the hit region: `Idle → Dragging`.
    ///
    /// No-op if already dragging, so a stray second press while the host
    /// holds the pointer for this control cannot corrupt the state.
    pub fn begin_drag(&mut self) {
        if !self.dragging {
            #[cfg(feature = "tracing")]
            tracing::trace!(raw = self.raw, "dial: begin drag");
            self.dragging = true;
        }
    }

    /// Release: `Dragging → Idle`, idempotent.
    ///
    /// Valid without a matching press: a release always leaves the dial
    /// idle, which is the defensive recovery path when the host loses a
    /// drag (focus loss, missed release event).
    pub fn end_drag(&mut self) {
        if self.dragging {
            #[cfg(feature = "tracing")]
            tracing::trace!(raw = self.raw, "dial: end drag");
        }
        self.dragging = false;
    }

    /// Apply one relative motion sample, in value space.
    ///
    /// Positive `delta` increases the value. Returns `None` while idle
    /// (motion is ignored, no notification due); returns the new clamped
    /// value while dragging; the caller emits exactly one change
    /// notification per `Some`, with no debouncing or coalescing.
    ///
    /// A non-finite delta is a malformed motion event and is treated as
    /// zero: the sample is still accepted, the value does not change.
    pub fn apply_motion(&mut self, delta: f32) -> Option<f32> {
        if !self.dragging {
            return None;
        }
        let delta = if delta.is_finite() { delta } else { 0.0 };
        self.raw = (self.raw + delta).clamp(0.0, 1.0);
        Some(self.raw)
    }

    /// Reset gesture: restore the construction-time default verbatim.
    ///
    /// Valid in either drag state and does not change it. Does not notify
    /// by itself; whether a reset also fires the change callback is the
    /// widget's `notify_on_reset` policy.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(default = self.default, "dial: reset");
        self.raw = self.default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_default() {
        assert!(matches!(
            DialState::new(f32::NAN),
            Err(DialError::NonFiniteDefault(v)) if v.is_nan()
        ));
        assert!(DialState::new(f32::INFINITY).is_err());
        assert!(DialState::new(0.5).is_ok());
    }

    #[test]
    fn idle_ignores_motion() {
        let mut dial = DialState::new(0.5).unwrap();
        assert_eq!(dial.apply_motion(0.3), None);
        assert_eq!(dial.raw_value(), 0.5);
    }

    #[test]
    fn motion_folds_with_per_sample_clamp() {
        // Press at 0.4, then movementY = 100, 50, -200 px at the default
        // 100-px-per-range sensitivity: deltas -1.0, -0.5, +2.0.
        // Sequential clamping gives 0 → 0 → 1, not a single clamp of the sum.
        let mut dial = DialState::new(0.4).unwrap();
        dial.begin_drag();
        assert_eq!(dial.apply_motion(-1.0), Some(0.0));
        assert_eq!(dial.apply_motion(-0.5), Some(0.0));
        assert_eq!(dial.apply_motion(2.0), Some(1.0));
        assert_eq!(dial.raw_value(), 1.0);
    }

    #[test]
    fn malformed_motion_is_zero_delta() {
        let mut dial = DialState::new(0.25).unwrap();
        dial.begin_drag();
        assert_eq!(dial.apply_motion(f32::NAN), Some(0.25));
        assert_eq!(dial.apply_motion(f32::NEG_INFINITY), Some(0.25));
        assert_eq!(dial.raw_value(), 0.25);
    }

    #[test]
    fn reset_restores_exact_default() {
        let mut dial = DialState::new(0.37).unwrap();
        dial.begin_drag();
        dial.apply_motion(0.5);
        dial.end_drag();
        dial.reset();
        assert_eq!(dial.raw_value(), 0.37);
    }

    #[test]
    fn reset_mid_drag_keeps_dragging() {
        let mut dial = DialState::new(0.5).unwrap();
        dial.begin_drag();
        dial.apply_motion(-0.2);
        dial.reset();
        assert_eq!(dial.raw_value(), 0.5);
        assert!(dial.is_dragging());
    }

    #[test]
    fn reset_restores_out_of_range_default_verbatim() {
        // Finite out-of-range defaults are accepted and must round-trip
        // through a drag untouched.
        let mut dial = DialState::new(1.5).unwrap();
        dial.begin_drag();
        dial.apply_motion(-0.1);
        assert_eq!(dial.raw_value(), 1.0);
        dial.reset();
        assert_eq!(dial.raw_value(), 1.5);
    }

    #[test]
    fn release_is_idempotent_and_needs_no_press() {
        let mut dial = DialState::new(0.5).unwrap();
        dial.end_drag();
        assert!(!dial.is_dragging());

        dial.begin_drag();
        dial.end_drag();
        dial.end_drag();
        assert!(!dial.is_dragging());
        assert_eq!(dial.apply_motion(0.1), None);
    }

    #[test]
    fn second_press_is_a_no_op() {
        let mut dial = DialState::new(0.5).unwrap();
        dial.begin_drag();
        dial.apply_motion(0.25);
        dial.begin_drag();
        assert_eq!(dial.raw_value(), 0.75);
        assert!(dial.is_dragging());
    }
}
