//! Dial-to-target parameter bindings.
//!
//! [`BoundDial`] couples one [`Dial`] to one externally controllable numeric
//! quantity: it derives the dial's normalized default from the target's
//! current value, maps the normalized position through the range's scale
//! curve for display and for the driven parameter, and forwards every
//! accepted motion update to the target with a single immediate set.
//!
//! Bindings share no state; each owns its [`DialState`] and its target
//! handle independently. Targets are created by the composition root and
//! passed in; a binding references its target, it never creates one.

use crate::widgets::Dial;
use egui::{Response, Ui};
use girar_core::{DialError, DialState, ParamRange, ParamTarget, ParamUnit};
use std::sync::Arc;

/// Format a domain value for the dial readout according to its unit.
///
/// Frequencies below 1000 render as integer Hz (`"447Hz"`), at or above
/// 1000 as kHz with 2 decimals (`"2.00kHz"`). Percentages render as
/// integers, dimensionless values with 2 decimals.
pub fn format_value(unit: ParamUnit, value: f32) -> String {
    match unit {
        ParamUnit::Hertz => {
            if value < 1000.0 {
                format!("{value:.0}Hz")
            } else {
                format!("{:.2}kHz", value / 1000.0)
            }
        }
        ParamUnit::Percent => format!("{value:.0}%"),
        ParamUnit::None => format!("{value:.2}"),
    }
}

/// One dial wired to one external parameter target.
pub struct BoundDial {
    range: ParamRange,
    target: Arc<dyn ParamTarget>,
    state: DialState,
    notify_on_reset: bool,
}

impl BoundDial {
    /// Bind a dial to `target` over the given domain range.
    ///
    /// The dial's normalized default is the inverse of the scale transform
    /// applied to the target's current value, so the composition root is
    /// the single source of initial domain values.
    pub fn new(range: ParamRange, target: Arc<dyn ParamTarget>) -> Result<Self, DialError> {
        range.validate()?;
        let initial = target.get();
        let state = DialState::new(range.normalize(initial))?;
        tracing::debug!(name = range.name, initial, "bound dial to target");
        Ok(Self {
            range,
            target,
            state,
            notify_on_reset: false,
        })
    }

    /// Whether the reset gesture also pushes the mapped default to the
    /// target. Defaults to off: a reset is a local visual/state restore.
    pub fn notify_on_reset(mut self, notify: bool) -> Self {
        self.notify_on_reset = notify;
        self
    }

    /// The bound domain range.
    pub fn range(&self) -> &ParamRange {
        &self.range
    }

    /// The dial's interaction state.
    pub fn state(&self) -> &DialState {
        &self.state
    }

    /// Render the bound dial.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        let range = self.range;
        let target = Arc::clone(&self.target);
        ui.add(
            Dial::new(&mut self.state)
                .label(range.name)
                .notify_on_reset(self.notify_on_reset)
                .map(move |n| range.denormalize(n))
                .format(move |v| format_value(range.unit, v))
                .on_change(move |v| target.set(v)),
        )
    }
}
