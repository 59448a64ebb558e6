//! Filter module panel.

use crate::binding::BoundDial;
use egui::Ui;
use girar_core::{DialError, ParamRange, ParamTarget};
use std::sync::Arc;

/// Filter cutoff range: logarithmic, 10 Hz to 20 kHz, default 2 kHz.
pub const FILTER_CUTOFF: ParamRange = ParamRange::frequency("CUTOFF", 10.0, 20000.0, 2000.0);
/// Filter resonance range: linear 0-20, default 1.
pub const FILTER_Q: ParamRange = ParamRange::linear("Q", 0.0, 20.0, 1.0);

/// UI panel for the low-pass filter's controllable parameters.
pub struct FilterPanel {
    cutoff: BoundDial,
    q: BoundDial,
}

impl FilterPanel {
    /// Create the panel over the filter's cutoff and resonance targets.
    pub fn new(
        cutoff_target: Arc<dyn ParamTarget>,
        q_target: Arc<dyn ParamTarget>,
    ) -> Result<Self, DialError> {
        Ok(Self {
            cutoff: BoundDial::new(FILTER_CUTOFF, cutoff_target)?,
            q: BoundDial::new(FILTER_Q, q_target)?,
        })
    }

    /// Render the filter controls.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.cutoff.ui(ui);
            ui.add_space(16.0);
            self.q.ui(ui);
        });
    }
}
