//! Oscillator module panel.

use crate::binding::BoundDial;
use egui::Ui;
use girar_core::{DialError, ParamRange, ParamTarget};
use std::sync::Arc;

/// Oscillator frequency range: logarithmic, 10 Hz to 20 kHz, default 440 Hz.
pub const OSC_FREQ: ParamRange = ParamRange::frequency("FREQ", 10.0, 20000.0, 440.0);

/// UI panel for the oscillator's controllable parameters.
pub struct OscillatorPanel {
    freq: BoundDial,
}

impl OscillatorPanel {
    /// Create the panel over the oscillator's frequency target.
    pub fn new(freq_target: Arc<dyn ParamTarget>) -> Result<Self, DialError> {
        Ok(Self {
            freq: BoundDial::new(OSC_FREQ, freq_target)?,
        })
    }

    /// Render the oscillator controls.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.freq.ui(ui);
        });
    }
}
