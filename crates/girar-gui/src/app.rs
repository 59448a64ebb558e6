//! Main application state and UI layout.
//!
//! [`GirarApp`] is the composition root: it creates the external parameter
//! targets, hands explicit references to the module panels that bind dials
//! to them, and to the listing side panel that displays them. No ambient
//! registry exists; anything that wants a target gets it passed in here.

use crate::binding::format_value;
use crate::panels::{FILTER_CUTOFF, FILTER_Q, FilterPanel, OSC_FREQ, OscillatorPanel};
use crate::theme::Theme;
use egui::{CentralPanel, Context, Frame, RichText, SidePanel, Ui};
use girar_core::{AtomicParam, DialError, ParamRange, ParamTarget};
use std::sync::Arc;

/// Initial domain values from the command line; `None` uses the range
/// defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartValues {
    /// Oscillator frequency in Hz.
    pub freq: Option<f32>,
    /// Filter cutoff in Hz.
    pub cutoff: Option<f32>,
    /// Filter resonance.
    pub q: Option<f32>,
}

/// One externally controllable target, as shown in the listing panel.
struct TargetEntry {
    module: &'static str,
    range: ParamRange,
    target: Arc<AtomicParam>,
}

/// Main application state.
pub struct GirarApp {
    oscillator: OscillatorPanel,
    filter: FilterPanel,
    /// Targets created by this composition root, for the listing view.
    targets: Vec<TargetEntry>,
}

/// Create a target for `range`, optionally overriding the initial value.
///
/// Non-finite overrides are rejected before the window opens; finite ones
/// are clamped into the range.
fn make_target(range: &ParamRange, initial: Option<f32>) -> Result<Arc<AtomicParam>, DialError> {
    let value = match initial {
        Some(v) if !v.is_finite() => return Err(DialError::NonFiniteDefault(v)),
        Some(v) => range.clamp(v),
        None => range.default,
    };
    Ok(Arc::new(AtomicParam::new(value, range.min, range.max)))
}

impl GirarApp {
    /// Build the app: create the targets and wire the panels to them.
    pub fn new(cc: &eframe::CreationContext<'_>, start: StartValues) -> Result<Self, DialError> {
        Theme::default().apply(&cc.egui_ctx);

        let freq = make_target(&OSC_FREQ, start.freq)?;
        let cutoff = make_target(&FILTER_CUTOFF, start.cutoff)?;
        let q = make_target(&FILTER_Q, start.q)?;

        let oscillator = OscillatorPanel::new(Arc::clone(&freq) as Arc<dyn ParamTarget>)?;
        let filter = FilterPanel::new(
            Arc::clone(&cutoff) as Arc<dyn ParamTarget>,
            Arc::clone(&q) as Arc<dyn ParamTarget>,
        )?;

        let targets = vec![
            TargetEntry {
                module: "oscillator",
                range: OSC_FREQ,
                target: freq,
            },
            TargetEntry {
                module: "filter",
                range: FILTER_CUTOFF,
                target: cutoff,
            },
            TargetEntry {
                module: "filter",
                range: FILTER_Q,
                target: q,
            },
        ];

        tracing::info!(targets = targets.len(), "girar app ready");
        Ok(Self {
            oscillator,
            filter,
            targets,
        })
    }

    /// Listing view over the targets this root created.
    fn targets_ui(&self, ui: &mut Ui) {
        ui.heading("Targets");
        ui.separator();
        for entry in &self.targets {
            ui.horizontal(|ui| {
                ui.label(format!("{}/{}", entry.module, entry.range.name));
                ui.label(
                    RichText::new(format_value(entry.range.unit, entry.target.get())).weak(),
                );
            });
        }
    }
}

/// Render a titled module group.
fn module_frame(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).strong());
            ui.add_space(4.0);
            add_contents(ui);
        });
    });
}

impl eframe::App for GirarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        SidePanel::right("targets")
            .default_width(170.0)
            .show(ctx, |ui| self.targets_ui(ui));

        CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                module_frame(ui, "Oscillator", |ui| self.oscillator.ui(ui));
                module_frame(ui, "Filter", |ui| self.filter.ui(ui));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_target_uses_range_default() {
        let target = make_target(&OSC_FREQ, None).unwrap();
        assert_eq!(target.get(), 440.0);
    }

    #[test]
    fn make_target_clamps_override() {
        let target = make_target(&FILTER_Q, Some(100.0)).unwrap();
        assert_eq!(target.get(), 20.0);
    }

    #[test]
    fn make_target_rejects_non_finite_override() {
        assert!(make_target(&OSC_FREQ, Some(f32::NAN)).is_err());
    }
}
