//! Per-module dial panels.
//!
//! One composition struct per bound sound module. Each panel receives its
//! targets from the composition root and owns the dial bindings for them:
//!
//! - [`OscillatorPanel`] — frequency dial
//! - [`FilterPanel`] — cutoff and resonance dials

mod filter;
mod oscillator;

pub use filter::{FILTER_CUTOFF, FILTER_Q, FilterPanel};
pub use oscillator::{OSC_FREQ, OscillatorPanel};
