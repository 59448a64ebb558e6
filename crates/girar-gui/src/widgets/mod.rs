//! Dial-panel GUI widgets.
//!
//! - [`Dial`] — Rotary control with drag, fine control, and double-click reset

mod dial;

pub use dial::Dial;
