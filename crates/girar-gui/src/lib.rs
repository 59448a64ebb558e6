//! Girar GUI - interactive dial panel
//!
//! This crate provides the egui half of girar: the rotary [`Dial`] widget,
//! the [`BoundDial`] parameter binding, per-module panels, and the
//! application shell that composes them over lock-free parameter targets.

pub mod app;
pub mod binding;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::{GirarApp, StartValues};
pub use binding::{BoundDial, format_value};
pub use theme::Theme;
pub use widgets::Dial;
