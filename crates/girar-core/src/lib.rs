//! Girar Core - dial interaction logic and parameter mapping
//!
//! This crate provides the GUI-framework-agnostic half of the girar dial
//! control: an explicit drag state machine, domain range descriptors with
//! linear and logarithmic scale transforms, and the interface to external
//! parameter targets.
//!
//! # Core Abstractions
//!
//! - [`DialState`] - Idle/Dragging state machine owning one normalized value
//! - [`ParamRange`] - domain bounds, default, unit, and curve shape
//! - [`ParamScale`] - linear or logarithmic normalize/denormalize
//! - [`ParamTarget`] - the "set this number immediately" target boundary
//! - [`AtomicParam`] - lock-free standalone target implementation
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! girar-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod dial;
pub mod range;
pub mod target;

pub use dial::{DialError, DialState};
pub use range::{ParamRange, ParamScale, ParamUnit};
pub use target::{AtomicParam, ParamTarget};
