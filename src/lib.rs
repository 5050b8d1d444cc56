//! Layered `no_std` driver for a UART-connected mmWave human-presence radar
//! module.
//!
//! Three layers, bottom to top:
//! - [`protocol`]: the wire codec (frame parser and builder).
//! - [`hal`]: lifecycle, memory accounting, and the RX/TX worker loops that
//!   drive [`platform::RadarUart`].
//! - [`app`]: mode gating, event queues, and the inquiry surface built on
//!   top of [`decoder`]'s semantic frame dispatch.
//!
//! Board-specific wiring (UART peripheral setup, pin mapping, task
//! spawning) is the embedding crate's responsibility; see the doc comments
//! on [`hal::HalOrchestrator`] and [`app::ApplicationManager`] for the
//! exact contract a board crate must fulfil.

#![no_std]

extern crate alloc;

pub mod app;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod hal;
pub mod platform;
pub mod protocol;
pub mod sys;

pub use app::{ApplicationManager, Mode};
pub use config::Config;
pub use decoder::{Report, Response};
pub use error::DriverError;
pub use hal::HalOrchestrator;
pub use platform::RadarUart;
