//! Host glue for the quick-use core.
//!
//! This crate wires raw host callbacks into `quickuse-core` and owns the
//! only persistent surface: the hotkey binding. Consumers embed
//! [`Controller`] in their mod entry point, forward every simulation tick
//! to [`Controller::handle_tick`], and every button press to
//! [`Controller::handle_button`].
//!
//! No tracing subscriber is installed here; the embedding host decides
//! where diagnostics go.
pub mod config;
pub mod controller;
pub mod error;

pub use config::{Button, ModConfig};
pub use controller::Controller;
pub use error::{ConfigError, Result};
