//! The controller: the imperative shell around the pure core.
//!
//! # Key Concepts
//!
//! - **Controller**: holds the current state and applies signals through the
//!   transition table, driving the lamp and notifying observers
//! - **Builder**: wires capabilities and observers, validating that nothing
//!   required is missing
//! - **Config**: serializable start-up settings

mod builder;
mod config;
mod controller;
mod error;

pub use builder::ControllerBuilder;
pub use config::ControllerConfig;
pub use controller::{LightController, SignalOutcome};
pub use error::{ConfigurationError, ControllerError};
