//! Errors raised while configuring or driving the controller.

use thiserror::Error;

/// A required capability was not bound before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Lamp device not bound. Call .set_light(device) before signalling")]
    MissingLampDevice,

    #[error("Lamp timer not bound. Call .set_timer(timer) before signalling")]
    MissingTimer,
}

/// Errors that can occur when building or configuring a controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Controller is incomplete: {}", join(.0))]
    Incomplete(Vec<ConfigurationError>),

    #[error("Invalid controller config: {0}")]
    InvalidConfig(String),
}

fn join(errors: &[ConfigurationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
