//! Serializable controller configuration.

use crate::core::LampState;
use crate::machine::error::ControllerError;
use serde::{Deserialize, Serialize};

/// Settings that can be loaded from JSON.
///
/// Capabilities are not part of the config; they are bound in code.
///
/// # Example
///
/// ```rust
/// use security_lamp::core::LampState;
/// use security_lamp::machine::ControllerConfig;
///
/// let config = ControllerConfig::from_json(
///     r#"{ "initial_state": "LAMP_OFF_NIGHTTIME", "history_limit": 64 }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial_state, LampState::LampOffNighttime);
/// assert_eq!(config.history_limit, Some(64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// State the controller starts in.
    pub initial_state: LampState,

    /// Maximum number of transitions kept in history. `None` keeps all.
    pub history_limit: Option<usize>,
}

impl ControllerConfig {
    pub fn from_json(json: &str) -> Result<Self, ControllerError> {
        serde_json::from_str(json).map_err(|e| ControllerError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ControllerError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ControllerError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = ControllerConfig::from_json("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.initial_state, LampState::LampOffDaylight);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = ControllerConfig::from_json(r#"{ "initial_state": "DUSK" }"#);
        assert!(matches!(result, Err(ControllerError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = ControllerConfig::from_json(r#"{ "brightness": 40 }"#);
        assert!(matches!(result, Err(ControllerError::InvalidConfig(_))));
    }

    #[test]
    fn config_survives_json() {
        let config = ControllerConfig {
            initial_state: LampState::IntrusionDetected,
            history_limit: Some(8),
        };
        let json = config.to_json().unwrap();
        assert_eq!(ControllerConfig::from_json(&json).unwrap(), config);
    }
}
