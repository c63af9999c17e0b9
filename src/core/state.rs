//! Logical states of the security-lamp controller.
//!
//! A state describes the controller's position in the transition table. It is
//! distinct from the physical lamp output: two different states may drive the
//! lamp the same way (for example both "off" states issue the same command).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six mutually exclusive logical states.
///
/// All methods are pure - no side effects.
///
/// # Example
///
/// ```rust
/// use security_lamp::core::LampState;
///
/// let state = LampState::LampOffNighttime;
/// assert_eq!(state.name(), "LAMP_OFF_NIGHTTIME");
/// assert!(state.is_nighttime());
/// assert!(!state.is_lamp_lit());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LampState {
    /// Lamp off, ambient light sufficient.
    #[default]
    LampOffDaylight,
    /// Lamp off, ambient light insufficient, armed for motion.
    LampOffNighttime,
    /// Lamp on at reduced brightness, manually engaged while dark.
    LampOnNighttimeBrightness,
    /// Lamp on at full brightness, manually engaged while light.
    LampOnFullBrightness,
    /// Lamp on, motion-triggered; reverts on timer expiry or escalates on alarm.
    MotionDetected,
    /// Alarm tripped; holds until explicitly cleared.
    IntrusionDetected,
}

impl LampState {
    /// Every state, in declaration order.
    pub const ALL: [LampState; 6] = [
        Self::LampOffDaylight,
        Self::LampOffNighttime,
        Self::LampOnNighttimeBrightness,
        Self::LampOnFullBrightness,
        Self::MotionDetected,
        Self::IntrusionDetected,
    ];

    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LampOffDaylight => "LAMP_OFF_DAYLIGHT",
            Self::LampOffNighttime => "LAMP_OFF_NIGHTTIME",
            Self::LampOnNighttimeBrightness => "LAMP_ON_NIGHTTIME_BRIGHTNESS",
            Self::LampOnFullBrightness => "LAMP_ON_FULL_BRIGHTNESS",
            Self::MotionDetected => "MOTION_DETECTED",
            Self::IntrusionDetected => "INTRUSION_DETECTED",
        }
    }

    /// Check if the controller believes it is dark outside.
    ///
    /// Motion and alarm handling is scoped to these states.
    pub fn is_nighttime(&self) -> bool {
        !matches!(self, Self::LampOffDaylight | Self::LampOnFullBrightness)
    }

    /// Check if the state keeps the lamp lit.
    pub fn is_lamp_lit(&self) -> bool {
        matches!(
            self,
            Self::LampOnNighttimeBrightness | Self::LampOnFullBrightness | Self::MotionDetected
        )
    }

    /// Check if this is the alarm-tripped state.
    pub fn is_alarm(&self) -> bool {
        matches!(self, Self::IntrusionDetected)
    }
}

impl fmt::Display for LampState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
