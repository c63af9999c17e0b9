//! Input signals delivered to the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete input event.
///
/// Each signal has a stable integer code so that raw events from a sensor
/// bus or a legacy dispatcher can be decoded with [`Signal::from_code`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    ManualSwitchOn,
    ManualSwitchOff,
    LightSensorDarkened,
    LightSensorLightened,
    MotionDetected,
    SecurityAlarmTripped,
    LampTimerExpired,
    AlarmCleared,
}

impl Signal {
    /// Every signal, in code order.
    pub const ALL: [Signal; 8] = [
        Self::ManualSwitchOn,
        Self::ManualSwitchOff,
        Self::LightSensorDarkened,
        Self::LightSensorLightened,
        Self::MotionDetected,
        Self::SecurityAlarmTripped,
        Self::LampTimerExpired,
        Self::AlarmCleared,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ManualSwitchOn => "MANUAL_SWITCH_ON",
            Self::ManualSwitchOff => "MANUAL_SWITCH_OFF",
            Self::LightSensorDarkened => "LIGHT_SENSOR_DARKENED",
            Self::LightSensorLightened => "LIGHT_SENSOR_LIGHTENED",
            Self::MotionDetected => "MOTION_DETECTED",
            Self::SecurityAlarmTripped => "SECURITY_ALARM_TRIPPED",
            Self::LampTimerExpired => "LAMP_TIMER_EXPIRED",
            Self::AlarmCleared => "ALARM_CLEARED",
        }
    }

    /// Stable integer code of the signal.
    pub fn code(&self) -> i32 {
        match self {
            Self::ManualSwitchOn => 0,
            Self::ManualSwitchOff => 1,
            Self::LightSensorDarkened => 2,
            Self::LightSensorLightened => 3,
            Self::MotionDetected => 4,
            Self::SecurityAlarmTripped => 5,
            Self::LampTimerExpired => 6,
            Self::AlarmCleared => 7,
        }
    }

    /// Decode a raw integer code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
