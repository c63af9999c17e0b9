//! Lamp commands and observer notifications.
//!
//! These are the two output streams of the controller: commands go to the
//! lamp device, notifications go to observers.

use super::state::LampState;
use crate::device::LampDevice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical output requested from the lamp device.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LampCommand {
    Off,
    NighttimeBrightness,
    FullBrightness,
}

impl LampCommand {
    /// Invoke exactly one capability method on the device.
    pub fn apply(&self, device: &dyn LampDevice) {
        match self {
            Self::Off => device.turn_off(),
            Self::NighttimeBrightness => device.turn_on_at_nighttime_brightness(),
            Self::FullBrightness => device.turn_on_at_full_brightness(),
        }
    }
}

impl fmt::Display for LampCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Off => "off",
            Self::NighttimeBrightness => "nighttime brightness",
            Self::FullBrightness => "full brightness",
        };
        f.write_str(text)
    }
}

/// Value pushed to observers after every state change.
///
/// `MotionDetected` and `IntrusionDetected` are informational values for UI
/// and logging; they are never fed back into the controller as signals.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Notification {
    LampOffDaylight,
    LampOffNighttime,
    LampOnNighttimeBrightness,
    LampOnFullBrightness,
    MotionDetected,
    IntrusionDetected,
}

impl Notification {
    /// Check if this is one of the informational values.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::MotionDetected | Self::IntrusionDetected)
    }
}

impl From<LampState> for Notification {
    fn from(state: LampState) -> Self {
        match state {
            LampState::LampOffDaylight => Self::LampOffDaylight,
            LampState::LampOffNighttime => Self::LampOffNighttime,
            LampState::LampOnNighttimeBrightness => Self::LampOnNighttimeBrightness,
            LampState::LampOnFullBrightness => Self::LampOnFullBrightness,
            LampState::MotionDetected => Self::MotionDetected,
            LampState::IntrusionDetected => Self::IntrusionDetected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CountingLamp {
        calls: Mutex<Vec<&'static str>>,
    }

    impl LampDevice for CountingLamp {
        fn turn_off(&self) {
            self.calls.lock().unwrap().push("off");
        }

        fn turn_on_at_nighttime_brightness(&self) {
            self.calls.lock().unwrap().push("nighttime");
        }

        fn turn_on_at_full_brightness(&self) {
            self.calls.lock().unwrap().push("full");
        }
    }

    #[test]
    fn apply_invokes_exactly_one_method() {
        let lamp = CountingLamp::default();

        LampCommand::FullBrightness.apply(&lamp);
        LampCommand::Off.apply(&lamp);
        LampCommand::NighttimeBrightness.apply(&lamp);

        assert_eq!(*lamp.calls.lock().unwrap(), vec!["full", "off", "nighttime"]);
    }

    #[test]
    fn every_state_maps_to_a_distinct_notification() {
        let notifications: Vec<Notification> =
            LampState::ALL.into_iter().map(Notification::from).collect();

        for (i, a) in notifications.iter().enumerate() {
            for b in &notifications[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn informational_values_mirror_transient_states() {
        assert!(Notification::from(LampState::MotionDetected).is_informational());
        assert!(Notification::from(LampState::IntrusionDetected).is_informational());
        assert!(!Notification::from(LampState::LampOffNighttime).is_informational());
    }

    #[test]
    fn informational_values_share_state_names() {
        let motion = serde_json::to_string(&Notification::MotionDetected).unwrap();
        let intrusion = serde_json::to_string(&Notification::IntrusionDetected).unwrap();

        assert_eq!(motion, format!("\"{}\"", LampState::MotionDetected.name()));
        assert_eq!(intrusion, format!("\"{}\"", LampState::IntrusionDetected.name()));
    }
}
