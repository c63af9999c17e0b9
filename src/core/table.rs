//! The fixed transition table.
//!
//! Every (state, signal) pair not listed here is a no-op. Lookup is a linear
//! scan over thirteen rows.

use super::command::LampCommand;
use super::signal::Signal;
use super::state::LampState;
use serde::Serialize;

use LampCommand::{FullBrightness, NighttimeBrightness, Off};
use LampState::*;

/// One row of the transition table.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct TransitionEntry {
    pub from: LampState,
    pub signal: Signal,
    pub to: LampState,
    /// `None` when the target state takes lamp control implicitly.
    pub command: Option<LampCommand>,
}

const fn row(
    from: LampState,
    signal: Signal,
    to: LampState,
    command: Option<LampCommand>,
) -> TransitionEntry {
    TransitionEntry {
        from,
        signal,
        to,
        command,
    }
}

/// The complete transition surface of the controller.
#[rustfmt::skip]
pub static TRANSITION_TABLE: [TransitionEntry; 13] = [
    row(LampOffDaylight, Signal::ManualSwitchOn, LampOnFullBrightness, Some(FullBrightness)),
    row(LampOffDaylight, Signal::LightSensorDarkened, LampOffNighttime, Some(Off)),
    row(LampOnFullBrightness, Signal::ManualSwitchOff, LampOffDaylight, Some(Off)),
    row(LampOffNighttime, Signal::LightSensorLightened, LampOffDaylight, Some(Off)),
    row(LampOffNighttime, Signal::ManualSwitchOn, LampOnNighttimeBrightness, Some(NighttimeBrightness)),
    row(LampOffNighttime, Signal::MotionDetected, MotionDetected, Some(FullBrightness)),
    row(LampOffNighttime, Signal::SecurityAlarmTripped, IntrusionDetected, Some(Off)),
    row(LampOnNighttimeBrightness, Signal::ManualSwitchOff, LampOffNighttime, Some(Off)),
    row(LampOnNighttimeBrightness, Signal::LightSensorLightened, LampOnFullBrightness, Some(FullBrightness)),
    row(LampOnFullBrightness, Signal::LightSensorDarkened, LampOnNighttimeBrightness, Some(NighttimeBrightness)),
    row(MotionDetected, Signal::LampTimerExpired, LampOffNighttime, Some(Off)),
    row(MotionDetected, Signal::SecurityAlarmTripped, IntrusionDetected, None),
    row(IntrusionDetected, Signal::AlarmCleared, LampOffNighttime, Some(Off)),
];

/// Find the transition for `(from, signal)`, if any (pure).
pub fn lookup(from: LampState, signal: Signal) -> Option<&'static TransitionEntry> {
    TRANSITION_TABLE
        .iter()
        .find(|entry| entry.from == from && entry.signal == signal)
}

/// Signals that cause a transition out of `state` (pure).
pub fn accepted_signals(state: LampState) -> impl Iterator<Item = Signal> {
    TRANSITION_TABLE
        .iter()
        .filter(move |entry| entry.from == state)
        .map(|entry| entry.signal)
}
