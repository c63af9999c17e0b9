//! The security-lamp controller.

use crate::core::{
    lookup, LampCommand, LampState, Notification, Signal, TransitionHistory, TransitionRecord,
};
use crate::device::{LampDevice, LampTimer};
use crate::machine::error::ConfigurationError;
use crate::observer::{Observer, ObserverSet, SubscriptionId};
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Result of delivering one signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalOutcome {
    /// The table defined a transition and it was applied.
    Transitioned {
        from: LampState,
        to: LampState,
        command: Option<LampCommand>,
    },

    /// No transition for this signal in the current state; nothing happened.
    Ignored { state: LampState, signal: Signal },

    /// A raw code that is not a known signal; nothing happened.
    Unknown { state: LampState, code: i32 },
}

impl SignalOutcome {
    pub fn is_transition(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// Finite-state machine deciding when the lamp is off, dim or fully lit.
///
/// Signals are applied synchronously: by the time [`signal_action`] returns,
/// the lamp command has been issued and every observer has been notified.
/// The controller has no internal locking; concurrent producers must
/// serialize their calls.
///
/// # Example
///
/// ```rust
/// use security_lamp::core::{LampState, Notification, Signal};
/// use security_lamp::device::{LampDevice, LampTimer};
/// use security_lamp::machine::LightController;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// struct Lamp;
/// impl LampDevice for Lamp {
///     fn turn_off(&self) {}
///     fn turn_on_at_nighttime_brightness(&self) {}
///     fn turn_on_at_full_brightness(&self) {}
/// }
///
/// struct Timer;
/// impl LampTimer for Timer {
///     fn start(&self, _duration: Duration) {}
///     fn cancel(&self) {}
/// }
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
///
/// let mut controller = LightController::new();
/// controller.set_light(Arc::new(Lamp));
/// controller.set_timer(Arc::new(Timer));
/// controller.subscribe(Arc::new(move |n: Notification| sink.lock().unwrap().push(n)));
///
/// controller.signal_action(Signal::ManualSwitchOn).unwrap();
///
/// assert_eq!(controller.current_state(), LampState::LampOnFullBrightness);
/// assert_eq!(*seen.lock().unwrap(), vec![Notification::LampOnFullBrightness]);
/// ```
///
/// [`signal_action`]: LightController::signal_action
pub struct LightController {
    current: LampState,
    device: Option<Arc<dyn LampDevice>>,
    timer: Option<Arc<dyn LampTimer>>,
    observers: ObserverSet,
    history: TransitionHistory,
}

impl LightController {
    /// Create an unconfigured controller in `LAMP_OFF_DAYLIGHT`.
    pub fn new() -> Self {
        Self::with_initial(LampState::default())
    }

    /// Create an unconfigured controller in the given state.
    pub fn with_initial(initial: LampState) -> Self {
        Self {
            current: initial,
            device: None,
            timer: None,
            observers: ObserverSet::new(),
            history: TransitionHistory::new(),
        }
    }

    pub(crate) fn with_history(mut self, history: TransitionHistory) -> Self {
        self.history = history;
        self
    }

    /// Bind the lamp device capability.
    pub fn set_light(&mut self, device: Arc<dyn LampDevice>) {
        self.device = Some(device);
    }

    /// Bind the timer capability.
    pub fn set_timer(&mut self, timer: Arc<dyn LampTimer>) {
        self.timer = Some(timer);
    }

    /// Add an observer; it sees the next state change onward.
    pub fn subscribe(&mut self, observer: Arc<dyn Observer>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> LampState {
        self.current
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// The bound timer, for the harness that arms it.
    pub fn timer(&self) -> Option<&Arc<dyn LampTimer>> {
        self.timer.as_ref()
    }

    /// Check that both capabilities are bound (pure)
    pub fn is_ready(&self) -> bool {
        self.device.is_some() && self.timer.is_some()
    }

    fn bound_device(&self) -> Result<Arc<dyn LampDevice>, ConfigurationError> {
        let device = self
            .device
            .clone()
            .ok_or(ConfigurationError::MissingLampDevice)?;
        if self.timer.is_none() {
            return Err(ConfigurationError::MissingTimer);
        }
        Ok(device)
    }

    /// Deliver one signal.
    ///
    /// If the current state defines a transition for `signal`, the state is
    /// updated, the lamp command (if any) is issued, and every observer is
    /// notified in subscription order. Otherwise the signal is discarded
    /// without side effects.
    ///
    /// Fails with a [`ConfigurationError`] if a capability is unbound; the
    /// state is left untouched in that case.
    pub fn signal_action(&mut self, signal: Signal) -> Result<SignalOutcome, ConfigurationError> {
        let device = self.bound_device().inspect_err(|err| {
            warn!(signal = signal.name(), error = %err, "signal rejected");
        })?;

        let from = self.current;
        let Some(entry) = lookup(from, signal) else {
            trace!(state = from.name(), signal = signal.name(), "signal ignored");
            return Ok(SignalOutcome::Ignored {
                state: from,
                signal,
            });
        };

        self.current = entry.to;
        if let Some(command) = entry.command {
            command.apply(device.as_ref());
        }
        self.history.record(TransitionRecord {
            from,
            to: entry.to,
            signal,
            command: entry.command,
            timestamp: Utc::now(),
        });

        debug!(
            from = from.name(),
            to = entry.to.name(),
            signal = signal.name(),
            command = ?entry.command,
            "transition"
        );

        self.observers.notify_all(Notification::from(entry.to));

        Ok(SignalOutcome::Transitioned {
            from,
            to: entry.to,
            command: entry.command,
        })
    }

    /// Deliver a signal given as a raw integer code.
    ///
    /// Unknown codes behave like a signal with no transition.
    pub fn signal_code(&mut self, code: i32) -> Result<SignalOutcome, ConfigurationError> {
        match Signal::from_code(code) {
            Some(signal) => self.signal_action(signal),
            None => {
                self.bound_device()?;
                trace!(state = self.current.name(), code, "unknown signal code ignored");
                Ok(SignalOutcome::Unknown {
                    state: self.current,
                    code,
                })
            }
        }
    }
}

impl Default for LightController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LightController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightController")
            .field("current", &self.current)
            .field("device_bound", &self.device.is_some())
            .field("timer_bound", &self.timer.is_some())
            .field("observers", &self.observers)
            .field("history_len", &self.history.len())
            .finish()
    }
}
