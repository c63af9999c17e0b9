//! Builder for wiring a controller to its capabilities.

use crate::core::{LampState, TransitionHistory};
use crate::device::{LampDevice, LampTimer};
use crate::machine::config::ControllerConfig;
use crate::machine::controller::LightController;
use crate::machine::error::{ConfigurationError, ControllerError};
use crate::observer::Observer;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for constructing a ready-to-run controller with a fluent API.
///
/// Unlike [`LightController::new`], [`build`](Self::build) refuses to hand
/// out a controller whose capabilities are not all bound, and reports every
/// missing one at once.
#[derive(Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
    light: Option<Arc<dyn LampDevice>>,
    timer: Option<Arc<dyn LampTimer>>,
    observers: Vec<Arc<dyn Observer>>,
}

impl ControllerBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace initial state and history settings with a loaded config.
    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial state (defaults to `LAMP_OFF_DAYLIGHT`).
    pub fn initial(mut self, state: LampState) -> Self {
        self.config.initial_state = state;
        self
    }

    /// Keep at most `limit` history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Set the lamp device (required).
    pub fn light(mut self, device: Arc<dyn LampDevice>) -> Self {
        self.light = Some(device);
        self
    }

    /// Set the timer (required).
    pub fn timer(mut self, timer: Arc<dyn LampTimer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// Subscribe an observer. Order of calls is notification order.
    pub fn observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Check required capabilities, accumulating ALL missing ones.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigurationError>> {
        let checks = vec![
            if self.light.is_some() {
                Validation::success(())
            } else {
                Validation::fail(ConfigurationError::MissingLampDevice)
            },
            if self.timer.is_some() {
                Validation::success(())
            } else {
                Validation::fail(ConfigurationError::MissingTimer)
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the controller.
    /// Returns an error listing every capability that is missing.
    pub fn build(self) -> Result<LightController, ControllerError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(ControllerError::Incomplete(errors.iter().copied().collect()));
        }
        // validate() has already rejected a missing light or timer.
        let light = self.light.ok_or(ConfigurationError::MissingLampDevice)?;
        let timer = self.timer.ok_or(ConfigurationError::MissingTimer)?;

        let history = match self.config.history_limit {
            Some(limit) => TransitionHistory::with_limit(limit),
            None => TransitionHistory::new(),
        };

        let mut controller =
            LightController::with_initial(self.config.initial_state).with_history(history);
        controller.set_light(light);
        controller.set_timer(timer);
        for observer in self.observers {
            controller.subscribe(observer);
        }

        debug!(
            initial = self.config.initial_state.name(),
            observers = controller.observer_count(),
            "controller built"
        );
        Ok(controller)
    }
}
