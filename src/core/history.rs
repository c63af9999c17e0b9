//! Transition history tracking.
//!
//! Keeps an ordered record of the transitions the controller has taken so a
//! UI or log sink can render what happened. Ignored signals never appear here.

use super::command::LampCommand;
use super::signal::Signal;
use super::state::LampState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use security_lamp::core::{LampCommand, LampState, Signal, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: LampState::LampOffNighttime,
///     to: LampState::MotionDetected,
///     signal: Signal::MotionDetected,
///     command: Some(LampCommand::FullBrightness),
///     timestamp: Utc::now(),
/// };
/// assert!(record.to.is_lamp_lit());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: LampState,
    /// The state being transitioned to
    pub to: LampState,
    /// The signal that caused the transition
    pub signal: Signal,
    /// The lamp command issued, if any
    pub command: Option<LampCommand>,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions with optional retention limit.
///
/// When a limit is set, recording past it drops the oldest record.
///
/// # Example
///
/// ```rust
/// use security_lamp::core::{LampState, Signal, TransitionHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = TransitionHistory::new();
/// history.record(TransitionRecord {
///     from: LampState::LampOffDaylight,
///     to: LampState::LampOffNighttime,
///     signal: Signal::LightSensorDarkened,
///     command: None,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![LampState::LampOffDaylight, LampState::LampOffNighttime]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionHistory {
    transitions: VecDeque<TransitionRecord>,
    limit: Option<usize>,
}

impl TransitionHistory {
    /// Create an unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a record, evicting the oldest one if the limit is reached.
    pub fn record(&mut self, transition: TransitionRecord) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record, then the `to`
    /// state of each record in order.
    pub fn get_path(&self) -> Vec<LampState> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Duration between the first and last retained record.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over retained records, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionRecord> {
        self.transitions.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
