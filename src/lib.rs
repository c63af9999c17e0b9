//! Security Lamp: a finite-state controller for a security lamp
//!
//! The controller decides whether a lamp is off, dimly lit or fully lit from
//! ambient-light readings, a manual switch, motion detection, a security
//! alarm and a countdown timer. The physical lamp driver and timer are
//! injected capabilities; observers are told the new logical state after
//! every transition.
//!
//! # Core Concepts
//!
//! - **State**: six mutually exclusive logical states ([`LampState`])
//! - **Signal**: discrete input events ([`Signal`])
//! - **Transition table**: a fixed `(state, signal) -> (state, command)`
//!   lookup; anything not in the table is silently ignored
//! - **Observers**: notified synchronously, in subscription order
//!
//! # Example
//!
//! ```rust
//! use security_lamp::{ControllerBuilder, LampDevice, LampState, LampTimer, Signal};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! struct Porch;
//! impl LampDevice for Porch {
//!     fn turn_off(&self) {}
//!     fn turn_on_at_nighttime_brightness(&self) {}
//!     fn turn_on_at_full_brightness(&self) {}
//! }
//!
//! struct Countdown;
//! impl LampTimer for Countdown {
//!     fn start(&self, _duration: Duration) {}
//!     fn cancel(&self) {}
//! }
//!
//! let mut controller = ControllerBuilder::new()
//!     .initial(LampState::LampOffNighttime)
//!     .light(Arc::new(Porch))
//!     .timer(Arc::new(Countdown))
//!     .build()
//!     .unwrap();
//!
//! controller.signal_action(Signal::MotionDetected).unwrap();
//! assert_eq!(controller.current_state(), LampState::MotionDetected);
//!
//! // Daylight-only signals are ignored at night.
//! controller.signal_action(Signal::ManualSwitchOff).unwrap();
//! assert_eq!(controller.current_state(), LampState::MotionDetected);
//! ```

pub mod core;
pub mod device;
pub mod machine;
pub mod observer;

// Re-export commonly used types
pub use crate::core::{LampCommand, LampState, Notification, Signal};
pub use device::{LampDevice, LampTimer};
pub use machine::{
    ConfigurationError, ControllerBuilder, ControllerConfig, ControllerError, LightController,
    SignalOutcome,
};
pub use observer::{Observer, ObserverSet, SubscriptionId};
