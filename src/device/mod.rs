//! Capabilities the controller consumes.
//!
//! The physical lamp driver and the countdown timer live outside this crate.
//! They are injected as trait objects so test doubles can stand in for
//! hardware.
//!
//! # Example
//!
//! ```rust
//! use security_lamp::device::LampDevice;
//! use std::sync::atomic::{AtomicU8, Ordering};
//!
//! #[derive(Default)]
//! struct DimmerLamp {
//!     level: AtomicU8,
//! }
//!
//! impl LampDevice for DimmerLamp {
//!     fn turn_off(&self) {
//!         self.level.store(0, Ordering::SeqCst);
//!     }
//!
//!     fn turn_on_at_nighttime_brightness(&self) {
//!         self.level.store(30, Ordering::SeqCst);
//!     }
//!
//!     fn turn_on_at_full_brightness(&self) {
//!         self.level.store(100, Ordering::SeqCst);
//!     }
//! }
//! ```

use std::time::Duration;

/// Driver for the physical lamp.
///
/// Calls are assumed infallible at this layer; a driver that can fail owns
/// its own retry and reporting.
pub trait LampDevice: Send + Sync {
    fn turn_off(&self);

    fn turn_on_at_nighttime_brightness(&self);

    fn turn_on_at_full_brightness(&self);
}

/// Countdown timer that eventually produces `LAMP_TIMER_EXPIRED`.
///
/// The controller only holds the timer; arming and cancelling it is the job
/// of whatever harness feeds signals into the controller.
pub trait LampTimer: Send + Sync {
    /// Arm the timer to fire once after `duration`.
    fn start(&self, duration: Duration);

    /// Disarm a pending timer. No-op if nothing is pending.
    fn cancel(&self);
}
