//! Night Watch
//!
//! This demo wires the controller to console-backed doubles and walks a
//! night of events: dusk, a passer-by, a break-in, the all-clear and dawn.
//!
//! Key concepts:
//! - Capabilities injected as trait objects
//! - Observers notified in subscription order
//! - Signals with no transition are ignored, not errors
//!
//! Run with: RUST_LOG=security_lamp=debug cargo run --example night_watch

use security_lamp::{
    ControllerBuilder, ControllerConfig, LampDevice, LampTimer, Notification, Signal,
    SignalOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct ConsoleLamp;

impl LampDevice for ConsoleLamp {
    fn turn_off(&self) {
        println!("  [lamp] off");
    }

    fn turn_on_at_nighttime_brightness(&self) {
        println!("  [lamp] on, nighttime brightness");
    }

    fn turn_on_at_full_brightness(&self) {
        println!("  [lamp] on, full brightness");
    }
}

struct ConsoleTimer;

impl LampTimer for ConsoleTimer {
    fn start(&self, duration: Duration) {
        println!("  [timer] armed for {}s", duration.as_secs());
    }

    fn cancel(&self) {
        println!("  [timer] cancelled");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Night Watch ===\n");

    let config = ControllerConfig::from_json(r#"{ "history_limit": 32 }"#)
        .expect("demo config is valid");

    let mut controller = ControllerBuilder::new()
        .config(config)
        .light(Arc::new(ConsoleLamp))
        .timer(Arc::new(ConsoleTimer))
        .observer(Arc::new(|n: Notification| println!("  [panel] {n:?}")))
        .observer(Arc::new(|n: Notification| {
            if n.is_informational() {
                println!("  [siren log] {n:?}");
            }
        }))
        .build()
        .expect("all capabilities are bound");

    let night = [
        Signal::LightSensorDarkened,
        Signal::MotionDetected,
        Signal::LampTimerExpired,
        Signal::MotionDetected,
        Signal::SecurityAlarmTripped,
        Signal::LampTimerExpired,
        Signal::AlarmCleared,
        Signal::LightSensorLightened,
        Signal::MotionDetected,
    ];

    for signal in night {
        println!("{signal}");
        match controller.signal_action(signal).expect("controller is configured") {
            SignalOutcome::Transitioned { to, .. } => {
                if signal == Signal::MotionDetected {
                    if let Some(timer) = controller.timer() {
                        timer.start(Duration::from_secs(120));
                    }
                }
                println!("  -> {to}\n");
            }
            SignalOutcome::Ignored { state, .. } => println!("  ignored in {state}\n"),
            SignalOutcome::Unknown { code, .. } => println!("  unknown code {code}\n"),
        }
    }

    println!("Path taken:");
    for state in controller.history().get_path() {
        println!("  {state}");
    }

    println!("\n=== Demo Complete ===");
}
