//! Recording test doubles shared by the integration tests.
//!
//! Every double writes into one ordered log so tests can assert the
//! interleaving of lamp commands and observer notifications.

#![allow(dead_code)]

use security_lamp::{
    LampCommand, LampDevice, LampState, LampTimer, LightController, Notification, Observer,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Command(LampCommand),
    Notified(usize, Notification),
    TimerStarted(Duration),
    TimerCancelled,
}

#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    /// Drain everything recorded so far.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

pub struct RecordingLamp(pub EventLog);

impl LampDevice for RecordingLamp {
    fn turn_off(&self) {
        self.0.push(Event::Command(LampCommand::Off));
    }

    fn turn_on_at_nighttime_brightness(&self) {
        self.0.push(Event::Command(LampCommand::NighttimeBrightness));
    }

    fn turn_on_at_full_brightness(&self) {
        self.0.push(Event::Command(LampCommand::FullBrightness));
    }
}

pub struct RecordingTimer(pub EventLog);

impl LampTimer for RecordingTimer {
    fn start(&self, duration: Duration) {
        self.0.push(Event::TimerStarted(duration));
    }

    fn cancel(&self) {
        self.0.push(Event::TimerCancelled);
    }
}

pub struct RecordingObserver {
    pub index: usize,
    pub log: EventLog,
}

impl Observer for RecordingObserver {
    fn notify(&self, notification: Notification) {
        self.log.push(Event::Notified(self.index, notification));
    }
}

/// Controller in `initial` with lamp, timer and `observers` recording observers bound.
pub fn wired(initial: LampState, observers: usize) -> (LightController, EventLog) {
    let log = EventLog::default();
    let mut controller = LightController::with_initial(initial);
    controller.set_light(Arc::new(RecordingLamp(log.clone())));
    controller.set_timer(Arc::new(RecordingTimer(log.clone())));
    for index in 0..observers {
        controller.subscribe(Arc::new(RecordingObserver {
            index,
            log: log.clone(),
        }));
    }
    (controller, log)
}

pub fn command(command: LampCommand) -> Event {
    Event::Command(command)
}

pub fn notified(notification: Notification) -> Event {
    Event::Notified(0, notification)
}
