use std::time::{Duration, Instant};

use crate::config::REDRAW_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Stopped,
    /// Next frame becomes due at the deadline.
    Waiting(Instant),
    /// A frame was claimed and has not finished rendering yet.
    Pending,
}

/// Self-rescheduling redraw timer.
///
/// Each rendered frame schedules the next one no sooner than `interval`
/// later. The schedule only tracks deadlines; the owning event loop decides
/// how to wait for them, on the same thread that owns the surface.
#[derive(Debug, Clone)]
pub struct RedrawSchedule {
    interval: Duration,
    state: State,
}

impl RedrawSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: State::Stopped,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    /// Starts the loop with a frame due immediately.
    pub fn start(&mut self, now: Instant) {
        if !self.is_running() {
            self.state = State::Waiting(now);
        }
    }

    /// Abandons any scheduled frame.
    pub fn stop(&mut self) {
        self.state = State::Stopped;
    }

    /// When the next frame becomes due, if one is scheduled.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            State::Waiting(deadline) => Some(deadline),
            State::Stopped | State::Pending => None,
        }
    }

    /// Claims the next frame if its deadline has passed.
    ///
    /// Returns `true` at most once per scheduled frame.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.state {
            State::Waiting(deadline) if now >= deadline => {
                self.state = State::Pending;
                true
            }
            _ => false,
        }
    }

    /// Records a finished frame and schedules the next one.
    ///
    /// Frames rendered outside the schedule (e.g. after a resize) also push
    /// the deadline back. Has no effect once stopped.
    pub fn frame_rendered(&mut self, now: Instant) {
        if self.is_running() {
            self.state = State::Waiting(now + self.interval);
        }
    }
}

impl Default for RedrawSchedule {
    fn default() -> Self {
        Self::new(REDRAW_INTERVAL)
    }
}
