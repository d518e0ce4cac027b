//! Wall-clock sampling and the angular model of the clock face.
//!
//! All angles are in radians, measured from the positive x axis with y
//! pointing down, so increasing angles turn clockwise on screen and
//! `-π/2` points at twelve o'clock.

use std::f32::consts::{FRAC_PI_2, PI};
use std::str::FromStr;

use chrono::{Local, NaiveTime, Timelike};

/// Hour (0..12), minute and second sampled for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampledTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl SampledTime {
    /// Builds a time, folding 24-hour input onto the 12-hour dial.
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: hour % 12,
            minute,
            second,
        }
    }

    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }

    pub fn second_angle(&self) -> f32 {
        PI * (self.second as f32 / 30.0 - 0.5)
    }

    /// Minute hand angle; seconds move it continuously between marks.
    pub fn minute_angle(&self) -> f32 {
        PI * (self.minute as f32 / 30.0 - 0.5) + PI * self.second as f32 / 60.0 / 30.0
    }

    /// Hour hand angle; minutes move it continuously between numerals.
    pub fn hour_angle(&self) -> f32 {
        FRAC_PI_2 * ((self.hour % 12) as f32 / 3.0 - 1.0) + PI * self.minute as f32 / 60.0 / 6.0
    }
}

impl FromStr for SampledTime {
    type Err = chrono::ParseError;

    /// Parses `HH:MM:SS` or `HH:MM` in 24-hour notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .map(|time| Self::from_timelike(&time))
    }
}

/// Angle of tick `index` (0..60); tick 0 sits at twelve o'clock.
pub fn tick_angle(index: u32) -> f32 {
    PI * (index as f32 / 30.0 - 0.5)
}

/// Source of the "now" shown by the clock.
pub trait TimeSource {
    fn now(&self) -> SampledTime;
}

/// The host's local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> SampledTime {
        SampledTime::from_timelike(&Local::now())
    }
}

/// Always reports the same time. Used for snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedTime(pub SampledTime);

impl TimeSource for FixedTime {
    fn now(&self) -> SampledTime {
        self.0
    }
}
