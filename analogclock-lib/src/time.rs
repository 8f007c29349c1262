//! Elapsed-seconds counter and hand angles.
//!
//! All angles are in radians, measured clockwise from 12 o'clock, and are
//! always derived from the absolute counter.

use crate::{Error, Result};
use std::f64::consts::PI;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3600;

/// One sixtieth of a turn: a second or minute step.
pub const STEP_ANGLE: f64 = PI / 30.0;
/// One twelfth of a turn: an hour step.
pub const HOUR_STEP_ANGLE: f64 = PI / 6.0;
/// Minute hand advance per elapsed second in smooth mode.
pub const SMOOTH_MINUTE_ANGLE: f64 = PI / 1800.0;
/// Hour hand advance per elapsed second in smooth mode.
pub const SMOOTH_HOUR_ANGLE: f64 = PI / 21600.0;

/// Length of the cycle after which the counter wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cycle {
    /// 24 hours, hours run from 0 to 23
    #[default]
    Day,
    /// 12 hours, hours run from 0 to 11
    HalfDay,
}

impl Cycle {
    pub const fn period(self) -> u32 {
        match self {
            Cycle::Day => 86_400,
            Cycle::HalfDay => 43_200,
        }
    }

    pub const fn hours(self) -> u32 {
        self.period() / SECONDS_PER_HOUR
    }
}

/// How the minute and hour hands move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    /// Minute and hour hands move with every elapsed second
    #[default]
    Smooth,
    /// Minute and hour hands jump once per minute / hour
    Stepped,
}

/// Seconds elapsed since a reference instant, wrapped to a [`Cycle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    seconds: u32,
    cycle: Cycle,
}

impl ClockTime {
    pub fn new(seconds: u64, cycle: Cycle) -> Self {
        ClockTime {
            seconds: (seconds % u64::from(cycle.period())) as u32,
            cycle,
        }
    }

    /// Build a counter from a wall-clock time of day.
    ///
    /// The hour must be a valid 24-hour value; on a half-day cycle it wraps
    /// to the matching 12-hour position.
    pub fn from_hms(hour: u32, minute: u32, second: u32, cycle: Cycle) -> Result<Self> {
        if hour >= 24 {
            return Err(Error::OutOfRange {
                unit: "hour",
                value: hour,
            });
        }

        if minute >= 60 {
            return Err(Error::OutOfRange {
                unit: "minute",
                value: minute,
            });
        }

        if second >= 60 {
            return Err(Error::OutOfRange {
                unit: "second",
                value: second,
            });
        }

        let seconds = hour * SECONDS_PER_HOUR + minute * SECONDS_PER_MINUTE + second;

        Ok(Self::new(seconds.into(), cycle))
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    pub fn second(&self) -> u32 {
        self.seconds % SECONDS_PER_MINUTE
    }

    pub fn minute(&self) -> u32 {
        self.seconds / SECONDS_PER_MINUTE % 60
    }

    pub fn hour(&self) -> u32 {
        self.seconds / SECONDS_PER_HOUR % self.cycle.hours()
    }

    /// Advance by one second, wrapping at the end of the cycle.
    pub fn tick(self) -> Self {
        self.advance(1)
    }

    pub fn advance(self, seconds: u64) -> Self {
        Self::new(u64::from(self.seconds) + seconds, self.cycle)
    }

    pub fn angles(&self, rotation: Rotation) -> HandAngles {
        HandAngles::new(self, rotation)
    }
}

/// Absolute hand angles in radians, clockwise from 12 o'clock.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandAngles {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

impl HandAngles {
    pub fn new(time: &ClockTime, rotation: Rotation) -> Self {
        let second = f64::from(time.second()) * STEP_ANGLE;

        match rotation {
            Rotation::Stepped => HandAngles {
                second,
                minute: f64::from(time.minute()) * STEP_ANGLE,
                hour: f64::from(time.hour()) * HOUR_STEP_ANGLE,
            },
            Rotation::Smooth => HandAngles {
                second,
                minute: f64::from(time.seconds()) * SMOOTH_MINUTE_ANGLE,
                hour: f64::from(time.seconds()) * SMOOTH_HOUR_ANGLE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_multiple_of(angle: f64, step: f64) -> bool {
        angle == (angle / step).round() * step
    }

    #[test]
    fn decompose() {
        let time = ClockTime::new(13 * 3600 + 5 * 60 + 42, Cycle::Day);

        assert_eq!(time.hour(), 13);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.second(), 42);
    }

    #[test]
    fn half_day_hours() {
        let time = ClockTime::new(13 * 3600 + 5 * 60, Cycle::HalfDay);

        assert_eq!(time.seconds(), 3600 + 5 * 60);
        assert_eq!(time.hour(), 1);
        assert_eq!(time.minute(), 5);
    }

    #[test]
    fn tick_wraps() {
        let time = ClockTime::new(86_399, Cycle::Day);
        assert_eq!(time.hour(), 23);
        assert_eq!(time.minute(), 59);
        assert_eq!(time.second(), 59);

        let time = time.tick();
        assert_eq!(time.seconds(), 0);
        assert_eq!(time.hour(), 0);

        let time = ClockTime::new(43_199, Cycle::HalfDay).tick();
        assert_eq!(time.seconds(), 0);
    }

    #[test]
    fn from_hms() {
        let time = ClockTime::from_hms(23, 59, 58, Cycle::Day).unwrap();
        assert_eq!(time.seconds(), 86_398);

        let time = ClockTime::from_hms(15, 0, 0, Cycle::HalfDay).unwrap();
        assert_eq!(time.hour(), 3);
    }

    #[test]
    fn from_hms_out_of_range() {
        assert_eq!(
            ClockTime::from_hms(24, 0, 0, Cycle::Day),
            Err(Error::OutOfRange {
                unit: "hour",
                value: 24
            })
        );
        assert_eq!(
            ClockTime::from_hms(0, 60, 0, Cycle::Day),
            Err(Error::OutOfRange {
                unit: "minute",
                value: 60
            })
        );
        assert_eq!(
            ClockTime::from_hms(0, 0, 61, Cycle::Day),
            Err(Error::OutOfRange {
                unit: "second",
                value: 61
            })
        );
    }

    #[test]
    fn stepped_angles() {
        let time = ClockTime::new(3 * 3600 + 30 * 60 + 15, Cycle::Day);
        let angles = time.angles(Rotation::Stepped);

        assert_eq!(angles.second, 15.0 * STEP_ANGLE);
        assert_eq!(angles.minute, 30.0 * STEP_ANGLE);
        assert_eq!(angles.hour, 3.0 * HOUR_STEP_ANGLE);

        for t in (0..86_400).step_by(97) {
            let angles = ClockTime::new(t, Cycle::Day).angles(Rotation::Stepped);

            assert!(is_multiple_of(angles.second, STEP_ANGLE));
            assert!(is_multiple_of(angles.minute, STEP_ANGLE));
            assert!(is_multiple_of(angles.hour, HOUR_STEP_ANGLE));
        }
    }

    #[test]
    fn stepped_hands_hold_within_a_minute() {
        let start = ClockTime::new(7 * 3600 + 12 * 60, Cycle::Day);
        let first = start.angles(Rotation::Stepped);

        for offset in 1..60 {
            let angles = start.advance(offset).angles(Rotation::Stepped);
            assert_eq!(angles.minute, first.minute);
            assert_eq!(angles.hour, first.hour);
        }
    }

    #[test]
    fn smooth_angles_advance_every_second() {
        let mut time = ClockTime::new(7 * 3600 + 12 * 60, Cycle::Day);
        let mut previous = time.angles(Rotation::Smooth);

        for _ in 0..120 {
            time = time.tick();
            let angles = time.angles(Rotation::Smooth);

            assert!(angles.minute > previous.minute);
            assert!(angles.hour > previous.hour);
            previous = angles;
        }
    }

    #[test]
    fn smooth_agrees_with_stepped_on_the_hour() {
        let time = ClockTime::new(9 * 3600, Cycle::Day);
        let smooth = time.angles(Rotation::Smooth);
        let stepped = time.angles(Rotation::Stepped);

        assert!((smooth.hour - stepped.hour).abs() < 1e-12);
        let turns = smooth.minute / (2.0 * PI);
        assert!((turns - turns.round()).abs() < 1e-9);
        assert_eq!(smooth.second, stepped.second);
    }
}
