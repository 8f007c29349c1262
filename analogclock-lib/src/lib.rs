//! Analogue clock face geometry and digital time formatting.
//!
//! The crate is split into a handful of small pieces:
//!
//! * [`time`] decomposes an elapsed-seconds counter into hours, minutes and
//!   seconds and computes absolute hand angles from it.
//! * [`digital`] formats an hour/minute pair as `HH:MM` or `HH:MM AM`.
//! * [`face`] turns hand angles into drawable line segments.
//! * [`state`] ties everything together into a [`ClockState`] that is ticked,
//!   toggled and rendered by whoever owns it.
//!
//! ```
//! use analogclock::{ClockState, Command, Dimensions};
//!
//! let mut state = ClockState::default();
//! state.apply(Command::ToggleDigital);
//! let state = state.tick();
//!
//! let frame = state.render(Dimensions::default());
//! assert_eq!(frame.text.unwrap().content, "12:00 AM");
//! ```

pub mod digital;
pub mod face;
pub mod state;
pub mod time;

pub use digital::{format, Format};
pub use face::{Color, Dimensions, Frame, Point, Segment, Text};
pub use state::{ClockState, Command, Outcome, Settings};
pub use time::{ClockTime, Cycle, HandAngles, Rotation};

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: hours and minutes cannot be negative (got {hours}:{minutes})")]
    InvalidArgument { hours: i64, minutes: i64 },
    #[error("{unit} out of range: {value}")]
    OutOfRange { unit: &'static str, value: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_has_a_source() {
        let errors = [
            format(-1, 5, Format::Hour24).unwrap_err(),
            ClockTime::from_hms(0, 0, 60, Cycle::Day).unwrap_err(),
        ];

        for error in errors {
            match error {
                Error::InvalidArgument { .. } | Error::OutOfRange { .. } => {}
            }
        }

        assert_eq!(
            format(-1, 5, Format::Hour24).unwrap_err().to_string(),
            "Invalid argument: hours and minutes cannot be negative (got -1:5)"
        );
        assert_eq!(
            ClockTime::from_hms(0, 0, 60, Cycle::Day)
                .unwrap_err()
                .to_string(),
            "second out of range: 60"
        );
    }
}
