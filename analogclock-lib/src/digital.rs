//! Digital `HH:MM` readout.

use crate::{Error, Result};

const AM_PM: [&str; 2] = ["AM", "PM"];

/// Convention used by the digital readout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `01:05 PM`
    #[default]
    Hour12,
    /// `13:05`
    Hour24,
}

impl Format {
    pub fn new(is_24_hour: bool) -> Self {
        if is_24_hour {
            Format::Hour24
        } else {
            Format::Hour12
        }
    }
}

/// Format an hour/minute pair.
///
/// Negative values are rejected. There is no upper bound: `hours >= 24` or
/// `minutes >= 60` are printed as given, wrapping only for the AM/PM marker
/// and the 12-hour conversion.
///
/// ```
/// use analogclock::{format, Format};
///
/// assert_eq!(format(13, 5, Format::Hour12).unwrap(), "01:05 PM");
/// assert_eq!(format(13, 5, Format::Hour24).unwrap(), "13:05");
/// ```
pub fn format(hours: i64, minutes: i64, format: Format) -> Result<String> {
    if hours < 0 || minutes < 0 {
        return Err(Error::InvalidArgument { hours, minutes });
    }

    // evaluated before the 12-hour conversion
    let marker = AM_PM[(hours % 24 / 12) as usize];

    match format {
        Format::Hour24 => Ok(format!("{:02}:{:02}", hours, minutes)),
        Format::Hour12 => {
            let hours = match hours % 12 {
                0 => 12,
                h => h,
            };

            Ok(format!("{:02}:{:02} {}", hours, minutes, marker))
        }
    }
}
