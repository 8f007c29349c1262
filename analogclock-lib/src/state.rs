//! Clock state owned by a single controller.
//!
//! [`ClockState`] is advanced with [`ClockState::tick`], reconfigured with
//! [`ClockState::apply`] and painted with [`ClockState::render`]. The hand
//! angles are cached but always recomputed from the absolute counter.

use crate::digital::{self, Format};
use crate::face::{self, Dimensions, Frame};
use crate::time::{ClockTime, HandAngles, Rotation};

/// The user-facing toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Show the digital readout on top of the face
    pub digital: bool,
    /// Digital readout uses the 24-hour convention
    pub hour24: bool,
    pub rotation: Rotation,
}

impl Settings {
    pub fn format(&self) -> Format {
        Format::new(self.hour24)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            digital: false,
            hour24: false,
            rotation: Rotation::Smooth,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleDigital,
    Toggle24Hour,
    ToggleSmooth,
    Exit,
}

/// What the owner has to do after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Unchanged,
    Exit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClockState {
    time: ClockTime,
    settings: Settings,
    angles: HandAngles,
}

impl ClockState {
    pub fn new(time: ClockTime, settings: Settings) -> Self {
        ClockState {
            time,
            settings,
            angles: time.angles(settings.rotation),
        }
    }

    pub fn time(&self) -> &ClockTime {
        &self.time
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn angles(&self) -> &HandAngles {
        &self.angles
    }

    /// Advance the counter by one second and recompute the hands.
    pub fn tick(self) -> Self {
        ClockState::new(self.time.tick(), self.settings)
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::ToggleDigital => {
                self.settings.digital = !self.settings.digital;
            }
            Command::Toggle24Hour => {
                // the format is only switchable while it is visible
                if !self.settings.digital {
                    return Outcome::Unchanged;
                }
                self.settings.hour24 = !self.settings.hour24;
            }
            Command::ToggleSmooth => {
                self.settings.rotation = match self.settings.rotation {
                    Rotation::Smooth => Rotation::Stepped,
                    Rotation::Stepped => Rotation::Smooth,
                };
                self.angles = self.time.angles(self.settings.rotation);
            }
            Command::Exit => return Outcome::Exit,
        }

        Outcome::Redraw
    }

    /// The digital readout, if it is switched on.
    pub fn digital_time(&self) -> Option<String> {
        if !self.settings.digital {
            return None;
        }

        // hour and minute are unsigned, formatting cannot fail
        digital::format(
            self.time.hour().into(),
            self.time.minute().into(),
            self.settings.format(),
        )
        .ok()
    }

    pub fn render(&self, dimensions: Dimensions) -> Frame {
        let text = self
            .digital_time()
            .map(|content| face::overlay(content, self.settings.format()));

        Frame::new(&self.angles, dimensions, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Cycle;

    #[test]
    fn defaults() {
        let state = ClockState::default();

        assert_eq!(state.time().seconds(), 0);
        assert!(!state.settings().digital);
        assert!(!state.settings().hour24);
        assert_eq!(state.settings().rotation, Rotation::Smooth);
        assert_eq!(state.digital_time(), None);
    }

    #[test]
    fn tick_recomputes_angles() {
        let state = ClockState::default().tick();

        assert_eq!(state.time().seconds(), 1);
        assert_eq!(*state.angles(), state.time().angles(Rotation::Smooth));
        assert!(state.angles().minute > 0.0);
    }

    #[test]
    fn toggle_24_hour_needs_digital() {
        let time = ClockTime::from_hms(13, 5, 0, Cycle::Day).unwrap();
        let mut state = ClockState::new(time, Settings::default());

        assert_eq!(state.apply(Command::Toggle24Hour), Outcome::Unchanged);
        assert!(!state.settings().hour24);

        assert_eq!(state.apply(Command::ToggleDigital), Outcome::Redraw);
        assert_eq!(state.digital_time().as_deref(), Some("01:05 PM"));

        assert_eq!(state.apply(Command::Toggle24Hour), Outcome::Redraw);
        assert_eq!(state.digital_time().as_deref(), Some("13:05"));

        assert_eq!(state.apply(Command::ToggleDigital), Outcome::Redraw);
        assert_eq!(state.digital_time(), None);
    }

    #[test]
    fn toggle_smooth() {
        let time = ClockTime::new(3 * 3600 + 30 * 60, Cycle::Day);
        let mut state = ClockState::new(time, Settings::default());
        let smooth = *state.angles();

        assert_eq!(state.apply(Command::ToggleSmooth), Outcome::Redraw);
        assert_eq!(state.settings().rotation, Rotation::Stepped);
        assert_eq!(*state.angles(), time.angles(Rotation::Stepped));
        assert_ne!(state.angles().hour, smooth.hour);

        state.apply(Command::ToggleSmooth);
        assert_eq!(*state.angles(), smooth);
    }

    #[test]
    fn exit() {
        let mut state = ClockState::default();
        assert_eq!(state.apply(Command::Exit), Outcome::Exit);
        assert_eq!(state, ClockState::default());
    }

    #[test]
    fn render_overlay() {
        let mut state = ClockState::default();
        let dimensions = Dimensions::default();

        assert_eq!(state.render(dimensions).text, None);

        state.apply(Command::ToggleDigital);
        let text = state.render(dimensions).text.unwrap();
        assert_eq!(text.content, "12:00 AM");
        assert_eq!(text.origin.x, -64.0);
    }

    #[test]
    fn no_drift_over_a_full_day() {
        let dimensions = Dimensions::default();
        let start = ClockState::new(ClockTime::new(12_345, Cycle::Day), Settings::default());
        let first = start.render(dimensions);

        assert_eq!(start.render(dimensions), first);

        let mut state = start;
        for _ in 0..Cycle::Day.period() {
            state = state.tick();
        }

        assert_eq!(state, start);
        assert_eq!(state.render(dimensions), first);
    }
}
