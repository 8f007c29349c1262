use analogclock::{ClockTime, Cycle};
use chrono::Timelike;
use std::{io, num, str};

pub mod canvas;
pub mod event;

pub use canvas::{Canvas, Terminal};
pub use event::{run, spawn_input, spawn_ticker, Event, Surface};

pub type Result<T> = ::std::result::Result<T, Error>;

pub mod parser {
    use analogclock::Command;
    use nom::branch::alt;
    use nom::bytes::complete::tag_no_case;
    use nom::character::complete::multispace0;
    use nom::combinator::{all_consuming, value};
    use nom::sequence::delimited;
    use nom::{Finish, IResult};

    fn command(input: &str) -> IResult<&str, Command> {
        alt((
            value(
                Command::ToggleDigital,
                alt((tag_no_case("digital"), tag_no_case("d"))),
            ),
            value(Command::Toggle24Hour, alt((tag_no_case("24"), tag_no_case("h")))),
            value(
                Command::ToggleSmooth,
                alt((tag_no_case("smooth"), tag_no_case("s"))),
            ),
            value(
                Command::Exit,
                alt((tag_no_case("quit"), tag_no_case("exit"), tag_no_case("q"))),
            ),
        ))(input)
    }

    /// Parse one line of user input into a command.
    pub fn parse_command(input: &str) -> Option<Command> {
        all_consuming(delimited(multispace0, command, multispace0))(input)
            .finish()
            .map(|(_, command)| command)
            .ok()
    }

}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid size: {0} (must be between {min} and {max})", min = Size::MIN, max = Size::MAX)]
    InvalidSize(usize),
    #[error("Int parsing error: {0}")]
    ParseInt(#[from] num::ParseIntError),
    #[error("Clock error: {0}")]
    Clock(#[from] analogclock::Error),
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

/// Height of the dial in terminal lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size(pub usize);

impl Size {
    pub const MIN: usize = 1;
    pub const MAX: usize = 200;
}

impl Default for Size {
    fn default() -> Self {
        Size(21)
    }
}

impl str::FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.parse()?;

        if (Size::MIN..=Size::MAX).contains(&value) {
            Ok(Size(value))
        } else {
            Err(Error::InvalidSize(value))
        }
    }
}

/// Start the counter at the given wall-clock time of day.
pub fn seed<T: Timelike>(now: &T, cycle: Cycle) -> Result<ClockTime> {
    Ok(ClockTime::from_hms(
        now.hour(),
        now.minute(),
        now.second(),
        cycle,
    )?)
}

/// Log to stderr, filtered by `RUST_LOG`, so stdout stays free for the clock.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
