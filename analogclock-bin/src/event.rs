//! Event loop owning the clock state.
//!
//! Timer, input and signal sources run on their own threads and only send
//! [`Event`]s; every state change and every paint happens on the thread
//! calling [`run`].

use crate::parser;
use crate::Result;
use analogclock::{ClockState, Command, Dimensions, Frame, Outcome};
use std::io::BufRead;
use std::iter;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tick,
    Command(Command),
}

/// Something a [`Frame`] can be painted on.
pub trait Surface {
    fn present(&mut self, frame: &Frame) -> Result<()>;
}

fn handle(state: &mut ClockState, event: Event) -> Outcome {
    match event {
        Event::Tick => {
            *state = state.tick();
            tracing::trace!(seconds = state.time().seconds(), "tick");
            Outcome::Redraw
        }
        Event::Command(command) => {
            let outcome = state.apply(command);
            tracing::debug!(?command, ?outcome, settings = ?state.settings(), "applied command");
            outcome
        }
    }
}

/// Process events until an exit command arrives or all senders are gone.
///
/// Events that queued up while a frame was being painted are handled in one
/// go and produce a single redraw.
pub fn run<S: Surface>(
    mut state: ClockState,
    dimensions: Dimensions,
    events: &mpsc::Receiver<Event>,
    surface: &mut S,
) -> Result<ClockState> {
    surface.present(&state.render(dimensions))?;

    while let Ok(event) = events.recv() {
        let mut redraw = false;

        for event in iter::once(event).chain(events.try_iter()) {
            match handle(&mut state, event) {
                Outcome::Exit => return Ok(state),
                Outcome::Redraw => redraw = true,
                Outcome::Unchanged => {}
            }
        }

        if redraw {
            surface.present(&state.render(dimensions))?;
        }
    }

    Ok(state)
}

/// Send a [`Event::Tick`] every `period` until the receiver goes away.
///
/// Deadlines are kept on an absolute schedule so sleep overshoot does not
/// accumulate.
pub fn spawn_ticker(sender: mpsc::Sender<Event>, period: Duration) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut deadline = Instant::now();

        loop {
            deadline += period;
            thread::sleep(deadline.saturating_duration_since(Instant::now()));

            if sender.send(Event::Tick).is_err() {
                break;
            }
        }
    })
}

/// Forward commands read line by line from `reader`; unknown lines are skipped.
pub fn spawn_input<R>(reader: R, sender: mpsc::Sender<Event>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Input error: {}", e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match parser::parse_command(&line) {
                Some(command) => {
                    if sender.send(Event::Command(command)).is_err() {
                        break;
                    }
                }
                None => tracing::warn!(input = line.trim(), "unknown command"),
            }
        }
    })
}
