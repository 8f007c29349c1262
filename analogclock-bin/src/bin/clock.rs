use analogclock::{ClockState, ClockTime, Command, Cycle, Dimensions, Rotation, Settings};
use analogclock_bin as lib;
use analogclock_bin::{Event, Surface};
use chrono::offset::Local;
use std::io::{self, BufReader};
use std::process;
use std::sync::mpsc;
use std::time::Duration;

#[derive(Debug)]
pub struct Args {
    pub digital: bool,
    pub hour24: bool,
    pub stepped: bool,
    pub half_day: bool,
    pub zero: bool,
    pub plain: bool,
    pub once: bool,
    pub size: lib::Size,
}

fn help() {
    println!(
        r#"
analogclock - An analogue clock for the terminal

Usage: analogclock [OPTIONS]

Options:
    -d, --digital           Start with the digital readout shown
        --24h               Use the 24-hour convention for the readout
        --stepped           Move minute and hour hands in whole steps
        --half-day          Wrap the clock every 12 instead of 24 hours
        --zero              Start at 00:00:00 instead of the current time
        --plain             Do not color the second hand
        --once              Print a single frame and exit
    -s, --size              Height of the dial in lines, 1 to 200 (default: 21)
    -h, --help              Print this help message

Commands (type and press enter while running):
    d, digital              Toggle the digital readout
    h, 24                   Toggle the 24-hour readout
    s, smooth               Toggle smooth hand movement
    q, quit, exit           Exit
"#
    );
}

fn args() -> anyhow::Result<Args> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        help();
        process::exit(0);
    }

    let args = Args {
        digital: args.contains(["-d", "--digital"]),
        hour24: args.contains("--24h"),
        stepped: args.contains("--stepped"),
        half_day: args.contains("--half-day"),
        zero: args.contains("--zero"),
        plain: args.contains("--plain"),
        once: args.contains("--once"),
        size: args
            .opt_value_from_str::<_, lib::Size>(["-s", "--size"])?
            .unwrap_or_default(),
    };

    Ok(args)
}

fn app() -> anyhow::Result<()> {
    let args = match args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument error: {}", e);
            help();
            process::exit(1);
        }
    };

    lib::init_logging();

    let cycle = if args.half_day {
        Cycle::HalfDay
    } else {
        Cycle::Day
    };

    let time = if args.zero {
        ClockTime::new(0, cycle)
    } else {
        lib::seed(&Local::now(), cycle)?
    };

    let settings = Settings {
        digital: args.digital,
        hour24: args.hour24,
        rotation: if args.stepped {
            Rotation::Stepped
        } else {
            Rotation::Smooth
        },
    };

    tracing::info!(?settings, ?cycle, seconds = time.seconds(), "starting clock");

    let state = ClockState::new(time, settings);
    let dimensions = Dimensions::default();
    let mut terminal = lib::Terminal::new(io::stdout(), args.size.0, dimensions)
        .color(!args.plain)
        .clear(!args.once);

    if args.once {
        terminal.present(&state.render(dimensions))?;
        return Ok(());
    }

    let (sender, receiver) = mpsc::channel();

    ctrlc::set_handler({
        let sender = sender.clone();
        move || {
            tracing::info!("Exiting..");
            let _ = sender.send(Event::Command(Command::Exit));
        }
    })?;

    lib::spawn_ticker(sender.clone(), Duration::from_secs(1));
    lib::spawn_input(BufReader::new(io::stdin()), sender);

    let state = lib::run(state, dimensions, &receiver, &mut terminal)?;
    tracing::info!(seconds = state.time().seconds(), "clock stopped");

    Ok(())
}

fn main() {
    if let Err(e) = app() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
