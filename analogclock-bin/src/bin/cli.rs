use analogclock::{format, Format};
use chrono::{offset::Local, Timelike};
use std::process;

fn app() -> anyhow::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let hour24 = args.contains("--24h");

    let now = Local::now();
    let hour = now.hour().into();
    let minute = now.minute().into();

    println!("{}", format(hour, minute, Format::new(hour24))?);

    Ok(())
}

fn main() {
    if let Err(e) = app() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
