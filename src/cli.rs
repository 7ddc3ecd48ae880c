use std::path::PathBuf;
use std::process;
use std::time::Duration;

use getopts::{Matches, Options};

use crate::{output::default_path, source::DEFAULT_TIMEOUT};

pub const DEFAULT_YEAR: i32 = 2025;

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub year: i32,
    pub output: PathBuf,
    pub timeout: Duration,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "y",
        "year",
        "Year to fetch holidays for, may also be given as the only argument [Default: 2025]",
        "YEAR",
    );
    opts.optopt(
        "o",
        "output",
        "Where to write the calendar [Default: argentina_holidays_<YEAR>.ics]",
        "PATH",
    );
    opts.optopt(
        "t",
        "timeout",
        "Timeout for the request to the holiday page [Default: 20]",
        "SECONDS",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        let brief = format!("{} [options] [YEAR]", env!("CARGO_PKG_NAME"));
        println!("{}", opts.usage(&brief));
        process::exit(0);
    }

    match args_from(&matches) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn args_from(matches: &Matches) -> Result<Args, String> {
    if matches.free.len() > 1 {
        return Err(format!("Unexpected arguments: {}", matches.free[1..].join(" ")));
    }

    let year = match matches.opt_str("year").or_else(|| matches.free.first().cloned()) {
        Some(year) => parse_year(&year)?,
        None => DEFAULT_YEAR,
    };

    let output = matches
        .opt_str("output")
        .map_or_else(|| default_path(year), PathBuf::from);

    let timeout = match matches.opt_get_default("timeout", DEFAULT_TIMEOUT.as_secs()) {
        Ok(0) => return Err("Provided value for option 'timeout' must be positive".into()),
        Ok(secs) => Duration::from_secs(secs),
        Err(err) => return Err(format!("Provided value for option 'timeout' is invalid: {err}")),
    };

    Ok(Args {
        year,
        output,
        timeout,
    })
}

fn parse_year(raw: &str) -> Result<i32, String> {
    match raw.parse::<i32>() {
        Ok(year) if (1000..=9999).contains(&year) => Ok(year),
        _ => Err(format!("Provided value for year is not a 4-digit year: {raw}")),
    }
}
