// crates/rat_cli/src/main.rs
//
// `rat`: parse, evaluate one operation, print the result, map the outcome to
// a stable exit code.

mod args;
mod ops;

mod exitcodes {
    pub const OK: u8 = 0;
    /// Malformed operands or bad flags.
    pub const USAGE: u8 = 2;
    /// The operation ran and produced the invalid state.
    pub const INVALID_RESULT: u8 = 3;
    pub const IO: u8 = 4;
}

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{error, warn, LevelFilter};

use args::{Args, CliError};
use ops::Outcome;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(a) => a,
        Err(e) => return ExitCode::from(parse_failure_code(&e, e.print())),
    };
    init_logging(&args);

    let rc = match run(&args) {
        Ok(true) => exitcodes::OK,
        Ok(false) => exitcodes::INVALID_RESULT,
        Err(e) => {
            error!("{e}");
            eprintln!("rat: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc)
}

/// `RUST_LOG` wins; otherwise `--quiet`/`--verbose` pick the level.
fn init_logging(args: &Args) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = if args.quiet {
                LevelFilter::Error
            } else if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            builder.filter_level(level);
        }
    }
    if let Err(e) = builder.try_init() {
        eprintln!("rat: logging disabled: {e}");
    }
}

/// Exit code after clap gave up. `--help` and `--version` land here too and
/// are not failures, unless their text could not be written.
fn parse_failure_code(e: &clap::Error, printed: io::Result<()>) -> u8 {
    if printed.is_err() {
        exitcodes::IO
    } else if e.use_stderr() {
        exitcodes::USAGE
    } else {
        exitcodes::OK
    }
}

/// Evaluate and print. `Ok(false)` when the result is invalid.
fn run(args: &Args) -> Result<bool, CliError> {
    let out = ops::evaluate(&args.command);
    if !out.valid {
        warn!("{} {:?} produced the invalid state", out.op, out.operands);
    }
    emit(args, &out)?;
    Ok(out.valid)
}

#[cfg(feature = "json")]
fn emit(args: &Args, out: &Outcome) -> Result<(), CliError> {
    let mut w = io::stdout().lock();
    if args.json {
        serde_json::to_writer(&mut w, out)?;
        writeln!(w)?;
    } else {
        writeln!(w, "{}", out.text)?;
    }
    Ok(())
}

#[cfg(not(feature = "json"))]
fn emit(_args: &Args, out: &Outcome) -> Result<(), CliError> {
    writeln!(io::stdout().lock(), "{}", out.text)?;
    Ok(())
}

fn map_error(e: &CliError) -> u8 {
    use exitcodes::*;
    match e {
        CliError::Io(_) => IO,
        #[cfg(feature = "json")]
        CliError::Json(_) => IO,
    }
}
