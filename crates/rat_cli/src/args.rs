// crates/rat_cli/src/args.rs
//
// Argument surface of the `rat` driver: one subcommand per engine operation.
// Operands are parsed straight into `Rational` by clap, so a malformed
// literal is a usage error before anything runs.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use rat_core::{Rational, RoundingMode};

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "rat",
    version,
    disable_help_subcommand = true,
    about = "Exact fixed-size rational arithmetic"
)]
pub struct Args {
    /// Print one JSON object per result instead of the text form.
    #[cfg(feature = "json")]
    #[arg(long, global = true)]
    pub json: bool,

    /// Only report errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Trace every operation (debug level).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// A + B
    Add(Pair),
    /// A - B
    Sub(Pair),
    /// A * B
    Mul(Pair),
    /// A / B (division by zero is invalid)
    Div(Pair),
    /// Print -1, 0 or 1 for A <=> B.
    Cmp(Pair),
    /// Round A at a decimal scale.
    Round(RoundArgs),
    /// Round A toward +inf at a decimal scale.
    Ceil(Scaled),
    /// Round A toward -inf at a decimal scale.
    Floor(Scaled),
    /// A in lowest terms.
    Reduce(Single),
    /// Bit-exact fraction of a double.
    #[command(name = "from-f64")]
    FromF64(FloatArg),
    /// A as a double.
    #[command(name = "to-f64")]
    ToF64(Single),
}

#[derive(Debug, ClapArgs, Clone)]
pub struct Pair {
    #[arg(value_parser = parse_rational, allow_hyphen_values = true)]
    pub a: Rational,
    #[arg(value_parser = parse_rational, allow_hyphen_values = true)]
    pub b: Rational,
    /// Reduce the result (arithmetic results are otherwise left unreduced).
    #[arg(long)]
    pub reduce: bool,
}

#[derive(Debug, ClapArgs, Clone)]
pub struct Single {
    #[arg(value_parser = parse_rational, allow_hyphen_values = true)]
    pub a: Rational,
}

#[derive(Debug, ClapArgs, Clone)]
pub struct Scaled {
    #[arg(value_parser = parse_rational, allow_hyphen_values = true)]
    pub a: Rational,
    /// Decimal places; negative values round to tens, hundreds, ...
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub scale: i32,
}

#[derive(Debug, ClapArgs, Clone)]
pub struct RoundArgs {
    #[command(flatten)]
    pub target: Scaled,
    #[arg(long, value_enum, default_value_t = Mode::HalfUp)]
    pub mode: Mode,
}

#[derive(Debug, ClapArgs, Clone)]
pub struct FloatArg {
    #[arg(allow_hyphen_values = true)]
    pub x: f64,
}

/// Rounding mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    TowardZero,
    AwayFromZero,
    HalfUp,
}

impl From<Mode> for RoundingMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::TowardZero => RoundingMode::TowardZero,
            Mode::AwayFromZero => RoundingMode::AwayFromZero,
            Mode::HalfUp => RoundingMode::HalfUp,
        }
    }
}

/// Errors after a successful parse. Messages stay short and stable for scripts.
///
/// Operands never reach the engine invalid (the parser rejects `invalid`), so
/// every failure past this point is an output failure.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "json")]
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// clap value parser for `n/d` or `n` operands.
pub fn parse_rational(s: &str) -> Result<Rational, String> {
    s.parse::<Rational>().map_err(|e| format!("`{s}`: {e}"))
}
