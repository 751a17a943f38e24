// crates/rat_cli/src/ops.rs
//
// Evaluates one subcommand against the engine and packages the result.

use log::debug;
use rat_core::Rational;

#[cfg(feature = "json")]
use serde::Serialize;

use crate::args::{Command, Pair};

/// A single evaluated operation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct Outcome {
    pub op: &'static str,
    pub operands: Vec<String>,
    pub result: Rational,
    pub valid: bool,
    /// The result as a double; absent when invalid.
    #[cfg_attr(feature = "json", serde(rename = "f64"))]
    pub approx: Option<f64>,
    /// Text printed without `--json`.
    #[cfg_attr(feature = "json", serde(skip))]
    pub text: String,
}

impl Outcome {
    fn new(op: &'static str, operands: Vec<String>, result: Rational) -> Self {
        let valid = result.is_valid();
        Outcome {
            op,
            operands,
            result,
            valid,
            approx: valid.then(|| result.to_f64()),
            text: result.to_string(),
        }
    }
}

fn binary(op: &'static str, p: &Pair, f: fn(Rational, Rational) -> Rational) -> Outcome {
    let mut r = f(p.a, p.b);
    if p.reduce {
        r.reduce();
    }
    Outcome::new(op, vec![p.a.to_string(), p.b.to_string()], r)
}

/// Parsed operands are always valid, so evaluation itself cannot fail.
pub fn evaluate(cmd: &Command) -> Outcome {
    let out = match cmd {
        Command::Add(p) => binary("add", p, Rational::plus),
        Command::Sub(p) => binary("sub", p, Rational::minus),
        Command::Mul(p) => binary("mul", p, Rational::times),
        Command::Div(p) => binary("div", p, Rational::divided_by),
        Command::Cmp(p) => {
            let ord = p.a.compare(&p.b);
            Outcome::new("cmp", vec![p.a.to_string(), p.b.to_string()], Rational::from_integer(ord as i64))
        }
        Command::Round(r) => {
            let t = &r.target;
            Outcome::new("round", vec![t.a.to_string()], t.a.round(r.mode.into(), t.scale))
        }
        Command::Ceil(s) => Outcome::new("ceil", vec![s.a.to_string()], s.a.ceil(s.scale)),
        Command::Floor(s) => Outcome::new("floor", vec![s.a.to_string()], s.a.floor(s.scale)),
        Command::Reduce(s) => Outcome::new("reduce", vec![s.a.to_string()], s.a.reduced()),
        Command::FromF64(x) => Outcome::new("from-f64", vec![x.x.to_string()], Rational::from_f64(x.x)),
        Command::ToF64(s) => {
            let mut out = Outcome::new("to-f64", vec![s.a.to_string()], s.a);
            out.text = s.a.to_f64().to_string();
            out
        }
    };
    debug!("{} {:?} -> {}", out.op, out.operands, out.result);
    out
}
