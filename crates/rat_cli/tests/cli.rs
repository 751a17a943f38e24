// End-to-end checks of the `rat` binary: stdout text, JSON shape, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn rat() -> Command {
    let mut cmd = Command::cargo_bin("rat").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_prints_unreduced_sum() {
    rat().args(["add", "1/2", "1/3"]).assert().success().stdout("5/6\n");
    rat().args(["add", "1/4", "1/6"]).assert().success().stdout("10/24\n");
    rat().args(["add", "1/4", "1/6", "--reduce"]).assert().success().stdout("5/12\n");
}

#[test]
fn negative_operands_after_separator() {
    rat().args(["sub", "--", "-1/2", "-1/3"]).assert().success().stdout("-1/6\n");
    rat().args(["round", "--mode", "half-up", "--", "-5/2"]).assert().success().stdout("-2\n");
}

#[test]
fn rounding_modes() {
    rat().args(["round", "5/2", "--mode", "half-up"]).assert().success().stdout("3\n");
    rat().args(["round", "5/2", "--mode", "toward-zero"]).assert().success().stdout("2\n");
    rat().args(["round", "1/8", "--scale", "2"]).assert().success().stdout("13/100\n");
    rat().args(["ceil", "1/3", "--scale", "1"]).assert().success().stdout("2/5\n");
    rat().args(["floor", "1234", "--scale", "-2"]).assert().success().stdout("1200\n");
}

#[test]
fn division_by_zero_exits_with_invalid_result() {
    rat()
        .args(["div", "1/2", "0"])
        .assert()
        .code(3)
        .stdout("invalid\n")
        .stderr(predicate::str::contains("invalid state"));
}

#[test]
fn overflow_is_invalid_not_a_panic() {
    rat().args(["mul", "9223372036854775807", "2"]).assert().code(3).stdout("invalid\n");
    rat().args(["--quiet", "from-f64", "1e19"]).assert().code(3).stderr("");
    rat().args(["round", "10/3", "--scale", "18"]).assert().code(3).stdout("invalid\n");
}

#[test]
fn float_bridge() {
    rat().args(["from-f64", "0.5"]).assert().success().stdout("1/2\n");
    rat().args(["from-f64", "0.1"]).assert().success().stdout("3602879701896397/36028797018963968\n");
    rat().args(["to-f64", "3/8"]).assert().success().stdout("0.375\n");
}

#[test]
fn compare_and_reduce() {
    rat().args(["cmp", "1/3", "1/2"]).assert().success().stdout("-1\n");
    rat().args(["cmp", "2/4", "1/2"]).assert().success().stdout("0\n");
    rat().args(["reduce", "6/8"]).assert().success().stdout("3/4\n");
}

#[test]
fn malformed_input_is_a_usage_error() {
    rat().args(["add", "1/0", "1"]).assert().code(2).stderr(predicate::str::contains("zero denominator"));
    rat().args(["add", "abc", "1"]).assert().code(2);
    rat().args(["add", "invalid", "1"]).assert().code(2);
    rat().args(["round", "1/2", "--mode", "bankers"]).assert().code(2);
    rat().assert().code(2);
}

#[test]
fn help_is_not_an_error() {
    rat().arg("--help").assert().success().stdout(predicate::str::contains("from-f64"));
}

#[test]
fn json_output() {
    rat()
        .args(["--json", "mul", "2/3", "3/4"])
        .assert()
        .success()
        .stdout(r#"{"op":"mul","operands":["2/3","3/4"],"result":"6/12","valid":true,"f64":0.5}
"#);
    rat()
        .args(["div", "1", "0", "--json"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(r#""result":"invalid","valid":false,"f64":null"#));
}
