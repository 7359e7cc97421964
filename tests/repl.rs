use std::{io::Cursor, path::PathBuf};

use pretty_assertions::assert_eq;
use yardcalc::{
    Context,
    color::{ColorMode, Palette, colors},
    repl::{Command, Repl},
    selftest,
};

fn session(input: &str) -> (String, Context) {
    let mut repl = Repl::new(Context::new(), false, |_| {});
    let mut output = Vec::new();
    repl.run(Cursor::new(input), &mut output).expect("io error");
    (String::from_utf8(output).expect("utf8"), repl.context().clone())
}

#[test]
fn commands_are_recognised() {
    assert_eq!(Command::parse("quit"), Command::Quit);
    assert_eq!(Command::parse("  exit "), Command::Quit);
    assert_eq!(Command::parse("q"), Command::Quit);
    assert_eq!(Command::parse("clear"), Command::Clear);
    assert_eq!(Command::parse("reset"), Command::Reset);
    assert_eq!(Command::parse("help"), Command::Help);
    assert_eq!(Command::parse("list"), Command::List);
    assert_eq!(Command::parse("debug"), Command::Debug);
    assert_eq!(Command::parse("run tests/scripts/squares.calc"),
               Command::Run(PathBuf::from("tests/scripts/squares.calc")));
    assert_eq!(Command::parse(""), Command::Empty);
}

#[test]
fn everything_else_is_evaluated() {
    assert_eq!(Command::parse("Q"), Command::Evaluate("Q".to_string()));
    assert_eq!(Command::parse(" 1 + 2 "), Command::Evaluate("1 + 2".to_string()));
    assert_eq!(Command::parse("run"), Command::Evaluate("run".to_string()));
}

#[test]
fn session_evaluates_and_lists() {
    let (output, context) = session("A = 2\nS[x] -> x * x\nS <- A\n1 / 0\nlist\nquit\nA = 99\n");

    assert!(output.contains("Result: 2"));
    assert!(output.contains("Defined."));
    assert!(output.contains("Result: 4"));
    assert!(output.contains("Error: Error at column 2: Division by zero."));
    assert!(output.contains("A = 2\n"));
    assert!(output.contains("S[x] -> x * x\n"));
    assert!(output.ends_with("Exiting the program.\n"));
    assert_eq!(context.variable('A'), Some(2));
}

#[test]
fn reset_forgets_state() {
    let (output, context) = session("A = 1\nreset\nlist\n");
    assert!(output.contains("Environment reset."));
    assert!(output.contains("Nothing defined."));
    assert_eq!(context.variable('A'), None);
}

#[test]
fn run_command_executes_script() {
    let (output, context) = session("run tests/scripts/squares.calc\n");
    assert!(output.contains("Result: 41"));
    assert_eq!(context.variable('B'), Some(5));
}

#[test]
fn run_command_reports_missing_file() {
    let (output, _) = session("run tests/scripts/missing.calc\n");
    assert!(output.contains("Error: cannot read 'tests/scripts/missing.calc'"));
}

#[test]
fn debug_command_toggles() {
    let mut states = Vec::new();
    let mut repl = Repl::new(Context::new(), false, |on| states.push(on));
    let mut output = Vec::new();
    repl.run(Cursor::new("debug\ndebug\n"), &mut output).expect("io error");
    drop(repl);

    assert_eq!(states, vec![true, false]);
    let output = String::from_utf8(output).expect("utf8");
    assert!(output.contains("Debug logging on."));
    assert!(output.contains("Debug logging off."));
}

#[test]
fn self_test_cases_pass() {
    let reports = selftest::run(&mut Context::new());
    assert_eq!(reports.len(), selftest::CASES.len());
    for report in &reports {
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn plain_session_has_no_escape_codes() {
    let (output, _) = session("A = 2\n1 / 0\n");
    assert!(!output.contains("\x1b["));
    assert!(output.starts_with("Enter an expression to evaluate"));
}

#[test]
fn colored_session_marks_results_and_errors() {
    let mut repl = Repl::new(Context::new(), false, |_| {}).with_palette(Palette::new(true));
    let mut output = Vec::new();
    repl.run(Cursor::new("A = 2\n1 / 0\n"), &mut output).expect("io error");
    let output = String::from_utf8(output).expect("utf8");

    assert!(output.contains(&format!("{}Result: {}{}2{}",
                                     colors::SUCCESS,
                                     colors::RESET,
                                     colors::INFO,
                                     colors::RESET)));
    assert!(output.contains(&format!("{}Error: {}", colors::ERROR, colors::RESET)));
    assert!(output.contains(&format!("{}Exiting the program.{}", colors::NOTICE, colors::RESET)));
}

#[test]
fn color_mode_follows_terminal_only_in_auto() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn self_test_printout_lists_cases_then_verdicts() {
    let reports = selftest::run(&mut Context::new());
    let mut output = Vec::new();
    selftest::write_reports(&reports, &mut output, Palette::plain()).expect("io error");
    let output = String::from_utf8(output).expect("utf8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Test Cases:");
    assert_eq!(lines[1], "  0 : 1 + 2");
    assert_eq!(lines[10], "  9 : 0/1");
    assert_eq!(lines[11], "passed: 1 + 2 = 3 (expected 3)");
    assert_eq!(lines.len(), 1 + 2 * selftest::CASES.len());
}

#[test]
fn self_test_printout_colors_verdicts() {
    let reports = selftest::run(&mut Context::new());
    let mut output = Vec::new();
    selftest::write_reports(&reports, &mut output, Palette::new(true)).expect("io error");
    let output = String::from_utf8(output).expect("utf8");

    assert!(output.starts_with(&format!("{}Test Cases:{}", colors::DEBUG, colors::RESET)));
    assert!(output.contains(&format!("{}passed: 1 + 2 = 3 (expected 3){}", colors::SUCCESS, colors::RESET)));
}
