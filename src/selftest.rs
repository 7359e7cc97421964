use std::io::{self, Write};

use crate::{
    color::{Palette, colors},
    error::EvalError,
    interpreter::evaluator::core::Context,
};

/// The literal expressions checked by `--self-test` and their expected
/// results. `None` means the expression must fail.
pub const CASES: &[(&str, Option<i64>)] = &[("1 + 2", Some(3)),
                                            ("3 - 4", Some(-1)),
                                            ("5 * 6", Some(30)),
                                            ("7 / 8", Some(0)),
                                            ("9 % 10", Some(9)),
                                            ("2 * ( 1 + 4 / 2 )", Some(6)),
                                            ("1+1", Some(2)),
                                            ("1/0", None),
                                            ("10 % 0", None),
                                            ("0/1", Some(0))];

/// The outcome of one self-test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// The expression that was evaluated.
    pub expression: &'static str,
    /// The expected value, or `None` if an error was expected.
    pub expected:   Option<i64>,
    /// What evaluation actually produced.
    pub actual:     Result<Option<i64>, EvalError>,
}

impl CaseReport {
    /// Returns `true` if the actual outcome matches the expectation.
    #[must_use]
    pub fn passed(&self) -> bool {
        match (self.expected, &self.actual) {
            (Some(expected), Ok(Some(actual))) => expected == *actual,
            (None, Err(_)) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for CaseReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.passed() { "passed" } else { "FAILED" };
        let expected = self.expected
                           .map_or_else(|| "an error".to_string(), |v| v.to_string());
        match &self.actual {
            Ok(Some(value)) => {
                write!(f, "{verdict}: {} = {value} (expected {expected})", self.expression)
            },
            Ok(None) => write!(f, "{verdict}: {} produced no value (expected {expected})", self.expression),
            Err(e) => write!(f, "{verdict}: {} -> {e} (expected {expected})", self.expression),
        }
    }
}

/// Evaluates every entry of [`CASES`] against `context`.
///
/// # Examples
/// ```
/// use yardcalc::{Context, selftest};
///
/// let reports = selftest::run(&mut Context::new());
/// assert!(reports.iter().all(selftest::CaseReport::passed));
/// ```
pub fn run(context: &mut Context) -> Vec<CaseReport> {
    CASES.iter()
         .map(|&(expression, expected)| {
             let actual = context.evaluate(expression);
             tracing::debug!(expression, ?actual, "self-test case");
             CaseReport { expression,
                          expected,
                          actual }
         })
         .collect()
}

/// Lists the cases, then one verdict line per report.
///
/// # Examples
/// ```
/// use yardcalc::{Context, color::Palette, selftest};
///
/// let reports = selftest::run(&mut Context::new());
/// let mut output = Vec::new();
/// selftest::write_reports(&reports, &mut output, Palette::plain()).unwrap();
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.starts_with("Test Cases:\n  0 : 1 + 2\n"));
/// assert!(output.contains("passed: 1/0 -> "));
/// ```
pub fn write_reports<W: Write>(reports: &[CaseReport], output: &mut W, palette: Palette) -> io::Result<()> {
    writeln!(output, "{}", palette.paint(colors::DEBUG, "Test Cases:"))?;
    for (index, report) in reports.iter().enumerate() {
        writeln!(output,
                 "  {}{}{}",
                 palette.paint(colors::INFO, index),
                 palette.paint(colors::DEBUG, " : "),
                 palette.paint(colors::INFO, report.expression))?;
    }

    for report in reports {
        let color = if report.passed() { colors::SUCCESS } else { colors::ERROR };
        writeln!(output, "{}", palette.paint(color, report))?;
    }
    Ok(())
}
