//! # yardcalc
//!
//! yardcalc is an integer calculator written in Rust.
//! It tokenizes a line, converts it to postfix with the shunting-yard
//! algorithm and evaluates it against a context holding single-letter
//! variables and single-parameter functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// ANSI colors for console output and the switch that turns them off.
pub mod color;
/// Provides unified error types for lexing, conversion and evaluation.
///
/// This module defines all errors that can be raised while processing a line.
/// Every error carries the column of the token that caused it, and
/// `EvalError::kind` maps it onto a small set of categories for display.
///
/// # Responsibilities
/// - Defines error enums for both phases (parse and runtime).
/// - Attaches columns and detailed messages for context.
/// - Integrates with `std::error::Error` for `?` and boxing.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, function-definition parsing, postfix
/// conversion and evaluation.
pub mod interpreter;
/// Command parsing and the interactive loop.
pub mod repl;
/// Line-by-line evaluation of script files.
pub mod script;
/// Built-in sanity cases that can be run from the command line.
pub mod selftest;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::core::Context;
pub use script::run_script;
