/// Integer arithmetic for the binary operators.
///
/// Implements `+ - * / %` with truncating division and explicit checks for
/// zero divisors and overflow.
pub mod arithmetic;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the postfix stack machine, assignment, and
/// the `evaluate` entry point that ties lexing, definition parsing and
/// conversion together.
pub mod core;

/// Function evaluation.
///
/// Handles the `<-` call operator: lookup, arity checking, and the
/// snapshot/restore of the variable map around the body.
pub mod function;
