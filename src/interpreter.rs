/// The converter module reorders infix tokens into postfix.
///
/// Implements the shunting-yard algorithm over the token stream produced by
/// the lexer, resolving operator precedence and parentheses so that the
/// evaluator never has to.
///
/// # Responsibilities
/// - Defines the precedence table, including the call operator `<-`.
/// - Produces postfix (Reverse-Polish) order with left associativity.
/// - Reports unbalanced parentheses.
pub mod converter;
/// The definition module recognises and stores user functions.
///
/// Lines shaped like `S[x] -> x * x` are picked out before expression
/// evaluation and turned into a `FunctionDef` that keeps the body source and a
/// lazily compiled postfix form.
pub mod definition;
/// The evaluator module executes postfix sequences and computes results.
///
/// The evaluator runs a single operand stack over the postfix tokens,
/// performs arithmetic, assignment and function calls, and manages variable
/// state. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Owns the `Context` with variables and functions.
/// - Applies operators with checked integer arithmetic.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source lines for further processing.
///
/// The lexer reads the raw text and produces a stream of tokens, each paired
/// with its column: integers, single-letter identifiers, operators,
/// parentheses and the call operator. It also applies the rule deciding when a
/// `-` belongs to a number literal.
///
/// # Responsibilities
/// - Converts the input character stream into `(Token, column)` pairs.
/// - Reports lexical errors for invalid characters or oversized literals.
pub mod lexer;
/// The value module defines operands on the evaluator stack.
///
/// An operand is either a number or a not yet resolved variable reference.
pub mod value;
