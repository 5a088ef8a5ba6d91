/// The evaluator module computes the value of a normalized command.
///
/// The evaluator scans the command once, parsing and evaluating at the same
/// time with an operand stack, an operator stack and a stack of variable names
/// whose value is still being computed. No syntax tree is built.
///
/// # Responsibilities
/// - Applies the four arithmetic operators in the order fixed by the
///   parentheses.
/// - Binds `let` variables, including names referenced before their value is
///   known.
/// - Reports malformed bindings, unresolved variables and arithmetic failures.
pub mod evaluator;
/// The lexer module rewrites user input into the token form.
///
/// Uppercases the input, strips whitespace and replaces the keywords `ADD`,
/// `SUB`, `MULT`, `DIV` and `LET` with their single character tokens.
pub mod lexer;
/// The operator table.
///
/// Maps each operator to its token and keyword, and classifies token
/// characters.
pub mod operator;
/// The validator module rejects structurally invalid commands.
///
/// Checks for empty input, unbalanced parentheses, an invalid leading
/// operation and characters outside the token alphabet before anything is
/// evaluated.
pub mod validator;
