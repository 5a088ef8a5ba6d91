/// Validation errors.
///
/// Defines all error types that can be raised while normalizing and validating
/// a command before it reaches the evaluator. Validation errors cover empty
/// input, unbalanced parentheses, an unknown leading operation and characters
/// outside the language's alphabet.
pub mod validation_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while scanning and evaluating a
/// normalized command. These include malformed `let` bindings, variables that
/// never receive a value, division by zero and integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use validation_error::ValidationError;
