//! # letcalc
//!
//! letcalc is an integer expression calculator written in Rust.
//! It evaluates fully parenthesized prefix expressions such as
//! `LET(a, 5, MULT(a, ADD(a, 1)))`, with addition, subtraction,
//! multiplication, truncating division and `let` bindings.

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

use tracing::debug;

use crate::interpreter::{evaluator::core::evaluate, lexer::normalize, validator::validate};

/// Provides unified error types for validation and evaluation.
///
/// This module defines all errors that can be raised while normalizing,
/// validating or evaluating a command. Every error carries enough context,
/// usually the position in the normalized command, to explain the failure.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (validation, evaluation).
/// - Implements `Display` with user facing messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a command.
///
/// This module ties together the operator table, keyword lexer, validator and
/// evaluator.
///
/// # Responsibilities
/// - Rewrites keyword input into single character tokens.
/// - Rejects structurally invalid commands.
/// - Evaluates commands, including `let` bindings.
pub mod interpreter;
/// Log level configuration and subscriber setup for the binary.
pub mod logging;
/// General utilities for checked numeric conversion.
///
/// # Responsibilities
/// - Accumulate decimal literals without silent overflow.
pub mod util;

/// Returns the value of a command written in keyword form.
///
/// The command is normalized (uppercased, whitespace removed, keywords
/// replaced by tokens), validated and then evaluated.
///
/// # Errors
/// Returns a [`ValidationError`](error::ValidationError) if the command is
/// structurally invalid, or an [`EvalError`](error::EvalError) if evaluation
/// fails. Downcast the boxed error to tell them apart.
///
/// # Examples
/// ```
/// use letcalc::get_result;
///
/// assert_eq!(get_result("add(1, mult(2, 3))").unwrap(), 7);
/// assert_eq!(get_result("LET(a, 5, LET(b, MULT(a, 10), ADD(b, a)))").unwrap(), 55);
///
/// // Unbalanced parentheses are rejected before evaluation.
/// assert!(get_result("add(1, 2").is_err());
///
/// // `x` is never assigned.
/// assert!(get_result("add(x, 2)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let command = normalize(source)?;
    validate(&command)?;

    let result = evaluate(&command)?;
    debug!("Command {command} evaluated to {result}");

    Ok(result)
}
