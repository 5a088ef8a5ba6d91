use tracing::debug;

use crate::{error::ValidationError, interpreter::operator::Operator};

/// Length of the shortest meaningful command, `+(1,2)`.
pub const MINIMAL_OPERATION: usize = 6;

/// Validates a normalized command before it is evaluated.
///
/// The checks run in order and the first failure is returned:
/// 1. the command is not empty,
/// 2. it contains parentheses and they are balanced,
/// 3. it starts with an operator token followed by `(`,
/// 4. every character belongs to the token alphabet.
///
/// Passing validation does not guarantee that evaluation succeeds; it only
/// rules out input the evaluator is not designed to scan.
///
/// # Errors
/// Returns the [`ValidationError`] of the first failing check.
///
/// # Example
/// ```
/// use letcalc::{error::ValidationError, interpreter::validator::validate};
///
/// assert!(validate("+(1,2)").is_ok());
/// assert_eq!(validate("  "), Err(ValidationError::EmptyCommand));
/// assert_eq!(validate("+(1,2))"),
///            Err(ValidationError::UnbalancedParentheses { position: 6 }));
/// ```
pub fn validate(command: &str) -> Result<(), ValidationError> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ValidationError::EmptyCommand);
    }

    check_parentheses(command)?;
    check_first_operation(command)?;
    check_characters(command)?;

    debug!("Successful validation");
    Ok(())
}

/// Checks that parentheses are present and that the running balance never
/// goes negative and ends at zero.
pub fn check_parentheses(command: &str) -> Result<(), ValidationError> {
    if !command.contains(['(', ')']) {
        return Err(ValidationError::MissingParentheses);
    }

    let mut balance = 0_usize;
    for (position, c) in command.chars().enumerate() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance = balance.checked_sub(1)
                                 .ok_or(ValidationError::UnbalancedParentheses { position })?;
            },
            _ => {},
        }
    }

    if balance == 0 {
        Ok(())
    } else {
        Err(ValidationError::UnbalancedParentheses { position: command.chars().count() })
    }
}

/// Checks that the command opens with one of the operator tokens and `(`.
pub fn check_first_operation(command: &str) -> Result<(), ValidationError> {
    let length = command.chars().count();
    if length < MINIMAL_OPERATION {
        return Err(ValidationError::CommandTooShort { length });
    }

    let mut chars = command.chars();
    let first = chars.next().and_then(Operator::classify);
    let second = chars.next();

    match (first, second) {
        (Some(_), Some('(')) => Ok(()),
        _ => Err(ValidationError::InvalidFirstOperation { found: command.chars()
                                                                     .take(2)
                                                                     .collect(), }),
    }
}

/// Checks that every character is a letter, a digit, a parenthesis, a comma,
/// the `-` prefix or an operator token.
pub fn check_characters(command: &str) -> Result<(), ValidationError> {
    match command.chars().enumerate().find(|(_, c)| !is_allowed(*c)) {
        Some((position, character)) => {
            Err(ValidationError::InvalidCharacter { character, position })
        },
        None => Ok(()),
    }
}

const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
    || matches!(c, '(' | ')' | ',')
    || c == Operator::Negate.symbol()
    || Operator::classify(c).is_some()
}
