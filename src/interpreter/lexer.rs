use logos::Logos;
use tracing::debug;

use crate::{error::ValidationError, interpreter::operator::Operator};

/// A lexical token of the keyword form of a command.
///
/// The keyword form is the uppercased, whitespace-free text the user typed,
/// for example `LET(X,3,ADD(X,2))`. Keywords may repeat their final letter
/// (`ADDD` is still `ADD`); every other character is passed through as-is.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `ADD`, `SUB`, `MULT`, `DIV` or `LET`.
    #[regex("ADD+", |_| Operator::Add)]
    #[regex("SUB+", |_| Operator::Subtract)]
    #[regex("MULT+", |_| Operator::Multiply)]
    #[regex("DIV+", |_| Operator::Divide)]
    #[regex("LET+", |_| Operator::Let)]
    Keyword(Operator),
    /// Any single character that is not part of a keyword.
    #[regex(r".")]
    Character,
}

/// Rewrites raw user input into the token form the evaluator consumes.
///
/// The input is uppercased, stripped of all whitespace and checked to contain
/// only letters, digits, `,`, `(`, `)` and `-`. Keywords are then replaced by
/// their single character tokens.
///
/// # Errors
/// Returns [`ValidationError::InvalidCharacter`] if the keyword form contains
/// a character outside that set, including the tokens themselves.
///
/// # Example
/// ```
/// use letcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("let(x, 3, add(x, 2))").unwrap(), "#(X,3,+(X,2))");
/// assert_eq!(normalize("MULT(SUB(4,-1),DIV(8,2))").unwrap(), "*(_(4,-1),/(8,2))");
/// assert!(normalize("+(1,2)").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let command: String = raw.to_uppercase()
                             .chars()
                             .filter(|c| !c.is_whitespace())
                             .collect();
    debug!("Processed calculator command = {command}");

    check_keyword_characters(&command)?;

    let mut normalized = String::with_capacity(command.len());
    let mut lexer = Token::lexer(&command);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Keyword(op)) => normalized.push(op.symbol()),
            Ok(Token::Character) => normalized.push_str(lexer.slice()),
            Err(()) => {
                let position = lexer.span().start;
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ValidationError::InvalidCharacter { character, position });
            },
        }
    }

    debug!("Command with substituted operators = {normalized}");
    Ok(normalized)
}

/// Checks that the keyword form only uses characters a user may type.
fn check_keyword_characters(command: &str) -> Result<(), ValidationError> {
    match command.chars()
                 .enumerate()
                 .find(|(_, c)| !(c.is_ascii_alphanumeric() || matches!(c, ',' | '(' | ')' | '-')))
    {
        Some((position, character)) => {
            Err(ValidationError::InvalidCharacter { character, position })
        },
        None => Ok(()),
    }
}
