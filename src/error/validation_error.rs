#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while normalizing or validating input.
pub enum ValidationError {
    /// The command is empty or only contains whitespace.
    EmptyCommand,
    /// The command contains no parentheses at all.
    MissingParentheses,
    /// A closing parenthesis has no matching opening parenthesis, or an
    /// opening parenthesis is never closed.
    UnbalancedParentheses {
        /// Position of the first offending parenthesis, or the length of the
        /// command when an opening parenthesis was left unclosed.
        position: usize,
    },
    /// The command is shorter than the smallest meaningful operation.
    CommandTooShort {
        /// The length of the normalized command.
        length: usize,
    },
    /// The command does not start with an operator followed by `(`.
    InvalidFirstOperation {
        /// The leading characters that were found instead.
        found: String,
    },
    /// A character outside the language's alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Position of the character in the command.
        position:  usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => write!(f, "Invalid input: The command is empty."),
            Self::MissingParentheses => {
                write!(f, "Invalid input: The command contains no parentheses.")
            },
            Self::UnbalancedParentheses { position } => write!(f,
                                                               "Invalid input at position {position}: Parentheses are not balanced."),
            Self::CommandTooShort { length } => write!(f,
                                                       "Invalid input: A command of {length} characters is too short to be an operation."),
            Self::InvalidFirstOperation { found } => write!(f,
                                                            "Invalid input: Expected ADD, SUB, MULT, DIV or LET followed by '(' but found '{found}'."),
            Self::InvalidCharacter { character, position } => write!(f,
                                                                     "Invalid input at position {position}: Character '{character}' is not allowed."),
        }
    }
}

impl std::error::Error for ValidationError {}
