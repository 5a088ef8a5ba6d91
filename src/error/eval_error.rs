#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// A variable name was not followed by the character the grammar requires
    /// (a `,` in a `let` header, a `,` or `)` in a reference).
    InvalidArgument {
        /// The variable name, as far as it could be read.
        name:     String,
        /// Position of the offending character.
        position: usize,
    },
    /// One or more variables were referenced but never received a value.
    UnresolvedVariable {
        /// The unresolved variable names, sorted.
        names: Vec<String>,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Scan position of the `)` that triggered the division.
        position: usize,
    },
    /// The result of an operation does not fit in a signed 64-bit integer.
    Overflow {
        /// Scan position where the operation was applied.
        position: usize,
    },
    /// A numeric literal does not fit in a signed 64-bit integer.
    LiteralTooLarge {
        /// Position of the first digit of the literal.
        position: usize,
    },
    /// The scan ran past the end of the command. This indicates input that
    /// should have been rejected by validation.
    MalformedScan {
        /// The position the scan tried to read.
        position: usize,
    },
    /// A character outside the token alphabet reached the evaluator.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Position of the character in the command.
        position:  usize,
    },
    /// An operator had fewer operands than it needs, or nothing was left to
    /// return.
    MissingValue {
        /// Scan position where the value was needed.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument { name, position } => write!(f,
                                                               "Error at position {position}: Invalid argument for calculator after variable '{name}'."),
            Self::UnresolvedVariable { names } => write!(f,
                                                         "Error: Variables never assigned a value: {}.",
                                                         names.join(", ")),
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
            Self::MalformedScan { position } => write!(f,
                                                       "Error at position {position}: Unexpected end of input."),
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character '{character}'."),
            Self::MissingValue { position } => {
                write!(f, "Error at position {position}: Value missing.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
