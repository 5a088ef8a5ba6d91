/// The operators of the calculator language.
///
/// Every keyword operator is rewritten to a single character token before
/// evaluation; `Negate` only exists as the `-` prefix of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `ADD`, token `+`.
    Add,
    /// `SUB`, token `_`.
    Subtract,
    /// `MULT`, token `*`.
    Multiply,
    /// `DIV`, token `/`.
    Divide,
    /// `LET`, token `#`.
    Let,
    /// Unary minus marker `-`.
    Negate,
}

impl Operator {
    /// All operators that have a keyword form.
    pub const KEYWORDS: [Self; 5] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide, Self::Let];

    /// Returns the single character token of the operator.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Subtract.symbol(), '_');
    /// assert_eq!(Operator::Negate.symbol(), '-');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '_',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Let => '#',
            Self::Negate => '-',
        }
    }

    /// Returns the keyword users write for the operator, if it has one.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Add => Some("ADD"),
            Self::Subtract => Some("SUB"),
            Self::Multiply => Some("MULT"),
            Self::Divide => Some("DIV"),
            Self::Let => Some("LET"),
            Self::Negate => None,
        }
    }

    /// Classifies a token character.
    ///
    /// Only the five keyword operators are recognized. Everything else,
    /// including the `-` prefix, is `None` and left to the caller to interpret
    /// as part of a literal or a variable name.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::classify('#'), Some(Operator::Let));
    /// assert_eq!(Operator::classify('-'), None);
    /// assert_eq!(Operator::classify('x'), None);
    /// ```
    #[must_use]
    pub const fn classify(token: char) -> Option<Self> {
        match token {
            '+' => Some(Self::Add),
            '_' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '#' => Some(Self::Let),
            _ => None,
        }
    }

    /// Returns `true` for the four binary arithmetic operators.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Subtract | Self::Multiply | Self::Divide)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
