use tracing::{debug, error, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            utils::{is_digit_char, is_name_char},
            variable::VariableTable,
        },
        operator::Operator,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// An arithmetic operator waiting for its operands.
    Operator(Operator),
    /// An open parenthesis. It only marks structure and carries no operands.
    OpenParen,
    /// The `(` of a `let` binding. Its matching `)` only discards it, since
    /// no operator belongs to the binding itself.
    LetParen,
}

/// The state of a single evaluation.
///
/// The scan reads the command once from left to right and evaluates it as it
/// goes, without building a syntax tree. Every helper leaves `cursor` on the
/// last character it consumed; the main loop then advances by one.
///
/// ## Let bindings
///
/// `let_depth` counts the parentheses opened inside the value of the
/// currently open `let` (the `let`'s own parenthesis is not counted), so the
/// reduction of the value's outermost operator happens at depth zero and is
/// assigned to the name on top of `pending_names` instead of being pushed.
/// `complex_let` is set while that value is a compound expression. The
/// `let`'s own `(` is pushed as [`Pending::LetParen`]; when it is on top of the
/// operator stack at a `)`, that `)` closes the binding and reduces nothing.
#[derive(Debug)]
pub struct ScanState {
    /// The normalized command.
    pub(crate) command:       Vec<char>,
    /// Position of the character being processed.
    pub(crate) cursor:        usize,
    /// Values awaiting an operator.
    pub(crate) operands:      Vec<i64>,
    /// Operators and open parentheses not yet applied.
    pub(crate) operators:     Vec<Pending>,
    /// Names whose defining sub-expression is still being evaluated.
    pub(crate) pending_names: Vec<String>,
    /// Every variable mentioned so far.
    pub(crate) variables:     VariableTable,
    /// Number of mentioned variables still waiting for a value.
    pub(crate) unassigned:    usize,
    /// Whether a `let` value scope is open.
    pub(crate) open_let:      bool,
    /// Parentheses still open inside the current `let` value scope.
    pub(crate) let_depth:     usize,
    /// Whether the current `let` value is a compound expression.
    pub(crate) complex_let:   bool,
    /// Whether the next literal is negative.
    pub(crate) negate:        bool,
}

impl ScanState {
    /// Creates the state for evaluating `command`.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self { command:       command.chars().collect(),
               cursor:        0,
               operands:      Vec::new(),
               operators:     Vec::new(),
               pending_names: Vec::new(),
               variables:     VariableTable::new(),
               unassigned:    0,
               open_let:      false,
               let_depth:     0,
               complex_let:   false,
               negate:        false, }
    }

    /// Scans the whole command, updating the stacks as each character is
    /// processed.
    ///
    /// # Errors
    /// Returns the first error raised by any of the helpers.
    pub fn scan(&mut self) -> EvalResult<()> {
        while self.cursor < self.command.len() {
            let c = self.command[self.cursor];
            match c {
                ',' => {},
                '(' => self.open_paren(),
                ')' => self.close_paren()?,
                c if c == Operator::Negate.symbol() => self.negate = true,
                c if is_digit_char(c) => self.push_literal()?,
                c if is_name_char(c) => self.resolve_variable()?,
                c => match Operator::classify(c) {
                    Some(Operator::Let) => {
                        self.open_let = true;
                        self.process_let()?;
                    },
                    Some(op) => self.push_operator(op),
                    None => {
                        return Err(EvalError::UnexpectedCharacter { character: c,
                                                                    position:  self.cursor, });
                    },
                },
            }
            self.cursor += 1;
        }

        Ok(())
    }

    /// Checks that every variable was resolved and reduces what is left on
    /// the stacks.
    ///
    /// # Errors
    /// - [`EvalError::UnresolvedVariable`] if a variable never got a value.
    /// - [`EvalError::MissingValue`] if no operand is left.
    /// - Any arithmetic error raised by the final reductions.
    pub fn finish(mut self) -> EvalResult<i64> {
        let names = self.variables.unresolved();
        if !names.is_empty() {
            error!("Missing variables not assigned: {names:?}");
            return Err(EvalError::UnresolvedVariable { names });
        }

        self.drain()?;

        self.operands
            .pop()
            .ok_or(EvalError::MissingValue { position: self.cursor })
    }

    /// Parses the literal under the cursor and pushes it onto the operand
    /// stack, consuming a pending unary minus.
    fn push_literal(&mut self) -> EvalResult<()> {
        let start = self.cursor;
        let end = self.run_end(start, is_digit_char);
        let value = self.literal(start, end, self.negate)?;

        self.negate = false;
        self.operands.push(value);
        trace!("Number stack push = {value}");

        self.cursor = end - 1;
        Ok(())
    }
}

/// Evaluates a normalized command and returns its value.
///
/// The command must use the single character tokens (`+ _ * / #`) and should
/// have passed [`validate`](crate::interpreter::validator::validate). Each
/// call owns its own state; nothing is shared between calls. An empty command
/// evaluates to `0`.
///
/// # Errors
/// - [`EvalError::InvalidArgument`] if a variable name is not followed by the
///   expected separator.
/// - [`EvalError::UnresolvedVariable`] if a variable never receives a value.
/// - [`EvalError::DivisionByZero`] and [`EvalError::Overflow`] for arithmetic
///   failures.
/// - [`EvalError::MalformedScan`] if the scan runs past the end of the input.
///
/// # Example
/// ```
/// use letcalc::{error::EvalError, interpreter::evaluator::core::evaluate};
///
/// assert_eq!(evaluate("+(1,*(2,3))").unwrap(), 7);
/// assert_eq!(evaluate("#(X,3,+(X,2))").unwrap(), 5);
/// assert_eq!(evaluate("#(X,+(1,2),X)").unwrap(), 3);
/// assert_eq!(evaluate("/(5,0)"), Err(EvalError::DivisionByZero { position: 5 }));
/// ```
pub fn evaluate(command: &str) -> EvalResult<i64> {
    if command.is_empty() {
        debug!("Input string is empty");
        return Ok(0);
    }

    let mut state = ScanState::new(command);
    state.scan()?;
    state.finish()
}
