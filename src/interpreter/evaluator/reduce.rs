use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Pending, ScanState},
        operator::Operator,
    },
};

impl ScanState {
    /// Pushes an open parenthesis, counting it if a `let` value scope is open.
    pub fn open_paren(&mut self) {
        if self.open_let {
            self.let_depth += 1;
        }
        self.operators.push(Pending::OpenParen);
        trace!("Operators stack push: (");
    }

    /// Pushes an arithmetic operator. Precedence never needs to be compared
    /// because every operation is explicitly parenthesized.
    pub fn push_operator(&mut self, op: Operator) {
        self.operators.push(Pending::Operator(op));
        trace!("Operators stack push: {op}");
    }

    /// Handles a closing parenthesis.
    ///
    /// Inside a `let` value scope the depth is decremented first; reaching
    /// zero closes the scope. If the closed value was a compound expression
    /// and no name is waiting for a value any more, the parenthesis needs no
    /// further work. A `)` that finds a [`Pending::LetParen`] on top of the
    /// operator stack closes that binding: the marker is discarded and nothing
    /// is reduced, so an enclosing operator keeps waiting for its remaining
    /// operands.
    ///
    /// Otherwise, when more than one operand is on the stack, parenthesis
    /// markers are discarded down to the nearest operator, which is applied to
    /// the two topmost operands. Outside of any `let` value scope, the result
    /// is assigned to the topmost pending name if there is one, and pushed
    /// back onto the operand stack otherwise.
    ///
    /// # Errors
    /// Returns any error raised by [`apply_operator`](Self::apply_operator).
    pub fn close_paren(&mut self) -> EvalResult<()> {
        if self.open_let {
            self.let_depth = self.let_depth.saturating_sub(1);
            if self.let_depth == 0 {
                self.open_let = false;
                if self.complex_let {
                    self.complex_let = false;
                    if self.pending_names.is_empty() {
                        trace!("LET value scope closed");
                        return Ok(());
                    }
                }
            }
        }

        if let Some(Pending::LetParen) = self.operators.last() {
            self.operators.pop();
            trace!("LET binding closed");
            return Ok(());
        }

        if self.operands.len() <= 1 {
            return Ok(());
        }

        while let Some(Pending::OpenParen | Pending::LetParen) = self.operators.last() {
            self.operators.pop();
        }

        let Some(Pending::Operator(op)) = self.operators.pop() else {
            return Ok(());
        };
        let result = self.reduce(op)?;

        if self.let_depth == 0
           && let Some(name) = self.pending_names.pop()
        {
            self.variables.assign(&name, result);
            self.unassigned = self.unassigned.saturating_sub(1);
            debug!("Result {result} assigned to variable {name}");
        } else {
            self.operands.push(result);
            debug!("Operation result = {result} was pushed to numbers stack");
        }

        Ok(())
    }

    /// Reduces whatever is left on the stacks after the scan.
    ///
    /// Operators are applied while more than one operand remains.
    /// Parenthesis markers are discarded.
    ///
    /// # Errors
    /// Returns any error raised by [`apply_operator`](Self::apply_operator).
    pub fn drain(&mut self) -> EvalResult<()> {
        while self.operands.len() > 1 {
            match self.operators.pop() {
                Some(Pending::Operator(op)) => {
                    let result = self.reduce(op)?;
                    self.operands.push(result);
                    trace!("Number stack push = {result}");
                },
                Some(Pending::OpenParen | Pending::LetParen) => {},
                None => break,
            }
        }

        Ok(())
    }

    /// Pops the two topmost operands and applies `op` to them. The first value
    /// popped is the right operand.
    fn reduce(&mut self, op: Operator) -> EvalResult<i64> {
        let position = self.cursor;
        let right = self.operands
                        .pop()
                        .ok_or(EvalError::MissingValue { position })?;
        let left = self.operands
                       .pop()
                       .ok_or(EvalError::MissingValue { position })?;

        Self::apply_operator(op, left, right, position)
    }

    /// Applies a binary arithmetic operator with checked 64-bit arithmetic.
    ///
    /// Division truncates toward zero.
    ///
    /// # Parameters
    /// - `op`: The operator; must be one of `Add`, `Subtract`, `Multiply` or
    ///   `Divide`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Scan position for error reporting.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] if dividing by zero.
    /// - [`EvalError::Overflow`] if the result does not fit in an `i64`.
    /// - [`EvalError::UnexpectedCharacter`] if `op` is not arithmetic.
    ///
    /// # Example
    /// ```
    /// use letcalc::{
    ///     error::EvalError,
    ///     interpreter::{evaluator::core::ScanState, operator::Operator},
    /// };
    ///
    /// assert_eq!(ScanState::apply_operator(Operator::Subtract, 10, 4, 0), Ok(6));
    /// assert_eq!(ScanState::apply_operator(Operator::Divide, -7, 2, 0), Ok(-3));
    /// assert_eq!(ScanState::apply_operator(Operator::Divide, 1, 0, 3),
    ///            Err(EvalError::DivisionByZero { position: 3 }));
    /// ```
    pub fn apply_operator(op: Operator,
                          left: i64,
                          right: i64,
                          position: usize)
                          -> EvalResult<i64> {
        debug!("Operation: {op}, first operand: {left}, second operand: {right}");

        let result = match op {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.checked_div(right)
            },
            Operator::Let | Operator::Negate => {
                return Err(EvalError::UnexpectedCharacter { character: op.symbol(),
                                                            position });
            },
        };

        result.ok_or(EvalError::Overflow { position })
    }
}
