use tracing::{debug, error};

use crate::{
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Pending, ScanState},
        utils::{is_digit_char, is_name_char},
        variable::VariableState,
    },
};

impl ScanState {
    /// Processes the header of a `let` binding, with the cursor on the `let`
    /// token.
    ///
    /// The header is `(NAME,` followed by the value. The `let`'s own `(` is
    /// pushed onto the operator stack as [`Pending::LetParen`] but not counted
    /// in `let_depth`. The name
    /// must be followed by a comma.
    ///
    /// - A literal value (optionally negative) is assigned at once and the
    ///   cursor is left on its last digit.
    /// - Any other value is a sub-expression. The name is marked pending and
    ///   pushed onto `pending_names`, and the cursor is left on the comma so
    ///   that the main loop scans the sub-expression normally. Its value is
    ///   assigned when its outermost operator is reduced, see
    ///   [`close_paren`](Self::close_paren).
    ///
    /// # Errors
    /// - [`EvalError::InvalidArgument`] if the name is empty or not followed
    ///   by a comma.
    /// - [`EvalError::MalformedScan`] if the header runs past the end of the
    ///   command.
    /// - [`EvalError::LiteralTooLarge`] if a literal value overflows.
    pub fn process_let(&mut self) -> EvalResult<()> {
        self.unassigned += 1;
        debug!("LET operator to assign value to variable begins");

        let mut position = self.cursor + 1;
        if self.char_at(position)? == '(' {
            self.operators.push(Pending::LetParen);
            position += 1;
        }

        let name_end = self.run_end(position, is_name_char);
        let name = self.slice(position, name_end);
        debug!("Variable name = {name}");

        if name.is_empty() || self.char_at(name_end)? != ',' {
            error!("Invalid argument for calculator after variable '{name}'");
            return Err(EvalError::InvalidArgument { name,
                                                    position: name_end, });
        }

        let comma = name_end;
        let mut value_start = comma + 1;
        let negative = self.char_at(value_start)? == '-';
        if negative {
            value_start += 1;
        }

        if is_digit_char(self.char_at(value_start)?) {
            let value_end = self.run_end(value_start, is_digit_char);
            let value = self.literal(value_start, value_end, negative)?;
            self.assign_literal(name, value);
            self.cursor = value_end - 1;
        } else {
            self.variables.mark_pending(&name);
            debug!("Variable {name} not assigned. Pushed to pending names");
            self.pending_names.push(name);
            self.complex_let = true;
            self.cursor = comma;
        }

        Ok(())
    }

    /// Resolves the variable reference under the cursor.
    ///
    /// The name must be followed by `,` or `)`. Resolution is checked in
    /// order:
    ///
    /// 1. An assigned name pushes its value onto the operand stack.
    /// 2. If exactly one operand is on the stack and some variable is still
    ///    waiting for a value, that operand is the value of this name. It is
    ///    assigned without being popped, and the top pending name is dropped.
    ///    This is how a `let` whose body is just its own name, or a name bound
    ///    to the result of a nested `let`, gets its value. It relies on the
    ///    language guaranteeing that the defining expression has reduced to a
    ///    single operand right before the reference is scanned, and can pick
    ///    the wrong value when several unrelated bindings are pending at once.
    /// 3. Otherwise the name is marked pending, to be assigned when its
    ///    defining expression is reduced.
    ///
    /// The cursor is left on the last letter of the name.
    ///
    /// # Errors
    /// - [`EvalError::InvalidArgument`] if the name is followed by anything
    ///   other than `,` or `)`.
    /// - [`EvalError::MalformedScan`] if the name ends the command.
    pub fn resolve_variable(&mut self) -> EvalResult<()> {
        let start = self.cursor;
        let end = self.run_end(start, is_name_char);
        let name = self.slice(start, end);

        if !matches!(self.char_at(end)?, ',' | ')') {
            error!("Invalid argument for calculator after variable '{name}'");
            return Err(EvalError::InvalidArgument { name, position: end });
        }

        match self.variables.state(&name) {
            VariableState::Assigned(value) => {
                self.operands.push(value);
                debug!("Variable {name} resolved, number stack push = {value}");
            },
            _ if self.operands.len() == 1 && self.unassigned > 0 => {
                let value = self.operands[0];
                self.variables.assign(&name, value);
                self.pending_names.pop();
                self.unassigned -= 1;
                debug!("Only one number left in stack, variable assigned. {name} = {value}");
            },
            _ => {
                self.variables.mark_pending(&name);
                self.unassigned += 1;
                debug!("Variable {name} not assigned yet");
            },
        }

        self.cursor = end - 1;
        Ok(())
    }

    /// Assigns the literal value of a `let` header.
    fn assign_literal(&mut self, name: String, value: i64) {
        self.variables.assign(&name, value);
        if self.pending_names.last() == Some(&name) {
            self.pending_names.pop();
        }
        self.unassigned = self.unassigned.saturating_sub(1);
        debug!("Variable assigned. {name} = {value}");
    }
}
