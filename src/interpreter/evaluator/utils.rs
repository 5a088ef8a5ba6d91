use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, ScanState},
    util::num::digits_to_i64,
};

impl ScanState {
    /// Returns the character at `position`.
    ///
    /// Reading past the end of the command means the input was malformed in a
    /// way validation did not catch, and is reported as
    /// [`EvalError::MalformedScan`].
    pub(crate) fn char_at(&self, position: usize) -> EvalResult<char> {
        self.command
            .get(position)
            .copied()
            .ok_or(EvalError::MalformedScan { position })
    }

    /// Returns the position one past the maximal run starting at `start` whose
    /// characters all satisfy `predicate`.
    pub(crate) fn run_end(&self, start: usize, predicate: impl Fn(char) -> bool) -> usize {
        self.command
            .get(start..)
            .map_or(start, |rest| {
                start + rest.iter().take_while(|c| predicate(**c)).count()
            })
    }

    /// Collects the characters in `start..end` into a variable name.
    pub(crate) fn slice(&self, start: usize, end: usize) -> String {
        self.command
            .get(start..end)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    /// Parses the digit run `start..end` into a literal.
    pub(crate) fn literal(&self, start: usize, end: usize, negative: bool) -> EvalResult<i64> {
        let digits = self.command.get(start..end).unwrap_or_default();
        digits_to_i64(digits.iter().copied(),
                      negative,
                      EvalError::LiteralTooLarge { position: start })
    }
}

/// Returns `true` for characters that may appear in a variable name.
pub(crate) const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` for characters that may appear in a numeric literal.
pub(crate) const fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}
