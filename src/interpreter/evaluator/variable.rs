use std::collections::HashMap;

/// The resolution state of a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableState {
    /// The name has not been mentioned yet.
    Unseen,
    /// The name was mentioned but its defining expression has not produced a
    /// value yet.
    PendingDefinition,
    /// The name has a value.
    Assigned(i64),
}

/// Maps variable names to their resolution state.
///
/// Entries are created lazily on first mention. There is a single flat
/// namespace per evaluation; assigning a name again overwrites it.
#[derive(Debug, Default)]
pub struct VariableTable {
    states: HashMap<String, VariableState>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of `name`, [`VariableState::Unseen`] if it was never
    /// mentioned.
    ///
    /// # Example
    /// ```
    /// use letcalc::interpreter::evaluator::variable::{VariableState, VariableTable};
    ///
    /// let mut table = VariableTable::new();
    /// assert_eq!(table.state("X"), VariableState::Unseen);
    ///
    /// table.mark_pending("X");
    /// assert_eq!(table.state("X"), VariableState::PendingDefinition);
    ///
    /// table.assign("X", 3);
    /// assert_eq!(table.state("X"), VariableState::Assigned(3));
    /// ```
    #[must_use]
    pub fn state(&self, name: &str) -> VariableState {
        self.states.get(name).copied().unwrap_or(VariableState::Unseen)
    }

    /// Binds `name` to `value`.
    pub fn assign(&mut self, name: &str, value: i64) {
        self.states.insert(name.to_string(), VariableState::Assigned(value));
    }

    /// Records that `name` is waiting for its value.
    pub fn mark_pending(&mut self, name: &str) {
        self.states.insert(name.to_string(), VariableState::PendingDefinition);
    }

    /// Returns the sorted names of all variables that never received a value.
    #[must_use]
    pub fn unresolved(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.states
                .iter()
                .filter(|(_, state)| matches!(state, VariableState::PendingDefinition))
                .map(|(name, _)| name.clone())
                .collect();
        names.sort();
        names
    }
}
