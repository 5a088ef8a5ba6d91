/// Scan state and the main evaluation loop.
///
/// Owns the operand, operator and pending-variable stacks together with the
/// variable table for a single call to [`core::evaluate`].
pub mod core;

/// The two-phase variable binding protocol.
///
/// Handles `let` headers and variable references, including names that are
/// referenced before their defining sub-expression has been evaluated.
pub mod binding;

/// Reductions of the operand stack.
///
/// Applies operators when a parenthesis closes and drains the remaining stacks
/// at the end of the scan.
pub mod reduce;

/// Variable bookkeeping.
///
/// Tracks whether each variable is still waiting for its value or already
/// assigned.
pub mod variable;

/// Cursor helpers shared by the scan.
pub mod utils;
