/// Checked numeric helpers.
///
/// This module provides the digit accumulation used when scanning integer
/// literals. Every function reports overflow instead of wrapping, so a literal
/// that does not fit in an `i64` is surfaced as an error by the caller.
pub mod num;
