/// Appends one decimal digit to an accumulated literal.
///
/// ## Parameters
/// - `value`: The literal accumulated so far.
/// - `digit`: The next digit character.
///
/// ## Returns
/// - `Some(i64)`: `value * 10 + digit`.
/// - `None`: If `digit` is not an ASCII digit or the result overflows.
///
/// ## Example
/// ```
/// use letcalc::util::num::append_digit;
///
/// assert_eq!(append_digit(12, '3'), Some(123));
/// assert_eq!(append_digit(i64::MAX, '0'), None);
/// assert_eq!(append_digit(1, 'x'), None);
/// ```
#[must_use]
pub fn append_digit(value: i64, digit: char) -> Option<i64> {
    let digit = digit.to_digit(10)?;
    value.checked_mul(10)?.checked_add(i64::from(digit))
}

/// Accumulates a run of decimal digits into a signed literal.
///
/// ## Errors
/// Returns `Err(error)` if the run is empty, contains a non-digit or overflows.
///
/// ## Parameters
/// - `digits`: The digit characters, most significant first.
/// - `negative`: Whether the literal was preceded by a unary minus.
/// - `error`: The error to return if the literal cannot be represented.
///
/// ## Example
/// ```
/// use letcalc::util::num::digits_to_i64;
///
/// assert_eq!(digits_to_i64(['4', '2'], false, "bad"), Ok(42));
/// assert_eq!(digits_to_i64(['7'], true, "bad"), Ok(-7));
/// assert_eq!(digits_to_i64([], false, "bad"), Err("bad"));
/// ```
pub fn digits_to_i64<I, E>(digits: I, negative: bool, error: E) -> Result<i64, E>
    where I: IntoIterator<Item = char>
{
    let mut value = 0_i64;
    let mut seen = false;

    for digit in digits {
        let Some(next) = append_digit(value, digit) else {
            return Err(error);
        };
        value = next;
        seen = true;
    }

    if !seen {
        return Err(error);
    }

    Ok(if negative { -value } else { value })
}
