//! Form validators.
//!
//! Pure predicates over the input buffers of the screen being submitted.
//! The transition table calls them before committing a step; none of them
//! has side effects.

use chrono::NaiveDate;

use crate::session::OtpDigits;

/// Number of digits in a formatted `DD-MM-YYYY` date.
const DATE_DIGITS: usize = 8;

/// `true` when `s` has at least one non-whitespace character.
pub fn non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// `true` when every field is [`non_empty`].
pub fn all_non_empty(fields: &[&str]) -> bool {
    fields.iter().all(|f| non_empty(f))
}

/// Exact comparison; no trimming or case folding.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// `true` for the empty string or a single character (one OTP slot).
pub fn single_char_or_empty(s: &str) -> bool {
    s.chars().nth(1).is_none()
}

/// `true` when all four OTP slots are filled.
pub fn otp_complete(digits: &OtpDigits) -> bool {
    digits.is_complete()
}

pub fn positive_quantity(quantity: u32) -> bool {
    quantity >= 1
}

/// Format a date field as the user types it.
///
/// Non-digits are dropped, a `-` is inserted after the day and the month,
/// and anything past eight digits is cut off:
///
/// ```
/// use foodshare_flow::validators::format_date_input;
///
/// assert_eq!(format_date_input("2512"), "25-12");
/// assert_eq!(format_date_input("25122026"), "25-12-2026");
/// assert_eq!(format_date_input("25-12-20269"), "25-12-2026");
/// ```
pub fn format_date_input(raw: &str) -> String {
    let mut out = String::with_capacity(DATE_DIGITS + 2);
    for (i, c) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(DATE_DIGITS)
        .enumerate()
    {
        if i == 2 || i == 4 {
            out.push('-');
        }
        out.push(c);
    }
    out
}

/// Parse a fully formatted `DD-MM-YYYY` expiry date.
///
/// Partially typed or malformed input (including calendar-invalid dates
/// such as `31-02-2026`) yields `None`.
pub fn parse_expiry_date(s: &str) -> Option<NaiveDate> {
    if s.len() != DATE_DIGITS + 2 || format_date_input(s) != s {
        return None;
    }
    NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
}
