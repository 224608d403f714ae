//! Identity field validation utilities
//!
//! All checks are pure predicates returning `bool`; the registry is
//! responsible for mapping failures onto `RegistryError` variants.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols accepted (and required, at least one) by the password policy
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Regex pattern for email shape: `local@domain.tld`, where local and
/// domain exclude whitespace and `@`, and the domain carries at least one
/// dot with a non-empty trailing segment
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Regex pattern for the tax ID literal format `DDD.DDD.DDD-DD`
static TAX_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap());

/// Check the shape of an email address
///
/// No DNS or mailbox verification, just the `local@domain.tld` structure.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check a password against the complexity policy
///
/// Rules:
/// - Minimum 8 characters
/// - At least one lowercase letter, one uppercase letter, one digit, and
///   one symbol from `@$!%*?&`
/// - No character outside `[A-Za-z0-9@$!%*?&]`
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in password.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        } else if PASSWORD_SYMBOLS.contains(c) {
            has_symbol = true;
        } else {
            return false;
        }
    }

    has_lower && has_upper && has_digit && has_symbol
}

/// Check that a tax ID matches the literal format `DDD.DDD.DDD-DD`
pub fn has_tax_id_format(tax_id: &str) -> bool {
    TAX_ID_PATTERN.is_match(tax_id)
}

/// Check a tax ID against the CPF check-digit algorithm
///
/// Punctuation is stripped first, so both formatted and bare inputs are
/// accepted; exactly 11 digits must remain. Known-invalid sequences are
/// rejected before the arithmetic: the ten all-identical CPFs and the
/// ascending `12345678909`, all of which satisfy the check digits but are
/// not issuable.
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    let digits: Vec<u32> = tax_id.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    if digits == [1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9] {
        return false;
    }

    check_digit(&digits, 9) == digits[9] && check_digit(&digits, 10) == digits[10]
}

/// Compute the CPF check digit over the first `len` digits
///
/// Digits are weighted by descending factors from `len + 1` down to 2; the
/// weighted sum times ten, mod 11, gives the digit, with 10 coerced to 0.
fn check_digit(digits: &[u32], len: usize) -> u32 {
    let sum: u32 = digits[..len]
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (len as u32 + 1 - i as u32))
        .sum();

    let result = (sum * 10) % 11;

    if result >= 10 { 0 } else { result }
}
