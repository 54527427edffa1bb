//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that starts every international phone number
pub const INTERNATIONAL_PREFIX: char = '+';

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"));

/// Check whether a number already carries the international prefix
pub fn has_international_prefix(phone: &str) -> bool {
    phone.starts_with(INTERNATIONAL_PREFIX)
}

/// Prepend `country_code` unless the number already starts with '+'
///
/// The number is otherwise passed through as given: no digits are stripped
/// or reformatted.
pub fn with_default_country_code(phone: &str, country_code: &str) -> String {
    if has_international_prefix(phone) {
        phone.to_string()
    } else {
        format!("{}{}", country_code, phone)
    }
}

/// Check if a phone number is in strict E.164 format
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logging (e.g., +91****3210)
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
