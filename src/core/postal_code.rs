use crate::domain::model::NormalizedPostalCode;
use crate::utils::error::LookupError;
use regex::Regex;
use std::sync::LazyLock;

// ASCII classes on purpose: `\d` would also accept other Unicode digits.
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-?[0-9]{3}$").expect("postal code pattern is valid"));

/// Five digits, an optional hyphen, three digits. Surrounding whitespace is ignored.
pub fn is_valid_postal_code(input: &str) -> bool {
    POSTAL_CODE.is_match(input.trim())
}

/// Drops every character that is not an ASCII digit.
///
/// Only meaningful on input that passed [`is_valid_postal_code`].
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl NormalizedPostalCode {
    pub fn parse(input: &str) -> std::result::Result<Self, LookupError> {
        if !is_valid_postal_code(input) {
            return Err(LookupError::InvalidInput {
                input: input.to_string(),
            });
        }
        Ok(Self::new_unchecked(normalize(input)))
    }
}
