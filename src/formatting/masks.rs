//! Display masks for Brazilian document and contact numbers
//!
//! Each mask counts the digits of its input. When the count matches the
//! mask's exact length the digits are rendered in the masked layout;
//! otherwise the input is returned unchanged, whether it is too short or
//! too long.

/// Keeps only the ASCII digits of `value`
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Fills `pattern` with `digits`, one `#` per digit
///
/// The caller guarantees that `digits` has as many characters as `pattern`
/// has `#` placeholders.
fn apply_mask(digits: &str, pattern: &str) -> String {
    let mut digits = digits.chars();
    pattern
        .chars()
        .map(|slot| match slot {
            '#' => digits.next().unwrap_or(slot),
            literal => literal,
        })
        .collect()
}

fn mask_exact(value: &str, len: usize, pattern: &str) -> String {
    let digits = strip_non_digits(value);
    if digits.len() == len {
        apply_mask(&digits, pattern)
    } else {
        value.to_string()
    }
}

/// Formats a CEP as `NNNNN-NNN`
///
/// # Examples
/// ```
/// use cep_lookup::formatting::format_postal_code;
/// assert_eq!(format_postal_code("01310100"), "01310-100");
/// assert_eq!(format_postal_code("0131"), "0131");
/// ```
pub fn format_postal_code(value: &str) -> String {
    mask_exact(value, 8, "#####-###")
}

/// Formats a CPF as `NNN.NNN.NNN-NN`
pub fn format_tax_id(value: &str) -> String {
    mask_exact(value, 11, "###.###.###-##")
}

/// Formats a landline (10 digits) or mobile (11 digits) number with its area code
pub fn format_phone(value: &str) -> String {
    let digits = strip_non_digits(value);
    match digits.len() {
        10 => apply_mask(&digits, "(##) ####-####"),
        11 => apply_mask(&digits, "(##) #####-####"),
        _ => value.to_string(),
    }
}

/// Formats an RG as `NN.NNN.NNN-N`
pub fn format_national_id(value: &str) -> String {
    mask_exact(value, 9, "##.###.###-#")
}
