//! Brazilian-locale display helpers
//!
//! Pure functions used by presentation layers. The lookup pipeline does not
//! depend on them.

pub mod locale;
pub mod masks;

pub use locale::{format_currency, format_date, format_date_time};
pub use masks::{
    format_national_id, format_phone, format_postal_code, format_tax_id, strip_non_digits,
};
