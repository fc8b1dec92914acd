use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ApiError;

pub const ALL_FIELDS_REQUIRED: &str = "All fields required";

/// Something, an `@`, then a domain with at least one dot. Anchored at the
/// start only; trailing text after the first match is accepted.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns every field value, or `All fields required` when any of them is
/// absent or empty.
pub fn require_fields<'a, const N: usize>(
    fields: [&'a Option<String>; N],
) -> Result<[&'a str; N], ApiError> {
    let mut values = [""; N];
    for (slot, field) in values.iter_mut().zip(fields) {
        match field.as_deref() {
            Some(v) if !v.is_empty() => *slot = v,
            _ => return Err(ApiError::bad_request(ALL_FIELDS_REQUIRED)),
        }
    }
    Ok(values)
}
