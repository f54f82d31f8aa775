//! Null-tolerant string helpers.
//!
//! "Null" text is modelled as `None`. `is_empty`, `is_not_empty` and
//! `capitalize` accept it as ordinary input; `join` rejects it.

use tracing::debug;

use keystone_core::{DomainError, DomainResult};

/// `true` when `text` is absent or has zero length.
pub fn is_empty(text: Option<&str>) -> bool {
    text.is_none_or(str::is_empty)
}

/// Exact complement of [`is_empty`].
pub fn is_not_empty(text: Option<&str>) -> bool {
    !is_empty(text)
}

/// Join `strings` with `delimiter` between consecutive elements.
///
/// # Errors
/// `NullArgument` when either argument is absent (the collection is checked
/// first).
pub fn join<I>(strings: Option<I>, delimiter: Option<&str>) -> DomainResult<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let Some(strings) = strings else {
        debug!(argument = "strings", "join_rejected reason=null_argument");
        return Err(DomainError::null_argument("strings"));
    };
    let Some(delimiter) = delimiter else {
        debug!(argument = "delimiter", "join_rejected reason=null_argument");
        return Err(DomainError::null_argument("delimiter"));
    };

    let mut joined = String::new();
    for (i, item) in strings.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(delimiter);
        }
        joined.push_str(item.as_ref());
    }
    Ok(joined)
}

/// Upper-case the first character, leaving the rest untouched.
///
/// Absent and empty input are returned as-is. Case mapping uses Unicode
/// default rules, independent of any locale.
pub fn capitalize(text: Option<&str>) -> Option<String> {
    let text = text?;
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Some(String::new());
    };

    let mut capitalized = String::with_capacity(text.len());
    capitalized.extend(first.to_uppercase());
    capitalized.push_str(chars.as_str());
    Some(capitalized)
}
