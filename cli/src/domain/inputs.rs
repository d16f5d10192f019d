//! Parsing of raw task input values.

use crate::domain::error::TaskError;

/// Split a newline-delimited input into its non-empty, trimmed entries.
#[must_use]
pub fn split_delimited(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Interpret an optional boolean input. Absent or empty means `false`.
///
/// # Errors
///
/// Returns [`TaskError::Configuration`] for anything but `true`/`false`.
pub fn parse_bool(name: &str, raw: Option<&str>) -> Result<bool, TaskError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(TaskError::configuration(format!(
            "input '{name}' must be true or false, got '{v}'"
        ))),
    }
}
