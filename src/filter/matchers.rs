//! Comparison primitives
//!
//! Every primitive takes the record's field value first and the filter
//! value second. A filter that is unset or unknown imposes no constraint, so
//! each primitive returns `true` for it regardless of the record value.
//!
//! Only [`matches_name_regex`] and [`matches_up_down`] can fail; everything
//! else is total and a `false` result is an ordinary non-match.

use regex::{Regex, RegexBuilder};

use crate::domain::{OptionalBool, OptionalInt64, OptionalString};
use crate::errors::{ProviderError, Result};

/// Default compiled program size limit for filter patterns (1 MiB)
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Compile a filter pattern with the given compiled size limit
pub fn compile_pattern(pattern: &str, size_limit: usize) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).size_limit(size_limit).build()
}

/// Match a record name against a `name_regex` filter.
///
/// Matching is unanchored: the pattern may match anywhere in `name`.
///
/// # Errors
///
/// Returns [`ProviderError::FilterDefinition`] when the pattern does not compile.
pub fn matches_name_regex(name: &str, pattern: &OptionalString) -> Result<bool> {
    matches_name_regex_with(name, pattern, |p| {
        compile_pattern(p, DEFAULT_REGEX_SIZE_LIMIT)
    })
}

/// Like [`matches_name_regex`], using `compile` to obtain the regex
pub fn matches_name_regex_with<C>(name: &str, pattern: &OptionalString, compile: C) -> Result<bool>
where
    C: FnOnce(&str) -> std::result::Result<Regex, regex::Error>,
{
    let Some(pattern) = pattern.as_deref() else {
        return Ok(true);
    };

    let regex = compile(pattern)
        .map_err(|e| ProviderError::filter_definition("name_regex", pattern, e))?;
    Ok(regex.is_match(name))
}

pub fn matches_exact(value: &str, filter: &OptionalString) -> bool {
    filter.as_deref().map_or(true, |expected| value == expected)
}

pub fn matches_exact_case_insensitive(value: &str, filter: &OptionalString) -> bool {
    filter
        .as_deref()
        .map_or(true, |expected| eq_ignore_case(value, expected))
}

/// Case-insensitive containment of the filter text in `value`
pub fn contains_substring(value: &str, filter: &OptionalString) -> bool {
    filter.as_deref().map_or(true, |needle| {
        value.to_lowercase().contains(&needle.to_lowercase())
    })
}

pub fn matches_bool(value: bool, filter: &OptionalBool) -> bool {
    filter.as_known().map_or(true, |expected| value == *expected)
}

pub fn matches_int64(value: i64, filter: &OptionalInt64) -> bool {
    filter.as_known().map_or(true, |expected| value == *expected)
}

/// Inclusive range check; each bound applies only when it is set
pub fn matches_int64_range(value: i64, min: &OptionalInt64, max: &OptionalInt64) -> bool {
    if let Some(min) = min.as_known() {
        if value < *min {
            return false;
        }
    }
    if let Some(max) = max.as_known() {
        if value > *max {
            return false;
        }
    }
    true
}

/// True when any element of `values` equals the filter value.
///
/// An absent or empty collection never matches a set filter.
pub fn matches_string_slice(values: Option<&[String]>, filter: &OptionalString) -> bool {
    match filter.as_deref() {
        None => true,
        Some(expected) => values
            .unwrap_or_default()
            .iter()
            .any(|value| value == expected),
    }
}

pub fn matches_string_slice_case_insensitive(
    values: Option<&[String]>,
    filter: &OptionalString,
) -> bool {
    match filter.as_deref() {
        None => true,
        Some(expected) => values
            .unwrap_or_default()
            .iter()
            .any(|value| eq_ignore_case(value, expected)),
    }
}

/// Match a down flag against an `up`/`down` status filter.
///
/// # Errors
///
/// Any other filter value is rejected as a filter definition error.
pub fn matches_up_down(is_down: bool, filter: &OptionalString) -> Result<bool> {
    match filter.as_deref() {
        None => Ok(true),
        Some("up") => Ok(!is_down),
        Some("down") => Ok(is_down),
        Some(other) => Err(ProviderError::invalid_filter_value(
            "status",
            other,
            format!("Unrecognised status '{}': expected 'up' or 'down'", other),
        )),
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
