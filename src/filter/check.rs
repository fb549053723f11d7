//! Check descriptors
//!
//! A [`Check`] names one record field, the comparison to apply, the record's
//! value and the filter's value. Resource filters build an ordered list of
//! checks; the engine evaluates them with early exit.

use regex::Regex;

use super::matchers;
use crate::domain::{OptionalBool, OptionalInt64, OptionalString};
use crate::errors::Result;

/// Comparison applied by a check, borrowing record and filter values
#[derive(Debug, Clone, Copy)]
pub enum Comparison<'a> {
    /// `name_regex`; when `fallback` is set it is tried if `value` does not match
    Regex {
        value: &'a str,
        fallback: Option<&'a str>,
        pattern: &'a OptionalString,
    },
    Exact {
        value: &'a str,
        filter: &'a OptionalString,
    },
    /// Exact match against a value the record may not have
    ExactOptional {
        value: Option<&'a str>,
        filter: &'a OptionalString,
    },
    ExactIgnoreCase {
        value: &'a str,
        filter: &'a OptionalString,
    },
    Contains {
        value: &'a str,
        filter: &'a OptionalString,
    },
    Bool {
        value: bool,
        filter: &'a OptionalBool,
    },
    Int64 {
        value: i64,
        filter: &'a OptionalInt64,
    },
    Int64Range {
        value: i64,
        min: &'a OptionalInt64,
        max: &'a OptionalInt64,
    },
    AnyOf {
        values: Option<&'a [String]>,
        filter: &'a OptionalString,
        ignore_case: bool,
    },
    UpDown {
        is_down: bool,
        filter: &'a OptionalString,
    },
}

/// One field comparison for one record
#[derive(Debug, Clone, Copy)]
pub struct Check<'a> {
    pub field: &'static str,
    pub comparison: Comparison<'a>,
}

impl<'a> Check<'a> {
    pub fn name_regex(value: &'a str, pattern: &'a OptionalString) -> Self {
        Self {
            field: "name_regex",
            comparison: Comparison::Regex {
                value,
                fallback: None,
                pattern,
            },
        }
    }

    /// Name regex tried against `value`, then against `fallback`
    pub fn name_regex_or(value: &'a str, fallback: &'a str, pattern: &'a OptionalString) -> Self {
        Self {
            field: "name_regex",
            comparison: Comparison::Regex {
                value,
                fallback: Some(fallback),
                pattern,
            },
        }
    }

    pub fn exact(field: &'static str, value: &'a str, filter: &'a OptionalString) -> Self {
        Self {
            field,
            comparison: Comparison::Exact { value, filter },
        }
    }

    pub fn exact_optional(
        field: &'static str,
        value: Option<&'a str>,
        filter: &'a OptionalString,
    ) -> Self {
        Self {
            field,
            comparison: Comparison::ExactOptional { value, filter },
        }
    }

    pub fn exact_ignore_case(field: &'static str, value: &'a str, filter: &'a OptionalString) -> Self {
        Self {
            field,
            comparison: Comparison::ExactIgnoreCase { value, filter },
        }
    }

    pub fn contains(field: &'static str, value: &'a str, filter: &'a OptionalString) -> Self {
        Self {
            field,
            comparison: Comparison::Contains { value, filter },
        }
    }

    pub fn boolean(field: &'static str, value: bool, filter: &'a OptionalBool) -> Self {
        Self {
            field,
            comparison: Comparison::Bool { value, filter },
        }
    }

    pub fn int64(field: &'static str, value: i64, filter: &'a OptionalInt64) -> Self {
        Self {
            field,
            comparison: Comparison::Int64 { value, filter },
        }
    }

    pub fn int64_range(
        field: &'static str,
        value: i64,
        min: &'a OptionalInt64,
        max: &'a OptionalInt64,
    ) -> Self {
        Self {
            field,
            comparison: Comparison::Int64Range { value, min, max },
        }
    }

    pub fn any_of(field: &'static str, values: Option<&'a [String]>, filter: &'a OptionalString) -> Self {
        Self {
            field,
            comparison: Comparison::AnyOf {
                values,
                filter,
                ignore_case: false,
            },
        }
    }

    pub fn any_of_ignore_case(
        field: &'static str,
        values: Option<&'a [String]>,
        filter: &'a OptionalString,
    ) -> Self {
        Self {
            field,
            comparison: Comparison::AnyOf {
                values,
                filter,
                ignore_case: true,
            },
        }
    }

    pub fn up_down(field: &'static str, is_down: bool, filter: &'a OptionalString) -> Self {
        Self {
            field,
            comparison: Comparison::UpDown { is_down, filter },
        }
    }

    /// Evaluate the check, compiling regex patterns through `compile`.
    ///
    /// # Errors
    ///
    /// Returns a filter definition error for a pattern that does not compile
    /// or an unrecognised up/down status.
    pub fn evaluate<C>(&self, compile: C) -> Result<bool>
    where
        C: Fn(&str) -> std::result::Result<Regex, regex::Error>,
    {
        match self.comparison {
            Comparison::Regex {
                value,
                fallback,
                pattern,
            } => {
                if matchers::matches_name_regex_with(value, pattern, &compile)? {
                    return Ok(true);
                }
                match fallback {
                    Some(fallback) => matchers::matches_name_regex_with(fallback, pattern, &compile),
                    None => Ok(false),
                }
            }
            Comparison::Exact { value, filter } => Ok(matchers::matches_exact(value, filter)),
            Comparison::ExactOptional { value, filter } => Ok(match value {
                Some(value) => matchers::matches_exact(value, filter),
                None => filter.is_null_or_unknown(),
            }),
            Comparison::ExactIgnoreCase { value, filter } => {
                Ok(matchers::matches_exact_case_insensitive(value, filter))
            }
            Comparison::Contains { value, filter } => {
                Ok(matchers::contains_substring(value, filter))
            }
            Comparison::Bool { value, filter } => Ok(matchers::matches_bool(value, filter)),
            Comparison::Int64 { value, filter } => Ok(matchers::matches_int64(value, filter)),
            Comparison::Int64Range { value, min, max } => {
                Ok(matchers::matches_int64_range(value, min, max))
            }
            Comparison::AnyOf {
                values,
                filter,
                ignore_case: false,
            } => Ok(matchers::matches_string_slice(values, filter)),
            Comparison::AnyOf {
                values,
                filter,
                ignore_case: true,
            } => Ok(matchers::matches_string_slice_case_insensitive(values, filter)),
            Comparison::UpDown { is_down, filter } => matchers::matches_up_down(is_down, filter),
        }
    }
}
