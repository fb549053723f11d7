//! # Client-side Filtering
//!
//! Decides which records from an unfiltered list read reach the user.
//!
//! A resource filter (e.g. [`MonitorFilter`]) turns one record into an
//! ordered list of [`Check`]s. [`FilterEngine`] evaluates them through
//! [`apply_all`], stopping at the first non-match. Filter definition errors
//! such as a `name_regex` that does not compile go to a caller-owned
//! [`Diagnostics`] sink and exclude the record.
//!
//! ```rust,ignore
//! let engine = FilterEngine::new(&settings.filter);
//! let diagnostics = Diagnostics::new();
//! let monitors = engine.filter_records(all_monitors, filter.as_ref(), &diagnostics);
//! ```

pub mod cache;
pub mod check;
pub mod diagnostics;
pub mod engine;
pub mod matchers;
pub mod resources;

pub use cache::PatternCache;
pub use check::{Check, Comparison};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use engine::{apply_all, FilterEngine, RecordFilter};
pub use matchers::{
    contains_substring, matches_bool, matches_exact, matches_exact_case_insensitive,
    matches_int64, matches_int64_range, matches_name_regex, matches_string_slice,
    matches_string_slice_case_insensitive, matches_up_down,
};
pub use resources::{
    HealthcheckFilter, IncidentFilter, MaintenanceFilter, MonitorFilter, NameFilter,
    OutageFilter, StatusPageFilter,
};
