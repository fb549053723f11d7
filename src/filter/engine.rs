//! Filter evaluation
//!
//! [`apply_all`] is the single combinator every inclusion decision is built
//! from. [`FilterEngine`] feeds a resource filter's [`Check`] list through it,
//! turning filter definition errors into diagnostics so a bad pattern
//! excludes records instead of failing the read.

use regex::Regex;
use tracing::{debug, trace, warn};

use super::cache::PatternCache;
use super::check::Check;
use super::diagnostics::Diagnostics;
use super::matchers::{compile_pattern, DEFAULT_REGEX_SIZE_LIMIT};
use crate::config::FilterSettings;

/// Short-circuiting conjunction.
///
/// Predicates run left to right; the first `false` stops evaluation and
/// later predicates are never called. An empty list is `true`.
pub fn apply_all<I>(predicates: I) -> bool
where
    I: IntoIterator,
    I::Item: FnOnce() -> bool,
{
    predicates.into_iter().all(|predicate| predicate())
}

/// A filter configuration for records of type `R`
pub trait RecordFilter<R> {
    /// Resource kind used in logs (e.g. `monitor`)
    const KIND: &'static str;

    /// Ordered checks for one record; the name check comes first
    fn checks<'a>(&'a self, record: &'a R) -> Vec<Check<'a>>;
}

/// Evaluates resource filters against records
#[derive(Debug)]
pub struct FilterEngine {
    cache: Option<PatternCache>,
    regex_size_limit: usize,
    abort_on_error: bool,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(&FilterSettings::default())
    }
}

impl FilterEngine {
    pub fn new(settings: &FilterSettings) -> Self {
        let cache = settings
            .cache_patterns
            .then(|| PatternCache::new(settings.max_cached_patterns, settings.regex_size_limit));

        Self {
            cache,
            regex_size_limit: settings.regex_size_limit,
            abort_on_error: settings.abort_on_error,
        }
    }

    /// Engine that compiles every pattern on each use
    pub fn uncached() -> Self {
        Self {
            cache: None,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            abort_on_error: false,
        }
    }

    pub fn cache(&self) -> Option<&PatternCache> {
        self.cache.as_ref()
    }

    fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        match &self.cache {
            Some(cache) => cache.compile(pattern),
            None => compile_pattern(pattern, self.regex_size_limit),
        }
    }

    /// Evaluate a single check, reporting definition errors to `diagnostics`
    pub fn run_check(&self, check: &Check<'_>, diagnostics: &Diagnostics) -> bool {
        match check.evaluate(|pattern| self.compile(pattern)) {
            Ok(matched) => matched,
            Err(e) => {
                warn!(field = check.field, error = %e, "Invalid filter definition");
                diagnostics.push(e.to_diagnostic());
                false
            }
        }
    }

    /// All checks must pass; evaluation stops at the first failure
    pub fn evaluate(&self, checks: &[Check<'_>], diagnostics: &Diagnostics) -> bool {
        apply_all(
            checks
                .iter()
                .map(|check| move || self.run_check(check, diagnostics)),
        )
    }

    /// Decide whether `record` passes `filter`.
    ///
    /// A missing filter includes every record without building any checks.
    pub fn should_include<R, F>(&self, record: &R, filter: Option<&F>, diagnostics: &Diagnostics) -> bool
    where
        F: RecordFilter<R>,
    {
        let Some(filter) = filter else {
            return true;
        };

        let checks = filter.checks(record);
        let included = self.evaluate(&checks, diagnostics);
        if !included {
            trace!(kind = F::KIND, "Record excluded by filter");
        }
        included
    }

    /// Keep the records that pass `filter`, in input order.
    ///
    /// With `abort_on_error` set, stops at the first record that raises an
    /// error diagnostic and returns what was kept so far.
    pub fn filter_records<R, F, I>(
        &self,
        records: I,
        filter: Option<&F>,
        diagnostics: &Diagnostics,
    ) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        F: RecordFilter<R>,
    {
        let span = crate::filter_span!(F::KIND);
        let _guard = span.enter();

        let errors_before = diagnostics.error_count();
        let mut total = 0usize;
        let mut included = Vec::new();

        for record in records {
            total += 1;
            if self.should_include(&record, filter, diagnostics) {
                included.push(record);
            } else if self.abort_on_error && diagnostics.error_count() > errors_before {
                warn!(kind = F::KIND, evaluated = total, "Aborting filter evaluation after error");
                break;
            }
        }

        debug!(
            kind = F::KIND,
            total,
            included = included.len(),
            errors = diagnostics.error_count() - errors_before,
            "Applied client-side filter"
        );
        included
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptionalString, OptionalValue};
    use std::cell::Cell;
    use tracing_test::traced_test;

    struct Item {
        name: &'static str,
        kind: &'static str,
    }

    #[derive(Default)]
    struct ItemFilter {
        name_regex: OptionalString,
        kind: OptionalString,
    }

    impl RecordFilter<Item> for ItemFilter {
        const KIND: &'static str = "item";

        fn checks<'a>(&'a self, record: &'a Item) -> Vec<Check<'a>> {
            vec![
                Check::name_regex(record.name, &self.name_regex),
                Check::exact("kind", record.kind, &self.kind),
            ]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "api-1", kind: "http" },
            Item { name: "db-1", kind: "tcp" },
            Item { name: "api-2", kind: "tcp" },
        ]
    }

    #[test]
    fn apply_all_short_circuits() {
        let calls = Cell::new(0);
        let counter = &calls;
        let counted = |result: bool| {
            move || {
                counter.set(counter.get() + 1);
                result
            }
        };

        assert!(!apply_all([counted(true), counted(false), counted(true)]));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn apply_all_empty_is_true() {
        assert!(apply_all(Vec::<fn() -> bool>::new()));
    }

    #[test]
    fn missing_filter_includes_everything() {
        let engine = FilterEngine::default();
        let diagnostics = Diagnostics::new();
        let kept = engine.filter_records(items(), None::<&ItemFilter>, &diagnostics);
        assert_eq!(kept.len(), 3);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn filters_preserve_order() {
        let engine = FilterEngine::default();
        let diagnostics = Diagnostics::new();
        let filter = ItemFilter {
            kind: OptionalValue::known("tcp"),
            ..Default::default()
        };
        let kept = engine.filter_records(items(), Some(&filter), &diagnostics);
        let names: Vec<_> = kept.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["db-1", "api-2"]);
    }

    #[test]
    fn invalid_pattern_excludes_and_reports_per_record() {
        let engine = FilterEngine::default();
        let diagnostics = Diagnostics::new();
        let filter = ItemFilter {
            name_regex: OptionalValue::known("[invalid"),
            ..Default::default()
        };
        let kept = engine.filter_records(items(), Some(&filter), &diagnostics);
        assert!(kept.is_empty());
        assert_eq!(diagnostics.error_count(), 3);

        let first = &diagnostics.snapshot()[0];
        assert_eq!(first.summary, "Invalid filter regex");
        assert!(first.detail.starts_with("Failed to compile name_regex pattern:"));
    }

    #[traced_test]
    #[test]
    fn invalid_pattern_is_logged() {
        let engine = FilterEngine::default();
        let diagnostics = Diagnostics::new();
        let filter = ItemFilter {
            name_regex: OptionalValue::known("*broken"),
            ..Default::default()
        };
        assert!(!engine.should_include(&items()[0], Some(&filter), &diagnostics));
        assert!(logs_contain("Invalid filter definition"));
        assert!(logs_contain("name_regex"));
    }

    #[test]
    fn abort_on_error_stops_at_first_error() {
        let engine = FilterEngine::new(&FilterSettings {
            abort_on_error: true,
            ..Default::default()
        });
        let diagnostics = Diagnostics::new();
        let filter = ItemFilter {
            name_regex: OptionalValue::known("(unclosed"),
            ..Default::default()
        };
        let kept = engine.filter_records(items(), Some(&filter), &diagnostics);
        assert!(kept.is_empty());
        assert_eq!(diagnostics.error_count(), 1);
    }

    #[test]
    fn cached_and_uncached_agree() {
        let filter = ItemFilter {
            name_regex: OptionalValue::known("^api-"),
            ..Default::default()
        };
        let cached = FilterEngine::default();
        let uncached = FilterEngine::uncached();
        let diagnostics = Diagnostics::new();

        let a = cached.filter_records(items(), Some(&filter), &diagnostics);
        let b = uncached.filter_records(items(), Some(&filter), &diagnostics);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(cached.cache().map(PatternCache::len), Some(1));
        assert!(uncached.cache().is_none());
    }
}
