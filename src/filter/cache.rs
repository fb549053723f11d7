//! Compiled pattern cache
//!
//! Maps a pattern string to its compilation result so a `name_regex` is
//! compiled once per list read instead of once per record. Failed
//! compilations are cached too; callers still report the failure for every
//! record that hits it.

use dashmap::DashMap;
use regex::Regex;

use super::matchers::compile_pattern;

/// Bounded, concurrent pattern → compiled regex cache.
#[derive(Debug)]
pub struct PatternCache {
    patterns: DashMap<String, Result<Regex, regex::Error>>,
    capacity: usize,
    size_limit: usize,
}

impl PatternCache {
    /// Create a cache holding at most `capacity` patterns
    pub fn new(capacity: usize, size_limit: usize) -> Self {
        Self {
            patterns: DashMap::new(),
            capacity,
            size_limit,
        }
    }

    /// Compile `pattern`, reusing a previous result when available.
    ///
    /// Once the cache is full new patterns are compiled but not stored.
    pub fn compile(&self, pattern: &str) -> Result<Regex, regex::Error> {
        if let Some(entry) = self.patterns.get(pattern) {
            return entry.value().clone();
        }

        let compiled = compile_pattern(pattern, self.size_limit);
        if self.patterns.len() < self.capacity {
            self.patterns.insert(pattern.to_string(), compiled.clone());
        }
        compiled
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.patterns.clear();
    }
}
