//! Route matching logic.
//!
//! # Responsibilities
//! - Match a request path against a route pattern
//! - Capture `:param` segments as path parameters
//!
//! # Design Decisions
//! - Leading and trailing slashes are ignored
//! - Literal segments are case-sensitive
//! - A parameter matches exactly one non-empty segment
//! - No regex: matching is a single pass over segments

use serde::Serialize;
use std::collections::BTreeMap;

/// Parameters captured from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathParams(BTreeMap<String, String>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Strip the slashes that do not take part in matching.
pub fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Trait for matching paths against route conditions.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns captured parameters if `path` matches.
    fn matches(&self, path: &str) -> Option<PathParams>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Matches a `/`-separated pattern such as `drivers/driver/:id`.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    segments: Vec<Segment>,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Self {
        let segments = normalize(pattern)
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Whether the pattern captures any parameter.
    pub fn has_params(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }
}

impl Matcher for PatternMatcher {
    fn matches(&self, path: &str) -> Option<PathParams> {
        let normalized = normalize(path);
        let parts: Vec<&str> = if normalized.is_empty() {
            Vec::new()
        } else {
            normalized.split('/').collect()
        };

        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.insert(name.clone(), part.to_string());
                }
                _ => return None,
            }
        }
        Some(PathParams(params))
    }
}

/// Matches every path, including the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatchAllMatcher;

impl Matcher for CatchAllMatcher {
    fn matches(&self, _path: &str) -> Option<PathParams> {
        Some(PathParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let matcher = PatternMatcher::new("drivers/main");

        assert!(matcher.matches("/drivers/main").is_some());
        assert!(matcher.matches("drivers/main/").is_some());
        assert!(matcher.matches("/Drivers/main").is_none()); // Case sensitive
        assert!(matcher.matches("/drivers/main/extra").is_none());
        assert!(matcher.matches("/drivers").is_none());
        assert!(!matcher.has_params());
    }

    #[test]
    fn test_param_pattern() {
        let matcher = PatternMatcher::new("drivers/driver/:id");
        assert!(matcher.has_params());

        let params = matcher.matches("/drivers/driver/42").unwrap();
        assert_eq!(params.get("id"), Some("42"));

        assert!(matcher.matches("/drivers/driver").is_none());
        assert!(matcher.matches("/drivers/driver//").is_none());
        assert!(matcher.matches("/drivers/car/42").is_none());
    }

    #[test]
    fn test_catch_all() {
        assert!(CatchAllMatcher.matches("/").is_some());
        assert!(CatchAllMatcher.matches("/anything/at/all").is_some());
    }
}
