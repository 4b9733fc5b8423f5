//! Canonical path deduplication.
//!
//! # Responsibilities
//! - Remember every path registered during one accumulation lifetime
//! - Reject repeats without mutating
//!
//! # Design Decisions
//! - Lives as long as the mount, not a single render
//! - Repeats are not errors; the caller decides how loudly to report them

use std::collections::HashSet;

use crate::navigation::entry::CanonicalPath;

/// Set of canonical paths already registered.
#[derive(Debug, Default, Clone)]
pub struct DeduplicationRegistry {
    seen: HashSet<CanonicalPath>,
}

impl DeduplicationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` if it has not been seen. Returns false on a repeat.
    pub fn try_register(&mut self, path: &CanonicalPath) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        self.seen.insert(path.clone())
    }

    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.seen.contains(path)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registration_wins() {
        let mut registry = DeduplicationRegistry::new();
        let path = CanonicalPath::new("drivers/main");

        assert!(registry.try_register(&path));
        assert!(!registry.try_register(&path));
        assert!(!registry.try_register(&path));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_paths_all_register() {
        let mut registry = DeduplicationRegistry::new();
        assert!(registry.try_register(&CanonicalPath::new("drivers/main")));
        assert!(registry.try_register(&CanonicalPath::new("passengers/main")));
        assert!(registry.contains(&CanonicalPath::new("drivers/main")));
        assert_eq!(registry.len(), 2);
    }
}
