//! Grouping of navigation entries.
//!
//! # Responsibilities
//! - Keep one ordered list of entries per group
//! - Route every append through the deduplication registry
//! - Freeze into [`NavigationGroups`] once composition is done
//!
//! # Design Decisions
//! - Every group exists from the start, so consumers never check for presence
//! - Lists are `Vec`s: insertion order is the menu order
//! - A rejected duplicate is logged and counted, never raised

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::navigation::entry::{CanonicalPath, NavigationEntry};
use crate::navigation::group::GroupKey;
use crate::navigation::registry::DeduplicationRegistry;
use crate::observability::metrics;

/// Frozen mapping of group to its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationGroups(BTreeMap<GroupKey, Vec<NavigationEntry>>);

impl NavigationGroups {
    /// All groups present and empty.
    pub fn empty() -> Self {
        Self(GroupKey::ALL.into_iter().map(|g| (g, Vec::new())).collect())
    }

    /// Entries of one group, in declaration order.
    pub fn get(&self, group: GroupKey) -> &[NavigationEntry] {
        self.0.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Groups in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupKey, &[NavigationEntry])> {
        self.0.iter().map(|(g, entries)| (*g, entries.as_slice()))
    }

    /// Every entry across all groups.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.0.values().flatten()
    }

    pub fn entry_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.entries().any(|e| &e.path == path)
    }

    /// Copy keeping only the entries the sidebar lists.
    pub fn sidebar(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(g, entries)| (*g, entries.iter().filter(|e| e.sidebar).cloned().collect()))
                .collect(),
        )
    }
}

impl Default for NavigationGroups {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds [`NavigationGroups`] one entry at a time.
#[derive(Debug, Default)]
pub struct NavigationAccumulator {
    registry: DeduplicationRegistry,
    groups: NavigationGroups,
}

impl NavigationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// File `entry` under `group` unless its path is already registered.
    ///
    /// Returns whether the entry was appended.
    pub fn append(&mut self, group: GroupKey, entry: NavigationEntry) -> bool {
        if !self.registry.try_register(&entry.path) {
            tracing::warn!(
                path = %entry.path,
                title = %entry.title,
                "Duplicate route path; keeping the first declaration"
            );
            metrics::record_duplicate_route();
            return false;
        }
        self.groups.0.entry(group).or_default().push(entry);
        true
    }

    pub fn registry(&self) -> &DeduplicationRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &NavigationGroups {
        &self.groups
    }

    pub fn finish(self) -> NavigationGroups {
        self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::entry::RouteDeclaration;
    use crate::navigation::path;

    fn entry(group: GroupKey, link: &str, sidebar: bool) -> NavigationEntry {
        path::build(&RouteDeclaration::new(group, link, link, "", sidebar)).1
    }

    #[test]
    fn test_untouched_groups_are_empty() {
        let acc = NavigationAccumulator::new();
        for group in GroupKey::ALL {
            assert!(acc.groups().get(group).is_empty());
        }
        let json = serde_json::to_value(acc.groups()).unwrap();
        assert_eq!(json["settings"], serde_json::json!([]));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut acc = NavigationAccumulator::new();
        assert!(acc.append(GroupKey::Drivers, entry(GroupKey::Drivers, "main", true)));
        assert!(acc.append(GroupKey::Admins, entry(GroupKey::Admins, "admin", true)));
        assert!(acc.append(GroupKey::Drivers, entry(GroupKey::Drivers, "cars", true)));

        let groups = acc.finish();
        let drivers: Vec<_> = groups
            .get(GroupKey::Drivers)
            .iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(drivers, vec!["drivers/main", "drivers/cars"]);
        assert_eq!(groups.entry_count(), 3);
    }

    #[test]
    fn test_duplicate_is_dropped() {
        let mut acc = NavigationAccumulator::new();
        assert!(acc.append(GroupKey::Drivers, entry(GroupKey::Drivers, "main", true)));
        let mut dup = entry(GroupKey::Drivers, "main", false);
        dup.title = "second".to_string();
        assert!(!acc.append(GroupKey::Drivers, dup));

        let groups = acc.finish();
        assert_eq!(groups.get(GroupKey::Drivers).len(), 1);
        assert_eq!(groups.get(GroupKey::Drivers)[0].title, "main");
    }

    #[test]
    fn test_sidebar_filter() {
        let mut acc = NavigationAccumulator::new();
        acc.append(GroupKey::Drivers, entry(GroupKey::Drivers, "driver/:id", false));
        acc.append(GroupKey::Drivers, entry(GroupKey::Drivers, "main", true));

        let groups = acc.finish();
        let first = groups.entries().next().unwrap();
        assert_eq!(first.path.as_str(), "drivers/driver/:id");

        let sidebar = groups.sidebar();
        assert_eq!(sidebar.entry_count(), 1);
        assert!(sidebar.contains(&CanonicalPath::new("drivers/main")));
        assert!(groups.contains(&CanonicalPath::new("drivers/driver/:id")));
    }
}
