//! Navigation categories.
//!
//! # Design Decisions
//! - Closed set: every group is known at compile time
//! - Variant order is the sidebar order of groups
//! - Serialized in lowercase, which is also the URL prefix

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level navigation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Passengers,
    Drivers,
    Infos,
    Admins,
    Settings,
}

impl GroupKey {
    /// Every group, in menu order.
    pub const ALL: [GroupKey; 5] = [
        GroupKey::Passengers,
        GroupKey::Drivers,
        GroupKey::Infos,
        GroupKey::Admins,
        GroupKey::Settings,
    ];

    /// The URL prefix for routes in this group.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKey::Passengers => "passengers",
            GroupKey::Drivers => "drivers",
            GroupKey::Infos => "infos",
            GroupKey::Admins => "admins",
            GroupKey::Settings => "settings",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown navigation group: {0}")]
pub struct UnknownGroup(pub String);

impl FromStr for GroupKey {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupKey::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGroup(s.to_string()))
    }
}
