//! Route declarations and the navigation entries derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::navigation::group::GroupKey;

/// A statically authored route: where it lives and how it shows in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteDeclaration {
    /// Navigation group, also the first path segment.
    pub parent: GroupKey,

    /// Path below the group. May contain `:param` placeholders.
    pub link: String,

    /// Menu label.
    pub title: String,

    /// Icon key understood by the sidebar renderer.
    pub icon: String,

    /// Whether the sidebar lists this route.
    pub sidebar: bool,

    /// Optional summary shown on the group's dashboard card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_info: Option<String>,
}

impl RouteDeclaration {
    pub fn new(
        parent: GroupKey,
        link: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        sidebar: bool,
    ) -> Self {
        Self {
            parent,
            link: link.into(),
            title: title.into(),
            icon: icon.into(),
            sidebar,
            card_info: None,
        }
    }

    pub fn with_card_info(mut self, card_info: impl Into<String>) -> Self {
        self.card_info = Some(card_info.into());
        self
    }
}

/// `"{group}/{link}"`: mount path, entry identity and permission key at once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalPath(String);

impl CanonicalPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One sidebar/permission record, derived from a [`RouteDeclaration`].
///
/// `path`, `permission` and `id` always hold the same canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub path: CanonicalPath,
    pub sidebar: bool,
    pub permission: CanonicalPath,
    pub id: CanonicalPath,
    pub title: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_info: Option<String>,
}
