//! Canonical path construction.
//!
//! # Design Decisions
//! - Pure function of the declaration, no normalization
//! - `:param` segments are kept verbatim in the path string
//! - The same string serves as path, id and permission key

use crate::navigation::entry::{CanonicalPath, NavigationEntry, RouteDeclaration};

/// Separator between the group and the link.
pub const SEPARATOR: char = '/';

/// Build the canonical path and navigation entry for a declaration.
pub fn build(decl: &RouteDeclaration) -> (CanonicalPath, NavigationEntry) {
    let path = CanonicalPath::new(format!("{}{}{}", decl.parent, SEPARATOR, decl.link));
    let entry = NavigationEntry {
        path: path.clone(),
        sidebar: decl.sidebar,
        permission: path.clone(),
        id: path.clone(),
        title: decl.title.clone(),
        icon: decl.icon.clone(),
        card_info: decl.card_info.clone(),
    };
    (path, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::group::GroupKey;

    #[test]
    fn test_build_joins_group_and_link() {
        let decl =
            RouteDeclaration::new(GroupKey::Passengers, "main", "Yo'lovchilar", "admins", true);
        let (path, entry) = build(&decl);

        assert_eq!(path.as_str(), "passengers/main");
        assert_eq!(entry.path, path);
        assert_eq!(entry.permission, path);
        assert_eq!(entry.id, path);
        assert_eq!(entry.title, "Yo'lovchilar");
        assert!(entry.sidebar);
    }

    #[test]
    fn test_build_keeps_param_segments_verbatim() {
        let decl =
            RouteDeclaration::new(GroupKey::Drivers, "driver/:id", "Haydovchilar", "", false);
        let (path, entry) = build(&decl);

        assert_eq!(path.as_str(), "drivers/driver/:id");
        assert!(!entry.sidebar);
    }

    #[test]
    fn test_build_is_deterministic() {
        let decl = RouteDeclaration::new(GroupKey::Settings, "sms", "SMS xabarnoma", "sms", true)
            .with_card_info("SMS");
        assert_eq!(build(&decl), build(&decl));
        assert_eq!(build(&decl).1.card_info.as_deref(), Some("SMS"));
    }
}
