//! Publication of finished navigation to shared application state.
//!
//! # Responsibilities
//! - Define the store contract (`set_routes`)
//! - Provide the in-process store the shell and sidebar read from
//! - Publish once per mount, keyed on the declaration list
//!
//! # Design Decisions
//! - Publishing is gated on a [`DeclarationKey`], never on render count
//! - Same key twice is a no-op; a new key publishes again
//! - Readers of [`SharedNavigation`] never block (arc-swap)

use arc_swap::ArcSwapOption;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, PoisonError};

use crate::navigation::accumulator::NavigationGroups;
use crate::navigation::entry::RouteDeclaration;
use crate::observability::metrics;

/// Receiver of published navigation.
pub trait NavigationStore: Send + Sync {
    fn set_routes(&self, groups: Arc<NavigationGroups>);
}

/// Lock-free shared slot holding the last published navigation.
#[derive(Debug, Default)]
pub struct SharedNavigation {
    routes: ArcSwapOption<NavigationGroups>,
}

impl SharedNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last published navigation, if any.
    pub fn routes(&self) -> Option<Arc<NavigationGroups>> {
        self.routes.load_full()
    }
}

impl NavigationStore for SharedNavigation {
    fn set_routes(&self, groups: Arc<NavigationGroups>) {
        self.routes.store(Some(groups));
    }
}

/// Stable fingerprint of a declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationKey(u64);

impl DeclarationKey {
    pub fn of<'a>(declarations: impl IntoIterator<Item = &'a RouteDeclaration>) -> Self {
        let mut hasher = DefaultHasher::new();
        for decl in declarations {
            decl.hash(&mut hasher);
        }
        Self(hasher.finish())
    }
}

impl fmt::Display for DeclarationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// One-shot publisher bound to a single mount.
pub struct NavigationPublisher {
    store: Arc<dyn NavigationStore>,
    published: Mutex<Option<DeclarationKey>>,
}

impl NavigationPublisher {
    pub fn new(store: Arc<dyn NavigationStore>) -> Self {
        Self {
            store,
            published: Mutex::new(None),
        }
    }

    /// Push `groups` to the store unless this key was already published.
    ///
    /// Returns whether the store was called.
    pub fn publish(&self, key: DeclarationKey, groups: &Arc<NavigationGroups>) -> bool {
        let mut published = self.published.lock().unwrap_or_else(PoisonError::into_inner);
        if *published == Some(key) {
            return false;
        }

        self.store.set_routes(Arc::clone(groups));
        *published = Some(key);
        metrics::record_navigation_publish();
        tracing::info!(
            key = %key,
            entries = groups.entry_count(),
            "Navigation published"
        );
        true
    }

    pub fn published_key(&self) -> Option<DeclarationKey> {
        *self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for NavigationPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationPublisher")
            .field("published", &self.published_key())
            .finish_non_exhaustive()
    }
}
