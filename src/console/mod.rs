//! Console composition root.
//!
//! # Data Flow
//! ```text
//! render(SessionState)
//!     → anonymous:     drop any mount → RouteTree::Unauthenticated
//!     → authenticated: reuse mount, or build one:
//!           compose routes (fresh registry + accumulator)
//!           → freeze NavigationGroups
//!           → publish once
//!       → RouteTree::Authenticated
//! ```
//!
//! # Design Decisions
//! - A mount lives for one authenticated session; re-renders reuse it
//! - Navigation is built at mount time, not per render
//! - Mount transitions are serialized so a transition publishes exactly once
//! - Logging out drops the mount and everything it owns (lazy slots included)

pub mod catalog;
pub mod frame;

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ConsoleConfig;
use crate::navigation::{
    CanonicalPath, DeclarationKey, NavigationGroups, NavigationPublisher, NavigationStore,
};
use crate::routing::{AuthRoutes, ConsoleRoute, ConsoleRoutes, RouteError, RouteTree};
use crate::session::SessionState;
use crate::views::{Suspense, ViewLoader};

pub use frame::{Frame, Page};

/// Errors from building or mounting the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Tunables for the console.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Where `/` redirects; the first declared route when unset.
    pub default_route: Option<CanonicalPath>,
    /// How long a render waits for a lazy view before showing the placeholder.
    pub suspense_timeout: Duration,
    pub placeholder: String,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            default_route: None,
            suspense_timeout: Duration::from_millis(500),
            placeholder: "Loading...".to_string(),
        }
    }
}

impl From<&ConsoleConfig> for ConsoleOptions {
    fn from(config: &ConsoleConfig) -> Self {
        Self {
            default_route: config.navigation.default_route.clone().map(CanonicalPath::new),
            suspense_timeout: Duration::from_millis(config.views.suspense_timeout_ms),
            placeholder: config.views.placeholder.clone(),
        }
    }
}

/// Everything that exists while an authenticated session is mounted.
#[derive(Debug)]
pub struct ConsoleMount {
    id: Uuid,
    key: DeclarationKey,
    routes: Arc<ConsoleRoutes>,
    groups: Arc<NavigationGroups>,
    publisher: NavigationPublisher,
    suspense: Suspense,
}

impl ConsoleMount {
    fn new(console: &Console) -> Result<Self, ConsoleError> {
        let (routes, groups) =
            ConsoleRoutes::compose(&console.routes, console.options.default_route.as_ref())?;
        let mount = Self {
            id: Uuid::new_v4(),
            key: console.key,
            routes: Arc::new(routes),
            groups: Arc::new(groups),
            publisher: NavigationPublisher::new(Arc::clone(&console.store)),
            suspense: Suspense::new(
                Arc::clone(&console.loader),
                console.options.suspense_timeout,
                console.options.placeholder.clone(),
            ),
        };
        tracing::info!(
            mount_id = %mount.id,
            routes = mount.routes.bindings().len(),
            "Console mounted"
        );
        Ok(mount)
    }

    /// Run the post-composition effect. Publishes only the first time for a key.
    fn settle(&self) -> bool {
        self.publisher.publish(self.key, &self.groups)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn routes(&self) -> &Arc<ConsoleRoutes> {
        &self.routes
    }

    pub fn navigation(&self) -> &Arc<NavigationGroups> {
        &self.groups
    }

    pub fn suspense(&self) -> &Suspense {
        &self.suspense
    }
}

impl Drop for ConsoleMount {
    fn drop(&mut self) {
        tracing::info!(mount_id = %self.id, "Console unmounted");
    }
}

/// The session-gated console.
pub struct Console {
    routes: Arc<[ConsoleRoute]>,
    key: DeclarationKey,
    store: Arc<dyn NavigationStore>,
    loader: Arc<dyn ViewLoader>,
    options: ConsoleOptions,
    public: Arc<AuthRoutes>,
    mounted: Mutex<Option<Arc<ConsoleMount>>>,
}

impl Console {
    /// Build a console over `routes`.
    ///
    /// A bad default route fails here rather than on first login. Nothing is
    /// composed or published until a session mounts.
    pub fn new(
        routes: Vec<ConsoleRoute>,
        store: Arc<dyn NavigationStore>,
        loader: Arc<dyn ViewLoader>,
        options: ConsoleOptions,
    ) -> Result<Self, ConsoleError> {
        ConsoleRoutes::validate_default(&routes, options.default_route.as_ref())?;
        let key = DeclarationKey::of(routes.iter().map(|r| &r.declaration));

        Ok(Self {
            routes: routes.into(),
            key,
            store,
            loader,
            options,
            public: Arc::new(AuthRoutes::new()),
            mounted: Mutex::new(None),
        })
    }

    /// Render for `session`, mounting or unmounting the authenticated tree as needed.
    ///
    /// Publishing happens under the mount lock, so a concurrent logout cannot
    /// slip in between and leave a dropped mount's navigation published.
    pub fn render(&self, session: SessionState) -> Result<Frame, ConsoleError> {
        let mut mounted = self.mounted.lock().unwrap_or_else(PoisonError::into_inner);

        if !session.is_auth {
            mounted.take();
            return Ok(Frame::new(RouteTree::Unauthenticated(Arc::clone(&self.public)), None));
        }

        let mount = match mounted.as_ref() {
            Some(mount) => Arc::clone(mount),
            None => {
                let mount = Arc::new(ConsoleMount::new(self)?);
                *mounted = Some(Arc::clone(&mount));
                mount
            }
        };
        mount.settle();
        drop(mounted);

        Ok(Frame::new(
            RouteTree::Authenticated(Arc::clone(&mount.routes)),
            Some(mount),
        ))
    }

    /// The current authenticated mount, if any.
    pub fn mount(&self) -> Option<Arc<ConsoleMount>> {
        self.mounted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn declaration_key(&self) -> DeclarationKey {
        self.key
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("routes", &self.routes.len())
            .field("key", &self.key)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
