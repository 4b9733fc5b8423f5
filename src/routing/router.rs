//! Route composition and lookup.
//!
//! # Responsibilities
//! - Compose the unauthenticated and authenticated route sets
//! - Feed every authenticated declaration through the path builder and accumulator
//! - Resolve a URL path to a view, a redirect or the fallback
//!
//! # Design Decisions
//! - Exactly two route sets, selected by a tagged union
//! - First match wins, in declaration order
//! - A duplicate path is neither listed nor bound: the first declaration owns it
//! - Unknown authenticated paths render a fallback; unknown public paths redirect

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::navigation::accumulator::{NavigationAccumulator, NavigationGroups};
use crate::navigation::entry::{CanonicalPath, RouteDeclaration};
use crate::navigation::path;
use crate::routing::matcher::{normalize, CatchAllMatcher, Matcher, PathParams, PatternMatcher};
use crate::views::{Layout, ViewId, ViewSlot};

/// Path of the login view; every public redirect points here.
pub const LOGIN_PATH: &str = "login";

/// Path of the registration view.
pub const REGISTRATION_PATH: &str = "registration";

/// A declaration paired with the view mounted at its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleRoute {
    pub declaration: RouteDeclaration,
    pub slot: ViewSlot,
}

impl ConsoleRoute {
    pub fn new(declaration: RouteDeclaration, slot: ViewSlot) -> Self {
        Self { declaration, slot }
    }
}

/// Errors from composing the authenticated route set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The configured default route names no bound path.
    #[error("default route {0} is not a declared route")]
    UnknownDefaultRoute(CanonicalPath),

    /// The default route needs parameters and cannot be redirected to.
    #[error("default route {0} contains path parameters")]
    ParameterizedDefault(CanonicalPath),
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Mount `slot` inside `layout`.
    Render {
        layout: Layout,
        slot: ViewSlot,
        /// Route pattern that matched.
        route: String,
        params: PathParams,
    },
    /// Navigate to another path.
    Redirect { to: String },
    /// No route matched in an authenticated session.
    Fallback { layout: Layout, view: ViewId },
}

#[derive(Debug)]
enum Target {
    Render(ViewSlot),
    Redirect(&'static str),
}

#[derive(Debug)]
struct AuthRoute {
    pattern: &'static str,
    matcher: Box<dyn Matcher>,
    target: Target,
}

/// The public route set: login, registration and a redirect for everything else.
#[derive(Debug)]
pub struct AuthRoutes {
    routes: Vec<AuthRoute>,
}

impl AuthRoutes {
    pub fn new() -> Self {
        let routes = vec![
            AuthRoute {
                pattern: LOGIN_PATH,
                matcher: Box::new(PatternMatcher::new(LOGIN_PATH)),
                target: Target::Render(ViewSlot::eager(ViewId::Login)),
            },
            AuthRoute {
                pattern: REGISTRATION_PATH,
                matcher: Box::new(PatternMatcher::new(REGISTRATION_PATH)),
                target: Target::Render(ViewSlot::eager(ViewId::Registration)),
            },
            AuthRoute {
                pattern: "*",
                matcher: Box::new(CatchAllMatcher),
                target: Target::Redirect(LOGIN_PATH),
            },
        ];
        Self { routes }
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        for route in &self.routes {
            if let Some(params) = route.matcher.matches(path) {
                return match route.target {
                    Target::Render(slot) => Resolution::Render {
                        layout: Layout::Auth,
                        slot,
                        route: route.pattern.to_string(),
                        params,
                    },
                    Target::Redirect(to) => Resolution::Redirect { to: to.to_string() },
                };
            }
        }
        Resolution::Redirect {
            to: LOGIN_PATH.to_string(),
        }
    }
}

impl Default for AuthRoutes {
    fn default() -> Self {
        Self::new()
    }
}

/// A canonical path bound to its view.
#[derive(Debug, Clone)]
pub struct RouteBinding {
    pub path: CanonicalPath,
    pub slot: ViewSlot,
    matcher: PatternMatcher,
}

/// The authenticated route set.
#[derive(Debug)]
pub struct ConsoleRoutes {
    bindings: Vec<RouteBinding>,
    default_route: Option<CanonicalPath>,
}

impl ConsoleRoutes {
    /// Walk `routes` in order, registering navigation and binding views.
    ///
    /// The default route is `default_route` when given, otherwise the first
    /// entry without path parameters in menu order. With no such entry there
    /// is no default and `/` renders the fallback.
    pub fn compose(
        routes: &[ConsoleRoute],
        default_route: Option<&CanonicalPath>,
    ) -> Result<(Self, NavigationGroups), RouteError> {
        Self::validate_default(routes, default_route)?;

        let mut accumulator = NavigationAccumulator::new();
        let mut bindings = Vec::with_capacity(routes.len());

        for route in routes {
            let (path, entry) = path::build(&route.declaration);
            if accumulator.append(route.declaration.parent, entry) {
                bindings.push(RouteBinding {
                    matcher: PatternMatcher::new(path.as_str()),
                    path,
                    slot: route.slot,
                });
            }
        }

        let groups = accumulator.finish();
        let default_route = match default_route {
            Some(path) => Some(path.clone()),
            None => groups
                .entries()
                .map(|e| &e.path)
                .find(|p| !PatternMatcher::new(p.as_str()).has_params())
                .cloned(),
        };

        Ok((
            Self {
                bindings,
                default_route,
            },
            groups,
        ))
    }

    /// Check a configured default route against `routes`.
    ///
    /// Only builds paths: nothing is registered, logged or counted.
    pub fn validate_default(
        routes: &[ConsoleRoute],
        default_route: Option<&CanonicalPath>,
    ) -> Result<(), RouteError> {
        let Some(default) = default_route else {
            return Ok(());
        };

        if !routes.iter().any(|r| &path::build(&r.declaration).0 == default) {
            return Err(RouteError::UnknownDefaultRoute(default.clone()));
        }
        if PatternMatcher::new(default.as_str()).has_params() {
            return Err(RouteError::ParameterizedDefault(default.clone()));
        }
        Ok(())
    }

    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    pub fn default_route(&self) -> Option<&CanonicalPath> {
        self.default_route.as_ref()
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        if normalize(path).is_empty() {
            if let Some(default) = &self.default_route {
                return Resolution::Redirect {
                    to: default.to_string(),
                };
            }
        }

        for binding in &self.bindings {
            if let Some(params) = binding.matcher.matches(path) {
                return Resolution::Render {
                    layout: Layout::Main,
                    slot: binding.slot,
                    route: binding.path.to_string(),
                    params,
                };
            }
        }

        Resolution::Fallback {
            layout: Layout::Main,
            view: ViewId::UndefinedPage,
        }
    }
}

/// Route set selected by the session.
#[derive(Debug, Clone)]
pub enum RouteTree {
    Unauthenticated(Arc<AuthRoutes>),
    Authenticated(Arc<ConsoleRoutes>),
}

impl RouteTree {
    pub fn resolve(&self, path: &str) -> Resolution {
        match self {
            RouteTree::Unauthenticated(routes) => routes.resolve(path),
            RouteTree::Authenticated(routes) => routes.resolve(path),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, RouteTree::Authenticated(_))
    }
}
