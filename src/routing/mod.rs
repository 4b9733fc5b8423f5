//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Composition (once per mount):
//!     ConsoleRoute[] (static, ordered)
//!     → navigation::path::build (canonical path + entry)
//!     → navigation accumulator (dedupe, group)
//!     → bind path to view slot
//!     → Freeze as ConsoleRoutes + NavigationGroups
//!
//! Path Lookup:
//!     URL path
//!     → router.rs (RouteTree for the session)
//!     → matcher.rs (pattern match, capture params)
//!     → Return: Render | Redirect | Fallback
//! ```
//!
//! # Design Decisions
//! - Routes composed once per mount, immutable afterwards
//! - Deterministic: same path always resolves the same way
//! - First match wins (declaration order)

pub mod matcher;
pub mod router;

pub use matcher::{Matcher, PathParams, PatternMatcher};
pub use router::{
    AuthRoutes, ConsoleRoute, ConsoleRoutes, Resolution, RouteBinding, RouteError, RouteTree,
};
