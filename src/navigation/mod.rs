//! Navigation model subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDeclaration
//!     → path.rs (canonical path + NavigationEntry)
//!     → registry.rs (reject repeated paths)
//!     → accumulator.rs (file under GroupKey, keep order)
//!     → NavigationGroups (frozen, Arc-shared)
//!     → publisher.rs (set_routes, once per mount)
//!     → SharedNavigation (read by the sidebar)
//! ```
//!
//! # Design Decisions
//! - Groups are a closed enum, all pre-initialized
//! - `path`, `id` and `permission` of an entry are the same string
//! - Duplicates are dropped with a warning, never an error

pub mod accumulator;
pub mod entry;
pub mod group;
pub mod path;
pub mod publisher;
pub mod registry;

pub use accumulator::{NavigationAccumulator, NavigationGroups};
pub use entry::{CanonicalPath, NavigationEntry, RouteDeclaration};
pub use group::GroupKey;
pub use publisher::{DeclarationKey, NavigationPublisher, NavigationStore, SharedNavigation};
pub use registry::DeduplicationRegistry;
