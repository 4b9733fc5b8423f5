//! Operator console routing core.
//!
//! Session-gated route composition plus the grouped sidebar navigation it
//! publishes, with an HTTP shell that serves both.

pub mod config;
pub mod console;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod session;
pub mod views;

pub use config::ConsoleConfig;
pub use console::{Console, ConsoleOptions, Frame, Page};
pub use http::ConsoleServer;
pub use lifecycle::Shutdown;
pub use navigation::{NavigationGroups, SharedNavigation};
pub use session::SessionState;
