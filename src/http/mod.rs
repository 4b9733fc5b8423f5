//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs
//!         /api/session      → session login/logout, then re-render
//!         /api/navigation   → published navigation (sidebar view optional)
//!         /{*path}          → console frame → Page → status code + JSON
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, ConsoleServer};
