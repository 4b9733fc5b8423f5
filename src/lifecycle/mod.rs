//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to the server → stop accepting → drain → exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) or broadcast → graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
