//! View slots.
//!
//! # Data Flow
//! ```text
//! Route resolved → ViewSlot
//!     → Eager: rendered immediately
//!     → Lazy:  suspense.rs (per-mount load state)
//!              → loader.rs (fetch bundle)
//!              → Ready | Placeholder | Failed
//! ```
//!
//! # Design Decisions
//! - Views are identified, never rendered, by this crate
//! - Only lazy slots touch I/O; eager slots resolve synchronously
//! - A failed lazy load is contained to its own slot and retried on next render

pub mod loader;
pub mod suspense;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use loader::{BundleDirLoader, LoadError, ViewBundle, ViewLoader};
pub use suspense::{Rendered, Suspense};

/// Identifier of a view component mounted at a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Login,
    Registration,
    Passengers,
    ActivePassengers,
    PassengerStatistics,
    Drivers,
    Driver,
    ActiveDrivers,
    Car,
    Vehicles,
    RegionRoute,
    DriverStatistics,
    Admins,
    Rolls,
    Price,
    Sms,
    UndefinedPage,
}

impl ViewId {
    /// Name used for logs and bundle files.
    pub fn name(&self) -> &'static str {
        match self {
            ViewId::Login => "login",
            ViewId::Registration => "registration",
            ViewId::Passengers => "passengers",
            ViewId::ActivePassengers => "active_passengers",
            ViewId::PassengerStatistics => "passenger_statistics",
            ViewId::Drivers => "drivers",
            ViewId::Driver => "driver",
            ViewId::ActiveDrivers => "active_drivers",
            ViewId::Car => "car",
            ViewId::Vehicles => "vehicles",
            ViewId::RegionRoute => "region_route",
            ViewId::DriverStatistics => "driver_statistics",
            ViewId::Admins => "admins",
            ViewId::Rolls => "rolls",
            ViewId::Price => "price",
            ViewId::Sms => "sms",
            ViewId::UndefinedPage => "undefined_page",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a view's code becomes available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    Eager,
    Lazy,
}

/// A view bound to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSlot {
    pub view: ViewId,
    pub loading: Loading,
}

impl ViewSlot {
    pub const fn eager(view: ViewId) -> Self {
        Self { view, loading: Loading::Eager }
    }

    pub const fn lazy(view: ViewId) -> Self {
        Self { view, loading: Loading::Lazy }
    }

    pub fn is_lazy(&self) -> bool {
        self.loading == Loading::Lazy
    }
}

/// Layout shell wrapping a route set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Login and registration chrome.
    Auth,
    /// Sidebar and header chrome.
    Main,
}
