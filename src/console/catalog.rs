//! The operator console's route declarations.
//!
//! Order matters: it is the sidebar order within each group, and the first
//! passenger route is the default landing page.

use crate::navigation::{GroupKey, RouteDeclaration};
use crate::routing::ConsoleRoute;
use crate::views::{ViewId, ViewSlot};

fn route(
    parent: GroupKey,
    link: &str,
    title: &str,
    icon: &str,
    sidebar: bool,
    slot: ViewSlot,
) -> ConsoleRoute {
    ConsoleRoute::new(RouteDeclaration::new(parent, link, title, icon, sidebar), slot)
}

/// Authenticated routes, in menu order.
pub fn console_routes() -> Vec<ConsoleRoute> {
    use GroupKey::*;

    vec![
        route(
            Passengers,
            "main",
            "Yo'lovchilar",
            "admins",
            true,
            ViewSlot::eager(ViewId::Passengers),
        ),
        route(
            Passengers,
            "active_passengers",
            "Aktiv yo‘lovchilar",
            "admin",
            true,
            ViewSlot::eager(ViewId::ActivePassengers),
        ),
        route(
            Passengers,
            "statistics",
            "Statistika: yo‘lovchi",
            "statistics",
            true,
            ViewSlot::eager(ViewId::PassengerStatistics),
        ),
        route(
            Drivers,
            "main",
            "Haydovchilar",
            "driving",
            true,
            ViewSlot::eager(ViewId::Drivers),
        ),
        route(
            Drivers,
            "driver/:id",
            "Haydovchilar",
            "",
            false,
            ViewSlot::lazy(ViewId::Driver),
        ),
        route(
            Drivers,
            "active",
            "Aktiv haydovchilar",
            "smart_car",
            true,
            ViewSlot::eager(ViewId::ActiveDrivers),
        ),
        route(
            Drivers,
            "car/:id",
            "",
            "",
            false,
            ViewSlot::lazy(ViewId::Car),
        ),
        route(
            Drivers,
            "cars",
            "Mashinalar",
            "car",
            true,
            ViewSlot::eager(ViewId::Vehicles),
        ),
        route(
            Drivers,
            "route",
            "Viloyat qatnovi",
            "routing",
            true,
            ViewSlot::eager(ViewId::RegionRoute),
        ),
        route(
            Drivers,
            "statistics",
            "Statistika: haydovchi",
            "graph",
            true,
            ViewSlot::eager(ViewId::DriverStatistics),
        ),
        route(
            Infos,
            "calendar",
            "Kalendar",
            "calendar",
            true,
            ViewSlot::eager(ViewId::UndefinedPage),
        ),
        route(
            Infos,
            "chats",
            "Chatlar",
            "chat",
            true,
            ViewSlot::eager(ViewId::UndefinedPage),
        ),
        route(
            Admins,
            "admin",
            "Adminlar",
            "admin",
            true,
            ViewSlot::eager(ViewId::Admins),
        ),
        route(
            Admins,
            "rolls",
            "Rollar",
            "rolls",
            true,
            ViewSlot::eager(ViewId::Rolls),
        ),
        route(
            Settings,
            "price_control",
            "Narx nazorati",
            "price_control",
            true,
            ViewSlot::eager(ViewId::Price),
        ),
        route(
            Settings,
            "sms",
            "SMS xabarnoma",
            "sms",
            true,
            ViewSlot::eager(ViewId::Sms),
        ),
    ]
}
