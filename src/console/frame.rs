//! One rendered frame of the console: the route tree plus what a path shows.

use serde::Serialize;
use std::sync::Arc;

use crate::console::ConsoleMount;
use crate::observability::metrics;
use crate::routing::{PathParams, Resolution, RouteTree};
use crate::views::{Layout, Rendered, ViewId};

/// What a path displays once lazy views have been through the suspense boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    View {
        layout: Layout,
        view: ViewId,
        route: String,
        params: PathParams,
    },
    Redirect {
        to: String,
    },
    Fallback {
        layout: Layout,
        view: ViewId,
    },
    Loading {
        layout: Layout,
        view: ViewId,
        placeholder: String,
    },
    Failed {
        layout: Layout,
        view: ViewId,
        error: String,
        retryable: bool,
    },
}

impl Page {
    fn outcome(&self) -> &'static str {
        match self {
            Page::View { .. } => "view",
            Page::Redirect { .. } => "redirect",
            Page::Fallback { .. } => "fallback",
            Page::Loading { .. } => "loading",
            Page::Failed { .. } => "failed",
        }
    }
}

/// Route tree for one render, with the mount it came from when authenticated.
#[derive(Debug, Clone)]
pub struct Frame {
    tree: RouteTree,
    mount: Option<Arc<ConsoleMount>>,
}

impl Frame {
    pub(crate) fn new(tree: RouteTree, mount: Option<Arc<ConsoleMount>>) -> Self {
        Self { tree, mount }
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn mount(&self) -> Option<&Arc<ConsoleMount>> {
        self.mount.as_ref()
    }

    /// Resolve `path` without touching lazy views.
    pub fn resolve(&self, path: &str) -> Resolution {
        self.tree.resolve(path)
    }

    /// Resolve `path` and render lazy views through the mount's suspense boundary.
    pub async fn render(&self, path: &str) -> Page {
        let page = match self.resolve(path) {
            Resolution::Redirect { to } => Page::Redirect { to },
            Resolution::Fallback { layout, view } => Page::Fallback { layout, view },
            Resolution::Render {
                layout,
                slot,
                route,
                params,
            } => match (&self.mount, slot.is_lazy()) {
                (Some(mount), true) => match mount.suspense().render(slot.view).await {
                    Rendered::Ready(_) => Page::View {
                        layout,
                        view: slot.view,
                        route,
                        params,
                    },
                    Rendered::Placeholder(placeholder) => Page::Loading {
                        layout,
                        view: slot.view,
                        placeholder,
                    },
                    Rendered::Failed { view, error } => Page::Failed {
                        layout,
                        view,
                        error,
                        retryable: true,
                    },
                },
                _ => Page::View {
                    layout,
                    view: slot.view,
                    route,
                    params,
                },
            },
        };

        metrics::record_resolution(page.outcome());
        tracing::debug!(path = %path, outcome = page.outcome(), "Path rendered");
        page
    }
}
