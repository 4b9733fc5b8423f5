//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the console, session and navigation store from config
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and shut down gracefully

use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ConsoleConfig;
use crate::console::{catalog, Console, ConsoleError, ConsoleOptions};
use crate::http::handlers;
use crate::lifecycle::signals::shutdown_signal;
use crate::navigation::SharedNavigation;
use crate::session::{ApiKeySession, SessionSource};
use crate::views::BundleDirLoader;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub console: Arc<Console>,
    pub session: Arc<ApiKeySession>,
    pub navigation: Arc<SharedNavigation>,
}

/// HTTP server hosting one console.
pub struct ConsoleServer {
    router: Router,
    config: ConsoleConfig,
    state: AppState,
}

impl ConsoleServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self, ConsoleError> {
        let navigation = Arc::new(SharedNavigation::new());
        let console = Arc::new(Console::new(
            catalog::console_routes(),
            navigation.clone(),
            Arc::new(BundleDirLoader::new(&config.views.bundle_dir)),
            ConsoleOptions::from(&config),
        )?);
        let session = Arc::new(ApiKeySession::from_config(&config.session));

        // Initial render, as the shell would do on first paint.
        console.render(session.session())?;

        let state = AppState {
            console,
            session,
            navigation,
        };
        let router = Self::build_router(&config, state.clone());
        Ok(Self {
            router,
            config,
            state,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ConsoleConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/status", get(handlers::get_status))
            .route(
                "/api/session",
                get(handlers::get_session)
                    .post(handlers::login)
                    .delete(handlers::logout),
            )
            .route("/api/navigation", get(handlers::get_navigation))
            .route("/api/navigation/sidebar", get(handlers::get_sidebar))
            .route("/", get(handlers::render_page))
            .route("/{*path}", get(handlers::render_page))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server until Ctrl+C or a shutdown broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Shared state, for embedding and tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
