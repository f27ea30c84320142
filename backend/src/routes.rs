//! Router builder.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ConfigError};
use crate::{cors, error, handlers};

fn api_routes() -> Router {
    Router::new().route(
        "/health",
        get(handlers::health::health).fallback(error::method_not_allowed),
    )
}

/// Build the router with all routes and middleware.
///
/// Routes are always served from the root. When a base path is configured they are also
/// nested under it, so the app works both behind a prefix-stripping proxy and without one.
pub fn build_router(config: &AppConfig) -> Result<Router, ConfigError> {
    let mut app = api_routes();
    if let Some(prefix) = config.mount_prefix()? {
        app = app.nest(&prefix, api_routes());
    }

    // CORS is added last so it sits outermost and answers preflights itself.
    Ok(app
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors::permissive_layer()))
}
