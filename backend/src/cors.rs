//! Cross-origin policy applied to every response.

use axum::http::Method;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};

pub const ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Any origin, `GET`/`POST`/`OPTIONS`, and whatever headers the preflight asks for.
/// Credentials stay disabled, so the origin is answered with `*`.
pub fn permissive_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(AllowHeaders::mirror_request())
}
