//! Router assembly and the cross-cutting layer stack.
//!
//! Layer order, outermost first:
//!
//! ```text
//! request id → trace → propagate request id → CORS → compression
//!   → error boundary → catch panic → timeout error handling → timeout → routes
//! ```
//!
//! The error boundary sits inside everything that adds headers and outside
//! everything that can fail, so every failure reaches it as a marked response.

use std::sync::Arc;
use std::time::Duration;

use axum::{error_handling::HandleErrorLayer, http::HeaderValue, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::adapters::http::home::{home_routes, HomeState};
use crate::adapters::http::middleware::{
    error_boundary_middleware, panic_response, route_not_found, timeout_error_handler,
    ErrorBoundaryState,
};
use crate::adapters::http::users::{user_routes, UsersAppState};
use crate::config::ServerConfig;
use crate::ports::UserRepository;

/// Builds the complete application router.
pub fn build_router(repository: Arc<dyn UserRepository>, config: &ServerConfig) -> Router {
    let boundary = ErrorBoundaryState::for_environment(&config.environment);
    let budget = Duration::from_secs(config.request_timeout_secs);

    Router::new()
        .merge(home_routes(HomeState::new(repository.clone())))
        .merge(user_routes(UsersAppState::new(repository)))
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors_layer(config))
                .layer(CompressionLayer::new())
                .layer(middleware::from_fn_with_state(
                    boundary,
                    error_boundary_middleware,
                ))
                .layer(CatchPanicLayer::custom(panic_response))
                .layer(HandleErrorLayer::new(timeout_error_handler(budget)))
                .timeout(budget),
        )
}

/// CORS for the configured origins; no origins means no cross-origin access.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::new();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
