//! HTTP endpoint that turns project inquiries into notification emails.
//!
//! Exposes the order route (plus its hosted-function alias), a health probe,
//! and Prometheus metrics, behind permissive CORS and request tracing.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use domain::{DispatchError, NotificationSettings, OrderDispatcher};
use mailer::EmailProvider;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowHeaders, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Primary order submission path.
pub const ORDER_PATH: &str = "/send-order-email";

/// Alias matching the hosted-function URL layout used by existing clients.
pub const FUNCTION_ORDER_PATH: &str = "/functions/v1/send-order-email";

/// Request headers browsers may send with an order.
pub const ALLOWED_HEADERS: [&str; 8] = [
    "authorization",
    "x-client-info",
    "apikey",
    "content-type",
    "x-supabase-client-platform",
    "x-supabase-client-platform-version",
    "x-supabase-client-runtime",
    "x-supabase-client-runtime-version",
];

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<P: EmailProvider + 'static>(
    state: Arc<AppState<P>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let order_route = || post(routes::orders::submit::<P>).options(routes::orders::preflight);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(ORDER_PATH, order_route())
        .route(FUNCTION_ORDER_PATH, order_route())
        .with_state(state)
        .merge(metrics_router)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS policy: any origin, `POST`/`OPTIONS`, and the client headers above.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list(
            ALLOWED_HEADERS.map(HeaderName::from_static),
        ))
}

/// Creates application state around `provider`.
///
/// Fails only if the notification template cannot be compiled.
pub fn create_state<P: EmailProvider + 'static>(
    provider: P,
    settings: NotificationSettings,
) -> Result<Arc<AppState<P>>, DispatchError> {
    let dispatcher = OrderDispatcher::new(provider, settings)?;
    Ok(Arc::new(AppState { dispatcher }))
}
