//! Order submission endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use common::{OrderAccepted, OrderRequest};
use domain::OrderDispatcher;
use mailer::EmailProvider;

use crate::error::ApiError;

/// Message returned when the body is not a JSON order.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Shared application state accessible from all handlers.
pub struct AppState<P: EmailProvider> {
    pub dispatcher: OrderDispatcher<P>,
}

/// POST /send-order-email — validate an order and email it to the business.
#[tracing::instrument(skip(state, payload))]
pub async fn submit<P: EmailProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<Json<OrderAccepted>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "unreadable order body");
        metrics::counter!("order_rejections_total", "reason" => "invalid_body").increment(1);
        ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    })?;

    let accepted = state.dispatcher.submit_order(&request).await?;
    Ok(Json(accepted))
}

/// OPTIONS /send-order-email — bare pre-flight without CORS request headers.
///
/// Requests carrying `Access-Control-Request-Method` are answered by the
/// CORS layer before reaching this handler.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
