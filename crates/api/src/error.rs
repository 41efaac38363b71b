//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::ErrorBody;
use domain::DispatchError;

/// Message returned for every server-side failure.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as an order.
    BadRequest(String),
    /// The dispatcher refused or failed the order.
    Dispatch(DispatchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Dispatch(err) => dispatch_error_to_response(err),
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

fn dispatch_error_to_response(err: DispatchError) -> (StatusCode, String) {
    match err {
        DispatchError::Invalid(order_err) => (StatusCode::BAD_REQUEST, order_err.to_string()),
        DispatchError::Render(_) | DispatchError::DeliveryFailed(_) => {
            tracing::error!(error = %err, "order dispatch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                DELIVERY_FAILED_MESSAGE.to_string(),
            )
        }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        ApiError::Dispatch(err)
    }
}
