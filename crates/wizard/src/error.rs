//! Submit gateway error types.

use thiserror::Error;

/// Errors returned by an [`OrderGateway`](crate::OrderGateway).
///
/// The wizard treats every variant the same way; the distinction only
/// matters for logs.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The dispatcher answered with a non-success status.
    #[error("Order rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request could not be sent or the response could not be read.
    #[error("Order transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failure raised by a non-HTTP gateway.
    #[error("Order gateway unavailable: {0}")]
    Unavailable(String),
}
