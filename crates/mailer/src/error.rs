//! Provider error types.

use thiserror::Error;

/// Errors reported by an email provider.
///
/// The message text is meant for server-side logs; callers of the HTTP API
/// only ever see a generic failure.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No API key was configured for the provider.
    #[error("Provider API key is not configured")]
    MissingApiKey,

    /// The provider answered with a non-success status.
    #[error("Provider rejected message ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a usable response.
    #[error("Provider transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Failure raised by a non-HTTP provider.
    #[error("Provider error: {0}")]
    Other(String),
}
