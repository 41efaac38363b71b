//! Dispatcher error types.

use mailer::ProviderError;
use thiserror::Error;

/// Which input field broke a length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Name,
    Email,
    Details,
}

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Name => "name",
            OrderField::Email => "email",
            OrderField::Details => "details",
        }
    }
}

impl std::fmt::Display for OrderField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation failures. The display text is what the caller receives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// One of service, budget, name, or email is empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The email does not look like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,

    /// A field exceeds its character limit.
    #[error("Field length exceeded")]
    FieldTooLong {
        field: OrderField,
        length: usize,
        max: usize,
    },
}

impl OrderError {
    /// Short machine-readable reason, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::MissingFields => "missing_fields",
            OrderError::InvalidEmail => "invalid_email",
            OrderError::FieldTooLong { .. } => "field_too_long",
        }
    }
}

/// Errors that can occur while dispatching an order.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request failed validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] OrderError),

    /// The notification template could not be rendered.
    #[error("Failed to render notification: {0}")]
    Render(#[from] tera::Error),

    /// The provider did not accept the message.
    #[error("Email delivery failed: {0}")]
    DeliveryFailed(#[from] ProviderError),
}

/// Convenience type alias for dispatcher results.
pub type Result<T> = std::result::Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_too_long_hides_detail_in_message() {
        let err = OrderError::FieldTooLong {
            field: OrderField::Details,
            length: 5001,
            max: 5000,
        };
        assert_eq!(err.to_string(), "Field length exceeded");
        assert_eq!(err.reason(), "field_too_long");
    }

    #[test]
    fn test_invalid_is_transparent() {
        let err = DispatchError::from(OrderError::InvalidEmail);
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[test]
    fn test_delivery_failure_keeps_provider_message() {
        let err = DispatchError::from(ProviderError::Rejected {
            status: 422,
            message: "domain not verified".to_string(),
        });
        assert!(err.to_string().contains("domain not verified"));
    }
}
