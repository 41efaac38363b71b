//! Order request validation.

use std::sync::LazyLock;

use common::OrderRequest;
use common::limits::{DETAILS_MAX_LEN, EMAIL_MAX_LEN, NAME_MAX_LEN};
use regex::Regex;

use crate::error::{OrderError, OrderField};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern regex")
});

/// An order request that passed every check.
///
/// Only [`validate`] constructs this type, so holding one means the request
/// is safe to render and send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOrder {
    request: OrderRequest,
}

impl ValidatedOrder {
    pub fn service(&self) -> &str {
        &self.request.service
    }

    pub fn budget(&self) -> &str {
        &self.request.budget
    }

    pub fn name(&self) -> &str {
        &self.request.name
    }

    pub fn email(&self) -> &str {
        &self.request.email
    }

    /// Free-text description; may be empty.
    pub fn details(&self) -> &str {
        &self.request.details
    }

    pub fn has_details(&self) -> bool {
        !self.request.details.is_empty()
    }
}

/// Returns true if `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates an order request.
///
/// Checks run in a fixed order and the first failure is returned:
/// presence, then email shape, then field lengths.
pub fn validate(request: &OrderRequest) -> Result<ValidatedOrder, OrderError> {
    let required = [
        &request.service,
        &request.budget,
        &request.name,
        &request.email,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(OrderError::MissingFields);
    }

    if !is_valid_email(&request.email) {
        return Err(OrderError::InvalidEmail);
    }

    check_length(OrderField::Name, &request.name, NAME_MAX_LEN)?;
    check_length(OrderField::Email, &request.email, EMAIL_MAX_LEN)?;
    check_length(OrderField::Details, &request.details, DETAILS_MAX_LEN)?;

    Ok(ValidatedOrder {
        request: request.clone(),
    })
}

fn check_length(field: OrderField, value: &str, max: usize) -> Result<(), OrderError> {
    let length = value.encode_utf16().count();
    if length > max {
        return Err(OrderError::FieldTooLong { field, length, max });
    }
    Ok(())
}
