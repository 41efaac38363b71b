//! JSON bodies exchanged between the wizard and the dispatcher.

use serde::{Deserialize, Serialize};

/// An order as submitted by the wizard.
///
/// `service` and `budget` carry catalog labels, not ids. Absent fields
/// deserialize to empty strings so that presence is checked by validation
/// rather than by the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    pub service: String,
    pub budget: String,
    pub name: String,
    pub email: String,
    pub details: String,
}

/// Success body returned by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAccepted {
    pub success: bool,
    pub message: String,
}

impl OrderAccepted {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Error body returned for every non-success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
