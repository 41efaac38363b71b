//! The order intent collected by the wizard.

use common::{BudgetTier, OrderRequest, ServiceKind};

use crate::step::WizardStep;

/// What the lead has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderIntent {
    pub service: Option<ServiceKind>,
    pub budget: Option<BudgetTier>,
    pub name: String,
    pub email: String,
    pub details: String,
}

impl OrderIntent {
    /// Returns true if nothing has been entered.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if both contact fields are filled in.
    pub fn has_contact(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Builds the wire request. Catalog selections are sent as labels;
    /// an unset selection becomes an empty string.
    pub fn to_request(&self) -> OrderRequest {
        OrderRequest {
            service: self.service.map(|s| s.label().to_string()).unwrap_or_default(),
            budget: self.budget.map(|b| b.label().to_string()).unwrap_or_default(),
            name: self.name.clone(),
            email: self.email.clone(),
            details: self.details.clone(),
        }
    }
}

/// Returns true if the lead may leave `step`: Continue on the first two
/// steps, Submit on the last.
///
/// This is the client-side gate only. Email shape and field lengths are
/// checked by the dispatcher.
pub fn can_advance(step: WizardStep, intent: &OrderIntent) -> bool {
    match step {
        WizardStep::Service => intent.service.is_some(),
        WizardStep::Budget => intent.budget.is_some(),
        WizardStep::Details => intent.has_contact(),
    }
}
