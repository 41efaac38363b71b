//! Fixed catalogs offered by the order wizard.
//!
//! Each entry has a stable machine id (used inside the wizard) and a
//! human-readable label (the only form that ever crosses the wire).

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string does not name any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {catalog} id: {id}")]
pub struct UnknownCatalogId {
    pub catalog: &'static str,
    pub id: String,
}

/// The kind of project a lead is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Website,
    Chatbot,
    Webapp,
    Design,
}

impl ServiceKind {
    /// All services, in the order they are presented.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Website,
        ServiceKind::Chatbot,
        ServiceKind::Webapp,
        ServiceKind::Design,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceKind::Website => "website",
            ServiceKind::Chatbot => "chatbot",
            ServiceKind::Webapp => "webapp",
            ServiceKind::Design => "design",
        }
    }

    /// Returns the label shown to users and sent to the dispatcher.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Website => "Website",
            ServiceKind::Chatbot => "AI Chatbot",
            ServiceKind::Webapp => "Web App",
            ServiceKind::Design => "UI/UX Design",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ServiceKind {
    type Err = UnknownCatalogId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownCatalogId {
                catalog: "service",
                id: s.to_string(),
            })
    }
}

/// Budget range, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl BudgetTier {
    /// All tiers in ascending order.
    pub const ALL: [BudgetTier; 4] = [
        BudgetTier::Small,
        BudgetTier::Medium,
        BudgetTier::Large,
        BudgetTier::Enterprise,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BudgetTier::Small => "small",
            BudgetTier::Medium => "medium",
            BudgetTier::Large => "large",
            BudgetTier::Enterprise => "enterprise",
        }
    }

    /// Returns the label shown to users and sent to the dispatcher.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Small => "$5K - $10K",
            BudgetTier::Medium => "$10K - $25K",
            BudgetTier::Large => "$25K - $50K",
            BudgetTier::Enterprise => "$50K+",
        }
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BudgetTier {
    type Err = UnknownCatalogId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.id() == s)
            .ok_or_else(|| UnknownCatalogId {
                catalog: "budget",
                id: s.to_string(),
            })
    }
}
