//! Shared types for the order pipeline.
//!
//! Both sides of the pipeline depend on this crate:
//! - the wizard, which builds an [`OrderRequest`] from catalog selections
//! - the dispatcher, which validates that request against [`limits`]

pub mod catalog;
pub mod limits;
pub mod wire;

pub use catalog::{BudgetTier, ServiceKind, UnknownCatalogId};
pub use wire::{ErrorBody, OrderAccepted, OrderRequest};
