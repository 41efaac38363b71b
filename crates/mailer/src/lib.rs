//! Outbound notification email delivery.
//!
//! The dispatcher talks to an [`EmailProvider`] and never to a concrete
//! vendor. Two implementations ship with the crate:
//! - [`ResendProvider`] posts to the Resend HTTP API
//! - [`InMemoryEmailProvider`] records messages for tests and local runs

pub mod error;
pub mod provider;
pub mod resend;

pub use error::ProviderError;
pub use provider::{EmailProvider, InMemoryEmailProvider, OutgoingEmail, ProviderAck};
pub use resend::ResendProvider;
