//! Email provider trait and in-memory implementation.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ProviderError;

/// A fully composed message ready to hand to a provider.
///
/// Field names follow the provider wire format, so the struct serializes
/// directly into a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub reply_to: String,
}

/// Acknowledgement returned by a provider for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderAck {
    /// The message ID assigned by the provider.
    pub id: String,
}

/// Trait for transactional email delivery.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Sends a single message. Implementations must not retry.
    async fn send(&self, email: &OutgoingEmail) -> Result<ProviderAck, ProviderError>;
}

#[async_trait]
impl<P: EmailProvider + ?Sized> EmailProvider for Arc<P> {
    async fn send(&self, email: &OutgoingEmail) -> Result<ProviderAck, ProviderError> {
        (**self).send(email).await
    }
}

#[derive(Debug, Default)]
struct InMemoryEmailState {
    sent: Vec<OutgoingEmail>,
    fail_on_send: bool,
}

/// In-memory email provider for testing and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailProvider {
    state: Arc<RwLock<InMemoryEmailState>>,
}

impl InMemoryEmailProvider {
    /// Creates a new in-memory provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the provider to reject every send until reset.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state.write().unwrap().fail_on_send = fail;
    }

    /// Returns the number of messages accepted so far.
    pub fn sent_count(&self) -> usize {
        self.state.read().unwrap().sent.len()
    }

    /// Returns a copy of every accepted message, oldest first.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.state.read().unwrap().sent.clone()
    }

    pub fn last_sent(&self) -> Option<OutgoingEmail> {
        self.state.read().unwrap().sent.last().cloned()
    }
}

#[async_trait]
impl EmailProvider for InMemoryEmailProvider {
    async fn send(&self, email: &OutgoingEmail) -> Result<ProviderAck, ProviderError> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_send {
            return Err(ProviderError::Other("Mailbox unavailable".to_string()));
        }

        state.sent.push(email.clone());
        tracing::debug!(to = ?email.to, subject = %email.subject, "recorded outgoing email");

        Ok(ProviderAck {
            id: uuid::Uuid::new_v4().to_string(),
        })
    }
}
