//! The order dispatcher: validate, render, send.

use std::time::Instant;

use common::{OrderAccepted, OrderRequest};
use mailer::{EmailProvider, OutgoingEmail};

use crate::error::{DispatchError, Result};
use crate::notification::{Notification, NotificationRenderer, NotificationSettings};
use crate::validation::{ValidatedOrder, validate};

/// Message returned to the caller when an order was sent.
pub const ACCEPTED_MESSAGE: &str = "Order submitted successfully";

/// Validates incoming orders and forwards each accepted one as a single
/// notification email.
///
/// The dispatcher is stateless apart from its read-only provider handle and
/// template, so one instance can serve any number of concurrent requests.
pub struct OrderDispatcher<P: EmailProvider> {
    provider: P,
    renderer: NotificationRenderer,
    settings: NotificationSettings,
}

impl<P: EmailProvider> OrderDispatcher<P> {
    /// Creates a dispatcher that delivers through `provider`.
    pub fn new(provider: P, settings: NotificationSettings) -> Result<Self> {
        let renderer = NotificationRenderer::new(settings.brand.clone())?;
        Ok(Self {
            provider,
            renderer,
            settings,
        })
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Validates, renders, and sends one order.
    ///
    /// Validation finishes before any send is attempted; a rejected request
    /// sends nothing. Provider failures are not retried.
    #[tracing::instrument(skip(self, request))]
    pub async fn submit_order(&self, request: &OrderRequest) -> Result<OrderAccepted> {
        metrics::counter!("order_requests_total").increment(1);
        let started = Instant::now();

        let result = self.dispatch(request).await;

        let outcome = match &result {
            Ok(_) => "sent",
            Err(DispatchError::Invalid(_)) => "rejected",
            Err(_) => "failed",
        };
        metrics::histogram!("order_dispatch_duration_seconds", "outcome" => outcome)
            .record(started.elapsed().as_secs_f64());

        result
    }

    async fn dispatch(&self, request: &OrderRequest) -> Result<OrderAccepted> {
        let order = validate(request).map_err(|err| {
            tracing::warn!(reason = err.reason(), ?err, "order rejected");
            metrics::counter!("order_rejections_total", "reason" => err.reason()).increment(1);
            err
        })?;

        tracing::info!(
            service = order.service(),
            budget = order.budget(),
            name = order.name(),
            email = order.email(),
            "sending order email"
        );

        let notification = self.renderer.render(&order).map_err(|err| {
            tracing::error!(error = %err, "failed to render order notification");
            DispatchError::Render(err)
        })?;
        let email = self.compose(&order, notification);

        match self.provider.send(&email).await {
            Ok(ack) => {
                tracing::info!(message_id = %ack.id, "order email sent");
                metrics::counter!("order_emails_sent_total").increment(1);
                Ok(OrderAccepted::new(ACCEPTED_MESSAGE))
            }
            Err(err) => {
                tracing::error!(error = %err, "error sending order email");
                metrics::counter!("order_delivery_failures_total").increment(1);
                Err(DispatchError::DeliveryFailed(err))
            }
        }
    }

    /// Addresses a rendered notification. Replies go straight to the lead.
    pub fn compose(&self, order: &ValidatedOrder, notification: Notification) -> OutgoingEmail {
        OutgoingEmail {
            from: self.settings.from.clone(),
            to: self.settings.to.clone(),
            subject: notification.subject,
            html: notification.html,
            reply_to: order.email().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use mailer::InMemoryEmailProvider;

    use super::*;
    use crate::error::OrderError;

    fn request() -> OrderRequest {
        OrderRequest {
            service: "AI Chatbot".to_string(),
            budget: "$10K - $25K".to_string(),
            name: "Sam Lee".to_string(),
            email: "sam@lee.dev".to_string(),
            details: String::new(),
        }
    }

    fn dispatcher() -> (OrderDispatcher<InMemoryEmailProvider>, InMemoryEmailProvider) {
        let provider = InMemoryEmailProvider::new();
        let dispatcher =
            OrderDispatcher::new(provider.clone(), NotificationSettings::default()).unwrap();
        (dispatcher, provider)
    }

    #[tokio::test]
    async fn test_accepted_order_sends_one_email() {
        let (dispatcher, provider) = dispatcher();

        let accepted = dispatcher.submit_order(&request()).await.unwrap();

        assert!(accepted.success);
        assert_eq!(accepted.message, ACCEPTED_MESSAGE);
        assert_eq!(provider.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_outgoing_email_is_addressed_from_settings() {
        let (dispatcher, provider) = dispatcher();

        dispatcher.submit_order(&request()).await.unwrap();

        let sent = provider.last_sent().unwrap();
        let settings = NotificationSettings::default();
        assert_eq!(sent.from, settings.from);
        assert_eq!(sent.to, settings.to);
        assert_eq!(sent.reply_to, "sam@lee.dev");
        assert_eq!(sent.subject, "New Project Inquiry: AI Chatbot - Sam Lee");
    }

    #[tokio::test]
    async fn test_rejected_order_sends_nothing() {
        let (dispatcher, provider) = dispatcher();
        let bad = OrderRequest {
            email: "sam".to_string(),
            ..request()
        };

        let err = dispatcher.submit_order(&bad).await.unwrap_err();

        assert!(matches!(err, DispatchError::Invalid(OrderError::InvalidEmail)));
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_not_retried() {
        let (dispatcher, provider) = dispatcher();
        provider.set_fail_on_send(true);

        let err = dispatcher.submit_order(&request()).await.unwrap_err();

        assert!(matches!(err, DispatchError::DeliveryFailed(_)));
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_each_call_sends_a_new_email() {
        let (dispatcher, provider) = dispatcher();

        dispatcher.submit_order(&request()).await.unwrap();
        dispatcher.submit_order(&request()).await.unwrap();

        let sent = provider.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }
}
