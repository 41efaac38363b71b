//! Integration tests for the order dispatcher.
//!
//! These tests drive `OrderDispatcher::submit_order` end to end against
//! in-memory and custom providers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use common::{BudgetTier, OrderRequest, ServiceKind};
use domain::{DispatchError, NotificationSettings, OrderDispatcher, OrderError, OrderField};
use mailer::{EmailProvider, InMemoryEmailProvider, OutgoingEmail, ProviderAck, ProviderError};

fn jane(details: &str) -> OrderRequest {
    OrderRequest {
        service: ServiceKind::Website.label().to_string(),
        budget: BudgetTier::Small.label().to_string(),
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        details: details.to_string(),
    }
}

fn create_dispatcher() -> (OrderDispatcher<InMemoryEmailProvider>, InMemoryEmailProvider) {
    let provider = InMemoryEmailProvider::new();
    let dispatcher = OrderDispatcher::new(
        provider.clone(),
        NotificationSettings {
            from: "Studio <orders@studio.test>".to_string(),
            to: vec!["leads@studio.test".to_string()],
            brand: "Studio".to_string(),
        },
    )
    .unwrap();
    (dispatcher, provider)
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn missing_any_required_field_is_rejected_without_send() {
        let (dispatcher, provider) = create_dispatcher();

        let cases = [
            OrderRequest { service: String::new(), ..jane("") },
            OrderRequest { budget: String::new(), ..jane("") },
            OrderRequest { name: String::new(), ..jane("") },
            OrderRequest { email: String::new(), ..jane("") },
            OrderRequest::default(),
        ];

        for request in cases {
            let err = dispatcher.submit_order(&request).await.unwrap_err();
            assert!(matches!(err, DispatchError::Invalid(OrderError::MissingFields)));
        }
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (dispatcher, provider) = create_dispatcher();

        for email in ["foo", "foo@bar", "@bar.com"] {
            let request = OrderRequest {
                email: email.to_string(),
                ..jane("")
            };
            let err = dispatcher.submit_order(&request).await.unwrap_err();
            assert!(matches!(err, DispatchError::Invalid(OrderError::InvalidEmail)));
        }
        assert_eq!(provider.sent_count(), 0);
    }

    #[tokio::test]
    async fn overlong_fields_are_rejected() {
        let (dispatcher, provider) = create_dispatcher();

        let cases = [
            (
                OrderRequest {
                    name: "x".repeat(101),
                    ..jane("")
                },
                OrderField::Name,
            ),
            (
                OrderRequest {
                    email: format!("{}@example.com", "x".repeat(244)),
                    ..jane("")
                },
                OrderField::Email,
            ),
            (jane(&"x".repeat(5001)), OrderField::Details),
        ];

        for (request, expected) in cases {
            let err = dispatcher.submit_order(&request).await.unwrap_err();
            match err {
                DispatchError::Invalid(OrderError::FieldTooLong { field, .. }) => {
                    assert_eq!(field, expected)
                }
                other => panic!("expected FieldTooLong for {expected}, got {other:?}"),
            }
        }
        assert_eq!(provider.sent_count(), 0);
    }
}

mod notification {
    use super::*;

    #[tokio::test]
    async fn empty_details_omit_description_block() {
        let (dispatcher, provider) = create_dispatcher();

        let accepted = dispatcher.submit_order(&jane("")).await.unwrap();
        assert!(accepted.success);

        let sent = provider.last_sent().unwrap();
        assert_eq!(sent.subject, "New Project Inquiry: Website - Jane Doe");
        assert_eq!(sent.reply_to, "jane@example.com");
        assert_eq!(sent.to, vec!["leads@studio.test".to_string()]);
        assert!(sent.html.contains("$5K - $10K"));
        assert!(!sent.html.contains("Project Description"));
    }

    #[tokio::test]
    async fn details_render_description_block() {
        let (dispatcher, provider) = create_dispatcher();

        dispatcher.submit_order(&jane("Need a blog")).await.unwrap();

        let html = provider.last_sent().unwrap().html;
        assert!(html.contains("Project Description"));
        assert!(html.contains(">Need a blog</p>"));
    }
}

mod delivery {
    use super::*;

    /// Provider that counts calls and always fails with a vendor-specific message.
    #[derive(Default)]
    struct BrokenProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl EmailProvider for BrokenProvider {
        async fn send(&self, _email: &OutgoingEmail) -> Result<ProviderAck, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::Rejected {
                status: 403,
                message: "The studio.test domain is not verified".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn provider_failure_surfaces_once_as_delivery_failed() {
        let provider = Arc::new(BrokenProvider::default());
        let dispatcher =
            OrderDispatcher::new(provider.clone(), NotificationSettings::default()).unwrap();

        let err = dispatcher.submit_order(&jane("")).await.unwrap_err();

        match err {
            DispatchError::DeliveryFailed(inner) => {
                assert!(inner.to_string().contains("not verified"));
            }
            other => panic!("expected DeliveryFailed, got {other:?}"),
        }
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_submissions_each_send_once() {
        let (dispatcher, provider) = create_dispatcher();
        let dispatcher = Arc::new(dispatcher);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    let request = OrderRequest {
                        name: format!("Lead {i}"),
                        ..jane("")
                    };
                    dispatcher.submit_order(&request).await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(provider.sent_count(), 8);
    }
}
