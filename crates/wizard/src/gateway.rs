//! Submit gateway trait, HTTP client, and in-memory implementation.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use common::{ErrorBody, OrderAccepted, OrderRequest};
use tokio::sync::Notify;

use crate::error::GatewayError;

/// Trait for delivering a finished order to the dispatcher.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderAccepted, GatewayError>;
}

/// Posts orders as JSON to the dispatcher endpoint.
///
/// No request timeout is set unless [`HttpOrderGateway::with_timeout`] is
/// used, so a stalled dispatcher keeps the wizard in its submitting state.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpOrderGateway {
    /// Creates a gateway posting to `endpoint`, e.g.
    /// `https://example.supabase.co/functions/v1/send-order-email`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: None,
        }
    }

    /// Sends `key` as both a bearer token and an `apikey` header.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GatewayError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn submit(&self, request: &OrderRequest) -> Result<OrderAccepted, GatewayError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key).header("apikey", key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<OrderAccepted>().await?)
    }
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    requests: Vec<OrderRequest>,
    fail_on_submit: bool,
}

/// In-memory gateway for testing.
///
/// Every call is recorded on entry. With [`InMemoryOrderGateway::hold_requests`]
/// each call then waits until the returned handle is notified, which keeps a
/// submission in flight for as long as a test needs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
    hold: Arc<RwLock<Option<Arc<Notify>>>>,
}

impl InMemoryOrderGateway {
    /// Creates a new in-memory gateway.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the gateway to reject every submission until reset.
    pub fn set_fail_on_submit(&self, fail: bool) {
        self.state.write().unwrap().fail_on_submit = fail;
    }

    /// Makes each subsequent call wait for a notification on the returned handle.
    pub fn hold_requests(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        *self.hold.write().unwrap() = Some(notify.clone());
        notify
    }

    /// Returns the number of submissions received.
    pub fn request_count(&self) -> usize {
        self.state.read().unwrap().requests.len()
    }

    /// Returns a copy of every received request, oldest first.
    pub fn requests(&self) -> Vec<OrderRequest> {
        self.state.read().unwrap().requests.clone()
    }
}

#[async_trait]
impl OrderGateway for InMemoryOrderGateway {
    async fn submit(&self, request: &OrderRequest) -> Result<OrderAccepted, GatewayError> {
        self.state.write().unwrap().requests.push(request.clone());

        let hold = self.hold.read().unwrap().clone();
        if let Some(notify) = hold {
            notify.notified().await;
        }

        if self.state.read().unwrap().fail_on_submit {
            return Err(GatewayError::Unavailable("Dispatcher unavailable".to_string()));
        }

        Ok(OrderAccepted::new("Order submitted successfully"))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn request() -> OrderRequest {
        OrderRequest {
            service: "Website".to_string(),
            budget: "$5K - $10K".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            details: String::new(),
        }
    }

    #[tokio::test]
    async fn test_http_gateway_posts_json_with_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/functions/v1/send-order-email"))
            .and(header("authorization", "Bearer anon-key"))
            .and(header("apikey", "anon-key"))
            .and(body_json(serde_json::to_value(request()).unwrap()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Order submitted successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway =
            HttpOrderGateway::new(format!("{}/functions/v1/send-order-email", server.uri()))
                .with_api_key("anon-key");
        let accepted = gateway.submit(&request()).await.unwrap();

        assert!(accepted.success);
        assert_eq!(accepted.message, "Order submitted successfully");
    }

    #[tokio::test]
    async fn test_http_gateway_maps_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Invalid email format" })),
            )
            .mount(&server)
            .await;

        let gateway = HttpOrderGateway::new(server.uri());
        let err = gateway.submit(&request()).await.unwrap_err();

        match err {
            GatewayError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid email format");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_gateway_without_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let gateway = HttpOrderGateway::new(server.uri());
        let err = gateway.submit(&request()).await.unwrap_err();

        assert!(matches!(err, GatewayError::Rejected { status: 502, .. }));
    }

    #[tokio::test]
    async fn test_in_memory_records_and_fails() {
        let gateway = InMemoryOrderGateway::new();
        gateway.submit(&request()).await.unwrap();

        gateway.set_fail_on_submit(true);
        let result = gateway.submit(&request()).await;

        assert!(matches!(result, Err(GatewayError::Unavailable(_))));
        assert_eq!(gateway.request_count(), 2);
        assert_eq!(gateway.requests()[0], request());
    }

    #[tokio::test]
    async fn test_in_memory_hold_releases_on_notify() {
        let gateway = InMemoryOrderGateway::new();
        let release = gateway.hold_requests();

        let pending = tokio::spawn({
            let gateway = gateway.clone();
            async move { gateway.submit(&request()).await }
        });

        while gateway.request_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(!pending.is_finished());

        release.notify_one();
        assert!(pending.await.unwrap().is_ok());
    }
}
