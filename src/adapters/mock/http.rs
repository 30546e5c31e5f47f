//! Mock HTTP client for testing.
//!
//! Every gateway request is a POST to the same endpoint, so responses are
//! keyed by the GraphQL `operationName` found in the request body rather
//! than by URL. Responses come in two flavors: sticky (returned for every
//! matching request) and queued one-shots (consumed in FIFO order, each
//! with its own optional latency), which lets a test hand two concurrent
//! calls to the same operation different results and control the order in
//! which they land.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: String,
    /// GraphQL operation name parsed from the body, if any
    pub operation: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

#[derive(Debug, Clone)]
struct QueuedResponse {
    response: MockResponse,
    delay: Option<Duration>,
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use topshot::adapters::mock::{MockHttpClient, MockResponse};
/// use topshot::traits::Response;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "PlayerList",
///     MockResponse::Success(Response::new(200, Bytes::from(r#"{"data":null}"#))),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Sticky responses by operation name
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses by operation name, consumed FIFO before the
    /// sticky response is consulted
    queued: Arc<Mutex<HashMap<String, VecDeque<QueuedResponse>>>>,
    /// Artificial latency by operation name (sticky responses)
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sticky response for a GraphQL operation name.
    pub fn set_response(&self, operation: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(operation.to_string(), response);
    }

    /// Queue a one-shot response for an operation, with optional latency.
    ///
    /// Queued responses are consumed in FIFO order before any sticky
    /// response for the same operation is consulted.
    pub fn enqueue_response(
        &self,
        operation: &str,
        response: MockResponse,
        delay: Option<Duration>,
    ) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(operation.to_string())
            .or_default()
            .push_back(QueuedResponse { response, delay });
    }

    /// Delay every sticky response for an operation by the given duration.
    ///
    /// Delays go through `tokio::time::sleep`, so tests running with
    /// paused time resolve delayed responses in duration order without
    /// real waiting.
    pub fn set_delay(&self, operation: &str, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        delays.insert(operation.to_string(), delay);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests recorded so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn parse_operation(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("operationName")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let operation = Self::parse_operation(body);

        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
            operation: operation.clone(),
        });

        let key = operation.unwrap_or_default();

        let queued = self
            .queued
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(|queue| queue.pop_front());

        let (response, delay) = match queued {
            Some(entry) => (Some(entry.response), entry.delay),
            None => {
                let sticky = self.responses.lock().unwrap().get(&key).cloned();
                let delay = self.delays.lock().unwrap().get(&key).copied();
                (sticky, delay)
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match response {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "no mock response configured for operation '{}'",
                key
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn body_for(operation: &str) -> String {
        format!(
            r#"{{"operationName":"{}","query":"","variables":{{}}}}"#,
            operation
        )
    }

    #[tokio::test]
    async fn returns_sticky_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "PlayerList",
            MockResponse::Success(Response::new(200, Bytes::from("ok"))),
        );

        let response = client
            .post("http://mock/graphql", &body_for("PlayerList"), &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, Bytes::from("ok"));
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "PlayerList",
            MockResponse::Error(HttpError::Timeout("30s".to_string())),
        );

        let result = client
            .post("http://mock/graphql", &body_for("PlayerList"), &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn unconfigured_operation_errors() {
        let client = MockHttpClient::new();
        let result = client
            .post("http://mock/graphql", &body_for("Unknown"), &Headers::new())
            .await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn queued_responses_drain_before_sticky() {
        let client = MockHttpClient::new();
        client.set_response(
            "PlayerDetails",
            MockResponse::Success(Response::new(200, Bytes::from("sticky"))),
        );
        client.enqueue_response(
            "PlayerDetails",
            MockResponse::Success(Response::new(200, Bytes::from("first"))),
            None,
        );
        client.enqueue_response(
            "PlayerDetails",
            MockResponse::Success(Response::new(200, Bytes::from("second"))),
            None,
        );

        let url = "http://mock/graphql";
        let body = body_for("PlayerDetails");
        let first = client.post(url, &body, &Headers::new()).await.unwrap();
        let second = client.post(url, &body, &Headers::new()).await.unwrap();
        let third = client.post(url, &body, &Headers::new()).await.unwrap();

        assert_eq!(first.body, Bytes::from("first"));
        assert_eq!(second.body, Bytes::from("second"));
        assert_eq!(third.body, Bytes::from("sticky"));
    }

    #[tokio::test]
    async fn records_requests_with_operation() {
        let client = MockHttpClient::new();
        client.set_response(
            "PlayerDetails",
            MockResponse::Success(Response::new(200, Bytes::from("{}"))),
        );

        let mut headers = Headers::new();
        headers.insert("User-Agent".to_string(), "tester@example.com".to_string());
        client
            .post("http://mock/graphql", &body_for("PlayerDetails"), &headers)
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://mock/graphql");
        assert_eq!(requests[0].operation.as_deref(), Some("PlayerDetails"));
        assert_eq!(
            requests[0].headers.get("User-Agent"),
            Some(&"tester@example.com".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_responses_resolve_in_duration_order() {
        let client = MockHttpClient::new();
        client.set_response(
            "Slow",
            MockResponse::Success(Response::new(200, Bytes::from("slow"))),
        );
        client.set_response(
            "Fast",
            MockResponse::Success(Response::new(200, Bytes::from("fast"))),
        );
        client.set_delay("Slow", Duration::from_millis(100));
        client.set_delay("Fast", Duration::from_millis(10));

        let slow_client = client.clone();
        let slow = tokio::spawn(async move {
            slow_client
                .post("http://mock/graphql", &body_for("Slow"), &Headers::new())
                .await
        });
        let fast_client = client.clone();
        let fast = tokio::spawn(async move {
            fast_client
                .post("http://mock/graphql", &body_for("Fast"), &Headers::new())
                .await
        });

        let fast = fast.await.unwrap().unwrap();
        let slow = slow.await.unwrap().unwrap();
        assert_eq!(fast.body, Bytes::from("fast"));
        assert_eq!(slow.body, Bytes::from("slow"));
    }
}
