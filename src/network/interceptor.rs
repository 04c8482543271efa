// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network logger plugin
//!
//! Turns every completed exchange into a [`LogRecord`] and hands it to a
//! [`LogStore`]. Nothing here can fail the host: missing data becomes a
//! placeholder, and an exchange without a response is not logged at all.

use std::sync::Arc;

use super::record::{header_strings, LogRecord, RequestInfo, ResponseInfo, UNKNOWN};
use super::sanitize::PayloadSanitizer;
use super::store::LogStore;
use crate::config::NetworkLogConfig;
use crate::http::{ExchangeResult, Plugin, RequestBody, Response, Target};

/// Plugin that logs network activity (outgoing requests and incoming responses)
#[derive(Debug, Clone)]
pub struct NetworkLoggerPlugin {
    store: Arc<LogStore>,
    sanitizer: PayloadSanitizer,
}

impl NetworkLoggerPlugin {
    /// Create a plugin writing to the given store
    pub fn new(store: Arc<LogStore>) -> Self {
        Self {
            store,
            sanitizer: PayloadSanitizer::default(),
        }
    }

    /// Create a plugin using the body size limit from a config
    pub fn with_config(store: Arc<LogStore>, config: &NetworkLogConfig) -> Self {
        Self {
            store,
            sanitizer: PayloadSanitizer::new(config.max_body_size),
        }
    }

    /// Create a plugin writing to the process-wide store
    pub fn shared() -> Self {
        Self::new(LogStore::shared())
    }

    /// Get the store records are written to
    pub fn store(&self) -> &Arc<LogStore> {
        &self.store
    }

    /// Log one completed exchange.
    ///
    /// Failures are logged only when they carry the response that caused them.
    pub fn on_exchange_completed(&self, outcome: &ExchangeResult, target: &dyn Target) {
        match outcome {
            Ok(response) => self.log_response(response, target),
            Err(error) => match error.response() {
                Some(response) => self.log_response(response, target),
                None => {
                    tracing::debug!(path = target.path(), error = %error, "No response to log");
                }
            },
        }
    }

    /// Build a record from a response and its originating request.
    ///
    /// Returns `None` when the originating request is unavailable.
    pub fn build_record(&self, response: &Response) -> Option<LogRecord> {
        let request = response.request.as_ref()?;
        let content_type = response.content_type().unwrap_or_default();

        let payload = match &request.body {
            RequestBody::Empty => None,
            RequestBody::Stream { description } => Some(description.clone()),
            RequestBody::Buffered(body) => Some(self.sanitizer.sanitize(
                Some(body.as_ref()),
                Some(request.content_type().unwrap_or_default()),
            )),
        };

        let request_info = RequestInfo {
            headers: Some(header_strings(&request.headers)),
            payload,
        };

        let response_info = ResponseInfo {
            status: response.status_code(),
            headers: response.headers().map(header_strings),
            payload: self
                .sanitizer
                .sanitize(Some(response.data.as_ref()), Some(content_type)),
        };

        Some(LogRecord::new(
            request
                .method
                .as_ref()
                .map(|m| m.as_str())
                .unwrap_or(UNKNOWN),
            request
                .url
                .as_ref()
                .map(|u| u.as_str())
                .unwrap_or(UNKNOWN),
            content_type,
            request_info,
            response_info,
        ))
    }

    fn log_response(&self, response: &Response, target: &dyn Target) {
        match self.build_record(response) {
            Some(record) => {
                tracing::trace!(
                    path = target.path(),
                    method = %record.method,
                    url = %record.url,
                    status = record.response.status,
                    "Logging network exchange"
                );
                self.store.log_request(record);
            }
            None => {
                tracing::debug!(path = target.path(), "Response has no originating request");
            }
        }
    }
}

impl Default for NetworkLoggerPlugin {
    fn default() -> Self {
        Self::shared()
    }
}

impl Plugin for NetworkLoggerPlugin {
    fn did_receive(&self, result: &ExchangeResult, target: &dyn Target) {
        self.on_exchange_completed(result, target);
    }

    fn priority(&self) -> i32 {
        -100 // Low priority - run logging last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExchangeError;
    use crate::http::{Endpoint, HttpResponse, Request};
    use crate::network::sanitize::{NO_CONTENT, RESPONSE_TOO_LARGE};
    use crate::network::sink::MemorySink;
    use reqwest::{Method, StatusCode};

    fn setup() -> (NetworkLoggerPlugin, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let store = Arc::new(LogStore::new(sink.clone()));
        (NetworkLoggerPlugin::new(store), sink)
    }

    fn target() -> Endpoint {
        Endpoint::new(Method::GET, "https://api.example.com/v1", "items").unwrap()
    }

    fn items_response() -> Response {
        let request = Request::get("https://api.example.com/v1/items")
            .unwrap()
            .header("accept", "application/json")
            .header("x-request-id", "abc-123");

        Response::new(r#"{"id":1}"#)
            .with_request(request)
            .with_http(
                HttpResponse::new(StatusCode::OK).header("content-type", "application/json"),
            )
    }

    #[test]
    fn test_success_is_logged() {
        let (plugin, sink) = setup();

        plugin.on_exchange_completed(&Ok(items_response()), &target());

        let entries = plugin.store().entries();
        assert_eq!(entries.len(), 1);
        let record = &entries[0];
        assert_eq!(record.method, "GET");
        assert_eq!(record.url, "https://api.example.com/v1/items");
        assert_eq!(record.content_type, "application/json");
        assert!(record.success);
        assert_eq!(record.response.status, 200);
        assert_eq!(record.response.payload, r#"{"id":1}"#);

        let headers = record.request.headers.as_ref().unwrap();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["accept"], "application/json");
        assert_eq!(headers["x-request-id"], "abc-123");
        assert!(record.request.payload.is_none());

        let response_headers = record.response.headers.as_ref().unwrap();
        assert_eq!(response_headers.len(), 1);
        assert_eq!(response_headers["content-type"], "application/json");

        assert_eq!(sink.publish_count(), 1);
        let published = sink.get("networkLogs").unwrap();
        assert_eq!(published.as_array().map(Vec::len), Some(1));
        assert_eq!(published[0]["response"]["payload"], r#"{"id":1}"#);
        assert_eq!(
            published[0]["response"]["headers"]["content-type"],
            "application/json"
        );
    }

    #[test]
    fn test_transport_failure_is_not_logged() {
        let (plugin, sink) = setup();

        let outcome: ExchangeResult = Err(ExchangeError::underlying("connection reset"));
        plugin.on_exchange_completed(&outcome, &target());

        assert!(plugin.store().is_empty());
        assert_eq!(sink.publish_count(), 0);
    }

    #[test]
    fn test_error_response_is_logged_as_success() {
        let (plugin, _sink) = setup();
        let request = Request::get("https://api.example.com/v1/missing").unwrap();
        let response = Response::new("not here")
            .with_request(request)
            .with_http(HttpResponse::new(StatusCode::NOT_FOUND).header("content-type", "text/plain"));

        plugin.on_exchange_completed(&Err(ExchangeError::StatusCode(response)), &target());

        let entries = plugin.store().entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].success);
        assert_eq!(entries[0].response.status, 404);
        assert_eq!(entries[0].response.payload, "not here");
    }

    #[test]
    fn test_missing_request_is_skipped() {
        let (plugin, sink) = setup();

        let response = Response::new("orphan").with_http(HttpResponse::new(StatusCode::OK));
        assert!(plugin.build_record(&response).is_none());

        plugin.on_exchange_completed(&Ok(response), &target());
        assert!(plugin.store().is_empty());
        assert_eq!(sink.publish_count(), 0);
    }

    #[test]
    fn test_missing_transport_response() {
        let (plugin, _sink) = setup();
        let response = Response::new("").with_request(Request::default());

        let record = plugin.build_record(&response).unwrap();

        assert_eq!(record.method, UNKNOWN);
        assert_eq!(record.url, UNKNOWN);
        assert_eq!(record.content_type, "");
        assert_eq!(record.response.status, 0);
        assert!(record.response.headers.is_none());
        assert_eq!(record.response.payload, NO_CONTENT);
        assert_eq!(record.request.headers, Some(Default::default()));
    }

    #[test]
    fn test_request_payload_uses_request_content_type() {
        let (plugin, _sink) = setup();
        let request = Request::post("https://api.example.com/v1/items")
            .unwrap()
            .header("content-type", "application/x-www-form-urlencoded")
            .body("name=widget");
        let response = Response::new(vec![0u8, 1, 2])
            .with_request(request)
            .with_http(
                HttpResponse::new(StatusCode::CREATED).header("content-type", "image/png"),
            );

        let record = plugin.build_record(&response).unwrap();

        assert_eq!(record.request.payload.as_deref(), Some("name=widget"));
        assert_eq!(record.response.payload, RESPONSE_TOO_LARGE);
        assert_eq!(record.content_type, "image/png");
    }

    #[test]
    fn test_request_without_content_type_is_not_decoded() {
        let (plugin, _sink) = setup();
        let request = Request::post("https://api.example.com/v1/items")
            .unwrap()
            .body("raw");
        let response = Response::new("").with_request(request);

        let record = plugin.build_record(&response).unwrap();
        assert_eq!(record.request.payload.as_deref(), Some(RESPONSE_TOO_LARGE));
    }

    #[test]
    fn test_empty_buffered_request_body() {
        let (plugin, _sink) = setup();
        let request = Request::post("https://api.example.com/v1/items")
            .unwrap()
            .header("content-type", "application/json")
            .body(Vec::<u8>::new());
        let response = Response::new("").with_request(request);

        let record = plugin.build_record(&response).unwrap();
        assert_eq!(record.request.payload.as_deref(), Some(NO_CONTENT));
    }

    #[test]
    fn test_streamed_request_body_uses_description() {
        let (plugin, _sink) = setup();
        let request = Request::post("https://api.example.com/v1/upload")
            .unwrap()
            .header("content-type", "application/json")
            .stream("<input stream>");
        let response = Response::new("").with_request(request);

        let record = plugin.build_record(&response).unwrap();
        assert_eq!(record.request.payload.as_deref(), Some("<input stream>"));
    }

    #[test]
    fn test_config_body_limit() {
        let sink = Arc::new(MemorySink::new());
        let store = Arc::new(LogStore::new(sink));
        let plugin =
            NetworkLoggerPlugin::with_config(store, &NetworkLogConfig::new().max_body_size(4));

        let record = plugin.build_record(&items_response()).unwrap();
        assert_eq!(record.response.payload, RESPONSE_TOO_LARGE);
    }

    #[test]
    fn test_plugin_hook_delegates() {
        let (plugin, sink) = setup();
        let hook: &dyn Plugin = &plugin;

        hook.did_receive(&Ok(items_response()), &target());

        assert_eq!(plugin.store().len(), 1);
        assert_eq!(sink.publish_count(), 1);
        assert_eq!(hook.priority(), -100);
    }

    #[tokio::test]
    async fn test_end_to_end_through_client() {
        use crate::http::HttpClient;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("netlog=trace"))
            .with_test_writer()
            .try_init();

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/items"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"id":1}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let (plugin, sink) = setup();
        let store = plugin.store().clone();
        let client = HttpClient::new().unwrap().plugin(plugin);
        let target = Endpoint::new(Method::GET, format!("{}/v1", server.uri()), "items")
            .unwrap()
            .header("x-trace", "on");

        client.request(&target).await.unwrap();

        let entries = store.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].method, "GET");
        assert_eq!(entries[0].url, format!("{}/v1/items", server.uri()));
        assert_eq!(entries[0].response.status, 200);
        assert_eq!(entries[0].response.payload, r#"{"id":1}"#);
        assert_eq!(
            entries[0].request.headers.as_ref().unwrap()["x-trace"],
            "on"
        );
        assert_eq!(sink.publish_count(), 1);
    }
}
