// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP client adapter
//!
//! Runs exchanges over reqwest and reports every outcome to the plugin chain.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;

use super::plugin::{Plugin, PluginChain};
use super::request::Request;
use super::response::{HttpResponse, Response};
use super::target::Target;
use super::ExchangeResult;
use crate::error::{ExchangeError, Result};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Treat non-2xx responses as failures
    pub validate_status: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            validate_status: false,
        }
    }
}

/// HTTP client with plugin notification
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    plugins: PluginChain,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            plugins: PluginChain::new(),
        })
    }

    /// Register a plugin
    pub fn plugin<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.add(plugin);
        self
    }

    /// Register a plugin that is also held elsewhere
    pub fn shared_plugin(mut self, plugin: Arc<dyn Plugin>) -> Self {
        self.plugins.add_shared(plugin);
        self
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client, for building custom requests
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Resolve a target and run the exchange
    pub async fn request(&self, target: &dyn Target) -> ExchangeResult {
        let request = match self.build_request(target) {
            Ok(request) => request,
            Err(e) => {
                let result = Err(e);
                self.plugins.notify_did_receive(&result, target);
                return result;
            }
        };

        self.send(request, target).await
    }

    /// Run an already built request on behalf of a target
    pub async fn send(&self, request: reqwest::Request, target: &dyn Target) -> ExchangeResult {
        let request = self.plugins.prepare(request, target);
        let snapshot = Request::from_reqwest(&request);
        self.plugins.notify_will_send(&snapshot, target);

        let result = self.perform(request, snapshot).await;

        if let Err(ref e) = result {
            tracing::debug!(path = target.path(), error = %e, "Exchange failed");
        }
        self.plugins.notify_did_receive(&result, target);
        result
    }

    fn build_request(&self, target: &dyn Target) -> std::result::Result<reqwest::Request, ExchangeError> {
        let url = target
            .url()
            .map_err(|e| ExchangeError::RequestMapping(e.to_string()))?;

        let mut builder = self.client.request(target.method(), url);
        if let Some(headers) = target.headers() {
            builder = builder.headers(headers);
        }
        if let Some(body) = target.body() {
            builder = builder.body(body);
        }

        builder
            .build()
            .map_err(|e| ExchangeError::RequestMapping(e.to_string()))
    }

    async fn perform(&self, request: reqwest::Request, snapshot: Request) -> ExchangeResult {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(ExchangeError::underlying)?;

        let http = HttpResponse::from_reqwest(&response);
        tracing::trace!(
            status = http.status.as_u16(),
            url = http.url.as_ref().map(|u| u.as_str()).unwrap_or_default(),
            "Response received"
        );

        let data = match response.bytes().await {
            Ok(data) => data,
            Err(e) => {
                let partial = Response::new(Bytes::new())
                    .with_request(snapshot)
                    .with_http(http);
                return Err(ExchangeError::underlying_with_response(e, partial));
            }
        };

        let response = Response::new(data).with_request(snapshot).with_http(http);

        if self.config.validate_status && !response.is_success() {
            return Err(ExchangeError::StatusCode(response));
        }

        Ok(response)
    }
}
