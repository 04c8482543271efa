// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use super::request::Request;

/// Completed exchange as delivered to plugins
///
/// The transport-level response and the originating request are both
/// optional: a host may surface body bytes without either.
#[derive(Debug, Clone)]
pub struct Response {
    /// Response body
    pub data: Bytes,
    /// Request that produced this response
    pub request: Option<Request>,
    /// Transport-level response
    pub http: Option<HttpResponse>,
}

/// Status line and headers of a received response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Option<Url>,
}

impl Response {
    /// Create a response holding only body bytes
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            request: None,
            http: None,
        }
    }

    /// Attach the originating request
    pub fn with_request(mut self, request: Request) -> Self {
        self.request = Some(request);
        self
    }

    /// Attach the transport-level response
    pub fn with_http(mut self, http: HttpResponse) -> Self {
        self.http = Some(http);
        self
    }

    /// Get status code as u16, 0 when no transport response exists
    pub fn status_code(&self) -> u16 {
        self.http.as_ref().map(|h| h.status.as_u16()).unwrap_or(0)
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.http
            .as_ref()
            .map(|h| h.status.is_success())
            .unwrap_or(false)
    }

    /// Get response headers
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.http.as_ref().map(|h| &h.headers)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .and_then(|headers| headers.get(name))
            .and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.headers()
            .and_then(|headers| headers.get(CONTENT_TYPE))
            .and_then(|v| v.to_str().ok())
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Get body length
    pub fn body_len(&self) -> usize {
        self.data.len()
    }
}

impl HttpResponse {
    /// Create a transport response with no headers
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            url: None,
        }
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Capture status, headers and final URL before the body is consumed
    pub fn from_reqwest(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: Some(response.url().clone()),
        }
    }
}
