// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Outgoing request as seen by plugins

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

use crate::error::Result;

/// Outgoing HTTP request representation
///
/// Method and URL are optional because a plugin may observe a request the
/// host only partially built.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Request method
    pub method: Option<Method>,
    /// Request URL
    pub url: Option<Url>,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: RequestBody,
}

/// Body attached to an outgoing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Fully buffered body
    Buffered(Bytes),
    /// Streamed body; only its description is known
    Stream { description: String },
}

impl Request {
    /// Create a new request with method and URL
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            method: Some(method),
            url: Some(Url::parse(url.as_ref())?),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        })
    }

    /// Create a new GET request
    pub fn get(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl AsRef<str>) -> Result<Self> {
        Self::new(Method::POST, url)
    }

    /// Set a header
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Set a buffered body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = RequestBody::Buffered(body.into());
        self
    }

    /// Mark the body as a stream
    pub fn stream(mut self, description: impl Into<String>) -> Self {
        self.body = RequestBody::Stream {
            description: description.into(),
        };
        self
    }

    /// Get the request's own content type
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Snapshot a reqwest request before it is sent
    pub fn from_reqwest(request: &reqwest::Request) -> Self {
        let body = match request.body() {
            None => RequestBody::Empty,
            Some(body) => match body.as_bytes() {
                Some(bytes) => RequestBody::Buffered(Bytes::copy_from_slice(bytes)),
                None => RequestBody::Stream {
                    description: format!("{:?}", body),
                },
            },
        };

        Self {
            method: Some(request.method().clone()),
            url: Some(request.url().clone()),
            headers: request.headers().clone(),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = Request::post("https://api.example.com/v1/items")
            .unwrap()
            .header("content-type", "application/json")
            .body(r#"{"name":"widget"}"#);

        assert_eq!(request.method, Some(Method::POST));
        assert_eq!(request.content_type(), Some("application/json"));
        assert_eq!(
            request.body,
            RequestBody::Buffered(Bytes::from_static(br#"{"name":"widget"}"#))
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(Request::get("not a url").is_err());
    }

    #[test]
    fn test_default_is_unresolved() {
        let request = Request::default();
        assert!(request.method.is_none());
        assert!(request.url.is_none());
        assert_eq!(request.body, RequestBody::Empty);
    }

    #[test]
    fn test_from_reqwest_buffered() {
        let client = reqwest::Client::new();
        let request = client
            .post("https://api.example.com/v1/items")
            .header("content-type", "text/plain")
            .body("hello")
            .build()
            .unwrap();

        let snapshot = Request::from_reqwest(&request);
        assert_eq!(snapshot.method, Some(Method::POST));
        assert_eq!(
            snapshot.url.as_ref().map(Url::as_str),
            Some("https://api.example.com/v1/items")
        );
        assert_eq!(snapshot.content_type(), Some("text/plain"));
        assert_eq!(snapshot.body, RequestBody::Buffered(Bytes::from_static(b"hello")));
    }

    #[test]
    fn test_from_reqwest_stream() {
        let chunks: Vec<std::result::Result<Bytes, std::io::Error>> =
            vec![Ok(Bytes::from_static(b"chunk"))];
        let client = reqwest::Client::new();
        let request = client
            .post("https://api.example.com/upload")
            .body(reqwest::Body::wrap_stream(futures::stream::iter(chunks)))
            .build()
            .unwrap();

        let snapshot = Request::from_reqwest(&request);
        assert!(matches!(snapshot.body, RequestBody::Stream { .. }));
    }
}
