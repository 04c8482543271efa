// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Logical API endpoints

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::error::{Error, Result};

/// A logical API endpoint the host calls
///
/// Plugins receive the target alongside each outcome as routing metadata.
pub trait Target: Send + Sync {
    /// Base URL shared by the API
    fn base_url(&self) -> &Url;

    /// Path appended to the base URL
    fn path(&self) -> &str;

    /// HTTP method
    fn method(&self) -> Method;

    /// Extra headers for this endpoint
    fn headers(&self) -> Option<HeaderMap> {
        None
    }

    /// Buffered body for this endpoint
    fn body(&self) -> Option<Bytes> {
        None
    }

    /// Full URL: base URL with the path segments appended
    fn url(&self) -> Result<Url> {
        let mut url = self.base_url().clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::other(format!("{} cannot be a base URL", self.base_url())))?;
            segments.pop_if_empty();
            segments.extend(self.path().split('/').filter(|s| !s.is_empty()));
        }
        Ok(url)
    }
}

/// Plain endpoint description
#[derive(Debug, Clone)]
pub struct Endpoint {
    base_url: Url,
    path: String,
    method: Method,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl Endpoint {
    /// Create a new endpoint
    pub fn new(method: Method, base_url: impl AsRef<str>, path: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url.as_ref())?,
            path: path.into(),
            method,
            headers: HeaderMap::new(),
            body: None,
        })
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

    /// Set the body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Target for Endpoint {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn headers(&self) -> Option<HeaderMap> {
        if self.headers.is_empty() {
            None
        } else {
            Some(self.headers.clone())
        }
    }

    fn body(&self) -> Option<Bytes> {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_appends_path() {
        let endpoint = Endpoint::new(Method::GET, "https://api.example.com/v1", "/items").unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://api.example.com/v1/items"
        );
    }

    #[test]
    fn test_url_with_trailing_slash_base() {
        let endpoint =
            Endpoint::new(Method::GET, "https://api.example.com/v1/", "items/42").unwrap();
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://api.example.com/v1/items/42"
        );
    }

    #[test]
    fn test_headers_and_body() {
        let endpoint = Endpoint::new(Method::POST, "https://api.example.com", "items")
            .unwrap()
            .header("content-type", "application/json")
            .with_body(r#"{"id":1}"#);

        let headers = endpoint.headers().unwrap();
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(endpoint.body(), Some(Bytes::from_static(br#"{"id":1}"#)));
    }

    #[test]
    fn test_cannot_be_base() {
        let endpoint = Endpoint::new(Method::GET, "mailto:someone@example.com", "x").unwrap();
        assert!(endpoint.url().is_err());
    }
}
