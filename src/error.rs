// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for netlog
//!
//! Two families live here. [`Error`] is the crate's own error, returned by
//! configuration, sinks and the HTTP adapter. [`ExchangeError`] is the failure
//! half of an observed exchange: the host networking layer hands it to plugins,
//! and some variants still carry the response that caused them.

use thiserror::Error;

use crate::http::Response;

/// Result type alias for netlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for netlog
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Diagnostics sink rejected the published data
    #[error("Sink error: {0}")]
    Sink(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        Error::Sink(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

/// Failure outcome of a single exchange
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Response status fell outside the accepted range
    #[error("Status code didn't fall within the accepted range: {}", .0.status_code())]
    StatusCode(Response),

    /// Response body could not be mapped into the requested shape
    #[error("Failed to map response: {reason}")]
    Mapping { reason: String, response: Response },

    /// Underlying transport or library error
    #[error("Underlying error: {source}")]
    Underlying {
        #[source]
        source: Error,
        response: Option<Response>,
    },

    /// Target could not be turned into a request
    #[error("Failed to map target to a request: {0}")]
    RequestMapping(String),

    /// Request parameters could not be encoded
    #[error("Failed to encode parameters: {0}")]
    ParameterEncoding(String),
}

impl ExchangeError {
    /// Create an underlying error with no response attached
    pub fn underlying(source: impl Into<Error>) -> Self {
        ExchangeError::Underlying {
            source: source.into(),
            response: None,
        }
    }

    /// Create an underlying error that still carries a response
    pub fn underlying_with_response(source: impl Into<Error>, response: Response) -> Self {
        ExchangeError::Underlying {
            source: source.into(),
            response: Some(response),
        }
    }

    /// The response embedded in this error, if any
    pub fn response(&self) -> Option<&Response> {
        match self {
            ExchangeError::StatusCode(response) => Some(response),
            ExchangeError::Mapping { response, .. } => Some(response),
            ExchangeError::Underlying { response, .. } => response.as_ref(),
            ExchangeError::RequestMapping(_) | ExchangeError::ParameterEncoding(_) => None,
        }
    }

    /// Check if this is a pure transport failure (nothing was received)
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            ExchangeError::Underlying {
                response: None,
                ..
            }
        )
    }
}
