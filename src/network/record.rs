// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network log record types
//!
//! Field names on the wire follow the shape the diagnostics dashboard reads:
//! the method goes out as `type` and the timestamp as `date`.

use std::collections::HashMap;

use chrono::{SecondsFormat, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Placeholder for a missing method or URL
pub const UNKNOWN: &str = "--";

/// One observed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// HTTP method
    #[serde(rename = "type")]
    pub method: String,
    /// Absolute request URL
    pub url: String,
    /// ISO-8601 instant the record was built
    #[serde(rename = "date")]
    pub timestamp: String,
    /// Always true, including for records built from a failed exchange
    pub success: bool,
    /// Response content type
    pub content_type: String,
    /// Request information
    pub request: RequestInfo,
    /// Response information
    pub response: ResponseInfo,
}

/// Request half of a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Request headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Sanitized body, or the stream description for streamed bodies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Response half of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    /// Status code, 0 when unknown
    pub status: u16,
    /// Response headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    /// Sanitized body
    pub payload: String,
}

impl LogRecord {
    /// Create a record stamped with the current time
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        content_type: impl Into<String>,
        request: RequestInfo,
        response: ResponseInfo,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            timestamp: now_iso8601(),
            success: true,
            content_type: content_type.into(),
            request,
            response,
        }
    }
}

impl ResponseInfo {
    /// Create response info without headers
    pub fn new(status: u16, payload: impl Into<String>) -> Self {
        Self {
            status,
            headers: None,
            payload: payload.into(),
        }
    }
}

/// Current instant as ISO-8601 UTC, second precision
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Flatten a header map into name/value strings.
///
/// Repeated headers are joined with `", "`; values that are not visible ASCII
/// are decoded lossily.
pub fn header_strings(headers: &HeaderMap) -> HashMap<String, String> {
    let mut flattened: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        flattened
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    flattened
}
