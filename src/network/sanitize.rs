// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Payload sanitization
//!
//! Bodies are only logged verbatim when they are text and reasonably small.
//! Everything else is replaced by a fixed placeholder.

/// Placeholder for an absent or empty body
pub const NO_CONTENT: &str = "<no_content>";

/// Placeholder for a body that is too large or not text.
///
/// Binary bodies get this placeholder regardless of their size.
pub const RESPONSE_TOO_LARGE: &str = "<response_too_large>";

/// Default size limit; bodies of this many bytes or more are not decoded
pub const MAX_BODY_SIZE: usize = 1024 * 500;

/// Content type fragments treated as text
pub const TEXT_BASED_CONTENT_TYPES: &[&str] = &[
    "text/",
    "application/javascript",
    "application/xhtml+xml",
    "application/json",
    "application/xml",
    "application/x-www-form-urlencoded",
    "multipart/",
];

/// Check if a content type denotes a text body.
///
/// Case-sensitive substring match, so parameters such as `; charset=utf-8`
/// do not matter. An absent content type is not text.
pub fn is_text_based(content_type: Option<&str>) -> bool {
    match content_type {
        Some(ct) => TEXT_BASED_CONTENT_TYPES
            .iter()
            .any(|fragment| ct.contains(fragment)),
        None => false,
    }
}

/// Sanitize a body with the default size limit
pub fn sanitize(data: Option<&[u8]>, content_type: Option<&str>) -> String {
    PayloadSanitizer::default().sanitize(data, content_type)
}

/// Turns raw bodies into loggable strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSanitizer {
    max_body_size: usize,
}

impl Default for PayloadSanitizer {
    fn default() -> Self {
        Self {
            max_body_size: MAX_BODY_SIZE,
        }
    }
}

impl PayloadSanitizer {
    /// Create a sanitizer with a custom size limit
    pub fn new(max_body_size: usize) -> Self {
        Self { max_body_size }
    }

    /// Get the size limit
    pub fn max_body_size(&self) -> usize {
        self.max_body_size
    }

    /// Sanitize a body.
    ///
    /// Text bodies strictly below the limit are decoded as UTF-8, with invalid
    /// sequences replaced rather than rejected.
    pub fn sanitize(&self, data: Option<&[u8]>, content_type: Option<&str>) -> String {
        let data = match data {
            Some(data) if !data.is_empty() => data,
            _ => return NO_CONTENT.to_string(),
        };

        if is_text_based(content_type) && data.len() < self.max_body_size {
            return String::from_utf8_lossy(data).into_owned();
        }

        RESPONSE_TOO_LARGE.to_string()
    }
}
