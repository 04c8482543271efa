// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network activity logging
//!
//! Records completed exchanges into a bounded log and publishes it to a
//! diagnostics sink.

mod interceptor;
mod record;
mod sanitize;
mod sink;
mod store;

pub use interceptor::NetworkLoggerPlugin;
pub use record::{header_strings, now_iso8601, LogRecord, RequestInfo, ResponseInfo, UNKNOWN};
pub use sanitize::{
    is_text_based, sanitize, PayloadSanitizer, MAX_BODY_SIZE, NO_CONTENT, RESPONSE_TOO_LARGE,
    TEXT_BASED_CONTENT_TYPES,
};
pub use sink::{DiagnosticsSink, MemorySink, TracingSink};
pub use store::{LogStore, DEFAULT_CAPACITY, DEFAULT_SINK_KEY};
