// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # netlog - Network Logger Plugin
//!
//! Observes completed HTTP exchanges and keeps a bounded, sanitized log of
//! recent network activity, published to an external diagnostics SDK every
//! time it changes.
//!
//! ## Features
//!
//! - Bounded log: the 15 most recent exchanges, oldest evicted first
//! - Payload sanitization: only small text bodies are logged verbatim
//! - Thread-safe: completions may arrive from any worker thread
//! - Pluggable sink: hand the log to any diagnostics SDK
//! - reqwest adapter: drive real exchanges through the plugin chain
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use netlog::http::{Endpoint, HttpClient};
//! use netlog::{LogStore, MemorySink, NetworkLoggerPlugin};
//! use reqwest::Method;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(MemorySink::new());
//!     let store = Arc::new(LogStore::new(sink.clone()));
//!
//!     let client = HttpClient::new()?.plugin(NetworkLoggerPlugin::new(store));
//!     let target = Endpoint::new(Method::GET, "https://api.example.com/v1", "items")?;
//!
//!     let _ = client.request(&target).await;
//!
//!     println!("{:?}", sink.get("networkLogs"));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod network;

// Re-exports for convenience

// Config
pub use config::NetworkLogConfig;

// Errors
pub use error::{Error, ExchangeError, Result};

// HTTP
pub use http::{ExchangeResult, HttpClient, Plugin, PluginChain, Request, Response, Target};

// Network
pub use network::{LogRecord, LogStore, NetworkLoggerPlugin, RequestInfo, ResponseInfo};
pub use network::{DiagnosticsSink, MemorySink, TracingSink};
pub use network::{is_text_based, sanitize, PayloadSanitizer};

/// netlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
