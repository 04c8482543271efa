// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP exchange model
//!
//! The request/response shapes plugins observe, the plugin hook points, and
//! a reqwest-backed client that drives them.

mod client;
mod plugin;
mod request;
mod response;
mod target;

pub use client::{HttpClient, HttpClientConfig};
pub use plugin::{Plugin, PluginChain};
pub use request::{Request, RequestBody};
pub use response::{HttpResponse, Response};
pub use target::{Endpoint, Target};

pub use crate::error::ExchangeError;

/// Outcome of one exchange: a response, or an error that may still carry one
pub type ExchangeResult = std::result::Result<Response, ExchangeError>;
