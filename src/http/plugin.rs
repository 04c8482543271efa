// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Plugin hooks invoked around each exchange
//!
//! The host networking layer calls these synchronously from whichever thread
//! completes the exchange, so implementations must be `Send + Sync` and must
//! not block.

use std::sync::Arc;

use super::request::Request;
use super::target::Target;
use super::ExchangeResult;

/// Observer of outgoing requests and their outcomes
///
/// # Example
///
/// ```rust
/// use netlog::http::{ExchangeResult, Plugin, Target};
///
/// struct StatusPrinter;
///
/// impl Plugin for StatusPrinter {
///     fn did_receive(&self, result: &ExchangeResult, target: &dyn Target) {
///         if let Ok(response) = result {
///             println!("{} -> {}", target.path(), response.status_code());
///         }
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Adjust a request before it is sent
    fn prepare(&self, request: reqwest::Request, _target: &dyn Target) -> reqwest::Request {
        request
    }

    /// Called right before a request is sent
    fn will_send(&self, _request: &Request, _target: &dyn Target) {}

    /// Called once the exchange has completed, successfully or not
    fn did_receive(&self, _result: &ExchangeResult, _target: &dyn Target) {}

    /// Priority - higher priority plugins run first
    fn priority(&self) -> i32 {
        0
    }
}

/// Plugin chain - dispatches hooks to every registered plugin
#[derive(Clone, Default)]
pub struct PluginChain {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin
    pub fn add<P: Plugin + 'static>(&mut self, plugin: P) {
        self.add_shared(Arc::new(plugin));
    }

    /// Add a plugin that is also held elsewhere
    pub fn add_shared(&mut self, plugin: Arc<dyn Plugin>) {
        self.plugins.push(plugin);
        // Stable sort keeps registration order within a priority
        self.plugins.sort_by(|a, b| b.priority().cmp(&a.priority()));
    }

    /// Number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if no plugin is registered
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Pass a request through every plugin's `prepare`, highest priority first
    pub fn prepare(&self, request: reqwest::Request, target: &dyn Target) -> reqwest::Request {
        self.plugins
            .iter()
            .fold(request, |request, plugin| plugin.prepare(request, target))
    }

    /// Notify plugins that a request is about to be sent
    pub fn notify_will_send(&self, request: &Request, target: &dyn Target) {
        for plugin in &self.plugins {
            plugin.will_send(request, target);
        }
    }

    /// Notify plugins of a completed exchange
    pub fn notify_did_receive(&self, result: &ExchangeResult, target: &dyn Target) {
        for plugin in &self.plugins {
            plugin.did_receive(result, target);
        }
    }
}
