// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Diagnostics sinks that receive the published log

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::Result;

/// External diagnostics system receiving attached data.
///
/// Every call carries the complete current value for each key, replacing
/// whatever the sink held before under that key.
pub trait DiagnosticsSink: Send + Sync {
    /// Attach external data
    fn attach_external_data(&self, data: Map<String, Value>) -> Result<()>;
}

impl<F> DiagnosticsSink for F
where
    F: Fn(Map<String, Value>) -> Result<()> + Send + Sync,
{
    fn attach_external_data(&self, data: Map<String, Value>) -> Result<()> {
        self(data)
    }
}

/// Sink that only emits a tracing event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn attach_external_data(&self, data: Map<String, Value>) -> Result<()> {
        for (key, value) in &data {
            let entries = value.as_array().map(Vec::len).unwrap_or(1);
            tracing::debug!(key = %key, entries, "External data attached");
        }
        Ok(())
    }
}

/// Sink that keeps the latest attached data in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    data: RwLock<Map<String, Value>>,
    publish_count: AtomicUsize,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get everything attached so far
    pub fn data(&self) -> Map<String, Value> {
        self.data.read().clone()
    }

    /// Get the value attached under a key
    pub fn get(&self, key: &str) -> Option<Value> {
        self.data.read().get(key).cloned()
    }

    /// Number of attach calls received
    pub fn publish_count(&self) -> usize {
        self.publish_count.load(Ordering::SeqCst)
    }
}

impl DiagnosticsSink for MemorySink {
    fn attach_external_data(&self, data: Map<String, Value>) -> Result<()> {
        let mut stored = self.data.write();
        for (key, value) in data {
            stored.insert(key, value);
        }
        self.publish_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
