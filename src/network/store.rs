// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Bounded network log
//!
//! Host networking libraries complete exchanges on their own worker threads,
//! so the entry list sits behind a mutex. Publishing happens while that lock
//! is held: the sink sees each state in the order it was produced. Sinks must
//! therefore not call back into the store.

use std::collections::VecDeque;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::{Mutex, RwLock};
use serde_json::{Map, Value};

use super::record::LogRecord;
use super::sink::{DiagnosticsSink, TracingSink};
use crate::config::NetworkLogConfig;
use crate::error::Result;

/// Default number of exchanges kept
pub const DEFAULT_CAPACITY: usize = 15;

/// Default key the log is published under
pub const DEFAULT_SINK_KEY: &str = "networkLogs";

lazy_static! {
    static ref SHARED_STORE: Arc<LogStore> = Arc::new(LogStore::new(Arc::new(TracingSink)));
}

/// Bounded, ordered log of recent exchanges
pub struct LogStore {
    /// Oldest first
    entries: Mutex<VecDeque<LogRecord>>,
    capacity: usize,
    key: String,
    sink: RwLock<Arc<dyn DiagnosticsSink>>,
}

impl LogStore {
    /// Create a store with the default capacity and key
    pub fn new(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(DEFAULT_CAPACITY)),
            capacity: DEFAULT_CAPACITY,
            key: DEFAULT_SINK_KEY.to_string(),
            sink: RwLock::new(sink),
        }
    }

    /// Create a store from a config
    pub fn with_config(config: &NetworkLogConfig, sink: Arc<dyn DiagnosticsSink>) -> Result<Self> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "Invalid network log config");
            return Err(e);
        }

        Ok(Self {
            entries: Mutex::new(VecDeque::with_capacity(config.capacity)),
            capacity: config.capacity,
            key: config.sink_key.clone(),
            sink: RwLock::new(sink),
        })
    }

    /// Process-wide store, created on first use.
    ///
    /// Publishes to a [`TracingSink`] until [`LogStore::set_sink`] installs
    /// the real diagnostics sink.
    pub fn shared() -> Arc<LogStore> {
        SHARED_STORE.clone()
    }

    /// Replace the sink; later publications go to the new one
    pub fn set_sink(&self, sink: Arc<dyn DiagnosticsSink>) {
        *self.sink.write() = sink;
    }

    /// Append a record and publish the whole log.
    ///
    /// The oldest entries are evicted first so the log never exceeds its
    /// capacity.
    pub fn log_request(&self, record: LogRecord) {
        let mut entries = self.entries.lock();

        while entries.len() >= self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::debug!(url = %evicted.url, "Evicted oldest network log entry");
            }
        }
        entries.push_back(record);

        self.publish(&entries);
    }

    /// Snapshot of the current entries, oldest first
    pub fn entries(&self) -> Vec<LogRecord> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Key the log is published under
    pub fn key(&self) -> &str {
        &self.key
    }

    fn publish(&self, entries: &VecDeque<LogRecord>) {
        let logs: Value = match serde_json::to_value(entries) {
            Ok(logs) => logs,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize network log");
                return;
            }
        };

        let mut data = Map::new();
        data.insert(self.key.clone(), logs);

        let sink = self.sink.read().clone();
        if let Err(e) = sink.attach_external_data(data) {
            tracing::warn!(error = %e, key = %self.key, "Failed to publish network log");
        }
    }
}

impl std::fmt::Debug for LogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogStore")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("key", &self.key)
            .finish()
    }
}
