// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Network logger configuration

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::network::{DEFAULT_CAPACITY, DEFAULT_SINK_KEY, MAX_BODY_SIZE};

/// Network logger configuration
///
/// Deserializable so a host can embed it in its own config file; every field
/// falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetworkLogConfig {
    /// Maximum number of exchanges kept in the log
    pub capacity: usize,
    /// Bodies at or above this size are never decoded
    pub max_body_size: usize,
    /// Key the log is published under
    pub sink_key: String,
}

impl Default for NetworkLogConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_body_size: MAX_BODY_SIZE,
            sink_key: DEFAULT_SINK_KEY.to_string(),
        }
    }
}

impl NetworkLogConfig {
    /// Create a new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set max body size
    pub fn max_body_size(mut self, max_body_size: usize) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    /// Set the sink key
    pub fn sink_key(mut self, key: impl Into<String>) -> Self {
        self.sink_key = key.into();
        self
    }

    /// Parse a config from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config can back a log store
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::config("capacity must be at least 1"));
        }
        if self.max_body_size == 0 {
            return Err(Error::config("max_body_size must be at least 1"));
        }
        if self.sink_key.is_empty() {
            return Err(Error::config("sink_key must not be empty"));
        }
        Ok(())
    }
}
