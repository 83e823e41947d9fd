//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings needed to assemble a world and drive the scripted encounter.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub content_dir: PathBuf,
    pub event_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("data"),
            event_buffer_size: 100,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CONTENT_DIR` - Directory holding config.toml and the RON tables (default: data)
    /// - `EVENT_BUFFER_SIZE` - Per-topic event channel capacity (default: 100)
    ///
    /// Log filtering is read by the subscriber from `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }

        if let Some(capacity) = lookup("EVENT_BUFFER_SIZE").and_then(|v| v.parse::<usize>().ok()) {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }
}
