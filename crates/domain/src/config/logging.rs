use serde::{Deserialize, Serialize};

/// `[logging]` section. `RUST_LOG`, when set, replaces `level`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// One of "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
