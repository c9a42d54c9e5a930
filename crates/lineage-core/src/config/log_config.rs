//! Provenance log sink configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::record::RecordFormat;

/// Which sink `Lineage::from_config` builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Memory,
    File,
    Null,
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "null" => Ok(Self::Null),
            other => Err(format!("unknown sink '{other}' (expected memory, file or null)")),
        }
    }
}

/// Configuration for the provenance log sink.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Sink kind. Default: memory.
    pub sink: Option<SinkKind>,
    /// Log file path for the file sink. Default: `lineage.log`.
    pub path: Option<String>,
    /// Append to an existing file instead of truncating. Default: true.
    pub append: Option<bool>,
    /// Record rendering. Default: tuple.
    pub format: Option<RecordFormat>,
}

impl LogConfig {
    pub fn effective_sink(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or(constants::DEFAULT_LOG_PATH)
    }

    pub fn effective_append(&self) -> bool {
        self.append.unwrap_or(constants::DEFAULT_LOG_APPEND)
    }

    pub fn effective_format(&self) -> RecordFormat {
        self.format.unwrap_or_default()
    }
}
