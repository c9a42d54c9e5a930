//! Provenance log sink errors.

use super::error_code::{self, LineageErrorCode};

/// Errors raised by a provenance log sink.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("write to {sink} failed: {source}")]
    Io {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("log sink {sink} is poisoned by a panicked writer")]
    Poisoned { sink: String },

    #[error("record serialization failed: {0}")]
    Serialization(String),

    #[error("log sink {sink} rejected the record: {reason}")]
    Rejected { sink: String, reason: String },

    #[error("value is bound to a different provenance context than sink {sink}")]
    ForeignContext { sink: String },
}

impl LineageErrorCode for LogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } | Self::Rejected { .. } => error_code::LOG_WRITE_FAILED,
            Self::Open { .. } => error_code::LOG_OPEN_FAILED,
            Self::Poisoned { .. } => error_code::LOG_POISONED,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
            Self::ForeignContext { .. } => error_code::LOG_CONTEXT_MISMATCH,
        }
    }
}
