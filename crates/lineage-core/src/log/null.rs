//! Discarding sink.

use super::ProvenanceLog;
use crate::errors::LogError;

/// Sink that accepts and discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ProvenanceLog for NullLog {
    fn write(&self, _record: &str) -> Result<(), LogError> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
