//! Append-only provenance log sinks.
//!
//! A sink accepts already-rendered records and must neither reorder nor drop
//! accepted writes. Durability and failure modes are the sink's own concern;
//! callers propagate every failure and never retry.

pub mod memory;
pub mod null;
pub mod writer;

pub use memory::MemoryLog;
pub use null::NullLog;
pub use writer::{FileLog, WriterLog};

use crate::errors::LogError;

/// Write-only, append-only destination for serialized derivation records.
///
/// Sinks serialize concurrent writes themselves; `write` takes `&self`.
pub trait ProvenanceLog: Send + Sync {
    /// Append one rendered record.
    fn write(&self, record: &str) -> Result<(), LogError>;

    /// Push buffered records to durable storage. No-op by default.
    fn flush(&self) -> Result<(), LogError> {
        Ok(())
    }

    /// Short label used in errors and tracing output.
    fn name(&self) -> &str;
}
