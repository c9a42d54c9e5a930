//! The `Lineage` context handle: one log, one identity source, one format.
//!
//! Every tracked value carries a clone of the handle it was created with, and
//! every value derived from it inherits that same handle. There is no global
//! log.

use std::fmt;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::config::{IdentityStrategy, LineageConfig, SinkKind};
use crate::errors::{LineageResult, LogError};
use crate::identity::{Identity, IdentitySource, RandomIdentitySource, SequentialIdentitySource};
use crate::log::{FileLog, MemoryLog, NullLog, ProvenanceLog};
use crate::record::{DerivationRecord, RecordFormat};

/// Shared provenance context. Cheap to clone.
#[derive(Clone)]
pub struct Lineage {
    log: Arc<dyn ProvenanceLog>,
    identities: Arc<dyn IdentitySource>,
    format: RecordFormat,
}

impl Lineage {
    /// Context over the given sink and identity source, tuple format.
    pub fn new(log: Arc<dyn ProvenanceLog>, identities: Arc<dyn IdentitySource>) -> Self {
        Self {
            log,
            identities,
            format: RecordFormat::default(),
        }
    }

    /// Replace the record format.
    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// In-memory context with random identities. Returns the log so callers
    /// can inspect what was written.
    pub fn in_memory() -> (Self, Arc<MemoryLog>) {
        let log = Arc::new(MemoryLog::new());
        let lineage = Self::new(log.clone(), Arc::new(RandomIdentitySource::new()));
        (lineage, log)
    }

    /// Build the sink and identity source described by `config`.
    pub fn from_config(config: &LineageConfig) -> LineageResult<Self> {
        LineageConfig::validate(config)?;

        let log: Arc<dyn ProvenanceLog> = match config.log.effective_sink() {
            SinkKind::Memory => Arc::new(MemoryLog::new()),
            SinkKind::Null => Arc::new(NullLog),
            SinkKind::File => Arc::new(FileLog::open(
                config.log.effective_path(),
                config.log.effective_append(),
            )?),
        };
        let identities: Arc<dyn IdentitySource> = match config.identity.effective_strategy() {
            IdentityStrategy::Random => Arc::new(RandomIdentitySource::new()),
            IdentityStrategy::Sequential => {
                Arc::new(SequentialIdentitySource::new(config.identity.effective_seed()))
            }
        };

        Ok(Self::new(log, identities).with_format(config.log.effective_format()))
    }

    /// Mint a fresh identity.
    pub fn mint(&self) -> Identity {
        self.identities.next_identity()
    }

    /// Render and append one record. Sink failures are returned unmodified.
    pub fn record(&self, record: &DerivationRecord) -> Result<(), LogError> {
        let rendered = record.render(self.format)?;
        trace!(sink = self.log.name(), record = %rendered, "write derivation record");
        self.log.write(&rendered).inspect_err(|e| {
            warn!(
                sink = self.log.name(),
                target_id = %record.target,
                error = %e,
                "provenance log write failed"
            );
        })
    }

    /// Flush the underlying sink.
    pub fn flush(&self) -> Result<(), LogError> {
        self.log.flush()
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    pub fn log(&self) -> &Arc<dyn ProvenanceLog> {
        &self.log
    }

    /// Whether both handles write to the same sink instance.
    pub fn shares_log_with(&self, other: &Lineage) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.log), Arc::as_ptr(&other.log))
    }

    /// Whether both handles share the sink and the identity source, so
    /// identities minted through one never collide with the other's log.
    pub fn same_context(&self, other: &Lineage) -> bool {
        self.shares_log_with(other)
            && std::ptr::addr_eq(
                Arc::as_ptr(&self.identities),
                Arc::as_ptr(&other.identities),
            )
    }
}

impl fmt::Debug for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lineage")
            .field("log", &self.log.name())
            .field("identities", &self.identities)
            .field("format", &self.format)
            .finish()
    }
}
