//! # lineage-core
//!
//! Foundation crate for the Lineage value-provenance system.
//! Defines identities and identity sources, derivation records, provenance
//! log sinks, the `Lineage` context handle, errors, config, and tracing setup.
//! `lineage-tracked` builds tracked values and operation interception on top.

pub mod config;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod lineage;
pub mod log;
pub mod record;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LineageConfig;
pub use errors::{LineageError, LineageResult};
pub use identity::{Identity, IdentitySource, RandomIdentitySource, SequentialIdentitySource};
pub use lineage::Lineage;
pub use log::{FileLog, MemoryLog, NullLog, ProvenanceLog, WriterLog};
pub use record::{DerivationRecord, RecordFormat, RecordSource};
