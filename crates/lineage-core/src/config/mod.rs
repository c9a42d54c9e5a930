//! Configuration system for Lineage.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod identity_config;
pub mod lineage_config;
pub mod log_config;

pub use identity_config::{IdentityConfig, IdentityStrategy};
pub use lineage_config::{ConfigOverrides, LineageConfig};
pub use log_config::{LogConfig, SinkKind};
