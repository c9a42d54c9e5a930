// Single source of truth for all default values.

// --- Log sink ---
pub const DEFAULT_LOG_PATH: &str = "lineage.log";
pub const DEFAULT_LOG_APPEND: bool = true;

// --- Identity ---
pub const DEFAULT_SEQUENTIAL_SEED: u64 = 1;

// --- Config files ---
pub const PROJECT_CONFIG_FILENAME: &str = "lineage.toml";
pub const USER_CONFIG_DIRNAME: &str = ".lineage";
pub const USER_CONFIG_FILENAME: &str = "config.toml";

// --- Tracing ---
pub const LOG_FILTER_ENV: &str = "LINEAGE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "lineage=info";
