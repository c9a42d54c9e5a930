//! Shared test support for Lineage: golden scenario fixtures, a sink that
//! fails on demand, and a deterministic recording context.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use lineage_core::errors::LogError;
use lineage_core::{Identity, Lineage, MemoryLog, ProvenanceLog, SequentialIdentitySource};

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// One golden scenario: what to run and the exact records it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub inputs: Vec<f64>,
    #[serde(default)]
    pub shape: Vec<usize>,
    pub expected_values: Vec<f64>,
    /// Record templates; `{n}` stands for the `n`th sequential identity.
    pub expected_records: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSet {
    pub scenarios: Vec<Scenario>,
}

/// Load `scenarios.json`.
pub fn load_scenarios() -> Vec<Scenario> {
    load_fixture::<ScenarioSet>("scenarios.json").scenarios
}

/// Look up one scenario by name.
///
/// # Panics
/// Panics if no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    load_scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no golden scenario named {name}"))
}

/// Replace every `{n}` placeholder with `Identity::from_u128(n)`.
pub fn expand_identities(template: &str) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .unwrap_or_else(|| panic!("unterminated placeholder in {template}"));
        let n: u128 = after[..close]
            .parse()
            .unwrap_or_else(|e| panic!("bad placeholder in {template}: {e}"));
        out.push_str(&Identity::from_u128(n).to_string());
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

/// In-memory context whose identities are minted 1, 2, 3, ...
pub fn recording_lineage() -> (Lineage, Arc<MemoryLog>) {
    let log = Arc::new(MemoryLog::new());
    let lineage = Lineage::new(log.clone(), Arc::new(SequentialIdentitySource::new(1)));
    (lineage, log)
}

/// A sink that accepts `allowed` writes and rejects every write after that.
/// Accepted writes are kept in an inner [`MemoryLog`].
#[derive(Debug)]
pub struct FailingLog {
    allowed: usize,
    attempts: AtomicUsize,
    accepted: MemoryLog,
}

impl FailingLog {
    pub fn new(allowed: usize) -> Self {
        Self {
            allowed,
            attempts: AtomicUsize::new(0),
            accepted: MemoryLog::new(),
        }
    }

    /// Writes that were accepted before the sink started failing.
    pub fn accepted(&self) -> Vec<String> {
        self.accepted.records()
    }

    /// Total write attempts, accepted or not.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ProvenanceLog for FailingLog {
    fn write(&self, record: &str) -> Result<(), LogError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt >= self.allowed {
            return Err(LogError::Rejected {
                sink: self.name().to_string(),
                reason: format!("write {} exceeds allowance of {}", attempt + 1, self.allowed),
            });
        }
        self.accepted.write(record)
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Context over a [`FailingLog`] with sequential identities.
pub fn failing_lineage(allowed: usize) -> (Lineage, Arc<FailingLog>) {
    let log = Arc::new(FailingLog::new(allowed));
    let lineage = Lineage::new(log.clone(), Arc::new(SequentialIdentitySource::new(1)));
    (lineage, log)
}
