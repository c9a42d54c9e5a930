//! In-memory sink. Keeps every record for inspection.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::ProvenanceLog;
use crate::errors::LogError;

/// Sink that keeps records in memory, in write order.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record written so far.
    ///
    /// Reads see through a poisoned lock: a record is pushed whole or not at
    /// all, so the stored records stay intact even after a writer panicked.
    /// Writes to a poisoned log still fail with [`LogError::Poisoned`].
    pub fn records(&self) -> Vec<String> {
        self.read().clone()
    }

    /// Number of records written so far. Sees through poisoning like
    /// [`MemoryLog::records`].
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> MutexGuard<'_, Vec<String>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<String>>, LogError> {
        self.records.lock().map_err(|_| LogError::Poisoned {
            sink: self.name().to_string(),
        })
    }
}

impl ProvenanceLog for MemoryLog {
    fn write(&self, record: &str) -> Result<(), LogError> {
        self.lock()?.push(record.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_write_order() {
        let log = MemoryLog::new();
        assert!(log.is_empty());
        log.write("a").unwrap();
        log.write("b").unwrap();
        assert_eq!(log.records(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn reads_survive_a_poisoned_lock() {
        let log = std::sync::Arc::new(MemoryLog::new());
        log.write("kept").unwrap();
        let poisoner = log.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.records.lock().unwrap();
            panic!("writer panicked while holding the lock");
        })
        .join();

        assert_eq!(log.records(), vec!["kept".to_string()]);
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert!(matches!(log.write("next"), Err(LogError::Poisoned { .. })));
    }
}
