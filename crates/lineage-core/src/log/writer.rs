//! Line-oriented sinks over any `io::Write`, including files.

use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::info;

use super::ProvenanceLog;
use crate::errors::LogError;

/// Sink writing one record per line to an `io::Write`.
///
/// Writes are serialized by an internal mutex.
#[derive(Debug)]
pub struct WriterLog<W: Write + Send> {
    inner: Mutex<W>,
    label: String,
}

/// File-backed sink. Line-buffered, so every accepted record reaches the
/// file before `write` returns.
pub type FileLog = WriterLog<LineWriter<File>>;

impl<W: Write + Send> WriterLog<W> {
    pub fn new(writer: W, label: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(writer),
            label: label.into(),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> Result<W, LogError> {
        let label = self.label;
        self.inner
            .into_inner()
            .map_err(|_| LogError::Poisoned { sink: label })
    }

    fn lock(&self) -> Result<MutexGuard<'_, W>, LogError> {
        self.inner.lock().map_err(|_| LogError::Poisoned {
            sink: self.label.clone(),
        })
    }

    fn io_error(&self, source: std::io::Error) -> LogError {
        LogError::Io {
            sink: self.label.clone(),
            source,
        }
    }
}

impl FileLog {
    /// Open (or create) a log file. `append = false` truncates it.
    pub fn open(path: impl AsRef<Path>, append: bool) -> Result<Self, LogError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(path).map_err(|source| LogError::Open {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), append, "opened provenance log file");
        Ok(Self::new(LineWriter::new(file), path.display().to_string()))
    }
}

impl<W: Write + Send> ProvenanceLog for WriterLog<W> {
    fn write(&self, record: &str) -> Result<(), LogError> {
        let mut writer = self.lock()?;
        writer
            .write_all(record.as_bytes())
            .and_then(|()| writer.write_all(b"\n"))
            .map_err(|e| self.io_error(e))
    }

    fn flush(&self) -> Result<(), LogError> {
        self.lock()?.flush().map_err(|e| self.io_error(e))
    }

    fn name(&self) -> &str {
        &self.label
    }
}
