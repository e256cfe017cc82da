//! Persistence port for the order counter.
//!
//! The registry only ever talks to [`CounterStore`]; production wires the
//! JSON file adapter, tests wire [`MemoryCounterStore`].

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::types::OrderCounter;

/// Durable home of the single [`OrderCounter`] record.
///
/// # Contract
/// - `load` returns `Ok(None)` when nothing was ever saved.
/// - `save` returns `Ok(())` only once the record is durable; a crash after
///   that point must not lose it.
/// - Single writer. Nothing else may write the same record concurrently.
pub trait CounterStore {
    fn load(&self) -> Result<Option<OrderCounter>>;
    fn save(&mut self, counter: &OrderCounter) -> Result<()>;
}

/// In-process store. Durable for as long as the value lives.
#[derive(Clone, Debug, Default)]
pub struct MemoryCounterStore {
    record: Option<OrderCounter>,
    saves: usize,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with a record, as if a previous process had saved it.
    pub fn with_counter(counter: OrderCounter) -> Self {
        Self {
            record: Some(counter),
            saves: 0,
        }
    }

    pub fn record(&self) -> Option<&OrderCounter> {
        self.record.as_ref()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl CounterStore for MemoryCounterStore {
    fn load(&self) -> Result<Option<OrderCounter>> {
        Ok(self.record.clone())
    }

    fn save(&mut self, counter: &OrderCounter) -> Result<()> {
        self.record = Some(counter.clone());
        self.saves += 1;
        Ok(())
    }
}

/// One JSON document on disk, replaced atomically on every save.
///
/// A save writes a sibling `*.tmp` file, fsyncs it, renames it over the target
/// and fsyncs the directory, so a crash leaves either the old record or the
/// new one, never a torn file.
#[derive(Clone, Debug)]
pub struct JsonFileCounterStore {
    path: PathBuf,
}

impl JsonFileCounterStore {
    /// Parent directories are created on first save, not here.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CounterStore for JsonFileCounterStore {
    fn load(&self) -> Result<Option<OrderCounter>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("read order counter {:?}", self.path))
            }
        };
        let counter: OrderCounter = serde_json::from_str(&raw)
            .with_context(|| format!("parse order counter {:?}", self.path))?;
        Ok(Some(counter))
    }

    fn save(&mut self, counter: &OrderCounter) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).with_context(|| format!("create_dir_all {:?}", dir))?;

        let json = serde_json::to_string(counter).context("serialize order counter failed")?;
        let tmp = self.tmp_path();
        write_and_sync(&tmp, format!("{json}\n").as_bytes())
            .with_context(|| format!("write order counter temp file {:?}", tmp))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace order counter {:?}", self.path))?;
        sync_dir(&dir).with_context(|| format!("sync directory {:?}", dir))?;
        Ok(())
    }
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    OpenOptions::new().read(true).open(dir)?.sync_all()
}

// Directories cannot be opened for sync on Windows; rename is already
// durable there once the file itself was flushed.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}
