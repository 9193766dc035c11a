use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::session::SessionSnapshot;

pub trait SessionStore {
    /// Saving under an existing key replaces the previous snapshot.
    fn save(&mut self, key: &str, snapshot: SessionSnapshot) -> Result<()>;
    fn load(&self, key: &str) -> Result<Option<SessionSnapshot>>;
    /// Keys in ascending order, which is chronological for timestamp keys.
    fn keys(&self) -> Result<Vec<String>>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: BTreeMap<String, SessionSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn save(&mut self, key: &str, snapshot: SessionSnapshot) -> Result<()> {
        self.sessions.insert(key.to_string(), snapshot);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<SessionSnapshot>> {
        Ok(self.sessions.get(key).cloned())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.sessions.keys().cloned().collect())
    }
}

/// One JSON document mapping key to snapshot, rewritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, SessionSnapshot>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read session store {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("malformed session store {}", self.path.display()))
    }

    fn write_all(&self, sessions: &BTreeMap<String, SessionSnapshot>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        // The store is replaced by rename so a failed write leaves it intact.
        let temp_path = self.path.with_extension("tmp");
        let file = std::fs::File::create(&temp_path)
            .with_context(|| format!("failed to create {}", temp_path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, sessions)?;
        writer
            .flush()
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        std::fs::rename(&temp_path, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn save(&mut self, key: &str, snapshot: SessionSnapshot) -> Result<()> {
        let mut sessions = self.read_all()?;
        sessions.insert(key.to_string(), snapshot);
        self.write_all(&sessions)?;
        debug!(key, path = %self.path.display(), "session saved");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<SessionSnapshot>> {
        Ok(self.read_all()?.remove(key))
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.read_all()?.into_keys().collect())
    }
}
