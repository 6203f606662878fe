#[cfg(test)]
#[path = "history_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::models::HistoryEntry;

/// Entries beyond this count are evicted oldest-first on insert.
pub const MAX_ENTRIES: usize = 20;

const HISTORY_FILE: &str = "resume_project_history.json";

pub struct HistoryStore {
    pub cache_dir: path::PathBuf,
}

impl Default for HistoryStore {
    fn default() -> HistoryStore {
        let cache_dir = dirs::cache_dir().unwrap().join("specforge");

        return HistoryStore::new(cache_dir);
    }
}

impl HistoryStore {
    pub fn new(cache_dir: path::PathBuf) -> HistoryStore {
        return HistoryStore { cache_dir };
    }

    pub fn file_path(&self) -> path::PathBuf {
        return self.cache_dir.join(HISTORY_FILE);
    }

    /// Returns the persisted history, newest first. A missing, unreadable,
    /// or corrupt file yields an empty list so the session can always start.
    pub async fn load_all(&self) -> Vec<HistoryEntry> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return vec![];
        }

        let payload = match fs::read_to_string(&file_path).await {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = ?err, "Failed to read history file");
                return vec![];
            }
        };

        return match serde_json::from_str::<Vec<HistoryEntry>>(&payload) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = ?err, "History file is corrupt, starting empty");
                vec![]
            }
        };
    }

    /// Prepends an entry, evicts past [`MAX_ENTRIES`], and persists the
    /// result. The returned list is authoritative even when the write
    /// fails; persistence problems are logged and never surfaced.
    pub async fn insert(&self, entry: HistoryEntry, current: &[HistoryEntry]) -> Vec<HistoryEntry> {
        let mut entries = vec![entry];
        entries.extend_from_slice(current);
        entries.truncate(MAX_ENTRIES);

        if let Err(err) = self.persist(&entries).await {
            tracing::error!(error = ?err, "Failed to persist history");
        }

        return entries;
    }

    pub async fn clear(&self) -> Result<()> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }

    async fn persist(&self, entries: &[HistoryEntry]) -> Result<()> {
        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir).await?;
        }

        let payload = serde_json::to_string_pretty(entries)?;
        let mut file = fs::File::create(self.file_path()).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(());
    }
}
