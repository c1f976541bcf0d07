use chrono::{DateTime, Utc};
use humanizer_types::Settings;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

use crate::session::TransformResult;
use crate::{Error, Result};

pub const HISTORY_FILE: &str = "history.jsonl";

/// A saved before/after pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub original_text: String,
    pub humanized_text: String,
    pub detection_score: u8,
    pub settings: Settings,
}

impl HistoryEntry {
    pub fn from_result(result: &TransformResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            original_text: result.original_text.clone(),
            humanized_text: result.humanized_text.clone(),
            detection_score: result.detection_score,
            settings: result.settings,
        }
    }
}

/// Destination for explicit "save" actions
pub trait HistorySink: Send + Sync {
    fn save(&self, entry: &HistoryEntry) -> Result<()>;
}

/// Destination for "copy" actions; receives the humanized text verbatim
pub trait Clipboard: Send + Sync {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Append-only JSON Lines history file
#[derive(Debug, Clone)]
pub struct JsonlHistory {
    path: PathBuf,
}

impl JsonlHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HISTORY_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, oldest first. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = std::fs::File::open(&self.path)?;
        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                Error::History(format!(
                    "{}:{}: {}",
                    self.path.display(),
                    index + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let mut entries = self.load()?;
        entries.reverse();
        entries.truncate(limit);
        Ok(entries)
    }
}

impl HistorySink for JsonlHistory {
    fn save(&self, entry: &HistoryEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl HistorySink for MemoryHistory {
    fn save(&self, entry: &HistoryEntry) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| Error::History("history lock poisoned".to_string()))?
            .push(entry.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| Error::InvalidOperation("clipboard lock poisoned".to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_result() -> TransformResult {
        TransformResult {
            original_text: "The quick brown fox".to_string(),
            humanized_text: "The quicks brown fox".to_string(),
            detection_score: 40,
            settings: Settings::default(),
        }
    }

    #[test]
    fn test_jsonl_history_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let history = JsonlHistory::in_dir(&temp_dir.path().join("nested"));

        let first = HistoryEntry::from_result(&sample_result());
        let second = HistoryEntry::from_result(&sample_result());
        history.save(&first)?;
        history.save(&second)?;

        let loaded = history.load()?;
        assert_eq!(loaded, vec![first.clone(), second.clone()]);

        let recent = history.recent(1)?;
        assert_eq!(recent, vec![second]);
        Ok(())
    }

    #[test]
    fn test_missing_history_is_empty() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let history = JsonlHistory::in_dir(temp_dir.path());
        assert!(history.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_line_reports_location() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let history = JsonlHistory::in_dir(temp_dir.path());
        std::fs::write(history.path(), "{not json}\n")?;

        let err = history.load().unwrap_err();
        assert!(matches!(err, Error::History(_)));
        assert!(err.to_string().contains(":1:"));
        Ok(())
    }

    #[test]
    fn test_memory_clipboard_is_verbatim() -> Result<()> {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        clipboard.copy("  spaced\ttext \n")?;
        assert_eq!(clipboard.contents().as_deref(), Some("  spaced\ttext \n"));
        Ok(())
    }
}
