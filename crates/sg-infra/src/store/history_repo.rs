use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use sg_core::history::HistoryEntry;
use sg_core::ports::HistoryRepositoryPort;

use super::json_file::{read_json, write_json_pretty};

/// Lookup history persisted as one JSON list, most recent first.
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl HistoryRepositoryPort for FileHistoryRepository {
    async fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        write_json_pretty(&self.path, entries).await
    }
}
