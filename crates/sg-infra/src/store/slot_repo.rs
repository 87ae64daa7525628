use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use sg_core::history::UndoStash;
use sg_core::notice::PendingNotice;
use sg_core::ports::{PendingNoticePort, UndoStashPort};

use super::json_file::{read_json, remove_if_exists, write_json_pretty};

/// A one-value file slot: stash overwrites, take reads and clears.
///
/// Backs both single-slot ports (pending notice, undo stash); wire each
/// instance to its own file.
pub struct FileSlotRepository {
    path: PathBuf,
}

impl FileSlotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn take_value<T: serde::de::DeserializeOwned>(&self) -> Result<Option<T>> {
        let value = read_json(&self.path).await?;
        if value.is_some() {
            remove_if_exists(&self.path).await?;
        }
        Ok(value)
    }

    async fn stash_value<T: serde::Serialize + Sync>(&self, value: &T) -> Result<()> {
        write_json_pretty(&self.path, value).await
    }
}

#[async_trait]
impl PendingNoticePort for FileSlotRepository {
    async fn take(&self) -> Result<Option<PendingNotice>> {
        self.take_value().await
    }

    async fn stash(&self, notice: &PendingNotice) -> Result<()> {
        self.stash_value(notice).await
    }
}

#[async_trait]
impl UndoStashPort for FileSlotRepository {
    async fn take(&self) -> Result<Option<UndoStash>> {
        self.take_value().await
    }

    async fn stash(&self, stash: &UndoStash) -> Result<()> {
        self.stash_value(stash).await
    }
}
