use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The archive provider a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchiveService {
    ArchiveToday,
    Wayback,
}

impl ArchiveService {
    /// Human-readable provider name, as recorded in history entries.
    pub fn display_name(&self) -> &'static str {
        match self {
            ArchiveService::ArchiveToday => "Archive.Today",
            ArchiveService::Wayback => "Wayback Machine",
        }
    }
}

impl Default for ArchiveService {
    fn default() -> Self {
        ArchiveService::ArchiveToday
    }
}

impl Display for ArchiveService {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ArchiveService::ArchiveToday).unwrap(),
            "\"archive_today\""
        );
        assert_eq!(
            serde_json::to_string(&ArchiveService::Wayback).unwrap(),
            "\"wayback\""
        );
    }
}
