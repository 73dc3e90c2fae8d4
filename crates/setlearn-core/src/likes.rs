//! Persisted like counter.
//!
//! The count lives in `likes.json` under the state directory. A missing or
//! unreadable file counts as zero.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LIKES_FILE: &str = "likes.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LikesState {
    count: u64,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// A like counter backed by a JSON file.
#[derive(Debug, Clone)]
pub struct LikeCounter {
    path: PathBuf,
    state: LikesState,
}

impl LikeCounter {
    /// Load the counter from `state_dir`.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(LIKES_FILE);
        let state = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            match serde_json::from_str::<LikesState>(&content) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("ignoring unreadable like counter {}: {}", path.display(), e);
                    LikesState::default()
                }
            }
        } else {
            LikesState::default()
        };

        Ok(Self { path, state })
    }

    pub fn count(&self) -> u64 {
        self.state.count
    }

    /// When the counter was last saved after an increment.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.state.updated_at
    }

    /// Add one like and return the new count.
    pub fn increment(&mut self) -> u64 {
        self.state.count = self.state.count.saturating_add(1);
        self.state.updated_at = Some(Utc::now());
        self.state.count
    }

    /// Write the counter back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.state)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
