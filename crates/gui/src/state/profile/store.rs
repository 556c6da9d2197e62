//! Versioned on-disk list of named reference profiles

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ReferenceProfile;

/// Current store file version
pub const PROFILE_STORE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported profile store version {found} (expected {PROFILE_STORE_VERSION})")]
    UnsupportedVersion { found: u32 },
}

#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    profiles: Vec<ReferenceProfile>,
}

/// Load-all / save-all access to the profile file.
/// A store without a path keeps nothing between sessions.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    path: Option<PathBuf>,
}

impl ProfileStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn memory_only() -> Self {
        Self { path: None }
    }

    /// Store file inside the platform data directory
    pub fn default_location(file_name: &str) -> Self {
        let path = directories::ProjectDirs::from("com", "knobforge", "knobforge")
            .map(|dirs| dirs.data_dir().join(file_name));
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read every profile. A missing file is an empty store.
    pub fn load_all(&self) -> Result<Vec<ReferenceProfile>, StoreError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        if !path.exists() {
            return Ok(Vec::new());
        }
        let json = std::fs::read_to_string(path)?;
        let file: StoreFile = serde_json::from_str(&json)?;
        if file.version != PROFILE_STORE_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: file.version,
            });
        }
        tracing::info!(
            "Loaded {} reference profiles from {}",
            file.profiles.len(),
            path.display()
        );
        Ok(file.profiles)
    }

    /// Replace the file content with `profiles`
    pub fn save_all(&self, profiles: &[ReferenceProfile]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = StoreFile {
            version: PROFILE_STORE_VERSION,
            profiles: profiles.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        // Write next to the target first so a failed write keeps the old file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}
