//! Configuration for loading a taxonomy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// Configuration for a [`WordNet`](crate::wordnet::WordNet) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordNetConfig {
    /// Default synset data file.
    pub synsets_path: Option<PathBuf>,

    /// Default hypernym data file.
    pub hypernyms_path: Option<PathBuf>,

    /// Reject loads whose hypernyms reference ids no synset defines.
    pub verify_references: bool,
}

impl Default for WordNetConfig {
    fn default() -> Self {
        Self {
            synsets_path: None,
            hypernyms_path: None,
            verify_references: true,
        }
    }
}

impl WordNetConfig {
    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WordNetError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Both data paths, or a config error naming the missing one.
    pub fn data_paths(&self) -> Result<(&Path, &Path)> {
        let synsets = self
            .synsets_path
            .as_deref()
            .ok_or_else(|| WordNetError::config("no synsets file configured"))?;
        let hypernyms = self
            .hypernyms_path
            .as_deref()
            .ok_or_else(|| WordNetError::config("no hypernyms file configured"))?;
        Ok((synsets, hypernyms))
    }
}
