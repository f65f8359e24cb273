use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, VersionGuardError};
use crate::version::Version;

/// Half-open range `[from, until)` of versions with a known defect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuggyRange {
    pub from: Version,
    pub until: Version,
    /// Shown to the operator when the range is hit
    pub reason: String,
}

impl BuggyRange {
    pub fn contains(&self, version: &Version) -> bool {
        &self.from <= version && version < &self.until
    }
}

/// Which storage-engine versions the test suite accepts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Engine name used in diagnostics
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(default = "default_minimum_version")]
    pub minimum_version: Version,
    #[serde(default = "default_buggy_ranges")]
    pub buggy_ranges: Vec<BuggyRange>,
}

fn default_engine() -> String {
    "Postgres".to_string()
}

fn default_minimum_version() -> Version {
    Version::from_components(vec![9, 2])
}

fn default_buggy_ranges() -> Vec<BuggyRange> {
    vec![BuggyRange {
        from: Version::from_components(vec![9, 5]),
        until: Version::from_components(vec![9, 5, 2]),
        reason: "Versions 9.5.0 and 9.5.1 contain a known bug that causes incorrect results \
                 to be returned for certain queries."
            .to_string(),
    }]
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            minimum_version: default_minimum_version(),
            buggy_ranges: default_buggy_ranges(),
        }
    }
}

impl GuardConfig {
    /// Load from a TOML file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| VersionGuardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GuardConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| VersionGuardError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(io_err)?;
        Ok(())
    }
}
