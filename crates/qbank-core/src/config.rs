//! Bank configuration for qbank
//!
//! Configuration lives in an optional `qbank.toml` at the bank root. Every
//! field has a default, so a missing file is equivalent to an empty one.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{QbankError, Result};

pub use types::{
    BankConfig, FailureModesConfig, TargetsConfig, CONFIG_FILE, DEFAULT_FILLER_DESCRIPTION,
};

impl BankConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: BankConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `qbank.toml` from `root`, falling back to defaults when absent
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QbankError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values that would make every count check meaningless
    pub fn validate(&self) -> Result<()> {
        if self.targets.batch_size == 0 {
            crate::bail_invalid!("targets.batch_size", self.targets.batch_size);
        }
        if self.targets.level_cap == 0 {
            crate::bail_invalid!("targets.level_cap", self.targets.level_cap);
        }
        Ok(())
    }

    /// Resolve the seed directory against the bank root
    pub fn seed_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.seed_dir)
    }

    /// Resolve the batch directory against the bank root
    pub fn batch_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.batch_dir)
    }
}
