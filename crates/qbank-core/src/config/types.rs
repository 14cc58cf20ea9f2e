//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Config file name looked up at the bank root
pub const CONFIG_FILE: &str = "qbank.toml";

/// Generic description used when padding failure modes
pub const DEFAULT_FILLER_DESCRIPTION: &str =
    "Student made an error in calculation or conceptual understanding.";

/// Bank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Directory holding consolidated `seed_grade_{G}.json` files
    #[serde(default = "default_seed_dir")]
    pub seed_dir: String,

    /// Directory holding `grade_{G}_level_{L}_batch_{B}.json` working files
    #[serde(default = "default_batch_dir")]
    pub batch_dir: String,

    /// Count targets used by validation and balancing
    #[serde(default)]
    pub targets: TargetsConfig,

    /// Failure-mode normalization settings
    #[serde(default)]
    pub failure_modes: FailureModesConfig,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            seed_dir: default_seed_dir(),
            batch_dir: default_batch_dir(),
            targets: TargetsConfig::default(),
            failure_modes: FailureModesConfig::default(),
        }
    }
}

/// Count targets for consolidated and batch files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetsConfig {
    /// Expected records per consolidated file
    #[serde(default = "default_total")]
    pub total: usize,

    /// Expected records per level in a consolidated file
    #[serde(default = "default_per_level")]
    pub per_level: usize,

    /// Exact record count of a batch file
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Per-level cap applied by rebalance
    #[serde(default = "default_level_cap")]
    pub level_cap: usize,

    /// Grade whose seed file rebalance targets when no file is given
    #[serde(default = "default_grade")]
    pub default_grade: u32,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            total: default_total(),
            per_level: default_per_level(),
            batch_size: default_batch_size(),
            level_cap: default_level_cap(),
            default_grade: default_grade(),
        }
    }
}

/// Failure-mode normalization settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureModesConfig {
    /// Description given to synthesized `unanticipated_error_{n}` entries
    #[serde(default = "default_filler_description")]
    pub filler_description: String,
}

impl Default for FailureModesConfig {
    fn default() -> Self {
        Self {
            filler_description: default_filler_description(),
        }
    }
}

fn default_seed_dir() -> String {
    "seed_content".to_string()
}

fn default_batch_dir() -> String {
    "seed_content/batches".to_string()
}

fn default_total() -> usize {
    1000
}

fn default_per_level() -> usize {
    100
}

fn default_batch_size() -> usize {
    50
}

fn default_level_cap() -> usize {
    100
}

fn default_grade() -> u32 {
    2
}

fn default_filler_description() -> String {
    DEFAULT_FILLER_DESCRIPTION.to_string()
}
