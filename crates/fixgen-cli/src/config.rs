//! Optional YAML configuration.
//!
//! Every value has a default matching the conventional fixture file names in
//! the working directory, so the tool runs with no config file at all.
//! Command-line flags override whatever is loaded here.

use fixgen_types::NamingScheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "fixgen.yaml";

/// Partition count shared by the `split` and `merge` defaults.
pub const DEFAULT_PARTITIONS: usize = 5;

/// Partition file stem shared by the `split` and `merge` defaults.
pub const DEFAULT_PARTITION_STEM: &str = "accounts";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixgenConfig {
    /// Account generation.
    pub generate: GenerateConfig,
    /// Partition splitting.
    pub split: SplitConfig,
    /// Genesis merge.
    pub merge: MergeConfig,
}

/// Settings for `fixgen generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Number of accounts.
    pub count: u64,
    /// Output file.
    pub output: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 100_000,
            output: PathBuf::from("accountsTest.json"),
        }
    }
}

/// Settings for `fixgen split`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Record file to split.
    pub input: PathBuf,
    /// Number of partitions.
    pub groups: usize,
    /// Fixed partition size; takes precedence over `groups` when set.
    pub chunk_size: Option<usize>,
    /// Output directory.
    pub dir: PathBuf,
    /// Partition file stem.
    pub stem: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("accountsTest.json"),
            groups: DEFAULT_PARTITIONS,
            chunk_size: None,
            dir: PathBuf::from("."),
            stem: DEFAULT_PARTITION_STEM.to_string(),
        }
    }
}

/// Settings for `fixgen merge`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Partition files in numbering order.
    pub partitions: Vec<PathBuf>,
    /// Genesis template.
    pub template: PathBuf,
    /// Output genesis file.
    pub output: PathBuf,
    /// Balance per account, as a decimal string.
    pub balance: String,
    /// Account naming.
    pub naming: NamingScheme,
    /// Reject records without an address.
    pub strict: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            partitions: (1..=DEFAULT_PARTITIONS)
                .map(|i| PathBuf::from(format!("{DEFAULT_PARTITION_STEM}{i}.json")))
                .collect(),
            template: PathBuf::from("example-genesis.json"),
            output: PathBuf::from("genesis.json"),
            balance: fixgen_types::Balance::genesis_default().to_string(),
            naming: NamingScheme::default(),
            strict: false,
        }
    }
}

impl FixgenConfig {
    /// Loads configuration.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns a message if the file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the YAML error for malformed input.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
