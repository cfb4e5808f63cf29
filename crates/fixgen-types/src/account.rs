//! Funded genesis account entries.

use crate::{Balance, DEFAULT_NAME_PREFIX, DEFAULT_NAME_WIDTH};
use serde::{Deserialize, Serialize};

/// One entry of a genesis document's `accounts` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Synthetic name, unique across the merged output.
    pub name: String,

    /// Address copied from the source record. Omitted when the record had none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Initial balance, serialized as a bare integer literal.
    pub balance: Balance,
}

/// How synthetic account names are built from the merge counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingScheme {
    /// Fixed prefix, `acc` by default.
    pub prefix: String,

    /// Minimum digit count; the counter is zero-padded to it, never truncated.
    pub width: usize,
}

impl NamingScheme {
    /// Returns the name for a 1-based counter value.
    #[must_use]
    pub fn name(&self, counter: u64) -> String {
        format!("{}{:0width$}", self.prefix, counter, width = self.width)
    }
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_NAME_PREFIX.to_string(),
            width: DEFAULT_NAME_WIDTH,
        }
    }
}
