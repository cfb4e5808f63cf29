//! Generated account records.

use serde::{Deserialize, Serialize};

/// A generated test-network identity.
///
/// Every field is optional on read: partition files produced by other tools
/// may carry only an `address`, and the genesis merge never looks at the
/// credentials. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    /// 1-based ordinal position in the generated set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,

    /// Account address, copied verbatim into genesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// 0x-prefixed hex private key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,

    /// BIP-39 recovery phrase.
    #[serde(default, alias = "mnemonicPhrase", skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

impl AccountRecord {
    /// Creates a record carrying only an address.
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Self::default()
        }
    }
}
