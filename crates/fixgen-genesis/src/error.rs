//! Genesis merge error types.

use fixgen_accounts::AccountsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while merging accounts into a genesis document.
///
/// Every variant is terminal: the merge is all-or-nothing and no output is
/// written once one of these is raised.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// A partition file is missing or is not a list of account records.
    #[error("failed to read partition {partition}: {source}")]
    PartitionReadFailure {
        /// Partition label (its path).
        partition: String,
        /// Underlying read or parse error.
        #[source]
        source: AccountsError,
    },

    /// The template is unreadable, not JSON, or not a JSON object.
    #[error("invalid genesis template: {0}")]
    InvalidGenesisTemplate(String),

    /// A record has no address and strict mode is on.
    #[error("malformed record #{position} in partition {partition}: missing address")]
    MalformedRecord {
        /// Partition label.
        partition: String,
        /// 1-based position of the record inside the partition.
        position: usize,
    },

    /// The output document could not be written.
    #[error("failed to write genesis output {}: {source}", .path.display())]
    OutputWriteFailure {
        /// Destination path.
        path: PathBuf,
        /// Underlying write error.
        #[source]
        source: AccountsError,
    },

    /// The merged document could not be encoded.
    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A specialized Result type for genesis merge operations.
pub type Result<T> = std::result::Result<T, GenesisError>;
