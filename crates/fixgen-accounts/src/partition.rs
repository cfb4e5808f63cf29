//! Splitting a record set into contiguous partition files.

use crate::io::write_json_atomic;
use crate::{AccountsError, Result};
use serde::Serialize;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// How a record set is cut into partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionPlan {
    /// Exactly this many partitions of `ceil(len / n)` records each.
    ///
    /// When the count does not divide evenly the trailing partitions are
    /// short or empty; they are still produced.
    Groups(usize),

    /// Partitions of this many records, the last one possibly short.
    ChunkSize(usize),
}

impl PartitionPlan {
    /// Returns the contiguous index ranges covering `len` records.
    ///
    /// # Errors
    ///
    /// Returns [`AccountsError::InvalidPlan`] for a zero group count or
    /// chunk size.
    pub fn slices(&self, len: usize) -> Result<Vec<Range<usize>>> {
        match *self {
            Self::Groups(0) => Err(AccountsError::InvalidPlan(
                "group count must be at least 1".into(),
            )),
            Self::ChunkSize(0) => Err(AccountsError::InvalidPlan(
                "chunk size must be at least 1".into(),
            )),
            Self::Groups(groups) => {
                let chunk = len.div_ceil(groups);
                Ok((0..groups)
                    .map(|i| {
                        let start = (i * chunk).min(len);
                        start..(start + chunk).min(len)
                    })
                    .collect())
            }
            Self::ChunkSize(chunk) => Ok((0..len)
                .step_by(chunk)
                .map(|start| start..(start + chunk).min(len))
                .collect()),
        }
    }
}

impl Default for PartitionPlan {
    fn default() -> Self {
        Self::Groups(5)
    }
}

/// Where partition files go and what they are called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionNaming {
    /// Output directory.
    pub dir: PathBuf,
    /// File name stem; partition `i` is `{stem}{i}.json`.
    pub stem: String,
}

impl PartitionNaming {
    /// Creates a naming scheme.
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    /// Returns the path of the 1-based partition `number`.
    #[must_use]
    pub fn path(&self, number: usize) -> PathBuf {
        self.dir.join(format!("{}{number}.json", self.stem))
    }

    /// Returns the paths of partitions `1..=count`.
    #[must_use]
    pub fn paths(&self, count: usize) -> Vec<PathBuf> {
        (1..=count).map(|n| self.path(n)).collect()
    }
}

impl Default for PartitionNaming {
    fn default() -> Self {
        Self::new(Path::new("."), "accounts")
    }
}

/// What was written for one partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    /// Written file.
    pub path: PathBuf,
    /// Number of records in it.
    pub records: usize,
}

/// Writes `records` to partition files according to `plan`.
///
/// Records are written verbatim and in their original order.
///
/// # Errors
///
/// Returns [`AccountsError::InvalidPlan`] for an unusable plan, and write
/// errors from [`write_json_atomic`].
pub fn write_partitions<T: Serialize>(
    records: &[T],
    plan: PartitionPlan,
    naming: &PartitionNaming,
) -> Result<Vec<PartitionSummary>> {
    let slices = plan.slices(records.len())?;
    let mut written = Vec::with_capacity(slices.len());

    for (i, range) in slices.into_iter().enumerate() {
        let path = naming.path(i + 1);
        let chunk = &records[range];

        if chunk.is_empty() {
            tracing::warn!(path = %path.display(), "Writing empty partition");
        }

        write_json_atomic(&path, chunk)?;
        tracing::info!(path = %path.display(), records = chunk.len(), "Wrote partition");

        written.push(PartitionSummary {
            path,
            records: chunk.len(),
        });
    }

    Ok(written)
}
