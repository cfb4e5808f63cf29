//! File-level genesis merge.

use crate::merge::{merge_accounts, render_genesis, MergeOptions, Partition};
use crate::{GenesisError, Result};
use fixgen_accounts::io::{read_json, write_atomic};
use fixgen_types::AccountRecord;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Input and output files of one merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeJob {
    /// Partition files, in numbering order.
    pub partitions: Vec<PathBuf>,
    /// Genesis template.
    pub template: PathBuf,
    /// Destination, replaced atomically.
    pub output: PathBuf,
}

/// Summary of a completed merge run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Written genesis file.
    pub output: PathBuf,
    /// Partition files read.
    pub partitions: usize,
    /// Entries already present in the template.
    pub preexisting: usize,
    /// Entries appended, equal to the final counter value.
    pub appended: u64,
}

/// Reads partition files and a template and writes the merged genesis file.
#[derive(Debug, Clone, Default)]
pub struct GenesisMerger {
    options: MergeOptions,
}

impl GenesisMerger {
    /// Creates a merger with the given options.
    #[must_use]
    pub fn new(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Returns the merge options.
    #[must_use]
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Runs one merge pass.
    ///
    /// Everything is read and merged in memory before the output is written,
    /// so any failure leaves the destination untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GenesisError::PartitionReadFailure`],
    /// [`GenesisError::InvalidGenesisTemplate`],
    /// [`GenesisError::MalformedRecord`] or
    /// [`GenesisError::OutputWriteFailure`].
    pub fn run(&self, job: &MergeJob) -> Result<MergeReport> {
        let partitions = load_partitions(&job.partitions)?;
        let template = load_template(&job.template)?;

        let outcome = merge_accounts(template, &partitions, &self.options)?;
        let rendered = render_genesis(&outcome.document)?;

        write_atomic(&job.output, rendered.as_bytes()).map_err(|source| {
            GenesisError::OutputWriteFailure {
                path: job.output.clone(),
                source,
            }
        })?;

        tracing::info!(
            output = %job.output.display(),
            partitions = partitions.len(),
            preexisting = outcome.preexisting,
            appended = outcome.appended,
            "Genesis written"
        );

        Ok(MergeReport {
            output: job.output.clone(),
            partitions: partitions.len(),
            preexisting: outcome.preexisting,
            appended: outcome.appended,
        })
    }
}

/// Reads partition files in the given order.
///
/// # Errors
///
/// Returns [`GenesisError::PartitionReadFailure`] naming the first file that
/// is missing or not a list of records.
pub fn load_partitions(paths: &[PathBuf]) -> Result<Vec<Partition>> {
    paths
        .iter()
        .map(|path| {
            let label = path.display().to_string();
            let records =
                read_partition(path).map_err(|source| GenesisError::PartitionReadFailure {
                    partition: label.clone(),
                    source,
                })?;

            tracing::info!(partition = %label, records = records.len(), "Loaded partition");
            Ok(Partition::new(label, records))
        })
        .collect()
}

/// Reads one partition file, keeping only each record's `address`.
///
/// The remaining fields belong to other tools and are never type-checked.
/// An `address` that is not a string counts as missing.
fn read_partition(path: &Path) -> fixgen_accounts::Result<Vec<AccountRecord>> {
    let objects: Vec<Map<String, Value>> = read_json(path)?;

    Ok(objects
        .into_iter()
        .map(|mut object| match object.remove("address") {
            Some(Value::String(address)) => AccountRecord::with_address(address),
            _ => AccountRecord::default(),
        })
        .collect())
}

/// Reads and parses the genesis template.
///
/// # Errors
///
/// Returns [`GenesisError::InvalidGenesisTemplate`] if the file cannot be
/// read or is not valid JSON.
pub fn load_template(path: &Path) -> Result<Value> {
    read_json(path).map_err(|e| GenesisError::InvalidGenesisTemplate(e.to_string()))
}
