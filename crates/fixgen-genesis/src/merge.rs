//! In-memory account-to-genesis merge.

use crate::{GenesisError, Result};
use fixgen_types::{AccountRecord, Balance, GenesisAccount, NamingScheme, ACCOUNTS_FIELD};
use serde_json::Value;

/// Settings for building genesis entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Name format for appended entries.
    pub naming: NamingScheme,
    /// Balance given to every appended entry.
    pub balance: Balance,
    /// Reject records without an address instead of emitting address-less entries.
    pub strict: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            naming: NamingScheme::default(),
            balance: Balance::genesis_default(),
            strict: false,
        }
    }
}

/// One ordered source of account records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Label used in error messages, usually the file path.
    pub label: String,
    /// Records in file order.
    pub records: Vec<AccountRecord>,
}

impl Partition {
    /// Creates a partition.
    pub fn new(label: impl Into<String>, records: Vec<AccountRecord>) -> Self {
        Self {
            label: label.into(),
            records,
        }
    }
}

/// Result of a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// The merged genesis document.
    pub document: Value,
    /// Entries that were already in the template's `accounts` list.
    pub preexisting: usize,
    /// Entries appended by this merge; equals the last counter value.
    pub appended: u64,
}

/// Appends one funded entry per record to the template's `accounts` list.
///
/// Records are numbered across all partitions in order (partition order
/// first, then file order), starting at 1. Existing `accounts` entries are
/// kept ahead of the new ones; a missing or non-list `accounts` field starts
/// out empty. Every other field of the template is left untouched.
///
/// # Errors
///
/// Returns [`GenesisError::InvalidGenesisTemplate`] if `template` is not a
/// JSON object and [`GenesisError::MalformedRecord`] for an address-less
/// record in strict mode.
pub fn merge_accounts(
    template: Value,
    partitions: &[Partition],
    options: &MergeOptions,
) -> Result<MergeOutcome> {
    let mut document = match template {
        Value::Object(map) => map,
        other => {
            return Err(GenesisError::InvalidGenesisTemplate(format!(
                "expected a JSON object at the top level, got {}",
                kind_of(&other)
            )))
        }
    };

    let (next_counter, entries) = partitions.iter().try_fold(
        (1u64, Vec::new()),
        |(counter, entries), partition| append_partition(counter, entries, partition, options),
    )?;

    let mut accounts = match document.get_mut(ACCOUNTS_FIELD).map(Value::take) {
        Some(Value::Array(list)) => list,
        Some(other) => {
            tracing::warn!(kind = kind_of(&other), "Replacing non-list accounts field");
            Vec::new()
        }
        None => Vec::new(),
    };
    let preexisting = accounts.len();

    accounts.reserve(entries.len());
    for entry in entries {
        accounts.push(serde_json::to_value(entry)?);
    }
    document.insert(ACCOUNTS_FIELD.to_string(), Value::Array(accounts));

    Ok(MergeOutcome {
        document: Value::Object(document),
        preexisting,
        appended: next_counter - 1,
    })
}

/// Builds entries for one partition, continuing from `counter`.
///
/// Returns the next unused counter together with the extended entry list.
fn append_partition(
    mut counter: u64,
    mut entries: Vec<GenesisAccount>,
    partition: &Partition,
    options: &MergeOptions,
) -> Result<(u64, Vec<GenesisAccount>)> {
    entries.reserve(partition.records.len());

    for (position, record) in partition.records.iter().enumerate() {
        if record.address.is_none() {
            if options.strict {
                return Err(GenesisError::MalformedRecord {
                    partition: partition.label.clone(),
                    position: position + 1,
                });
            }
            tracing::warn!(
                partition = %partition.label,
                position = position + 1,
                "Record has no address"
            );
        }

        entries.push(GenesisAccount {
            name: options.naming.name(counter),
            address: record.address.clone(),
            balance: options.balance,
        });
        counter += 1;
    }

    tracing::debug!(
        partition = %partition.label,
        records = partition.records.len(),
        next_counter = counter,
        "Merged partition"
    );
    Ok((counter, entries))
}

/// Renders a genesis document as pretty JSON (2-space indent).
///
/// # Errors
///
/// Returns [`GenesisError::Encode`] if the document cannot be encoded.
pub fn render_genesis(document: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
