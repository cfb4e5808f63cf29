//! Genesis account merger.
//!
//! Reads partitioned account record files and a genesis template, appends a
//! renamed, funded entry per record to the template's `accounts` list, and
//! writes the result with every balance kept as an exact integer literal.
//!
//! Records are numbered across all partitions in order: the Nth record seen
//! becomes `acc{N:04}`. Running the merge again with its own output as the
//! template appends a second copy of the range, numbered from 1 again; the
//! counter always comes from the current input records.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod merge;
mod merger;

pub use error::{GenesisError, Result};
pub use merge::{merge_accounts, render_genesis, MergeOptions, MergeOutcome, Partition};
pub use merger::{load_partitions, load_template, GenesisMerger, MergeJob, MergeReport};
