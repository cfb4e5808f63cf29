//! # Fixgen Accounts
//!
//! Account record generation and partition files for test-network fixtures.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fixgen_accounts::{
//!     generate_accounts, write_partitions, MnemonicKeySource, PartitionNaming, PartitionPlan,
//! };
//!
//! let mut source = MnemonicKeySource::new();
//! let accounts = generate_accounts(&mut source, 100, |_| {})?;
//!
//! write_partitions(&accounts, PartitionPlan::Groups(5), &PartitionNaming::default())?;
//! # Ok::<(), fixgen_accounts::AccountsError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
pub mod io;
mod keygen;
mod partition;

pub use error::{AccountsError, Result};
pub use keygen::{generate_accounts, KeySource, MnemonicKeySource};
pub use partition::{write_partitions, PartitionNaming, PartitionPlan, PartitionSummary};
