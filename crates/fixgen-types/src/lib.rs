//! Common types used throughout `fixgen`.
//!
//! This crate provides the data model shared by the fixture tools:
//! generated account records, funded genesis entries, and the exact
//! integer balance type used to fund them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod account;
mod balance;
mod record;

pub use account::{GenesisAccount, NamingScheme};
pub use balance::{Balance, ParseBalanceError};
pub use record::AccountRecord;

/// Name of the genesis field holding the funded account list.
pub const ACCOUNTS_FIELD: &str = "accounts";

/// Default prefix for synthetic genesis account names.
pub const DEFAULT_NAME_PREFIX: &str = "acc";

/// Default minimum digit count of the genesis account counter.
pub const DEFAULT_NAME_WIDTH: usize = 4;
