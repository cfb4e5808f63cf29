//! Random test-account generation.
//!
//! Each account is an independent HD wallet: fresh 128-bit entropy becomes a
//! 12-word English BIP-39 phrase, and the first Ethereum account
//! (`m/44'/60'/0'/0/0`) derived from it provides the address and key.

use crate::{AccountsError, Result};
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder};
use bip39::{Language, Mnemonic};
use fixgen_types::AccountRecord;
use rand::rngs::OsRng;
use rand::RngCore;

/// Entropy size for a 12-word phrase.
const ENTROPY_BYTES: usize = 16;

/// A source of freshly generated account records.
pub trait KeySource {
    /// Produces the record for the given 1-based ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`AccountsError::KeyGeneration`] if a key cannot be derived.
    fn next_account(&mut self, index: u64) -> Result<AccountRecord>;
}

/// Generates BIP-39 wallets from an entropy source.
#[derive(Debug)]
pub struct MnemonicKeySource<R> {
    rng: R,
}

impl MnemonicKeySource<OsRng> {
    /// Creates a generator backed by the operating system RNG.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for MnemonicKeySource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> MnemonicKeySource<R> {
    /// Creates a generator backed by a caller-provided RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> KeySource for MnemonicKeySource<R> {
    fn next_account(&mut self, index: u64) -> Result<AccountRecord> {
        let mut entropy = [0u8; ENTROPY_BYTES];
        self.rng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .map_err(|e| AccountsError::KeyGeneration(e.to_string()))?;
        let phrase = mnemonic.to_string();

        let signer = MnemonicBuilder::<English>::default()
            .phrase(phrase.clone())
            .build()
            .map_err(|e| AccountsError::KeyGeneration(e.to_string()))?;

        Ok(AccountRecord {
            index: Some(index),
            address: Some(signer.address().to_checksum(None)),
            private_key: Some(format!("0x{}", hex::encode(signer.to_bytes()))),
            mnemonic: Some(phrase),
        })
    }
}

/// Generates `count` accounts with contiguous 1-based indexes.
///
/// `on_progress` is called with the number of accounts produced so far after
/// each one.
///
/// # Errors
///
/// Propagates the first [`KeySource`] failure.
pub fn generate_accounts<S, F>(
    source: &mut S,
    count: u64,
    mut on_progress: F,
) -> Result<Vec<AccountRecord>>
where
    S: KeySource + ?Sized,
    F: FnMut(u64),
{
    let capacity = usize::try_from(count).unwrap_or(usize::MAX);
    let mut accounts = Vec::with_capacity(capacity);

    for index in 1..=count {
        accounts.push(source.next_account(index)?);
        on_progress(index);
    }

    tracing::info!(count, "Generated accounts");
    Ok(accounts)
}
