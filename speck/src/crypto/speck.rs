use crate::crypto::config::{CipherConfig, DEFAULT_BLOCK_SIZE, DEFAULT_KEY_SIZE};
use crate::crypto::error::SpeckError;
use crate::crypto::key_schedule::expand_key;
use crate::crypto::round_function::RoundFunction;
use num_bigint::BigUint;
use std::fmt;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::utils::{join_block, split_block};

/// A keyed Speck instance. The key schedule is computed once in the
/// constructor and never changes, so one instance can be shared freely
/// between threads.
#[derive(Clone)]
pub struct Speck {
    config: CipherConfig,
    round: RoundFunction,
    round_keys: Vec<u64>,
}

impl Speck {
    /// Builds a cipher for `block_size`/`key_size`. Bits of `key` above
    /// `key_size` are discarded.
    ///
    /// # Errors
    ///
    /// [`SpeckError::InvalidBlockSize`] or [`SpeckError::InvalidKeySize`] when
    /// the pair is not in [`VALID_SETUPS`](crate::VALID_SETUPS).
    pub fn new(key: &BigUint, key_size: usize, block_size: usize) -> Result<Self, SpeckError> {
        let config = CipherConfig::resolve(block_size, key_size)?;
        let round_keys = expand_key(key, &config);

        log::debug!(
            "Speck{}/{} ready: {} rounds, shifts ({}, {})",
            block_size,
            key_size,
            config.rounds(),
            config.alpha_shift(),
            config.beta_shift()
        );

        Ok(Speck {
            config,
            round: RoundFunction::from_config(&config),
            round_keys,
        })
    }

    /// Speck128/128.
    pub fn with_defaults(key: &BigUint) -> Result<Self, SpeckError> {
        Self::new(key, DEFAULT_KEY_SIZE, DEFAULT_BLOCK_SIZE)
    }

    /// Same as [`new`](Self::new) with the key given as big-endian bytes.
    pub fn from_key_bytes(
        key: &[u8],
        key_size: usize,
        block_size: usize,
    ) -> Result<Self, SpeckError> {
        Self::new(&BigUint::from_bytes_be(key), key_size, block_size)
    }

    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    pub fn block_size(&self) -> usize {
        self.config.block_size()
    }

    pub fn key_size(&self) -> usize {
        self.config.key_size()
    }

    pub fn rounds(&self) -> usize {
        self.config.rounds()
    }

    pub fn round_keys(&self) -> &[u64] {
        &self.round_keys
    }

    /// Encrypts one block. Bits above `block_size` are ignored.
    pub fn encrypt(&self, plaintext: u128) -> u128 {
        let w = self.config.word_size();
        let (upper, lower) = split_block(plaintext, w);

        let (upper, lower) = self
            .round_keys
            .iter()
            .fold((upper, lower), |(upper, lower), &key| {
                self.round.forward(upper, lower, key)
            });

        join_block(upper, lower, w)
    }

    /// Decrypts one block. Bits above `block_size` are ignored.
    pub fn decrypt(&self, ciphertext: u128) -> u128 {
        let w = self.config.word_size();
        let (upper, lower) = split_block(ciphertext, w);

        let (upper, lower) = self
            .round_keys
            .iter()
            .rev()
            .fold((upper, lower), |(upper, lower), &key| {
                self.round.inverse(upper, lower, key)
            });

        join_block(upper, lower, w)
    }
}

impl fmt::Debug for Speck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speck")
            .field("block_size", &self.config.block_size())
            .field("key_size", &self.config.key_size())
            .field("rounds", &self.config.rounds())
            .finish_non_exhaustive()
    }
}

impl BlockCipher for Speck {
    fn block_size(&self) -> usize {
        self.config.block_size()
    }

    fn encrypt_block(&self, block: u128) -> u128 {
        self.encrypt(block)
    }

    fn decrypt_block(&self, block: u128) -> u128 {
        self.decrypt(block)
    }
}
