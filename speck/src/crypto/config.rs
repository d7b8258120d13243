use crate::crypto::error::SpeckError;
use symmetric_cipher::crypto::utils::word_mask;

/// Supported setups: block size => [(key size, number of rounds)], all in bits.
pub const VALID_SETUPS: &[(usize, &[(usize, usize)])] = &[
    (32, &[(64, 22)]),
    (48, &[(72, 22), (96, 23)]),
    (64, &[(96, 26), (128, 27)]),
    (96, &[(96, 28), (144, 29)]),
    (128, &[(128, 32), (192, 33), (256, 34)]),
];

pub const DEFAULT_BLOCK_SIZE: usize = 128;
pub const DEFAULT_KEY_SIZE: usize = 128;

pub fn valid_block_sizes() -> Vec<usize> {
    VALID_SETUPS.iter().map(|&(block, _)| block).collect()
}

/// Key sizes accepted for `block_size`, or `None` if the block size is unsupported.
pub fn valid_key_sizes(block_size: usize) -> Option<Vec<usize>> {
    key_table(block_size).map(|keys| keys.iter().map(|&(key, _)| key).collect())
}

pub fn rounds_for(block_size: usize, key_size: usize) -> Option<usize> {
    key_table(block_size)?
        .iter()
        .find(|&&(key, _)| key == key_size)
        .map(|&(_, rounds)| rounds)
}

fn key_table(block_size: usize) -> Option<&'static [(usize, usize)]> {
    VALID_SETUPS
        .iter()
        .find(|&&(block, _)| block == block_size)
        .map(|&(_, keys)| keys)
}

/// Parameters derived from a validated (block size, key size) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    block_size: usize,
    key_size: usize,
    word_size: u32,
    rounds: usize,
    alpha_shift: u32,
    beta_shift: u32,
}

impl CipherConfig {
    /// Validates the block size first, then the key size for that block size.
    pub fn resolve(block_size: usize, key_size: usize) -> Result<Self, SpeckError> {
        let Some(keys) = key_table(block_size) else {
            return Err(SpeckError::InvalidBlockSize {
                block_size,
                supported: valid_block_sizes(),
            });
        };

        let Some(&(_, rounds)) = keys.iter().find(|&&(key, _)| key == key_size) else {
            return Err(SpeckError::InvalidKeySize {
                block_size,
                key_size,
                supported: keys.iter().map(|&(key, _)| key).collect(),
            });
        };

        let (alpha_shift, beta_shift) = if block_size == 32 { (7, 2) } else { (8, 3) };

        Ok(CipherConfig {
            block_size,
            key_size,
            word_size: (block_size / 2) as u32,
            rounds,
            alpha_shift,
            beta_shift,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn key_size(&self) -> usize {
        self.key_size
    }

    pub fn word_size(&self) -> u32 {
        self.word_size
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Right rotation applied to the upper word.
    pub fn alpha_shift(&self) -> u32 {
        self.alpha_shift
    }

    /// Left rotation applied to the lower word.
    pub fn beta_shift(&self) -> u32 {
        self.beta_shift
    }

    pub fn word_mask(&self) -> u64 {
        word_mask(self.word_size)
    }

    pub fn word_modulus(&self) -> u128 {
        1u128 << self.word_size
    }

    /// Number of words the key is split into.
    pub fn key_words(&self) -> usize {
        self.key_size / self.word_size as usize
    }
}
