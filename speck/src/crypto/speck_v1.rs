//! Generalized Speck with an arbitrary word width and a cyclic key schedule.
//!
//! The caller supplies the key as a list of words `[k0, l0, l1, ...]`. The
//! round key `k` evolves through the `l` words in turn (`l[i mod len(l)]`),
//! with the round index playing the round key. This is not interchangeable
//! with [`Speck`](crate::Speck): block words are processed in the opposite
//! order and the number of rounds is chosen freely.

use crate::crypto::error::SpeckError;
use crate::crypto::round_function::RoundFunction;
use symmetric_cipher::crypto::cipher_traits::BlockCipher;
use symmetric_cipher::crypto::utils::{join_block, split_block, word_mask};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeckV1 {
    bits: u32,
    rounds: usize,
    right_rotations: u32,
    left_rotations: u32,
    round: RoundFunction,
}

impl Default for SpeckV1 {
    fn default() -> Self {
        SpeckV1 {
            bits: 16,
            rounds: 22,
            right_rotations: 7,
            left_rotations: 2,
            round: RoundFunction::new(16, 7, 2),
        }
    }
}

impl SpeckV1 {
    pub fn new(
        bits: u32,
        rounds: usize,
        right_rotations: u32,
        left_rotations: u32,
    ) -> Result<Self, SpeckError> {
        if !(1..=64).contains(&bits) {
            return Err(SpeckError::InvalidWordWidth(bits));
        }
        if rounds == 0 {
            return Err(SpeckError::InvalidRounds);
        }
        for rotation in [right_rotations, left_rotations] {
            if rotation >= bits {
                return Err(SpeckError::InvalidRotation { rotation, bits });
            }
        }

        Ok(SpeckV1 {
            bits,
            rounds,
            right_rotations,
            left_rotations,
            round: RoundFunction::new(bits, right_rotations, left_rotations),
        })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn right_rotations(&self) -> u32 {
        self.right_rotations
    }

    pub fn left_rotations(&self) -> u32 {
        self.left_rotations
    }

    pub fn round(&self, x: u64, y: u64, k: u64) -> (u64, u64) {
        self.round.forward(x, y, k)
    }

    pub fn round_reverse(&self, x: u64, y: u64, k: u64) -> (u64, u64) {
        self.round.inverse(x, y, k)
    }

    /// Encrypts the word pair `(high, low)`; `low` takes the upper role in the
    /// round function.
    pub fn encrypt_raw(&self, block: (u64, u64), keys: &[u64]) -> Result<(u64, u64), SpeckError> {
        let (mut b, mut a) = self.split_keys(keys)?;
        let (mut y, mut x) = block;

        (x, y) = self.round(x, y, b);

        for i in 0..self.rounds - 1 {
            let j = i % a.len();
            (a[j], b) = self.round(a[j], b, i as u64);
            (x, y) = self.round(x, y, b);
        }

        Ok((y, x))
    }

    pub fn decrypt_raw(&self, block: (u64, u64), keys: &[u64]) -> Result<(u64, u64), SpeckError> {
        let (mut b, mut a) = self.split_keys(keys)?;
        let (mut y, mut x) = block;

        // Run the schedule forward to the key used by the last round.
        for i in 0..self.rounds - 1 {
            let j = i % a.len();
            (a[j], b) = self.round(a[j], b, i as u64);
        }

        for step in (0..self.rounds - 1).rev() {
            (x, y) = self.round_reverse(x, y, b);
            let j = step % a.len();
            (a[j], b) = self.round_reverse(a[j], b, step as u64);
            log::trace!("SpeckV1 schedule rewound to step {}", step);
        }
        (x, y) = self.round_reverse(x, y, b);

        Ok((y, x))
    }

    pub fn encrypt(&self, input: u128, keys: &[u64]) -> Result<u128, SpeckError> {
        let (high, low) = self.encrypt_raw(split_block(input, self.bits), keys)?;
        Ok(join_block(high, low, self.bits))
    }

    pub fn decrypt(&self, input: u128, keys: &[u64]) -> Result<u128, SpeckError> {
        let (high, low) = self.decrypt_raw(split_block(input, self.bits), keys)?;
        Ok(join_block(high, low, self.bits))
    }

    /// Binds `keys` to this parameter set, giving a [`BlockCipher`] of
    /// `2 * bits` bits.
    pub fn keyed(self, keys: &[u64]) -> Result<KeyedSpeckV1, SpeckError> {
        self.split_keys(keys)?;
        Ok(KeyedSpeckV1 {
            engine: self,
            keys: keys.iter().map(|&k| k & word_mask(self.bits)).collect(),
        })
    }

    /// `(k0, [l0, l1, ...])`, each truncated to the word width.
    fn split_keys(&self, keys: &[u64]) -> Result<(u64, Vec<u64>), SpeckError> {
        if keys.len() < 2 {
            return Err(SpeckError::NotEnoughKeyWords(keys.len()));
        }
        let mask = word_mask(self.bits);
        Ok((
            keys[0] & mask,
            keys[1..].iter().map(|&k| k & mask).collect(),
        ))
    }
}

/// [`SpeckV1`] together with its key words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedSpeckV1 {
    engine: SpeckV1,
    keys: Vec<u64>,
}

impl KeyedSpeckV1 {
    pub fn engine(&self) -> &SpeckV1 {
        &self.engine
    }
}

impl BlockCipher for KeyedSpeckV1 {
    fn block_size(&self) -> usize {
        2 * self.engine.bits as usize
    }

    fn encrypt_block(&self, block: u128) -> u128 {
        // Key words were checked in `SpeckV1::keyed`.
        self.engine.encrypt(block, &self.keys).unwrap_or(block)
    }

    fn decrypt_block(&self, block: u128) -> u128 {
        self.engine.decrypt(block, &self.keys).unwrap_or(block)
    }
}
