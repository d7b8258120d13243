use crate::crypto::config::CipherConfig;
use symmetric_cipher::crypto::utils::{add_mod, rotate_left, rotate_right, sub_mod, word_mask};

/// One Speck Feistel step over `word_size`-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundFunction {
    word_size: u32,
    alpha_shift: u32,
    beta_shift: u32,
}

impl RoundFunction {
    pub fn new(word_size: u32, alpha_shift: u32, beta_shift: u32) -> Self {
        RoundFunction {
            word_size,
            alpha_shift,
            beta_shift,
        }
    }

    pub fn from_config(config: &CipherConfig) -> Self {
        Self::new(config.word_size(), config.alpha_shift(), config.beta_shift())
    }

    pub fn word_size(&self) -> u32 {
        self.word_size
    }

    pub fn forward(&self, upper: u64, lower: u64, round_key: u64) -> (u64, u64) {
        let w = self.word_size;

        let mut upper = rotate_right(upper, self.alpha_shift, w);
        upper = add_mod(upper, lower, w);
        upper ^= round_key & word_mask(w);

        let mut lower = rotate_left(lower, self.beta_shift, w);
        lower ^= upper;

        (upper, lower)
    }

    /// Undoes [`forward`](Self::forward) for the same `round_key`.
    pub fn inverse(&self, upper: u64, lower: u64, round_key: u64) -> (u64, u64) {
        let w = self.word_size;

        let lower = rotate_right(upper ^ lower, self.beta_shift, w);
        let upper = (upper ^ round_key) & word_mask(w);
        let upper = rotate_left(sub_mod(upper, lower, w), self.alpha_shift, w);

        (upper, lower)
    }
}
