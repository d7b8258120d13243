use crate::crypto::config::CipherConfig;
use crate::crypto::round_function::RoundFunction;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Keeps the low `key_size` bits of `key`.
pub fn truncate_key(key: &BigUint, key_size: usize) -> BigUint {
    let mask = (BigUint::one() << key_size) - BigUint::one();
    key & mask
}

/// Splits the truncated key into `key_size / word_size` words, least
/// significant word first.
pub fn key_words(key: &BigUint, config: &CipherConfig) -> Vec<u64> {
    let key = truncate_key(key, config.key_size());
    let word_size = config.word_size() as usize;
    let mask = BigUint::from(config.word_mask());

    (0..config.key_words())
        .map(|i| {
            let word = (&key >> (i * word_size)) & &mask;
            word.to_u64().unwrap_or_default()
        })
        .collect()
}

/// Expands `key` into exactly `config.rounds()` round keys.
///
/// The schedule runs the encryption round itself: the auxiliary `l` word is
/// the upper input, the previous round key the lower input and the round
/// index stands in for the round key.
pub fn expand_key(key: &BigUint, config: &CipherConfig) -> Vec<u64> {
    let round = RoundFunction::from_config(config);
    let words = key_words(key, config);
    let rounds = config.rounds();

    let mut round_keys = Vec::with_capacity(rounds);
    round_keys.push(words[0]);

    let mut l_schedule = Vec::with_capacity(rounds + words.len());
    l_schedule.extend_from_slice(&words[1..]);

    for i in 0..rounds - 1 {
        let (l_next, k_next) = round.forward(l_schedule[i], round_keys[i], i as u64);
        l_schedule.push(l_next);
        round_keys.push(k_next);
    }

    log::debug!(
        "Speck{}/{}: expanded {} round keys from {} key words",
        config.block_size(),
        config.key_size(),
        round_keys.len(),
        words.len()
    );

    round_keys
}
