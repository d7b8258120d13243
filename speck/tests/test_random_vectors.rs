use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use speck::{Speck, VALID_SETUPS};

const NUMBER_OF_TESTS: usize = 1000;

fn block_mask(block_size: usize) -> u128 {
    u128::MAX >> (128 - block_size)
}

fn random_key(key_size: usize, rng: &mut impl RngCore) -> BigUint {
    let mut bytes = vec![0u8; key_size / 8];
    rng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_speck_vectors() {
        let mut rng = StdRng::seed_from_u64(0x5eec);

        for &(block_size, keys) in VALID_SETUPS {
            for &(key_size, _) in keys {
                for _ in 0..NUMBER_OF_TESTS {
                    let key = random_key(key_size, &mut rng);
                    let plaintext = rng.random::<u128>() & block_mask(block_size);

                    let cipher = Speck::new(&key, key_size, block_size).unwrap();
                    let ciphertext = cipher.encrypt(plaintext);

                    assert!(ciphertext <= block_mask(block_size));
                    assert_eq!(
                        ciphertext,
                        cipher.encrypt(plaintext),
                        "Encryption failed with the key: {} for the plain text: {:x}",
                        key,
                        plaintext
                    );
                    assert_eq!(
                        plaintext,
                        cipher.decrypt(ciphertext),
                        "Decryption failed with the key: {} for the cipher text: {:x}",
                        key,
                        ciphertext
                    );
                    assert_eq!(plaintext, cipher.encrypt(cipher.decrypt(plaintext)));
                }
            }
        }
    }
}
