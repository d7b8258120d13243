use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use speck::{BlockCipher, SpeckError, SpeckV1};

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_32_64: [u64; 4] = [0x0100, 0x0908, 0x1110, 0x1918];

    #[test]
    fn test_defaults() {
        let speck = SpeckV1::default();
        assert_eq!(speck.bits(), 16);
        assert_eq!(speck.rounds(), 22);
        assert_eq!((speck.right_rotations(), speck.left_rotations()), (7, 2));
        assert_eq!(speck, SpeckV1::new(16, 22, 7, 2).unwrap());
    }

    #[test]
    fn test_speck_32_64_vector() {
        let speck = SpeckV1::default();

        let encrypted = speck.encrypt(0x694C6574, &KEY_32_64).unwrap();
        assert_eq!(encrypted, 0x42F2A868);
        assert_eq!(speck.decrypt(encrypted, &KEY_32_64).unwrap(), 0x694C6574);
    }

    #[test]
    fn test_raw_words() {
        let speck = SpeckV1::default();
        assert_eq!(
            speck.encrypt_raw((0x694C, 0x6574), &KEY_32_64).unwrap(),
            (0x42F2, 0xA868)
        );
        assert_eq!(
            speck.decrypt_raw((0x42F2, 0xA868), &KEY_32_64).unwrap(),
            (0x694C, 0x6574)
        );
    }

    #[test]
    fn test_round_and_reverse() {
        let speck = SpeckV1::default();
        let (x, y) = speck.round(0x6574, 0x694c, 0x0100);
        assert_eq!((x, y), (0x5316, 0xf627));
        assert_eq!(speck.round_reverse(x, y, 0x0100), (0x6574, 0x694c));
    }

    #[test]
    fn test_roundtrip_many_widths() {
        let settings = [
            (8, 22, 7, 2),
            (10, 22, 7, 2),
            (15, 22, 7, 2),
            (16, 22, 7, 2),
            (20, 22, 7, 2),
            (24, 22, 8, 3),
            (25, 22, 8, 3),
            (26, 22, 8, 3),
            (64, 34, 8, 3),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        for &(bits, rounds, right, left) in &settings {
            let speck = SpeckV1::new(bits, rounds, right, left).unwrap();
            let word = u64::MAX >> (64 - bits);
            let block = u128::MAX >> (128 - 2 * bits);

            for i in 0..16 {
                let key_len = if i % 2 == 1 { 4 } else { 2 };
                let keys: Vec<u64> = (0..key_len).map(|_| rng.random::<u64>() & word).collect();

                for _ in 0..32 {
                    let value = rng.random::<u128>() & block;
                    let cipher = speck.encrypt(value, &keys).unwrap();
                    assert_eq!(speck.decrypt(cipher, &keys).unwrap(), value, "bits={}", bits);
                }
            }
        }
    }

    #[test]
    fn test_odd_length_key_roundtrip() {
        let speck = SpeckV1::new(24, 23, 8, 3).unwrap();
        let keys = [0x020100, 0x0a0908, 0x121110, 0x1a1918, 0x222120];
        let value = 0x6d2073696874;
        let cipher = speck.encrypt(value, &keys).unwrap();
        assert_ne!(cipher, value);
        assert_eq!(speck.decrypt(cipher, &keys).unwrap(), value);
    }

    #[test]
    fn test_single_round() {
        let speck = SpeckV1::new(16, 1, 7, 2).unwrap();
        let cipher = speck.encrypt(0x694C6574, &KEY_32_64).unwrap();
        assert_eq!(cipher, 0xf6275316);
        assert_eq!(speck.decrypt(cipher, &KEY_32_64).unwrap(), 0x694C6574);
    }

    #[test]
    fn test_keyed_block_cipher() {
        let cipher = SpeckV1::default().keyed(&KEY_32_64).unwrap();
        assert_eq!(cipher.block_size(), 32);
        assert_eq!(cipher.encrypt_block(0x694C6574), 0x42F2A868);
        assert_eq!(cipher.decrypt_block(0x42F2A868), 0x694C6574);
    }

    #[test]
    fn test_not_enough_key_words() {
        let speck = SpeckV1::default();
        assert_eq!(speck.encrypt(1, &[]), Err(SpeckError::NotEnoughKeyWords(0)));
        assert_eq!(speck.decrypt(1, &[0x0100]), Err(SpeckError::NotEnoughKeyWords(1)));
        assert_eq!(speck.keyed(&[7]).unwrap_err(), SpeckError::NotEnoughKeyWords(1));
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(SpeckV1::new(0, 22, 7, 2), Err(SpeckError::InvalidWordWidth(0)));
        assert_eq!(SpeckV1::new(65, 22, 7, 2), Err(SpeckError::InvalidWordWidth(65)));
        assert_eq!(SpeckV1::new(16, 0, 7, 2), Err(SpeckError::InvalidRounds));
        assert_eq!(
            SpeckV1::new(6, 22, 7, 2),
            Err(SpeckError::InvalidRotation { rotation: 7, bits: 6 })
        );
    }
}
