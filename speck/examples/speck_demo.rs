use num_bigint::BigUint;
use speck::crypto::config::CipherConfig;
use speck::crypto::key_schedule::expand_key;
use speck::{Speck, SpeckError, SpeckV1, VALID_SETUPS};

// (block size, key size, key, plaintext) from the Speck reference vectors.
const VECTORS: [(usize, usize, &str, u128); 10] = [
    (32, 64, "1918111009080100", 0x6574694c),
    (48, 72, "1211100a0908020100", 0x20796c6c6172),
    (48, 96, "1a19181211100a0908020100", 0x6d2073696874),
    (64, 96, "131211100b0a090803020100", 0x74614620736e6165),
    (64, 128, "1b1a1918131211100b0a090803020100", 0x3b7265747475432d),
    (96, 96, "0d0c0b0a0908050403020100", 0x65776f68202c656761737520),
    (96, 144, "1514131211100d0c0b0a0908050403020100", 0x656d6974206e69202c726576),
    (128, 128, "0f0e0d0c0b0a09080706050403020100", 0x6c617669757165207469206564616d20),
    (
        128,
        192,
        "17161514131211100f0e0d0c0b0a09080706050403020100",
        0x726148206665696843206f7420746e65,
    ),
    (
        128,
        256,
        "1f1e1d1c1b1a191817161514131211100f0e0d0c0b0a09080706050403020100",
        0x65736f6874206e49202e72656e6f6f70,
    ),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Supported setups ===");
    for &(block_size, keys) in VALID_SETUPS {
        let keys: Vec<String> = keys
            .iter()
            .map(|(key_size, rounds)| format!("{}b/{} rounds", key_size, rounds))
            .collect();
        println!("  block {:>3}: {}", block_size, keys.join(", "));
    }

    println!("\n=== Reference vectors ===");
    for &(block_size, key_size, key_hex, plaintext) in &VECTORS {
        let key = BigUint::parse_bytes(key_hex.as_bytes(), 16).ok_or("bad key literal")?;
        let cipher = Speck::new(&key, key_size, block_size)?;
        let ciphertext = cipher.encrypt(plaintext);
        let decrypted = cipher.decrypt(ciphertext);
        let digits = block_size / 4;
        println!(
            "  Speck{}/{}: {:0w$x} -> {:0w$x} -> {:0w$x}",
            block_size,
            key_size,
            plaintext,
            ciphertext,
            decrypted,
            w = digits
        );
    }

    println!("\n=== Key schedule (Speck32/64) ===");
    let config = CipherConfig::resolve(32, 64)?;
    let round_keys = expand_key(&BigUint::from(0x1918111009080100u64), &config);
    for (i, k) in round_keys.iter().enumerate().take(6) {
        println!("  k[{:>2}] = {:04x}", i, k);
    }
    println!("  ... {} round keys", round_keys.len());

    println!("\n=== Invalid setups ===");
    for (block_size, key_size) in [(1, 128), (128, 1)] {
        match Speck::new(&BigUint::from(0u8), key_size, block_size) {
            Err(e @ (SpeckError::InvalidBlockSize { .. } | SpeckError::InvalidKeySize { .. })) => {
                println!("  {}/{}: {}", block_size, key_size, e)
            }
            other => println!("  {}/{}: unexpected {:?}", block_size, key_size, other),
        }
    }

    println!("\n=== Generalized variant ===");
    let v1 = SpeckV1::default();
    let keys = [0x0100, 0x0908, 0x1110, 0x1918];
    let encrypted = v1.encrypt(0x694C6574, &keys)?;
    println!(
        "  bits={} rounds={}: 694c6574 -> {:08x} -> {:08x}",
        v1.bits(),
        v1.rounds(),
        encrypted,
        v1.decrypt(encrypted, &keys)?
    );

    Ok(())
}
