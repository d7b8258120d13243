pub mod crypto;

pub use crypto::config::{CipherConfig, VALID_SETUPS};
pub use crypto::error::SpeckError;
pub use crypto::speck::Speck;
pub use crypto::speck_v1::{KeyedSpeckV1, SpeckV1};
pub use symmetric_cipher::{BlockCipher, CipherAlgorithm};
