use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeckError {
    #[error(
        "Invalid block size {block_size}. Please use one of the following available block sizes: {}",
        join(.supported)
    )]
    InvalidBlockSize {
        block_size: usize,
        supported: Vec<usize>,
    },

    #[error(
        "Invalid key size {key_size} for block size {block_size}. Please use one of the following available key sizes: {}",
        join(.supported)
    )]
    InvalidKeySize {
        block_size: usize,
        key_size: usize,
        supported: Vec<usize>,
    },

    #[error("word width must be between 1 and 64 bits, got {0}")]
    InvalidWordWidth(u32),

    #[error("number of rounds must be at least 1")]
    InvalidRounds,

    #[error("rotation of {rotation} bits does not fit a {bits}-bit word")]
    InvalidRotation { rotation: u32, bits: u32 },

    #[error("at least 2 key words are required, got {0}")]
    NotEnoughKeyWords(usize),
}

fn join(sizes: &[usize]) -> String {
    sizes
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
