use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("block must be exactly {expected} bytes, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("block size of {0} bits is not a whole number of bytes")]
    UnalignedBlockSize(usize),
}
