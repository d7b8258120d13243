use crate::crypto::error::CipherError;

/// A keyed permutation over blocks of `block_size()` bits.
///
/// Blocks travel as `u128` with the block in the low bits; any bits above
/// `block_size()` are ignored by implementors.
pub trait BlockCipher {
    /// Width of one block in bits.
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: u128) -> u128;
    fn decrypt_block(&self, block: u128) -> u128;
}

/// Byte-oriented view of a single block: big-endian, exactly one block.
pub trait CipherAlgorithm {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError>;
}

impl<T: BlockCipher + ?Sized> CipherAlgorithm for T {
    fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_bytes = block_bytes(self.block_size())?;
        let block = read_block(data, block_bytes)?;
        Ok(write_block(self.encrypt_block(block), block_bytes))
    }

    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_bytes = block_bytes(self.block_size())?;
        let block = read_block(data, block_bytes)?;
        Ok(write_block(self.decrypt_block(block), block_bytes))
    }
}

fn block_bytes(block_size: usize) -> Result<usize, CipherError> {
    if block_size == 0 || block_size % 8 != 0 || block_size > 128 {
        return Err(CipherError::UnalignedBlockSize(block_size));
    }
    Ok(block_size / 8)
}

fn read_block(data: &[u8], block_bytes: usize) -> Result<u128, CipherError> {
    if data.len() != block_bytes {
        return Err(CipherError::InvalidBlockLength {
            expected: block_bytes,
            actual: data.len(),
        });
    }
    Ok(data.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128))
}

fn write_block(block: u128, block_bytes: usize) -> Vec<u8> {
    block.to_be_bytes()[16 - block_bytes..].to_vec()
}
