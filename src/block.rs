use crate::consts::BLOCK_SIZE;
use crate::error::{Error, Result};

/// One 512-bit message block B_i.
pub type Block = [u8; BLOCK_SIZE];

pub fn block_count(padded_len: usize) -> usize {
    padded_len / BLOCK_SIZE
}

/// Split a padded stream into B_0 .. B_{n-1}, in order.
pub fn blocks(padded: &[u8]) -> Result<impl Iterator<Item = Block> + '_> {
    if padded.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidInput(format!(
            "padded stream of {} bytes is not a multiple of {} bytes",
            padded.len(),
            BLOCK_SIZE
        )));
    }
    // chunks_exact yields only full BLOCK_SIZE chunks, remainder is empty
    Ok(padded.chunks_exact(BLOCK_SIZE).map(|chunk| {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        block
    }))
}
