use byteorder::{BigEndian, ByteOrder};
use log::*;

use crate::block::{block_count, blocks};
use crate::compress::compress;
use crate::consts::{DIGEST_SIZE, IV};
use crate::error::Result;
use crate::padding::pad;
use crate::{Digest, Hash};

/// Hash `input` and write the 32-byte digest into `output`.
///
/// V_0 = IV, V_{i+1} = CF(V_i, B_i); the digest is V_n in big-endian word order.
/// All working state lives on this call's stack, so concurrent calls never share it.
pub fn digest_into(input: &[u8], output: &mut [u8; DIGEST_SIZE]) -> Result<()> {
    let preprocessed = pad(input)?;
    debug!(
        "Hashing {} bytes in {} blocks",
        input.len(),
        block_count(preprocessed.len())
    );

    #[allow(non_snake_case)]
    let mut V = IV;
    for (i, block) in blocks(&preprocessed)?.enumerate() {
        compress(&mut V, &block);
        trace!("V_{}: {:08x?}", i + 1, V);
    }

    // write to results in big endian
    BigEndian::write_u32_into(&V, output);
    Ok(())
}

pub fn digest(input: &[u8]) -> Result<Digest> {
    let mut output = [0u8; DIGEST_SIZE];
    digest_into(input, &mut output)?;
    Ok(Digest { buf: output })
}

/// Hash the UTF-8 encoding of `text`.
pub fn digest_str(text: &str) -> Result<Digest> {
    digest(text.as_bytes())
}

/// Hash `input`, then hash the resulting 32 digest bytes `rounds` more times.
pub fn rehash(input: &[u8], rounds: usize) -> Result<Digest> {
    let mut result = digest(input)?;
    for _ in 0..rounds {
        result = digest(&result)?;
    }
    Ok(result)
}

pub const HASH: Hash = digest;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_into_matches_digest() {
        let mut output = [0xaau8; DIGEST_SIZE];
        digest_into(b"abc", &mut output).unwrap();
        assert_eq!(&output[..], &digest(b"abc").unwrap()[..]);
        assert_eq!(output[0], 0x66);
        assert_eq!(output[31], 0xe0);
    }

    #[test]
    fn test_rehash_zero_rounds() {
        assert_eq!(rehash(b"abc", 0).unwrap(), digest(b"abc").unwrap());
    }

    #[test]
    fn test_rehash_chain() {
        let once = rehash(b"abc", 1).unwrap();
        assert_eq!(
            once.to_hex(),
            "bc123c90c9b8e9a44d2075e9c202c4638c63f8f6355c30c5365ff25d613f8adc"
        );
        let twice = rehash(b"abc", 2).unwrap();
        assert_eq!(
            twice.to_hex(),
            "d5db0ae170747d6325e254c28641cddcca02b50c14ebf5b78edd09908b6ff4e8"
        );
        assert_eq!(twice, digest(&once).unwrap());
    }

    #[test]
    fn test_digest_str_is_utf8() {
        let d = digest_str("中文").unwrap();
        assert_eq!(d, digest(&[0xe4, 0xb8, 0xad, 0xe6, 0x96, 0x87]).unwrap());
        assert_eq!(
            d.to_hex(),
            "a16c22b2e1f51d723df51cb481f4680176a720849ee66440e78711112eed7e47"
        );
    }
}
