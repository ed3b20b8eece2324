use std::fmt;
use std::ops::Deref;

use byteorder::{BigEndian, ByteOrder};

pub mod block;
pub mod compress;
pub mod consts;
pub mod driver;
pub mod error;
pub mod expansion;
pub mod padding;

pub use consts::{DIGEST_SIZE, STATE_LEN};
pub use driver::{digest, digest_into, digest_str, rehash};
pub use error::{Error, Result};

/// A 256-bit SM3 digest.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Digest {
    pub(crate) buf: [u8; DIGEST_SIZE],
}

impl Digest {
    pub fn from_bytes(buf: [u8; DIGEST_SIZE]) -> Digest {
        Digest { buf }
    }

    /// Parse 64 hex characters, either case.
    pub fn from_hex(s: &str) -> Result<Digest> {
        let mut buf = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(s.trim(), &mut buf)
            .map_err(|e| Error::InvalidDigest(format!("{:?}: {}", s, e)))?;
        Ok(Digest { buf })
    }

    pub fn to_bytes(&self) -> [u8; DIGEST_SIZE] {
        self.buf
    }

    /// The final state V_n as eight words A..H.
    pub fn words(&self) -> [u32; STATE_LEN] {
        let mut words = [0u32; STATE_LEN];
        BigEndian::read_u32_into(&self.buf, &mut words);
        words
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.buf)
    }

    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.buf)
    }
}

impl Deref for Digest {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.deref()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "Digest({})", self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.to_hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.to_hex_upper())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, fmt)
    }
}

/// Signature of a one-shot digest function, for consumers such as HMAC
/// that treat SM3 as an opaque primitive.
pub type Hash = fn(input: &[u8]) -> Result<Digest>;

pub const SM3: Hash = driver::HASH;

#[cfg(test)]
mod tests {
    use super::*;

    const ABC: &str = "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0";

    #[test]
    fn test_formatting() {
        let d = digest(b"abc").unwrap();
        assert_eq!(format!("{}", d), ABC);
        assert_eq!(format!("{:x}", d), ABC);
        assert_eq!(format!("{:X}", d), ABC.to_uppercase());
        assert_eq!(d.to_hex_upper(), ABC.to_uppercase());
        assert_eq!(format!("{:?}", d), format!("Digest({})", ABC));
    }

    #[test]
    fn test_words() {
        let d = digest(b"abc").unwrap();
        assert_eq!(d.words()[0], 0x66c7f0f4);
        assert_eq!(d.words()[STATE_LEN - 1], 0x8f4ba8e0);
        assert_eq!(d.words().len(), STATE_LEN);
    }

    #[test]
    fn test_from_hex() {
        let d = Digest::from_hex(&ABC.to_uppercase()).unwrap();
        assert_eq!(d, digest(b"abc").unwrap());
        assert_eq!(Digest::from_bytes(d.to_bytes()), d);
        assert!(matches!(
            Digest::from_hex("66c7f0"),
            Err(Error::InvalidDigest(_))
        ));
        assert!(Digest::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_hash_pointer() {
        let h: Hash = SM3;
        assert_eq!(h(b"abc").unwrap().to_hex(), ABC);
        assert_eq!(h(b"abc").unwrap().len(), DIGEST_SIZE);
    }
}
