use std::convert::TryFrom;

use byteorder::{BigEndian, ByteOrder};

use crate::consts::{BLOCK_SIZE, LENGTH_FIELD_SIZE};
use crate::error::{Error, Result};

/// Length of a message in bits, as recorded in the 64-bit length field.
pub fn bit_length(byte_len: usize) -> Result<u64> {
    u64::try_from(byte_len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "message of {} bytes does not fit in the 64-bit length field",
                byte_len
            ))
        })
}

/// Number of zero bits `k` following the '1' bit, minimal such that
/// `(l + 1 + k) mod 512 = 448`.
pub fn zero_bit_count(bit_len: u64) -> u64 {
    let used = (bit_len % 512 + 1) % 512;
    (448 + 512 - used) % 512
}

/// Byte length of the padded stream for a message of `byte_len` bytes.
pub fn padded_len(byte_len: usize) -> Result<usize> {
    bit_length(byte_len)?;
    // 9: 8-byte length + 0x80
    byte_len
        .checked_add(1 + LENGTH_FIELD_SIZE + BLOCK_SIZE - 1)
        .map(|len| len & !(BLOCK_SIZE - 1))
        .ok_or_else(|| Error::InvalidInput(format!("cannot pad message of {} bytes", byte_len)))
}

/// Pad a message to a multiple of 512 bits.
///
/// Layout: message || 80 00 .. 00 || [64-bit big-endian length in bits].
/// Input is taken as raw bytes; text must be encoded (UTF-8) by the caller.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bits = bit_length(message.len())?;
    let real_length = padded_len(message.len())?;

    let mut padded: Vec<u8> = Vec::with_capacity(real_length);
    padded.extend_from_slice(message);
    padded.resize(real_length, 0);
    padded[message.len()] = 0x80;
    BigEndian::write_u64(&mut padded[real_length - LENGTH_FIELD_SIZE..], bits);
    Ok(padded)
}
