// reference:
// https://tools.ietf.org/html/draft-oscca-cfrg-sm3-02

pub const BLOCK_SIZE: usize = 64;
pub const DIGEST_SIZE: usize = 32;
pub const STATE_LEN: usize = 8;

// big-endian u64 holding the unpadded message length in bits
pub const LENGTH_FIELD_SIZE: usize = 8;

// 4.1.  Initial Value IV
pub const IV: [u32; STATE_LEN] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d,
    0xb0fb0e4e,
];

// 4.2.  Constants T_j
pub const T_0: u32 = 0x79cc4519;
pub const T_1: u32 = 0x7a879d8a;
