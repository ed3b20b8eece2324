use byteorder::{BigEndian, ByteOrder};

use crate::block::Block;

// 4.4.  Permutation Functions P_0 and P_1
#[inline]
pub fn p_1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// E_i = W_0 || ... || W_67 || W'_0 || ... || W'_63
pub struct Expanded {
    pub w: [u32; 68],
    pub w1: [u32; 64],
}

// 5.3.2.  Message Expansion Function ME
pub fn expand(block: &Block) -> Expanded {
    let mut w = [0u32; 68];
    let mut w1 = [0u32; 64];

    // B_i = W_0 || ... || W_15
    BigEndian::read_u32_into(block, &mut w[..16]);

    for j in 16..68 {
        // W_j = P_1(W_{j - 16} xor W_{j - 9} xor (W_{j - 3} <<< 15)) xor
        // (W_{j - 13} <<< 7) xor W_{ j - 6 }
        w[j] = p_1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    for j in 0..64 {
        // W'_j = W_j xor W_{j + 4}
        w1[j] = w[j] ^ w[j + 4];
    }

    Expanded { w, w1 }
}
