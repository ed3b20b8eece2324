use crate::block::Block;
use crate::consts::{STATE_LEN, T_0, T_1};
use crate::expansion::{expand, Expanded};

#[inline]
pub fn p_0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

// 4.2.  Constants T_j
#[inline]
pub fn t_j(j: usize) -> u32 {
    if j <= 15 {
        T_0
    } else {
        T_1
    }
}

// 4.3.  Boolean Functions FF_j and GG_j
#[inline]
pub fn ff_j(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j <= 15 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline]
pub fn gg_j(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j <= 15 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

fn rounds(state: &[u32; STATE_LEN], e_i: &Expanded) -> [u32; STATE_LEN] {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..64 {
        // rotate_left takes the amount mod 32
        let a12 = a.rotate_left(12);
        let ss1 = a12
            .wrapping_add(e)
            .wrapping_add(t_j(j).rotate_left(j as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff_j(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(e_i.w1[j]);
        let tt2 = gg_j(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(e_i.w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p_0(tt2);
    }

    [a, b, c, d, e, f, g, h]
}

/// 5.3.3.  Compression Function CF
///
/// V_{i+1} = CF(V_i, B_i): ABCDEFGH after 64 rounds, XORed with V_i.
pub fn compress(state: &mut [u32; STATE_LEN], block: &Block) {
    let e_i = expand(block);
    let out = rounds(state, &e_i);
    for (v, x) in state.iter_mut().zip(out.iter()) {
        *v ^= x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::IV;
    use crate::padding::pad;
    use std::convert::TryInto;

    #[test]
    fn test_p_0() {
        assert_eq!(p_0(0), 0);
        assert_eq!(p_0(1), 1 | (1 << 9) | (1 << 17));
    }

    #[test]
    fn test_boolean_functions_switch_at_round_16() {
        let (x, y, z) = (0xf0f0_f0f0, 0xff00_ff00, 0x0ff0_0ff0);
        for j in 0..16 {
            assert_eq!(ff_j(j, x, y, z), x ^ y ^ z);
            assert_eq!(gg_j(j, x, y, z), x ^ y ^ z);
            assert_eq!(t_j(j), 0x79cc4519);
        }
        for j in 16..64 {
            assert_eq!(ff_j(j, x, y, z), 0xfff0_fff0);
            assert_eq!(gg_j(j, x, y, z), 0xff00_ff00);
            assert_eq!(t_j(j), 0x7a879d8a);
        }
        assert_eq!(gg_j(16, 0, 0, 0xdead_beef), 0xdead_beef);
        assert_eq!(gg_j(16, u32::MAX, 0x1234_5678, 0), 0x1234_5678);
    }

    #[test]
    fn test_compress_single_block() {
        let padded = pad(b"abc").unwrap();
        let block: &Block = padded.as_slice().try_into().unwrap();
        let mut state = IV;
        compress(&mut state, block);
        assert_eq!(
            state,
            [
                0x66c7f0f4, 0x62eeedd9, 0xd1f2d46b, 0xdc10e4e2, 0x4167c487, 0x5cf2f7a2,
                0x297da02b, 0x8f4ba8e0
            ]
        );
    }

    #[test]
    fn test_compress_depends_on_state() {
        let block = [0u8; 64];
        let mut s1 = IV;
        let mut s2 = IV;
        s2[7] ^= 1;
        compress(&mut s1, &block);
        compress(&mut s2, &block);
        assert_ne!(s1, s2);
    }
}
