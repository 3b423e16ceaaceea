//! Blue Midnight Wish 512

const BLOCK_LEN: usize = 128;

// Coefficients of the message/chaining mix; `true` subtracts the term
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, false), (7, true), (10, false), (13, false), (14, false)],
    [(6, false), (8, true), (11, false), (14, false), (15, true)],
    [(0, false), (7, false), (9, false), (12, true), (15, false)],
    [(0, false), (1, true), (8, false), (10, true), (13, false)],
    [(1, false), (2, false), (9, false), (11, true), (14, true)],
    [(3, false), (2, true), (10, false), (12, true), (15, false)],
    [(4, false), (0, true), (3, true), (11, true), (13, false)],
    [(1, false), (4, true), (5, true), (12, true), (14, true)],
    [(2, false), (5, true), (6, true), (13, false), (15, true)],
    [(0, false), (3, true), (6, false), (7, true), (14, false)],
    [(8, false), (1, true), (4, true), (7, true), (15, false)],
    [(8, false), (0, true), (2, true), (5, true), (9, false)],
    [(1, false), (3, false), (6, true), (9, true), (10, false)],
    [(2, false), (4, false), (7, false), (10, false), (11, false)],
    [(3, false), (5, true), (8, false), (11, true), (12, true)],
    [(12, false), (4, true), (6, true), (9, true), (13, false)],
];

const EXPAND2_ROTATIONS: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

fn s(index: usize, x: u64) -> u64 {
    match index {
        0 => (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37),
        1 => (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43),
        2 => (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53),
        3 => (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59),
        4 => (x >> 1) ^ x,
        _ => (x >> 2) ^ x,
    }
}

fn initial_state() -> [u64; 16] {
    std::array::from_fn(|i| {
        let base = 0x80 + 8 * i as u8;
        u64::from_be_bytes(std::array::from_fn(|j| base + j as u8))
    })
}

fn compress(m: &[u64; 16], h: &[u64; 16]) -> [u64; 16] {
    let x: [u64; 16] = std::array::from_fn(|i| m[i] ^ h[i]);

    let mut q = [0u64; 32];
    for (i, terms) in W_TERMS.iter().enumerate() {
        let w = terms.iter().fold(0u64, |acc, &(j, negate)| {
            if negate {
                acc.wrapping_sub(x[j])
            } else {
                acc.wrapping_add(x[j])
            }
        });
        q[i] = s(i % 5, w).wrapping_add(h[(i + 1) % 16]);
    }

    let add_element = |j: usize| -> u64 {
        let k = j - 16;
        let rot = |i: usize| m[i % 16].rotate_left((i % 16) as u32 + 1);
        rot(k)
            .wrapping_add(rot(k + 3))
            .wrapping_sub(rot(k + 10))
            .wrapping_add((j as u64).wrapping_mul(0x0555555555555555))
            ^ h[(k + 7) % 16]
    };

    for j in 16..18 {
        let mut acc = 0u64;
        for k in 0..16 {
            let f = [1, 2, 3, 0][k % 4];
            acc = acc.wrapping_add(s(f, q[j - 16 + k]));
        }
        q[j] = acc.wrapping_add(add_element(j));
    }

    for j in 18..32 {
        let mut acc = 0u64;
        for (r, rotation) in EXPAND2_ROTATIONS.iter().enumerate() {
            acc = acc
                .wrapping_add(q[j - 16 + 2 * r])
                .wrapping_add(q[j - 15 + 2 * r].rotate_left(*rotation));
        }
        acc = acc
            .wrapping_add(s(4, q[j - 2]))
            .wrapping_add(s(5, q[j - 1]));
        q[j] = acc.wrapping_add(add_element(j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut n = [0u64; 16];
    n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);

    let tail_shift: [(bool, u32); 8] = [
        (true, 8),
        (false, 6),
        (true, 6),
        (true, 4),
        (false, 3),
        (false, 4),
        (false, 7),
        (false, 2),
    ];
    // q index mixed into each of n[8..16]
    let tail_q = [23, 16, 17, 18, 19, 20, 21, 22];
    for i in 0..8 {
        let (left, shift) = tail_shift[i];
        let shifted = if left { xl << shift } else { xl >> shift };
        n[8 + i] = n[(i + 4) % 8]
            .rotate_left(9 + i as u32)
            .wrapping_add(xh ^ q[24 + i] ^ m[8 + i])
            .wrapping_add(shifted ^ q[tail_q[i]] ^ q[8 + i]);
    }

    n
}

pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let bit_len = (data.len() as u64) * 8;

    let mut message = data.to_vec();
    message.push(0x80);
    while message.len() % BLOCK_LEN != BLOCK_LEN - 8 {
        message.push(0);
    }
    message.extend_from_slice(&bit_len.to_le_bytes());

    let mut h = initial_state();
    for block in message.chunks_exact(BLOCK_LEN) {
        let m: [u64; 16] = std::array::from_fn(|i| {
            let mut word = [0u8; 8];
            word.copy_from_slice(&block[i * 8..i * 8 + 8]);
            u64::from_le_bytes(word)
        });
        h = compress(&m, &h);
    }

    let finalization: [u64; 16] = std::array::from_fn(|i| 0xaaaaaaaaaaaaaaa0 + i as u64);
    let h = compress(&h, &finalization);

    let mut out = [0u8; 64];
    for (chunk, word) in out.chunks_exact_mut(8).zip(h[8..].iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn test_multi_block_message() {
        assert_eq!(
            hex::encode(bmw512(&[0u8; 200])),
            "b620b2f45649503d6dc065f733695693c495f6b25aeac1e6639afbcf8ab2bf64\
             4f69a67f4f537fda0535df85c216cf3b953f17f9385338f5d8ebca0d930bc412"
        );
    }
}
