//! Quark, the nine-stage header hash of PIVX-lineage chains for header
//! versions below 4.
//!
//! Three of the stages pick between two functions on bit 3 of the first byte
//! of the running digest. Keccak, Grøstl, JH and Skein come from the RustCrypto
//! hash crates; BLAKE-512 and BMW-512 are implemented here.

mod blake;
mod bmw;

pub use blake::blake512;
pub use bmw::bmw512;

use digest::consts::U64;
use digest::Digest;
use groestl::Groestl512;
use jh::Jh512;
use sha3::Keccak512;
use skein::Skein512;

use crate::core::hasher::HeaderHasher;
use crate::core::Hash256;

type Digest512 = [u8; 64];

fn run<D: Digest>(data: &[u8]) -> Digest512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

fn groestl512(data: &[u8]) -> Digest512 {
    run::<Groestl512>(data)
}

fn jh512(data: &[u8]) -> Digest512 {
    run::<Jh512>(data)
}

fn keccak512(data: &[u8]) -> Digest512 {
    run::<Keccak512>(data)
}

fn skein512(data: &[u8]) -> Digest512 {
    run::<Skein512<U64>>(data)
}

fn branch(
    h: &Digest512,
    when_set: fn(&[u8]) -> Digest512,
    when_clear: fn(&[u8]) -> Digest512,
) -> Digest512 {
    if h[0] & 8 != 0 {
        when_set(h)
    } else {
        when_clear(h)
    }
}

/// Quark digest of `data`, truncated to 256 bits in internal byte order
pub fn quark(data: &[u8]) -> [u8; 32] {
    let h = blake512(data);
    let h = bmw512(&h);
    let h = branch(&h, groestl512, skein512);
    let h = groestl512(&h);
    let h = jh512(&h);
    let h = branch(&h, blake512, bmw512);
    let h = keccak512(&h);
    let h = skein512(&h);
    let h = branch(&h, keccak512, jh512);

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    out
}

/// Quark header hash
#[derive(Debug, Clone, Copy, Default)]
pub struct Quark;

impl HeaderHasher for Quark {
    fn hash_header(&self, header: &[u8]) -> Hash256 {
        Hash256::from_bytes(quark(header))
    }

    fn name(&self) -> &'static str {
        "quark"
    }
}
