//! Prime-order subgroups of Z*_p used by the coin and proof-of-knowledge
//! commitments.
//!
//! Everything is derived from a 32-byte seed: the order q is a prime of the
//! requested size, the modulus p = 2kq + 1 is a prime of its requested size,
//! and the generators g and h are seeded elements raised to (p - 1) / q.

use crate::error::{ChainParamsError, Result};
use crate::utils::double_sha256;
use crate::zerocoin::GroupSizes;
use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

/// Upper bound on seeded candidates per search
const MAX_ATTEMPTS: u32 = 100_000;

const SMALL_PRIME_BOUND: usize = 2000;

static SMALL_PRIMES: Lazy<Vec<BigUint>> = Lazy::new(small_primes);

const TAG_ORDER: &[u8] = b"ORDER";
const TAG_MODULUS: &[u8] = b"MODULUS";
const TAG_GENERATOR: &[u8] = b"GENERATOR";
const TAG_WITNESS: &[u8] = b"WITNESS";

/// Subgroup of order `group_order` in the multiplicative group mod `modulus`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegerGroupParams {
    #[serde(serialize_with = "as_hex")]
    pub seed: [u8; 32],
    pub sizes: GroupSizes,
    #[serde(serialize_with = "biguint_hex")]
    pub modulus: BigUint,
    #[serde(serialize_with = "biguint_hex")]
    pub group_order: BigUint,
    #[serde(serialize_with = "biguint_hex")]
    pub g: BigUint,
    #[serde(serialize_with = "biguint_hex")]
    pub h: BigUint,
}

impl IntegerGroupParams {
    /// Searches for the group described by `seed` and `sizes`.
    ///
    /// `rounds` is the number of Miller-Rabin rounds each prime has to pass.
    pub fn derive(seed: [u8; 32], sizes: GroupSizes, rounds: u32) -> Result<IntegerGroupParams> {
        if sizes.q_len < 2 || sizes.p_len <= sizes.q_len {
            return Err(ChainParamsError::InvalidModulus(format!(
                "cannot build a {}-bit group of {}-bit order",
                sizes.p_len, sizes.q_len
            )));
        }

        let group_order = find_group_order(&seed, sizes.q_len, rounds)?;
        let modulus = find_modulus(&seed, sizes.p_len, &group_order, rounds)?;
        let g = find_generator(&seed, 1, &modulus, &group_order)?;
        let h = find_generator(&seed, 2, &modulus, &group_order)?;

        debug!(
            "Derived {}-bit group of {}-bit order",
            modulus.bits(),
            group_order.bits()
        );

        Ok(IntegerGroupParams {
            seed,
            sizes,
            modulus,
            group_order,
            g,
            h,
        })
    }

    /// Checks the algebra the commitments rely on
    pub fn is_consistent(&self, rounds: u32) -> bool {
        let one = BigUint::from(1u32);
        let p_minus_one = &self.modulus - &one;

        is_probable_prime(&self.group_order, rounds)
            && is_probable_prime(&self.modulus, rounds)
            && (&p_minus_one % &self.group_order) == BigUint::from(0u32)
            && [&self.g, &self.h].iter().all(|x| {
                **x > one
                    && **x < self.modulus
                    && x.modpow(&self.group_order, &self.modulus) == one
            })
            && self.g != self.h
    }
}

fn as_hex<S: Serializer>(bytes: &[u8; 32], serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

fn biguint_hex<S: Serializer>(value: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_str_radix(16))
}

/// Integer of exactly `bits` bits drawn from `seed`, `tag` and `counter`
fn seeded_integer(seed: &[u8], tag: &[u8], counter: u32, bits: u64) -> BigUint {
    let num_bytes = ((bits + 7) / 8) as usize;
    let mut stream = Vec::with_capacity(num_bytes + 32);
    let mut block_index: u32 = 0;

    while stream.len() < num_bytes {
        let mut block = seed.to_vec();
        block.extend_from_slice(tag);
        block.extend_from_slice(&counter.to_le_bytes());
        block.extend_from_slice(&block_index.to_le_bytes());
        stream.extend_from_slice(&double_sha256(&block));
        block_index += 1;
    }
    stream.truncate(num_bytes);

    let mut value = BigUint::from_bytes_be(&stream) >> ((num_bytes as u64) * 8 - bits);
    value.set_bit(bits - 1, true);
    value
}

fn find_group_order(seed: &[u8; 32], q_len: u32, rounds: u32) -> Result<BigUint> {
    let bits = u64::from(q_len);
    for counter in 0..MAX_ATTEMPTS {
        let mut candidate = seeded_integer(seed, TAG_ORDER, counter, bits);
        candidate.set_bit(0, true);
        if is_probable_prime(&candidate, rounds) {
            return Ok(candidate);
        }
    }

    Err(ChainParamsError::InvalidModulus(format!(
        "no {q_len}-bit prime group order found"
    )))
}

/// Prime p of `p_len` bits with p = 1 (mod 2q)
fn find_modulus(seed: &[u8; 32], p_len: u32, group_order: &BigUint, rounds: u32) -> Result<BigUint> {
    let bits = u64::from(p_len);
    let step = group_order << 1usize;
    let one = BigUint::from(1u32);

    for counter in 0..MAX_ATTEMPTS {
        let x = seeded_integer(seed, TAG_MODULUS, counter, bits);
        let candidate = &x - (&x % &step) + &one;
        if candidate.bits() != bits {
            continue;
        }
        if is_probable_prime(&candidate, rounds) {
            return Ok(candidate);
        }
    }

    Err(ChainParamsError::InvalidModulus(format!(
        "no {p_len}-bit prime modulus found for a {}-bit order",
        group_order.bits()
    )))
}

fn find_generator(
    seed: &[u8; 32],
    index: u8,
    modulus: &BigUint,
    group_order: &BigUint,
) -> Result<BigUint> {
    let one = BigUint::from(1u32);
    let exponent = (modulus - &one) / group_order;
    let mut tag = TAG_GENERATOR.to_vec();
    tag.push(index);

    for counter in 0..MAX_ATTEMPTS {
        let w = seeded_integer(seed, &tag, counter, modulus.bits()) % modulus;
        let candidate = w.modpow(&exponent, modulus);
        if candidate > one {
            return Ok(candidate);
        }
    }

    Err(ChainParamsError::InvalidModulus(
        "no generator found for the group".to_string(),
    ))
}

fn small_primes() -> Vec<BigUint> {
    let mut composite = vec![false; SMALL_PRIME_BOUND];
    let mut primes = Vec::new();
    for n in 2..SMALL_PRIME_BOUND {
        if composite[n] {
            continue;
        }
        primes.push(BigUint::from(n));
        for multiple in (n * n..SMALL_PRIME_BOUND).step_by(n) {
            composite[multiple] = true;
        }
    }
    primes
}

/// Trial division followed by `rounds` Miller-Rabin rounds with witnesses
/// hashed from the candidate itself, so the verdict is reproducible.
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let zero = BigUint::from(0u32);
    let one = BigUint::from(1u32);
    let two = BigUint::from(2u32);

    if *n < two {
        return false;
    }
    for p in SMALL_PRIMES.iter() {
        if n == p {
            return true;
        }
        if (n % p) == zero {
            return false;
        }
    }

    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    // witnesses fall in [2, n - 2]
    let span = n - 3u32;
    let n_bytes = n.to_bytes_le();

    'witness: for round in 0..rounds {
        let a = seeded_integer(&n_bytes, TAG_WITNESS, round, n.bits()) % &span + &two;
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(p_len: u32, q_len: u32) -> GroupSizes {
        GroupSizes { p_len, q_len }
    }

    #[test]
    fn test_primality_of_known_values() {
        assert!(!is_probable_prime(&BigUint::from(1u32), 20));
        assert!(is_probable_prime(&BigUint::from(2u32), 20));
        assert!(is_probable_prime(&BigUint::from(1999u32), 20));
        assert!(!is_probable_prime(&BigUint::from(2001u32 * 2003), 20));
        // Carmichael number
        assert!(!is_probable_prime(&BigUint::from(41_041u32), 20));

        // 2^127 - 1 and its neighbour
        let m127 = (BigUint::from(1u32) << 127usize) - 1u32;
        assert!(is_probable_prime(&m127, 20));
        assert!(!is_probable_prime(&(m127 + 2u32), 20));
    }

    #[test]
    fn test_small_group_structure() {
        let group = IntegerGroupParams::derive([3u8; 32], sizes(256, 64), 20).unwrap();

        assert_eq!(group.group_order.bits(), 64);
        assert_eq!(group.modulus.bits(), 256);
        assert!(num_prime::nt_funcs::is_prime(&group.group_order, None).probably());
        assert!(num_prime::nt_funcs::is_prime(&group.modulus, None).probably());
        assert!(group.is_consistent(20));
    }

    #[test]
    fn test_derivation_is_seeded() {
        let a = IntegerGroupParams::derive([5u8; 32], sizes(192, 48), 20).unwrap();
        let b = IntegerGroupParams::derive([5u8; 32], sizes(192, 48), 20).unwrap();
        let c = IntegerGroupParams::derive([6u8; 32], sizes(192, 48), 20).unwrap();
        assert_eq!(a, b);
        assert_ne!(a.modulus, c.modulus);
    }

    #[test]
    fn test_tampered_group_is_inconsistent() {
        let group = IntegerGroupParams::derive([9u8; 32], sizes(192, 48), 20).unwrap();

        let mut wrong_order = group.clone();
        wrong_order.group_order += 2u32;
        assert!(!wrong_order.is_consistent(20));

        let mut full_order_generator = group.clone();
        full_order_generator.g = &group.modulus - 1u32;
        assert!(!full_order_generator.is_consistent(20));
    }

    #[test]
    fn test_order_must_be_smaller_than_modulus() {
        assert!(matches!(
            IntegerGroupParams::derive([1u8; 32], sizes(64, 64), 20),
            Err(ChainParamsError::InvalidModulus(_))
        ));
    }
}
