//! Group parameters for the privacy coin subsystem
//!
//! Only the parameters are built here: the RSA modulus the accumulator works
//! in, the prime-order commitment groups for the requested security level,
//! and the quadratic-residue generators derived deterministically from the
//! modulus. Searching for the group primes is expensive, so each modulus
//! encoding is derived once per process and shared.

pub mod cache;
pub mod group;

pub use cache::{zerocoin_params, ZerocoinParamsCache};
pub use group::{is_probable_prime, IntegerGroupParams};

use crate::error::{ChainParamsError, Result};
use crate::utils::double_sha256;
use log::info;
use num_bigint::BigUint;
use serde::Serialize;

/// RSA-2048 factoring challenge number, the accumulator modulus
pub const ZEROCOIN_MODULUS: &str = concat!(
    "25195908475657893494027183240048398571429282126204032027777137836043662020707595",
    "55626401852588078440691829064124951508218929855914917618450280848912007284499268",
    "73928072877767359714183472702618963750149718246911650776133798590957000973304597",
    "48808428401797429100642458691817195118746121515172654632282216869987549182422433",
    "63725908514186546204357679842338718477444792073993423658482382428119816381501067",
    "48104516603773060562016196762561338441436038339044149526344321901146575444541784",
    "24020924616515723350778707749817125772467962926386356373289912154831438167899885",
    "040445364023527381951378636564391212010397122822120720357",
);

/// Security level used when the caller does not ask for one
pub const DEFAULT_SECURITY_LEVEL: u32 = 80;

/// Smallest accepted modulus
pub const MIN_MODULUS_BITS: u64 = 1023;

pub const ACCUMULATOR_BASE: u32 = 961;

const STRING_COMMIT_GROUP: &str = "COIN_COMMITMENT_GROUP";
const STRING_AIC_GROUP: &str = "ACCUMULATOR_INTERNAL_COMMITMENT_GROUP";
const STRING_QRNCOMMIT_GROUPG: &str = "ACCUMULATOR_QRN_COMMITMENT_GROUPG";
const STRING_QRNCOMMIT_GROUPH: &str = "ACCUMULATOR_QRN_COMMITMENT_GROUPH";
const STRING_AUX: &str = "";

/// How the modulus literal is read. The chain historically parsed the same
/// digit string both ways, and the two readings give different numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModulusEncoding {
    /// Digits read as hexadecimal (the "v1" modulus)
    Hex,
    Decimal,
}

impl ModulusEncoding {
    pub fn from_v1_flag(use_modulus_v1: bool) -> Self {
        if use_modulus_v1 {
            ModulusEncoding::Hex
        } else {
            ModulusEncoding::Decimal
        }
    }

    fn radix(self) -> u32 {
        match self {
            ModulusEncoding::Hex => 16,
            ModulusEncoding::Decimal => 10,
        }
    }
}

pub fn parse_modulus(literal: &str, encoding: ModulusEncoding) -> Result<BigUint> {
    BigUint::parse_bytes(literal.trim().as_bytes(), encoding.radix()).ok_or_else(|| {
        ChainParamsError::InvalidModulus(format!("not a valid {encoding:?} integer"))
    })
}

/// Bit lengths of a prime-order commitment group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupSizes {
    /// Modulus size
    pub p_len: u32,
    /// Group order size
    pub q_len: u32,
}

/// Group sizes for a security level, bounded by the largest modulus allowed
pub fn group_param_lengths(max_p_len: u64, security_level: u32) -> Result<GroupSizes> {
    let sizes = match security_level {
        80 => GroupSizes { p_len: 1024, q_len: 256 },
        112 => GroupSizes { p_len: 2048, q_len: 256 },
        128 => GroupSizes { p_len: 3072, q_len: 320 },
        other => return Err(ChainParamsError::UnsupportedSecurityLevel(other)),
    };

    if u64::from(sizes.p_len) > max_p_len {
        return Err(ChainParamsError::InvalidModulus(format!(
            "{max_p_len}-bit bound is too small for security level {security_level}"
        )));
    }
    Ok(sizes)
}

/// Pair of generators of the quadratic residues mod N
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrnCommitmentGroup {
    pub g: BigUint,
    pub h: BigUint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZerocoinParams {
    pub encoding: ModulusEncoding,
    pub accumulator_modulus: BigUint,
    pub accumulator_base: BigUint,
    pub security_level: u32,
    pub coin_commitment_group: IntegerGroupParams,
    pub accumulator_pok_commitment_group: IntegerGroupParams,
    pub accumulator_qrn_commitment_group: QrnCommitmentGroup,
    pub k_prime: u32,
    pub k_dprime: u32,
    pub zkp_iterations: u32,
    pub zkp_hash_len: u32,
}

impl ZerocoinParams {
    /// Derive every parameter from the modulus and the security level
    pub fn derive(
        modulus: BigUint,
        encoding: ModulusEncoding,
        security_level: u32,
    ) -> Result<ZerocoinParams> {
        let n_len = modulus.bits();
        if n_len < MIN_MODULUS_BITS {
            return Err(ChainParamsError::InvalidModulus(format!(
                "modulus has {n_len} bits, at least {MIN_MODULUS_BITS} required"
            )));
        }

        info!("Deriving zerocoin parameters from a {n_len}-bit {encoding:?} modulus");

        let coin_sizes = group_param_lengths(n_len - 2, security_level)?;
        // Proof-of-knowledge group is sized off the coin group's order
        let pok_sizes = GroupSizes {
            p_len: coin_sizes.q_len + 300,
            q_len: coin_sizes.q_len + 1,
        };

        let rounds = primality_rounds(security_level);
        let coin_commitment_group = IntegerGroupParams::derive(
            calculate_seed(&modulus, STRING_AUX, security_level, STRING_COMMIT_GROUP),
            coin_sizes,
            rounds,
        )?;
        let accumulator_pok_commitment_group = IntegerGroupParams::derive(
            calculate_seed(&modulus, STRING_AUX, security_level, STRING_AIC_GROUP),
            pok_sizes,
            rounds,
        )?;

        let two = BigUint::from(2u32);
        let g = generate_integer_from_seed(
            n_len - 1,
            &calculate_seed(&modulus, STRING_AUX, security_level, STRING_QRNCOMMIT_GROUPG),
        )
        .modpow(&two, &modulus);
        let h = generate_integer_from_seed(
            n_len - 1,
            &calculate_seed(&modulus, STRING_AUX, security_level, STRING_QRNCOMMIT_GROUPH),
        )
        .modpow(&two, &modulus);

        let one = BigUint::from(1u32);
        if g == h || g <= one || h <= one {
            return Err(ChainParamsError::InvalidModulus(
                "degenerate quadratic residue generators".to_string(),
            ));
        }

        let accumulator_base = BigUint::from(ACCUMULATOR_BASE) % &modulus;

        info!("Zerocoin parameters ready ({encoding:?} modulus)");

        Ok(ZerocoinParams {
            encoding,
            accumulator_modulus: modulus,
            accumulator_base,
            security_level,
            coin_commitment_group,
            accumulator_pok_commitment_group,
            accumulator_qrn_commitment_group: QrnCommitmentGroup { g, h },
            k_prime: 160,
            k_dprime: 128,
            zkp_iterations: security_level,
            zkp_hash_len: security_level,
        })
    }

    pub fn from_literal(
        literal: &str,
        encoding: ModulusEncoding,
        security_level: u32,
    ) -> Result<ZerocoinParams> {
        let modulus = parse_modulus(literal, encoding)?;
        Self::derive(modulus, encoding, security_level)
    }

    pub fn modulus_bits(&self) -> u64 {
        self.accumulator_modulus.bits()
    }
}

/// Miller-Rabin rounds giving a false-positive bound of 2^-security_level
pub fn primality_rounds(security_level: u32) -> u32 {
    (security_level + 1) / 2
}

/// Domain-separated seed for one parameter group
fn calculate_seed(modulus: &BigUint, aux: &str, security_level: u32, group_name: &str) -> [u8; 32] {
    let mut data = modulus.to_bytes_le();
    data.extend_from_slice(b"||");
    data.extend_from_slice(&security_level.to_le_bytes());
    data.extend_from_slice(b"||");
    data.extend_from_slice(aux.as_bytes());
    data.extend_from_slice(b"||");
    data.extend_from_slice(group_name.as_bytes());
    double_sha256(&data)
}

/// Stretch a seed into an integer of at most `num_bits` bits by hashing it
/// with an increasing counter.
fn generate_integer_from_seed(num_bits: u64, seed: &[u8; 32]) -> BigUint {
    let num_bytes = ((num_bits + 7) / 8) as usize;
    let mut stream = Vec::with_capacity(num_bytes + 32);
    let mut counter: u32 = 0;

    while stream.len() < num_bytes {
        let mut block = seed.to_vec();
        block.extend_from_slice(&counter.to_le_bytes());
        stream.extend_from_slice(&double_sha256(&block));
        counter += 1;
    }
    stream.truncate(num_bytes);

    let value = BigUint::from_bytes_be(&stream);
    let excess = (num_bytes as u64) * 8 - num_bits;
    value >> excess
}
