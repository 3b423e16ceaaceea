use ring::digest::{Context, SHA256};

use crate::error::{ChainParamsError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

pub const CHECKSUM_LEN: usize = 4;

/// Wall clock in whole seconds since the Unix epoch
pub fn current_unix_time() -> Result<i64> {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ChainParamsError::Io(format!("System time error: {e}")))?
        .as_secs();

    i64::try_from(secs).map_err(|_| ChainParamsError::Io("Timestamp overflow".to_string()))
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// SHA-256 applied twice, the hash behind txids, merkle nodes and checksums
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = sha256_digest(data);
    let second = sha256_digest(&first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

pub fn base58_decode(data: &str) -> Result<Vec<u8>> {
    bs58::decode(data)
        .into_vec()
        .map_err(|e| ChainParamsError::InvalidAddress(format!("Invalid base58 encoding: {e}")))
}

/// Decodes a base58check string and returns the payload without its checksum
pub fn base58check_decode(data: &str) -> Result<Vec<u8>> {
    let mut payload = base58_decode(data)?;
    if payload.len() < CHECKSUM_LEN + 1 {
        return Err(ChainParamsError::InvalidAddress(format!(
            "{data} is too short for base58check"
        )));
    }

    let body_len = payload.len() - CHECKSUM_LEN;
    let expected = double_sha256(&payload[..body_len]);
    if payload[body_len..] != expected[..CHECKSUM_LEN] {
        return Err(ChainParamsError::InvalidAddress(format!(
            "{data} has a bad checksum"
        )));
    }

    payload.truncate(body_len);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            hex::encode(sha256_digest(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_double_sha256_of_empty_input() {
        assert_eq!(
            hex::encode(double_sha256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_base58check_rejects_corrupted_checksum() {
        let mut payload = vec![38u8; 21];
        let checksum = double_sha256(&payload);
        payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
        let encoded = base58_encode(&payload);
        assert_eq!(base58check_decode(&encoded).unwrap(), vec![38u8; 21]);

        let last = payload.len() - 1;
        payload[last] ^= 0x01;
        assert!(base58check_decode(&base58_encode(&payload)).is_err());
    }

    #[test]
    fn test_current_unix_time_is_seconds() {
        let now = current_unix_time().unwrap();
        // Anything past 2020 and well short of millisecond magnitude
        assert!(now > 1_577_836_800);
        assert!(now < 100_000_000_000);
    }
}
