//! Utility functions and helpers
//!
//! Hashing, base58 handling, the wall clock and consensus byte encoding
//! shared by the genesis builder and the parameter tables.

pub mod crypto;
pub mod serialization;

pub use crypto::{
    base58_decode, base58_encode, base58check_decode, current_unix_time, double_sha256,
    sha256_digest,
};

pub use serialization::{serialize, write_compact_size, write_var_bytes, Encodable};
