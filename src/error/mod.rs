//! Error handling for chain parameters
//!
//! Only the recoverable failures live here. Broken compiled-in constants
//! (a genesis block that does not hash to its declared identifier, a mutation
//! attempted outside the unit test network) are programming errors and panic.

use std::fmt;

/// Result type alias for chain parameter operations
pub type Result<T> = std::result::Result<T, ChainParamsError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainParamsError {
    /// A textual network identifier that names no known network
    UnknownNetwork(String),
    /// Malformed hexadecimal literal
    InvalidHex(String),
    /// Malformed or too small group modulus
    InvalidModulus(String),
    /// Security level outside the supported set
    UnsupportedSecurityLevel(u32),
    /// Compiled-in parameters that contradict each other
    InconsistentParams(String),
    /// Block construction errors
    InvalidBlock(String),
    /// Base58 or base58check decoding failure
    InvalidAddress(String),
    /// The process-wide chain context was installed twice
    ContextAlreadyInstalled,
    /// Output errors from the inspection binary
    Io(String),
}

impl fmt::Display for ChainParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainParamsError::UnknownNetwork(id) => write!(f, "Unknown network: {id}"),
            ChainParamsError::InvalidHex(msg) => write!(f, "Invalid hex: {msg}"),
            ChainParamsError::InvalidModulus(msg) => write!(f, "Invalid modulus: {msg}"),
            ChainParamsError::UnsupportedSecurityLevel(level) => {
                write!(f, "Unsupported security level: {level}")
            }
            ChainParamsError::InconsistentParams(msg) => {
                write!(f, "Inconsistent parameters: {msg}")
            }
            ChainParamsError::InvalidBlock(msg) => write!(f, "Invalid block: {msg}"),
            ChainParamsError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            ChainParamsError::ContextAlreadyInstalled => {
                write!(f, "Chain context has already been installed")
            }
            ChainParamsError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ChainParamsError {}

impl From<std::io::Error> for ChainParamsError {
    fn from(err: std::io::Error) -> Self {
        ChainParamsError::Io(err.to_string())
    }
}

impl From<hex::FromHexError> for ChainParamsError {
    fn from(err: hex::FromHexError) -> Self {
        ChainParamsError::InvalidHex(err.to_string())
    }
}

impl From<serde_json::Error> for ChainParamsError {
    fn from(err: serde_json::Error) -> Self {
        ChainParamsError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ChainParamsError::UnknownNetwork("devnet".to_string()).to_string(),
            "Unknown network: devnet"
        );
        assert_eq!(
            ChainParamsError::UnsupportedSecurityLevel(64).to_string(),
            "Unsupported security level: 64"
        );
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: ChainParamsError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, ChainParamsError::InvalidHex(_)));
    }
}
