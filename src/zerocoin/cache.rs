use crate::error::Result;
use crate::zerocoin::{ModulusEncoding, ZerocoinParams, DEFAULT_SECURITY_LEVEL, ZEROCOIN_MODULUS};
use once_cell::sync::{Lazy, OnceCell};

/// Derives the parameters for each modulus encoding at most once.
///
/// Concurrent first callers block on the same slot; exactly one derivation
/// runs and every caller receives a reference to its result. A failed
/// derivation leaves the slot empty.
pub struct ZerocoinParamsCache {
    modulus: String,
    security_level: u32,
    hex: OnceCell<ZerocoinParams>,
    decimal: OnceCell<ZerocoinParams>,
}

impl ZerocoinParamsCache {
    pub fn new(modulus: impl Into<String>) -> Self {
        Self::with_security_level(modulus, DEFAULT_SECURITY_LEVEL)
    }

    pub fn with_security_level(modulus: impl Into<String>, security_level: u32) -> Self {
        ZerocoinParamsCache {
            modulus: modulus.into(),
            security_level,
            hex: OnceCell::new(),
            decimal: OnceCell::new(),
        }
    }

    fn slot(&self, encoding: ModulusEncoding) -> &OnceCell<ZerocoinParams> {
        match encoding {
            ModulusEncoding::Hex => &self.hex,
            ModulusEncoding::Decimal => &self.decimal,
        }
    }

    /// `use_modulus_v1` selects the hexadecimal reading of the modulus
    pub fn get(&self, use_modulus_v1: bool) -> Result<&ZerocoinParams> {
        let encoding = ModulusEncoding::from_v1_flag(use_modulus_v1);
        self.slot(encoding).get_or_try_init(|| {
            ZerocoinParams::from_literal(&self.modulus, encoding, self.security_level)
        })
    }

    pub fn is_initialized(&self, use_modulus_v1: bool) -> bool {
        self.slot(ModulusEncoding::from_v1_flag(use_modulus_v1))
            .get()
            .is_some()
    }
}

static ZEROCOIN_PARAMS: Lazy<ZerocoinParamsCache> =
    Lazy::new(|| ZerocoinParamsCache::new(ZEROCOIN_MODULUS));

/// Process-wide parameters for the compiled-in modulus.
///
/// Independent of the active network: every network shares one modulus.
pub fn zerocoin_params(use_modulus_v1: bool) -> Result<&'static ZerocoinParams> {
    ZEROCOIN_PARAMS.get(use_modulus_v1)
}
