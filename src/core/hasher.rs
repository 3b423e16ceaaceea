use crate::core::Hash256;
use crate::utils::double_sha256;

/// The chain's block-hash function, applied to the 80-byte serialized header.
///
/// Kept behind a trait because the proof-of-work hash is a node-level choice;
/// the parameter tables only need something that turns header bytes into an
/// identifier.
pub trait HeaderHasher: Send + Sync {
    fn hash_header(&self, header: &[u8]) -> Hash256;

    /// Short label used in logs and inspection output
    fn name(&self) -> &'static str;
}

/// Plain double SHA-256 header hash
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl HeaderHasher for DoubleSha256 {
    fn hash_header(&self, header: &[u8]) -> Hash256 {
        Hash256::from_bytes(double_sha256(header))
    }

    fn name(&self) -> &'static str {
        "sha256d"
    }
}

/// Wraps another hasher and answers with a recorded identifier for headers
/// it has been told about.
///
/// Lets a node accept a genesis identity it takes on trust, e.g. one produced
/// by a hash function the inner hasher does not implement.
#[derive(Debug, Clone, Default)]
pub struct PinnedHasher<H> {
    inner: H,
    pinned: Vec<(Vec<u8>, Hash256)>,
}

impl<H: HeaderHasher> PinnedHasher<H> {
    pub fn new(inner: H) -> Self {
        PinnedHasher {
            inner,
            pinned: Vec::new(),
        }
    }

    pub fn pin(mut self, header: Vec<u8>, hash: Hash256) -> Self {
        self.pinned.retain(|(bytes, _)| *bytes != header);
        self.pinned.push((header, hash));
        self
    }

    pub fn is_pinned(&self, header: &[u8]) -> bool {
        self.pinned.iter().any(|(bytes, _)| bytes.as_slice() == header)
    }
}

impl<H: HeaderHasher> HeaderHasher for PinnedHasher<H> {
    fn hash_header(&self, header: &[u8]) -> Hash256 {
        self.pinned
            .iter()
            .find(|(bytes, _)| bytes.as_slice() == header)
            .map(|(_, hash)| *hash)
            .unwrap_or_else(|| self.inner.hash_header(header))
    }

    fn name(&self) -> &'static str {
        "pinned"
    }
}
