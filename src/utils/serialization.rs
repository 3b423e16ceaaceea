// Consensus byte encoding, the layout block and transaction hashes are taken over.
// Integers are little-endian and collection lengths use the compact size prefix.

/// Types with a canonical consensus encoding
pub trait Encodable {
    fn consensus_encode(&self, out: &mut Vec<u8>);
}

/// Encode a value into a fresh buffer
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut out = Vec::new();
    data.consensus_encode(&mut out);
    out
}

pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Length-prefixed byte string
pub fn write_var_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_compact_size(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

impl Encodable for u32 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl Encodable for i32 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl Encodable for i64 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }
}

impl<T: Encodable> Encodable for [T] {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        for item in self {
            item.consensus_encode(out);
        }
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.as_slice().consensus_encode(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_size_boundaries() {
        let encode = |n: u64| {
            let mut out = Vec::new();
            write_compact_size(&mut out, n);
            out
        };

        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(0xfc), vec![0xfc]);
        assert_eq!(encode(0xfd), vec![0xfd, 0xfd, 0x00]);
        assert_eq!(encode(0xffff), vec![0xfd, 0xff, 0xff]);
        assert_eq!(encode(0x1_0000), vec![0xfe, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(encode(0x1_0000_0000).len(), 9);
    }

    #[test]
    fn test_integers_are_little_endian() {
        assert_eq!(serialize(&1u32), vec![1, 0, 0, 0]);
        assert_eq!(serialize(&-1i32), vec![0xff; 4]);
        assert_eq!(serialize(&0x0102i64), vec![2, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_vec_carries_length_prefix() {
        let values: Vec<u32> = vec![7, 8];
        assert_eq!(serialize(&values), vec![2, 7, 0, 0, 0, 8, 0, 0, 0]);
    }
}
