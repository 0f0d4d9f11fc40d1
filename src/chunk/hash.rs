//! Chunk hash types.

use std::fmt;

use bytes::Bytes;

/// A strong-hash digest identifying chunk content.
///
/// The width depends on the hash function that produced it (20 bytes for
/// SHA-1, 32 for BLAKE3). Only equality is meaningful; the bytes are otherwise
/// opaque. Cloning is cheap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkHash(Bytes);

impl ChunkHash {
    /// Creates a new chunk hash from digest bytes.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Creates a new chunk hash by copying a slice.
    pub fn from_slice(slice: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(slice))
    }

    /// Returns the digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest width in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the digest has no bytes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the hash as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Creates a hash from a hex string.
    ///
    /// Returns `None` if the string is not valid hex.
    pub fn from_hex(hex_str: &str) -> Option<Self> {
        hex::decode(hex_str).ok().map(Self::new)
    }
}

impl AsRef<[u8]> for ChunkHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for ChunkHash {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<Vec<u8>> for ChunkHash {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for ChunkHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let hash = ChunkHash::new(vec![0u8; 20]);
        assert_eq!(hash.len(), 20);
        assert_eq!(hash.as_bytes(), &[0u8; 20]);
    }

    #[test]
    fn test_from_slice() {
        let hash = ChunkHash::from_slice(b"A");
        assert_eq!(hash.as_bytes(), b"A");
        assert_eq!(hash, ChunkHash::from(&b"A"[..]));
        assert_ne!(hash, ChunkHash::from_slice(b"B"));
    }

    #[test]
    fn test_to_hex() {
        let hash = ChunkHash::new(vec![0xABu8; 32]);
        let hex = hash.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_from_hex() {
        let hash = ChunkHash::from_hex("922474181e529d97307d8df727fc5cd18d7e3508").unwrap();
        assert_eq!(hash.len(), 20);
        assert_eq!(hash.to_hex(), "922474181e529d97307d8df727fc5cd18d7e3508");

        assert!(ChunkHash::from_hex("zz").is_none());
        assert!(ChunkHash::from_hex("abc").is_none());
    }

    #[test]
    fn test_display() {
        let hash = ChunkHash::new(vec![0x01u8, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        assert_eq!(hash.to_string(), "0123456789abcdef");
        assert_eq!(hash.to_string(), hash.to_hex());
    }
}
