//! Component references derived from content identity (blake3).
//!
//! A reference is `blake3(len(source_id) || source_id || content)`, rendered
//! as truncated hex. Same id and bytes give the same reference on every run;
//! any byte change gives a new one.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Shortest accepted reference length (hex chars).
pub const MIN_REF_LEN: usize = 8;
/// Longest reference length: full blake3 output.
pub const MAX_REF_LEN: usize = 64;
/// Default reference length.
pub const DEFAULT_REF_LEN: usize = 16;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[cfg(test)]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Truncate into a component reference of `len` hex chars.
    pub fn to_ref(self, len: usize) -> ComponentRef {
        let len = len.clamp(MIN_REF_LEN, MAX_REF_LEN);
        let mut hex = self.to_hex();
        hex.truncate(len);
        ComponentRef(hex)
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Opaque, stable token identifying the renderable unit of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn identity_hasher(source_id: &str) -> blake3::Hasher {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(source_id.len() as u64).to_le_bytes());
    hasher.update(source_id.as_bytes());
    hasher
}

/// Hash in-memory content under a source id.
pub fn hash_bytes(source_id: &str, content: &[u8]) -> ContentHash {
    let mut hasher = identity_hasher(source_id);
    hasher.update(content);
    ContentHash::new(*hasher.finalize().as_bytes())
}

/// Hash file content under a source id (streaming).
///
/// Produces the same hash as [`hash_bytes`] over the file's bytes.
pub fn hash_file(source_id: &str, path: &Path) -> io::Result<ContentHash> {
    let file = File::open(path)?;
    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = identity_hasher(source_id);
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(ContentHash::new(*hasher.finalize().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_content_hash_display() {
        let hash = ContentHash::new([0xab; 32]);
        assert_eq!(format!("{}", hash), "abababababababab");
    }

    #[test]
    fn test_to_ref_length_is_clamped() {
        let hash = ContentHash::new([0x12; 32]);
        assert_eq!(hash.to_ref(16).as_str().len(), 16);
        assert_eq!(hash.to_ref(2).as_str().len(), MIN_REF_LEN);
        assert_eq!(hash.to_ref(500).as_str().len(), MAX_REF_LEN);
    }

    #[test]
    fn test_hash_bytes_is_deterministic() {
        let a = hash_bytes("docs/intro", b"# Intro");
        let b = hash_bytes("docs/intro", b"# Intro");
        assert_eq!(a, b);
        assert_ne!(a, hash_bytes("docs/intro", b"# Intro!"));
        assert_ne!(a, hash_bytes("docs/other", b"# Intro"));
    }

    #[test]
    fn test_identity_is_length_prefixed() {
        // Moving bytes between id and content must not collide
        assert_ne!(hash_bytes("ab", b"c"), hash_bytes("a", b"bc"));
    }

    #[test]
    fn test_hash_file_matches_hash_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("intro.md");
        fs::write(&path, "hello world").unwrap();

        let from_file = hash_file("docs/intro", &path).unwrap();
        assert_eq!(from_file, hash_bytes("docs/intro", b"hello world"));
    }

    #[test]
    fn test_hash_file_nonexistent() {
        assert!(hash_file("x", Path::new("/nonexistent/file.md")).is_err());
    }
}
