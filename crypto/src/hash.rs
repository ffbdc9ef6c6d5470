//! SHA-224 hashing.

use sha2::{Digest, Sha224};

/// Compute the 224-bit SHA-2 digest of arbitrary data.
pub fn sha224(data: &[u8]) -> [u8; 28] {
    sha224_multi(&[data])
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn sha224_multi(parts: &[&[u8]]) -> [u8; 28] {
    let mut hasher = Sha224::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 28];
    output.copy_from_slice(&result);
    output
}
