//! The hash collaborator (spec.md §6): `sign`/`verify` consume only a
//! `digest(bytes) -> bytes` capability. The core never picks a hash for
//! the caller.

use digest::Digest;

/// A hash primitive usable as the Paillier signature digest.
pub trait Digester {
    fn digest(&self, bytes: &[u8]) -> Vec<u8>;
}

/// SHA-256, 32-byte digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Digester;

impl Digester for Sha256Digester {
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        sha2::Sha256::digest(bytes).to_vec()
    }
}

/// SHA-512, 64-byte digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha512Digester;

impl Digester for Sha512Digester {
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        sha2::Sha512::digest(bytes).to_vec()
    }
}

/// MD5, 16-byte digest. Included only because it is cryptographically
/// broken collision-wise yet still a valid digest function for this
/// scheme's purposes, matching the source test matrix (spec.md §8, S6).
#[derive(Debug, Default, Clone, Copy)]
pub struct Md5Digester;

impl Digester for Md5Digester {
    fn digest(&self, bytes: &[u8]) -> Vec<u8> {
        md5::Md5::digest(bytes).to_vec()
    }
}

/// Renders a digest as lowercase hex, the form `sign`/`verify` parse as a
/// base-16 scalar (spec.md §9, "canonical signing input").
pub(crate) fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
