//! Paillier signature scheme (spec.md §4.F).

use num_bigint::BigUint;

use crate::bigint;
use crate::error::{PaillierError, Result};
use crate::hash::{to_hex, Digester};
use crate::keygen::{l, PrivateKey, PublicKey};

/// A Paillier signature `(s1, s2)`, both scalars in `[0, n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub BigUint, pub BigUint);

/// Canonicalizes a scalar sequence to the byte string `sign`/`verify`
/// hash: each element rendered in decimal, joined by a single 0x20
/// space, no trailing separator (spec.md §4.F / §9).
fn canonicalize(message: &[BigUint]) -> Vec<u8> {
    message
        .iter()
        .map(|m| bigint::to_decimal_string(m))
        .collect::<Vec<_>>()
        .join(" ")
        .into_bytes()
}

/// Hashes `canonicalize(message)` and parses the lowercase-hex digest as
/// a base-16 scalar.
fn hash_message(message: &[BigUint], hasher: &impl Digester) -> BigUint {
    let digest = hasher.digest(&canonicalize(message));
    let hex = to_hex(&digest);
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("hex digest parses as a base-16 integer")
}

impl PrivateKey {
    /// Signs `message`, per spec.md §4.F.
    ///
    /// Fails with [`PaillierError::SignatureKeyInvalid`] if an
    /// intermediate modular inverse does not exist (negligible
    /// probability for a cryptographic hash and a large `n` — spec.md §9
    /// open question).
    pub fn sign(&self, message: &[BigUint], hasher: &impl Digester) -> Result<Signature> {
        let n_sq = self.n_sq();
        let h = hash_message(message, hasher);

        let num = l(&bigint::mod_pow(&h, &self.lambda, &n_sq), &self.n);
        let den = l(&bigint::mod_pow(&self.g, &self.lambda, &n_sq), &self.n);
        let den_inv = bigint::mod_inverse(&den, &self.n)
            .map_err(|_| PaillierError::SignatureKeyInvalid)?;
        let s1 = (&num * &den_inv) % &self.n;

        let inv_n = bigint::mod_inverse(&self.n, &self.lambda)
            .map_err(|_| PaillierError::SignatureKeyInvalid)?;
        let g_s1 = bigint::mod_pow(&self.g, &s1, &self.n);
        let inv_g = bigint::mod_inverse(&g_s1, &self.n)
            .map_err(|_| PaillierError::SignatureKeyInvalid)?;
        let s2 = bigint::mod_pow(&((&h * &inv_g) % &self.n), &inv_n, &self.n);

        Ok(Signature(s1, s2))
    }
}

impl PublicKey {
    /// Verifies `(s1, s2)` against `message`. Never fails — a malformed
    /// signature or message simply verifies to `false` (spec.md §7).
    pub fn verify(&self, signature: &Signature, message: &[BigUint], hasher: &impl Digester) -> bool {
        if signature.0 >= self.n || signature.1 >= self.n {
            return false;
        }
        let h = hash_message(message, hasher);
        let n_sq = self.n_sq();
        let g_s1 = bigint::mod_pow(&self.g, &signature.0, &n_sq);
        let s2_n = bigint::mod_pow(&signature.1, &self.n, &n_sq);
        let v = (&g_s1 * &s2_n) % &n_sq;
        // `h` is only ever meaningful modulo n^2 here: for production-sized
        // keys n^2 comfortably exceeds any hash digest and this reduction
        // is a no-op, but it keeps the equality well-defined for the small
        // test keys spec.md's scenarios use.
        (h % &n_sq) == v
    }
}
