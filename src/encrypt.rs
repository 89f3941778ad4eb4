//! Encryption (spec.md §4.D).

use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::bigint;
use crate::error::{PaillierError, Result};
use crate::keygen::PublicKey;

/// An ordered sequence of ciphertext scalars, each in `[0, n^2)`.
/// Position `i` corresponds to plaintext position `i` (spec.md §3).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(pub(crate) Vec<BigUint>);

impl Ciphertext {
    pub fn as_slice(&self) -> &[BigUint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<BigUint> {
        self.0
    }
}

impl PublicKey {
    /// Encrypts each `m_i` in `message` with fresh per-element randomness,
    /// per spec.md §4.D: `c_i = g^m_i * r_i^n mod n^2`.
    ///
    /// Fails the whole call with [`PaillierError::MessageOutOfRange`] if
    /// any `m_i >= n` — this crate elevates the source's ambiguous
    /// sentinel-zero return (spec.md §4.D) to a hard error.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        message: &[BigUint],
        rng: &mut R,
    ) -> Result<Ciphertext> {
        for (index, m) in message.iter().enumerate() {
            if m >= &self.n {
                return Err(PaillierError::MessageOutOfRange { index });
            }
        }

        let n_sq = self.n_sq();
        let one = BigUint::one();
        let ciphertexts = message
            .iter()
            .map(|m| {
                // r must be drawn from Z*_n: decryption only recovers m
                // when gcd(r, n) = 1, otherwise L((g^m r^n)^lambda mod n^2)
                // is not an exact multiple of n.
                let r = loop {
                    let candidate = bigint::sample_range(rng, &one, &self.n);
                    if bigint::gcd(&candidate, &self.n) == one {
                        break candidate;
                    }
                };
                let gm = bigint::mod_pow(&self.g, m, &n_sq);
                let rn = bigint::mod_pow(&r, &self.n, &n_sq);
                (&gm * &rn) % &n_sq
            })
            .collect();

        Ok(Ciphertext(ciphertexts))
    }
}
