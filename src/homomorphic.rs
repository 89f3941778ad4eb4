//! Ciphertext-level homomorphic operations, grounded on the teacher's
//! `arithmetic.rs`. Realizes spec.md §8's optional additive-homomorphism
//! property; not part of the minimal core but not excluded by any
//! Non-goal either.

use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::One;

use crate::bigint;
use crate::encrypt::Ciphertext;
use crate::keygen::{PrivateKey, PublicKey};

impl Ciphertext {
    /// Homomorphic addition: `E(m1 + m2 mod n) = E(m1) * E(m2) mod n^2`.
    /// Both ciphertexts and the result must have the same length;
    /// position `i` is combined independently of every other position.
    ///
    /// # Panics
    /// Panics if `self` and `other` have different lengths.
    pub fn add(&self, other: &Ciphertext, public_key: &PublicKey) -> Ciphertext {
        assert_eq!(self.len(), other.len(), "ciphertexts must have matching length");
        let n_sq = public_key.n_sq();
        let combined = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| (a * b) % &n_sq)
            .collect();
        Ciphertext(combined)
    }

    /// Homomorphic scalar multiplication: `E(k * m mod n) = E(m)^k mod n^2`.
    pub fn scalar_mul(&self, k: &BigUint, public_key: &PublicKey) -> Ciphertext {
        let n_sq = public_key.n_sq();
        let scaled = self
            .as_slice()
            .iter()
            .map(|c| bigint::mod_pow(c, k, &n_sq))
            .collect();
        Ciphertext(scaled)
    }

    /// Homomorphic subtraction: `E(m1 - m2 mod n) = E(m1) * E(m2)^(n-1) mod n^2`.
    ///
    /// # Panics
    /// Panics if `self` and `other` have different lengths.
    pub fn sub(&self, other: &Ciphertext, public_key: &PublicKey) -> Ciphertext {
        assert_eq!(self.len(), other.len(), "ciphertexts must have matching length");
        let n_sq = public_key.n_sq();
        let neg_one = public_key.n() - BigUint::one();
        let combined = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(a, b)| {
                let b_inv = bigint::mod_pow(b, &neg_one, &n_sq);
                (a * &b_inv) % &n_sq
            })
            .collect();
        Ciphertext(combined)
    }
}

impl PrivateKey {
    /// Decrypts `c1 - c2` (per-position) and interprets each result as a
    /// signed integer in `(-n/2, n/2]`, treating plaintexts greater than
    /// `n/2` as negative wraparound. Grounded on the teacher's
    /// `paillier_difference`.
    pub fn signed_difference(
        &self,
        c1: &Ciphertext,
        c2: &Ciphertext,
        public_key: &PublicKey,
    ) -> crate::error::Result<Vec<BigInt>> {
        let diff_cipher = c1.sub(c2, public_key);
        let diff_mod = self.decrypt(&diff_cipher)?;
        let half_n = public_key.n() >> 1u32;
        Ok(diff_mod
            .into_iter()
            .map(|m| {
                if m > half_n {
                    m.to_bigint().expect("BigUint -> BigInt is total")
                        - public_key.n().to_bigint().expect("BigUint -> BigInt is total")
                } else {
                    m.to_bigint().expect("BigUint -> BigInt is total")
                }
            })
            .collect())
    }
}
