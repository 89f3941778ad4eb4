//! Decryption (spec.md §4.E).

use num_bigint::BigUint;

use crate::bigint;
use crate::encrypt::Ciphertext;
use crate::error::{PaillierError, Result};
use crate::keygen::{l, PrivateKey};

impl PrivateKey {
    /// Inverts [`PublicKey::encrypt`](crate::keygen::PublicKey::encrypt)
    /// using the private trapdoor, per spec.md §4.E:
    /// `m_i = L(c_i^λ mod n²) * μ mod n`.
    ///
    /// Fails the whole call with
    /// [`PaillierError::CiphertextOutOfRange`] if any `c_i >= n²`.
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<Vec<BigUint>> {
        let n_sq = self.n_sq();
        for (index, c) in ciphertext.as_slice().iter().enumerate() {
            if c >= &n_sq {
                return Err(PaillierError::CiphertextOutOfRange { index });
            }
        }

        Ok(ciphertext
            .as_slice()
            .iter()
            .map(|c| {
                let u = bigint::mod_pow(c, &self.lambda, &n_sq);
                let l_u = l(&u, &self.n);
                (&l_u * &self.mu) % &self.n
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::Paillier;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn round_trips_s1() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let keypair = Paillier::from_primes(
            &BigUint::from(11u32),
            &BigUint::from(13u32),
            &mut rng,
        )
        .unwrap();
        let message = vec![
            BigUint::from(42u32),
            BigUint::from(43u32),
            BigUint::from(44u32),
        ];
        let c = keypair.public_key().encrypt(&message, &mut rng).unwrap();
        let decrypted = keypair.private_key().decrypt(&c).unwrap();
        assert_eq!(decrypted, message);
    }

    #[test]
    fn rejects_out_of_range_ciphertext() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let keypair = Paillier::from_primes(
            &BigUint::from(11u32),
            &BigUint::from(13u32),
            &mut rng,
        )
        .unwrap();
        let n_sq = keypair.public_key().n() * keypair.public_key().n();
        let bogus = Ciphertext(vec![n_sq]);
        let err = keypair.private_key().decrypt(&bogus).unwrap_err();
        assert_eq!(err, PaillierError::CiphertextOutOfRange { index: 0 });
    }
}
