//! Key material derivation and the public API surface (spec.md §4.C, §6).

use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::bigint;
use crate::config::{Config, KEYGEN_RETRY_CAP};
use crate::error::{PaillierError, Result};
use crate::primes;

/// `L(u) = (u - 1) / n`. Caller guarantees `u ≡ 1 (mod n)` so the division
/// is exact.
pub(crate) fn l(u: &BigUint, n: &BigUint) -> BigUint {
    (u - BigUint::one()) / n
}

/// The public half of a keypair: `(n, g)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
}

impl PublicKey {
    /// RSA-like modulus `n = p * q`.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub(crate) fn n_sq(&self) -> BigUint {
        &self.n * &self.n
    }
}

/// The private half of a keypair: `(λ, μ, n, g)`. `g` is kept here too
/// because signing needs it, per spec.md §3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub(crate) lambda: BigUint,
    pub(crate) mu: BigUint,
    pub(crate) n: BigUint,
    pub(crate) g: BigUint,
}

impl PrivateKey {
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn g(&self) -> &BigUint {
        &self.g
    }

    pub fn lambda(&self) -> &BigUint {
        &self.lambda
    }

    pub(crate) fn n_sq(&self) -> BigUint {
        &self.n * &self.n
    }
}

/// Derives `(PublicKey, PrivateKey)` from a prime pair, per spec.md §4.C.
///
/// Resamples `g` (never the already-rejected candidate — spec.md §9
/// flags the source's bug of testing an uninitialized `g` instead) until
/// `L(g^λ mod n²) mod n` is invertible mod `n`.
pub fn derive<R: RngCore + CryptoRng>(
    p: &BigUint,
    q: &BigUint,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey)> {
    let n = p * q;
    let n_sq = &n * &n;
    let lambda = (p - BigUint::one()).lcm(&(q - BigUint::one()));

    for attempt in 0..KEYGEN_RETRY_CAP {
        let g = bigint::sample_range(rng, &BigUint::one(), &n_sq);
        let u = bigint::mod_pow(&g, &lambda, &n_sq);
        let l_u = l(&u, &n);
        match bigint::mod_inverse(&l_u, &n) {
            Ok(mu) => {
                let public = PublicKey { n: n.clone(), g: g.clone() };
                let private = PrivateKey { lambda, mu, n, g };
                return Ok((public, private));
            }
            Err(PaillierError::InverseDoesNotExist) => {
                debug!("derive: attempt {attempt} sampled a non-invertible g, resampling");
                continue;
            }
            Err(e) => return Err(e),
        }
    }
    Err(PaillierError::KeygenExhausted {
        stage: "generator selection",
        tries: KEYGEN_RETRY_CAP,
    })
}

/// A Paillier keypair: owns both halves, constructed together and
/// thereafter immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paillier {
    public: PublicKey,
    private: PrivateKey,
}

impl Paillier {
    /// Generates a fresh keypair at the default (production) bit size.
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Self::new_with_config(rng, Config::default())
    }

    /// Generates a fresh keypair with an explicit [`Config`].
    pub fn new_with_config<R: RngCore + CryptoRng>(rng: &mut R, config: Config) -> Result<Self> {
        let (p, q) = primes::generate_prime_pair(
            config.bits,
            config.mr_rounds,
            config.small_prime_sieve_cap,
            rng,
        )?;
        Self::from_primes(&p, &q, rng)
    }

    /// Deterministic construction from a known prime pair, primarily for
    /// tests (spec.md §6). Does not re-validate primality of `p`/`q`.
    pub fn from_primes<R: RngCore + CryptoRng>(p: &BigUint, q: &BigUint, rng: &mut R) -> Result<Self> {
        let (public, private) = derive(p, q, rng)?;
        Ok(Paillier { public, private })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn into_keys(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }
}
