//! Prime generation for Paillier key material (spec.md §4.B).

use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::bigint;
use crate::config::KEYGEN_RETRY_CAP;
use crate::error::{PaillierError, Result};

/// Samples a single probable prime of exactly `bits` bits, `<= 2^bits - 1`,
/// pre-sieved against small factors up to `sieve_cap` and confirmed with
/// `mr_rounds`-witness Miller–Rabin. Retries up to [`KEYGEN_RETRY_CAP`]
/// times before giving up.
fn generate_prime<R: RngCore + CryptoRng>(
    bits: usize,
    mr_rounds: u32,
    sieve_cap: u32,
    rng: &mut R,
) -> Result<BigUint> {
    let min = BigUint::one() << (bits - 1);
    let max = (BigUint::one() << bits) - BigUint::one();
    for attempt in 0..KEYGEN_RETRY_CAP {
        // Force the top bit so the candidate (and therefore the prime
        // `next_prime` advances to) falls in [2^(bits-1), 2^bits), per
        // spec.md §3's PrimePair bit-size invariant.
        let candidate = bigint::sample_range(rng, &min, &(&max + BigUint::one()));
        let candidate = bigint::next_prime(&candidate, mr_rounds, sieve_cap, rng);
        if candidate <= max {
            return Ok(candidate);
        }
        debug!("generate_prime: attempt {attempt} overshot the {bits}-bit bound, retrying");
    }
    Err(PaillierError::KeygenExhausted {
        stage: "prime generation",
        tries: KEYGEN_RETRY_CAP,
    })
}

/// Produces a distinct prime pair `(p, q)`, each `bits` bits, such that
/// `gcd(p*q, (p-1)*(q-1)) = 1`, per spec.md §4.B.
pub fn generate_prime_pair<R: RngCore + CryptoRng>(
    bits: usize,
    mr_rounds: u32,
    sieve_cap: u32,
    rng: &mut R,
) -> Result<(BigUint, BigUint)> {
    let p = generate_prime(bits, mr_rounds, sieve_cap, rng)?;

    for attempt in 0..KEYGEN_RETRY_CAP {
        let q = generate_prime(bits, mr_rounds, sieve_cap, rng)?;
        if q == p {
            debug!("generate_prime_pair: attempt {attempt} drew q == p, retrying");
            continue;
        }
        let n = &p * &q;
        let phi = (&p - BigUint::one()) * (&q - BigUint::one());
        if n.gcd(&phi) == BigUint::one() {
            return Ok((p, q));
        }
        debug!("generate_prime_pair: attempt {attempt} failed gcd(pq, phi) = 1, retrying");
    }
    Err(PaillierError::KeygenExhausted {
        stage: "prime pair compatibility",
        tries: KEYGEN_RETRY_CAP,
    })
}
