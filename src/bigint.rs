//! Bignum facade: the modular arithmetic spec.md §4.A asks for, layered
//! over `num-bigint`. Every modular operation here returns the
//! non-negative canonical representative `< modulus`.

use num_bigint::{BigInt, BigUint, RandBigInt, ToBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{PaillierError, Result};

/// `base^exp mod modulus`, non-negative, `< modulus`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    base.modpow(exp, modulus)
}

/// `gcd(a, b)`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// `lcm(a, b)`.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    a.lcm(b)
}

/// Bit length of `a` (0 for zero).
pub fn bit_length(a: &BigUint) -> u64 {
    a.bits()
}

pub fn to_decimal_string(a: &BigUint) -> String {
    a.to_str_radix(10)
}

pub fn from_decimal_string(s: &str) -> Option<BigUint> {
    BigUint::parse_bytes(s.as_bytes(), 10)
}

pub fn to_bytes_be(a: &BigUint) -> Vec<u8> {
    a.to_bytes_be()
}

pub fn from_bytes_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Extended Euclidean algorithm over signed bignums.
/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        (a.clone(), BigInt::one(), BigInt::zero())
    } else {
        let (g, x, y) = extended_gcd(b, &(a % b));
        (g, y.clone(), x - (a / b) * y)
    }
}

/// `a^(-1) mod m`. Fails with [`PaillierError::InverseDoesNotExist`] when
/// `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let a_int = a.to_bigint().expect("BigUint -> BigInt is total");
    let m_int = m.to_bigint().expect("BigUint -> BigInt is total");
    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if g != BigInt::one() && g != -BigInt::one() {
        return Err(PaillierError::InverseDoesNotExist);
    }
    let x = ((x % &m_int) + &m_int) % &m_int;
    Ok(x.to_biguint().expect("reduced mod a positive modulus"))
}

/// Uniformly samples a scalar in `[lo, hi)`.
///
/// # Panics
/// Panics if `lo >= hi`, mirroring `num_bigint::RandBigInt`'s own
/// contract.
pub fn sample_range<R: RngCore + CryptoRng>(rng: &mut R, lo: &BigUint, hi: &BigUint) -> BigUint {
    rng.gen_biguint_range(lo, hi)
}

/// The first 70 primes, all `<= 349`. Used as a cheap pre-sieve before the
/// more expensive Miller–Rabin test; correctness never depends on this
/// list being complete or even correct, only on the Miller–Rabin pass
/// below.
pub const SMALL_PRIMES: &[u32] = &[
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349,
];

/// Miller–Rabin probabilistic primality test with `rounds` witnesses.
/// False-positive probability is at most `4^(-rounds)` for a random odd
/// input.
pub fn is_probable_prime<R: RngCore + CryptoRng>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = &one + &one;

    if n < &two {
        return false;
    }
    if n == &two || n == &BigUint::from(3u32) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // n - 1 = 2^s * d, d odd.
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s: u32 = 0;
    while d.is_even() {
        d /= &two;
        s += 1;
    }

    'witness: for _ in 0..rounds {
        let a = sample_range(rng, &two, &(n - &two));
        let mut x = mod_pow(&a, &d, n);
        if x == one || x == n_minus_one {
            continue 'witness;
        }
        for _ in 0..s.saturating_sub(1) {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Rejects candidates with a small prime factor `<= sieve_cap` before
/// paying for Miller–Rabin. Pure optimization: callers must still run
/// [`is_probable_prime`] on anything this accepts.
fn has_small_factor(candidate: &BigUint, sieve_cap: u32) -> bool {
    for &p in SMALL_PRIMES {
        if p > sieve_cap {
            break;
        }
        let p = BigUint::from(p);
        if candidate != &p && (candidate % &p).is_zero() {
            return true;
        }
    }
    false
}

/// Smallest probable prime `>= x`, sieved against [`SMALL_PRIMES`] up to
/// `sieve_cap` and confirmed with `rounds`-witness Miller–Rabin.
pub fn next_prime<R: RngCore + CryptoRng>(
    x: &BigUint,
    rounds: u32,
    sieve_cap: u32,
    rng: &mut R,
) -> BigUint {
    let one = BigUint::one();
    let mut candidate = x.clone();
    if candidate.is_even() {
        candidate += &one;
    }
    loop {
        if !has_small_factor(&candidate, sieve_cap) && is_probable_prime(&candidate, rounds, rng) {
            return candidate;
        }
        candidate += &BigUint::from(2u32);
    }
}
