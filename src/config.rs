/// Tunables for key generation and primality testing.
///
/// The defaults are production-sized (`bits = 2048`); tests override
/// `bits` down to the small values the testable properties in spec.md §8
/// use, trading security margin for speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Bit size of each of the two generated primes `p`, `q`.
    pub bits: usize,
    /// Miller–Rabin witness rounds; false-positive probability is at most
    /// `4^(-mr_rounds)`.
    pub mr_rounds: u32,
    /// Reject prime candidates divisible by any prime up to and including
    /// this value before running Miller–Rabin. Purely a speed
    /// optimization; correctness never depends on this value.
    pub small_prime_sieve_cap: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bits: 2048,
            mr_rounds: 20,
            small_prime_sieve_cap: 349,
        }
    }
}

/// Inner-loop retry budget for prime generation and `g` resampling, per
/// spec.md §4.B / §4.C. Not part of `Config` because it bounds a failure
/// mode rather than tuning correctness-preserving behavior.
pub const KEYGEN_RETRY_CAP: u32 = 1000;
