//! Property 6 (spec.md §8): keygen invariants over freshly generated
//! (not fixed-prime) keypairs.

use num_bigint::BigUint;
use num_integer::Integer;
use paillier_rs::bigint::{is_probable_prime, mod_pow};
use paillier_rs::config::Config;
use paillier_rs::Paillier;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn property_6_fresh_keypairs_satisfy_the_paillier_invariants() {
    let mut rng = ChaCha20Rng::seed_from_u64(300);
    let config = Config {
        bits: 32,
        mr_rounds: 20,
        small_prime_sieve_cap: 349,
    };

    for trial in 0..5u64 {
        let mut rng2 = ChaCha20Rng::seed_from_u64(300 + trial);
        let keypair = Paillier::new_with_config(&mut rng2, config).unwrap();
        let pk = keypair.public_key();
        let sk = keypair.private_key();

        let n_sq = pk.n() * pk.n();

        assert!(pk.n() > &BigUint::from(1u32));
        assert!(pk.g() < &n_sq);
        assert_ne!(pk.g() % pk.n(), BigUint::from(0u32));

        let u = mod_pow(sk.g(), sk.lambda(), &n_sq);
        let l_u = (&u - BigUint::from(1u32)) / pk.n();
        assert_eq!(l_u.gcd(pk.n()), BigUint::from(1u32));

        // g must actually be a probable-prime-backed construction check:
        // n = p*q is not itself prime (it is a product of two distinct
        // ~32-bit primes), so this sanity-checks the opposite direction.
        assert!(!is_probable_prime(pk.n(), 20, &mut rng));
    }
}
