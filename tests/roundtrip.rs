//! Encryption/decryption round-trip scenarios S1-S3 and testable
//! properties 1-2 (spec.md §8).

use num_bigint::BigUint;
use paillier_rs::Paillier;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn biguints(values: &[u32]) -> Vec<BigUint> {
    values.iter().map(|&v| BigUint::from(v)).collect()
}

#[test]
fn s1_roundtrip_11_13() {
    let mut rng = ChaCha20Rng::seed_from_u64(100);
    let keypair =
        Paillier::from_primes(&BigUint::from(11u32), &BigUint::from(13u32), &mut rng).unwrap();
    let message = biguints(&[42, 43, 44]);
    let ciphertext = keypair.public_key().encrypt(&message, &mut rng).unwrap();
    let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn s2_roundtrip_small_values() {
    let mut rng = ChaCha20Rng::seed_from_u64(101);
    let keypair =
        Paillier::from_primes(&BigUint::from(11u32), &BigUint::from(13u32), &mut rng).unwrap();
    let message = biguints(&[1, 2, 3]);
    let ciphertext = keypair.public_key().encrypt(&message, &mut rng).unwrap();
    let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn s3_roundtrip_17_19() {
    let mut rng = ChaCha20Rng::seed_from_u64(102);
    let keypair =
        Paillier::from_primes(&BigUint::from(17u32), &BigUint::from(19u32), &mut rng).unwrap();
    let message = biguints(&[4, 5, 6, 7]);
    let ciphertext = keypair.public_key().encrypt(&message, &mut rng).unwrap();
    let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, message);
}

#[test]
fn property_1_decryption_is_correct_across_the_full_plaintext_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(103);
    let keypair =
        Paillier::from_primes(&BigUint::from(11u32), &BigUint::from(13u32), &mut rng).unwrap();
    let n: u32 = 143;
    for m in 0..n {
        let message = vec![BigUint::from(m)];
        let ciphertext = keypair.public_key().encrypt(&message, &mut rng).unwrap();
        let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
        assert_eq!(decrypted, message, "failed to round-trip m = {m}");
    }
}

#[test]
fn property_2_encrypting_the_same_plaintext_twice_differs() {
    let mut rng = ChaCha20Rng::seed_from_u64(104);
    let keypair =
        Paillier::from_primes(&BigUint::from(17u32), &BigUint::from(19u32), &mut rng).unwrap();
    let message = biguints(&[7]);
    let c1 = keypair.public_key().encrypt(&message, &mut rng).unwrap();
    let c2 = keypair.public_key().encrypt(&message, &mut rng).unwrap();
    assert_ne!(c1, c2);

    // Both still decrypt back to the original plaintext regardless of
    // which randomness was used.
    assert_eq!(keypair.private_key().decrypt(&c1).unwrap(), message);
    assert_eq!(keypair.private_key().decrypt(&c2).unwrap(), message);
}

#[test]
fn message_out_of_range_is_rejected_as_a_whole_call() {
    let mut rng = ChaCha20Rng::seed_from_u64(105);
    let keypair =
        Paillier::from_primes(&BigUint::from(11u32), &BigUint::from(13u32), &mut rng).unwrap();
    let message = vec![BigUint::from(10u32), BigUint::from(200u32)];
    let err = keypair
        .public_key()
        .encrypt(&message, &mut rng)
        .unwrap_err();
    assert_eq!(err, paillier_rs::PaillierError::MessageOutOfRange { index: 1 });
}
