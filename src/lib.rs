//! A Paillier partially-homomorphic public-key cryptosystem.
//!
//! Covers keypair generation, encryption of plaintext scalars modulo `n`,
//! decryption of ciphertexts modulo `n^2`, and a Paillier signature
//! scheme. Does not claim constant-time side-channel resistance, does not
//! implement threshold/distributed key generation, and defines no wire
//! serialization format.
//!
//! ```
//! use paillier_rs::{Paillier, Sha256Digester};
//! use num_bigint::BigUint;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let keypair = Paillier::from_primes(
//!     &BigUint::from(11u32),
//!     &BigUint::from(13u32),
//!     &mut rng,
//! ).unwrap();
//!
//! let message = vec![BigUint::from(42u32)];
//! let ciphertext = keypair.public_key().encrypt(&message, &mut rng).unwrap();
//! let decrypted = keypair.private_key().decrypt(&ciphertext).unwrap();
//! assert_eq!(decrypted, message);
//!
//! let signature = keypair.private_key().sign(&message, &Sha256Digester).unwrap();
//! assert!(keypair.public_key().verify(&signature, &message, &Sha256Digester));
//! ```

pub mod bigint;
pub mod config;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod hash;
pub mod homomorphic;
pub mod keygen;
pub mod primes;
pub mod sign;

pub use config::Config;
pub use encrypt::Ciphertext;
pub use error::{PaillierError, Result};
pub use hash::{Digester, Md5Digester, Sha256Digester, Sha512Digester};
pub use keygen::{Paillier, PrivateKey, PublicKey};
pub use sign::Signature;
