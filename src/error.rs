use thiserror::Error;

/// Error taxonomy for the Paillier core.
///
/// `verify` never raises one of these — a malformed signature is reported
/// as `false`, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaillierError {
    #[error("plaintext at index {index} is not in [0, n)")]
    MessageOutOfRange { index: usize },

    #[error("ciphertext at index {index} is not in [0, n^2)")]
    CiphertextOutOfRange { index: usize },

    #[error("no modular inverse exists: gcd(a, m) != 1")]
    InverseDoesNotExist,

    #[error("signature generation failed: an intermediate modular inverse does not exist")]
    SignatureKeyInvalid,

    #[error("key generation exhausted its retry budget ({tries} tries) while {stage}")]
    KeygenExhausted { stage: &'static str, tries: u32 },
}

pub type Result<T> = std::result::Result<T, PaillierError>;
