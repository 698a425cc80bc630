use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure surfaced by [`KeyPairBuilder::build`](crate::KeyPairBuilder::build).
#[derive(Debug, Error)]
pub enum Error {
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] KeyGenerationError),
    #[error("key encoding failed: {0}")]
    Encoding(#[from] EncodingError),
}

/// The RSA primitive could not produce a usable key.
#[derive(Debug, Error)]
pub enum KeyGenerationError {
    #[error("bit size {bits} is below the minimum of {min}")]
    BitSizeTooSmall { bits: usize, min: usize },
    #[error("bit size {bits} exceeds the maximum of {max}")]
    BitSizeTooLarge { bits: usize, max: usize },
    #[error("rsa: {0}")]
    Rsa(#[source] rsa::Error),
    #[error("generated key is inconsistent: {0}")]
    Validation(#[source] rsa::Error),
}

/// A generated key could not be serialized.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("pkcs#1: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),
    #[error("ssh: {0}")]
    Ssh(#[from] ssh_key::Error),
    #[error("encoded key is not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}
