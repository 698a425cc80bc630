use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroizing;

use crate::common::error::{EncodingError, Result};

/// Modulus size used when none is configured
pub const DEFAULT_BIT_SIZE: usize = 4096;

/// Smallest modulus the generator accepts
pub const MIN_BIT_SIZE: usize = 512;

/// Largest modulus that passes key validation
pub const MAX_BIT_SIZE: usize = 4096;

/// Configuration for a key pair build
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPairConfig {
    pub bit_size: usize,
}

impl Default for KeyPairConfig {
    fn default() -> Self {
        Self {
            bit_size: DEFAULT_BIT_SIZE,
        }
    }
}

/// Encoded output of a single build.
///
/// Both fields are derived from the same RSA key. The private key buffer is
/// wiped when the value is dropped.
#[derive(Clone)]
pub struct EncodedKeyPair {
    private_key_pem: Zeroizing<Vec<u8>>,
    public_key_authorized: Vec<u8>,
}

impl EncodedKeyPair {
    pub(crate) fn new(private_key_pem: Zeroizing<Vec<u8>>, public_key_authorized: Vec<u8>) -> Self {
        Self {
            private_key_pem,
            public_key_authorized,
        }
    }

    /// `ssh-rsa <base64>\n`
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.public_key_authorized
    }

    /// PKCS#1 PEM with the `RSA PRIVATE KEY` label
    pub fn private_key_bytes(&self) -> &[u8] {
        &self.private_key_pem
    }

    /// The public key line as text
    pub fn public_key_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.public_key_authorized).map_err(|e| EncodingError::Utf8(e).into())
    }

    /// The private key PEM as text
    pub fn private_key_str(&self) -> Result<&str> {
        std::str::from_utf8(&self.private_key_pem).map_err(|e| EncodingError::Utf8(e).into())
    }
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("private_key_pem", &"[REDACTED]")
            .field("public_key_authorized", &String::from_utf8_lossy(&self.public_key_authorized))
            .finish()
    }
}
