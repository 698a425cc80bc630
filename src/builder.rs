use rsa::rand_core::CryptoRngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::time::Instant;

use crate::common::error::Result;
use crate::common::keygen::{generate_private_key, generate_with_rng};
use crate::common::private_key::encode_private_pem;
use crate::common::public_key::encode_public_authorized;
use crate::common::types::{EncodedKeyPair, KeyPairConfig};

/// Configures and builds an encoded RSA key pair.
///
/// A new builder is already usable with the default configuration (4096 bits).
/// Every call to [`build`](Self::build) generates a fresh, independent key.
#[derive(Clone, Debug, Default)]
pub struct KeyPairBuilder {
    config: KeyPairConfig,
}

impl KeyPairBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeyPairConfig) -> Self {
        Self { config }
    }

    /// Sets the modulus size in bits
    pub fn bit_size(mut self, bit_size: usize) -> Self {
        self.config.bit_size = bit_size;
        self
    }

    pub fn config(&self) -> &KeyPairConfig {
        &self.config
    }

    /// Generates a key from the OS random source and encodes both halves
    pub fn build(&self) -> Result<EncodedKeyPair> {
        let started = Instant::now();
        let private_key = generate_private_key(self.config.bit_size)?;
        self.encode(&private_key, started)
    }

    /// Like [`build`](Self::build), drawing randomness from `rng`
    pub fn build_with_rng<R: CryptoRngCore + ?Sized>(&self, rng: &mut R) -> Result<EncodedKeyPair> {
        let started = Instant::now();
        let private_key = generate_with_rng(rng, self.config.bit_size)?;
        self.encode(&private_key, started)
    }

    fn encode(&self, private_key: &RsaPrivateKey, started: Instant) -> Result<EncodedKeyPair> {
        let private_key_pem = encode_private_pem(private_key)?;
        let public_key_authorized = encode_public_authorized(&RsaPublicKey::from(private_key))?;

        tracing::info!(
            bit_size = self.config.bit_size,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built rsa key pair"
        );

        Ok(EncodedKeyPair::new(private_key_pem, public_key_authorized))
    }
}
