use rand::rngs::OsRng;
use rsa::rand_core::CryptoRngCore;
use rsa::RsaPrivateKey;

use crate::common::error::KeyGenerationError;
use crate::common::types::{MAX_BIT_SIZE, MIN_BIT_SIZE};

/// Generates and validates an RSA private key using the OS random source
pub fn generate_private_key(bit_size: usize) -> Result<RsaPrivateKey, KeyGenerationError> {
    generate_with_rng(&mut OsRng, bit_size)
}

/// Generates and validates an RSA private key using the given CSPRNG
pub fn generate_with_rng<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<RsaPrivateKey, KeyGenerationError> {
    check_bit_size(bit_size)?;
    tracing::debug!(bit_size, "generating rsa private key");

    let private_key = RsaPrivateKey::new(rng, bit_size).map_err(KeyGenerationError::Rsa)?;

    // Validate the factors and exponents agree with each other
    private_key.validate().map_err(KeyGenerationError::Validation)?;

    Ok(private_key)
}

fn check_bit_size(bits: usize) -> Result<(), KeyGenerationError> {
    if bits < MIN_BIT_SIZE {
        tracing::warn!(bits, min = MIN_BIT_SIZE, "rejecting rsa bit size");
        return Err(KeyGenerationError::BitSizeTooSmall {
            bits,
            min: MIN_BIT_SIZE,
        });
    }
    if bits > MAX_BIT_SIZE {
        tracing::warn!(bits, max = MAX_BIT_SIZE, "rejecting rsa bit size");
        return Err(KeyGenerationError::BitSizeTooLarge {
            bits,
            max: MAX_BIT_SIZE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rsa::traits::PublicKeyParts;
    use rsa::BigUint;

    #[test]
    fn test_generate_512() -> Result<(), Box<dyn std::error::Error>> {
        let key = generate_private_key(512)?;

        assert_eq!(key.n().bits(), 512);
        assert_eq!(key.e(), &BigUint::from(65537u32));
        key.validate()?;
        Ok(())
    }

    #[test]
    fn test_zero_bit_size() {
        assert_matches!(
            generate_private_key(0),
            Err(KeyGenerationError::BitSizeTooSmall { bits: 0, min: 512 })
        );
    }

    #[test]
    fn test_bit_size_bounds() {
        assert_matches!(
            generate_private_key(511),
            Err(KeyGenerationError::BitSizeTooSmall { .. })
        );
        assert_matches!(
            generate_private_key(8192),
            Err(KeyGenerationError::BitSizeTooLarge { bits: 8192, max: 4096 })
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() -> Result<(), Box<dyn std::error::Error>> {
        let first = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(7), 1024)?;
        let second = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(7), 1024)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_successive_keys_differ() -> Result<(), Box<dyn std::error::Error>> {
        let first = generate_private_key(1024)?;
        let second = generate_private_key(1024)?;

        assert_ne!(first.n(), second.n());
        Ok(())
    }
}
