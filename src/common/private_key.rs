use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

use crate::common::error::EncodingError;

/// Encodes the private key as PKCS#1 DER wrapped in `RSA PRIVATE KEY` PEM armor
pub fn encode_private_pem(private_key: &RsaPrivateKey) -> Result<Zeroizing<Vec<u8>>, EncodingError> {
    let pem = private_key.to_pkcs1_pem(LineEnding::LF)?;
    Ok(Zeroizing::new(pem.as_bytes().to_vec()))
}
