use rsa::RsaPublicKey;
use ssh_key::public::{KeyData, RsaPublicKey as SshRsaPublicKey};
use ssh_key::PublicKey;

use crate::common::error::EncodingError;

/// Encodes the public key as an `authorized_keys` line: `ssh-rsa <base64>\n`
pub fn encode_public_authorized(public_key: &RsaPublicKey) -> Result<Vec<u8>, EncodingError> {
    let key_data = KeyData::Rsa(SshRsaPublicKey::try_from(public_key)?);

    // No comment, so the line is just the algorithm and the blob
    let line = PublicKey::new(key_data, "").to_openssh()?;

    let mut bytes = line.into_bytes();
    bytes.push(b'\n');
    Ok(bytes)
}
