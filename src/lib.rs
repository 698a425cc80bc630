//! RSA key pair generation with PEM (PKCS#1) and SSH authorized-key encodings.
//!
//! ```no_run
//! use sshkeygen::KeyPairBuilder;
//!
//! let keys = KeyPairBuilder::new().bit_size(4096).build()?;
//! print!("{}", keys.public_key_str()?);
//! # Ok::<(), sshkeygen::Error>(())
//! ```

pub mod builder;
pub mod common;
pub mod test_utils;

pub use builder::KeyPairBuilder;
pub use common::error::{EncodingError, Error, KeyGenerationError, Result};
pub use common::types::{EncodedKeyPair, KeyPairConfig, DEFAULT_BIT_SIZE, MAX_BIT_SIZE, MIN_BIT_SIZE};
