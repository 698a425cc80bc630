pub mod error;
pub mod keygen;
pub mod private_key;
pub mod public_key;
pub mod types;
