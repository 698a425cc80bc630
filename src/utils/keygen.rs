use sshkeygen::{KeyPairBuilder, DEFAULT_BIT_SIZE};
use tracing_subscriber::EnvFilter;

fn parse_bit_size(arg: Option<String>) -> Result<usize, Box<dyn std::error::Error>> {
    match arg {
        Some(arg) => arg
            .parse()
            .map_err(|e| format!("invalid bit size {:?}: {}", arg, e).into()),
        None => Ok(DEFAULT_BIT_SIZE),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout holds only the key
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Get the bit size from command line arguments or use default
    let bit_size = parse_bit_size(std::env::args().nth(1))?;

    // Generate a new RSA key pair
    let keys = KeyPairBuilder::new().bit_size(bit_size).build()?;

    print!("{}", keys.public_key_str()?);
    Ok(())
}
