use tracing::debug;

use securand_core::backend::SystemRandom;
use securand_core::token::hex_token;

/// Generate a hex token backed by `len` random bytes.
pub fn run_hex(len: usize) -> Result<(), Box<dyn std::error::Error>> {
    let token = hex_token(&SystemRandom, len)?;
    debug!(len, chars = token.len(), "generated hex token");
    println!("{token}");
    Ok(())
}
