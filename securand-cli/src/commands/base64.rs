use tracing::debug;

use securand_core::backend::SystemRandom;
use securand_core::token::base64_token;

/// Generate a base64 token backed by `len` random bytes.
pub fn run_base64(len: usize) -> Result<(), Box<dyn std::error::Error>> {
    let token = base64_token(&SystemRandom, len)?;
    debug!(len, chars = token.len(), "generated base64 token");
    println!("{token}");
    Ok(())
}
