use tracing::debug;

use securand_core::backend::SystemRandom;
use securand_core::traits::random::SecureRandom;

/// Generate `len` raw random bytes and print them as lowercase hex.
pub fn run_bytes(len: usize) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = SystemRandom.random_bytes(len)?;
    debug!(len, "generated random bytes");
    println!("{}", hex::encode(bytes));
    Ok(())
}
