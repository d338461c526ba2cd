//! Stateless text encodings over fresh random bytes.

use base64::prelude::{Engine, BASE64_STANDARD};

use crate::error::RandomError;
use crate::traits::random::SecureRandom;

/// Draw `len` random bytes and return them as lowercase hex (`2 * len`
/// characters). Backend failures propagate unchanged.
pub fn hex_token(rng: &dyn SecureRandom, len: usize) -> Result<String, RandomError> {
    Ok(hex::encode(rng.random_bytes(len)?))
}

/// Draw `len` random bytes and return them as standard base64: one
/// contiguous line, padding retained. Backend failures propagate unchanged.
pub fn base64_token(rng: &dyn SecureRandom, len: usize) -> Result<String, RandomError> {
    Ok(BASE64_STANDARD.encode(rng.random_bytes(len)?))
}
