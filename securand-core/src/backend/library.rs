use crate::error::RandomError;
use crate::traits::random::SecureRandom;

/// Library-backed secure randomness using the OS CSPRNG via `getrandom`.
///
/// This backend never touches the entropy-device probe cache; its
/// failures are its own and are surfaced unmodified.
pub struct LibraryRandom;

impl SecureRandom for LibraryRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        getrandom::getrandom(dest)
            .map_err(|e| RandomError::Io(format!("getrandom failed: {e}")))
    }
}
