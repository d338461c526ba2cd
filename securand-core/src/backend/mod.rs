//! Entropy backend selection.
//!
//! Backend priority is fixed and total: the `getrandom` library backend
//! when compiled in (the default feature), the OS entropy character
//! device otherwise, and failure with `SourceUnavailable` when neither
//! exists. There is no silent fallback from a failing backend to a
//! weaker one.

#[cfg(feature = "getrandom")]
pub mod library;

#[cfg(unix)]
pub mod device;

use crate::error::RandomError;
use crate::traits::random::SecureRandom;

#[cfg(all(unix, not(feature = "getrandom")))]
use std::sync::OnceLock;

/// The process-wide device instance, so the availability probe result is
/// cached for the process lifetime.
#[cfg(all(unix, not(feature = "getrandom")))]
static SYSTEM_DEVICE: OnceLock<device::DeviceRandom> = OnceLock::new();

/// The default secure randomness source for this build.
///
/// Selection is resolved at compile time: with the `getrandom` feature
/// (default) all requests delegate to the OS CSPRNG via the library
/// backend; without it, unix builds read the entropy device directly and
/// other targets have no source at all.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandom for SystemRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        #[cfg(feature = "getrandom")]
        {
            library::LibraryRandom.fill_bytes(dest)
        }
        #[cfg(all(not(feature = "getrandom"), unix))]
        {
            SYSTEM_DEVICE
                .get_or_init(device::DeviceRandom::from_env)
                .fill_bytes(dest)
        }
        #[cfg(all(not(feature = "getrandom"), not(unix)))]
        {
            let _ = dest;
            Err(RandomError::SourceUnavailable)
        }
    }
}

/// Draw `len` random bytes from the default source.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, RandomError> {
    SystemRandom.random_bytes(len)
}
