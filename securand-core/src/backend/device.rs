use std::env;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Read};
use std::os::unix::fs::{FileTypeExt, OpenOptionsExt};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::constants::{ENTROPY_DEVICE_ENV, ENTROPY_DEVICE_PATH};
use crate::error::RandomError;
use crate::traits::random::SecureRandom;

/// Device availability has not been probed yet.
const PROBE_UNKNOWN: u8 = 0;
/// A full read from the device has succeeded at least once.
const PROBE_AVAILABLE: u8 = 1;
/// The device is absent or not a character device; no further I/O is attempted.
const PROBE_UNAVAILABLE: u8 = 2;

/// Secure randomness read directly from the OS entropy character device.
///
/// The device is opened read-only and non-blocking, without following
/// symlinks and without becoming a controlling terminal, and the handle
/// lives only for the duration of one `fill_bytes` call. Anything at the
/// configured path that is not a character device is refused: a regular
/// file substituted there could feed predictable bytes.
///
/// A negative probe (absent device, wrong file type) is cached and makes
/// every later call fail fast without touching the filesystem. A short
/// read is an anomaly of the current call only and does not cache.
pub struct DeviceRandom {
    path: PathBuf,
    state: AtomicU8,
}

impl DeviceRandom {
    /// Device at the conventional path.
    pub fn new() -> Self {
        Self::with_path(ENTROPY_DEVICE_PATH)
    }

    /// Device at an explicit path (the path is configuration, not contract).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: AtomicU8::new(PROBE_UNKNOWN),
        }
    }

    /// Device path from the `SECURAND_DEVICE` environment variable,
    /// falling back to the conventional path.
    pub fn from_env() -> Self {
        let path = env::var(ENTROPY_DEVICE_ENV)
            .unwrap_or_else(|_| ENTROPY_DEVICE_PATH.to_string());
        Self::with_path(path)
    }

    /// Record a permanent negative probe. Only the first transition out
    /// of Unknown wins, so racing probers converge on one final state.
    fn mark_unavailable(&self) {
        let _ = self.state.compare_exchange(
            PROBE_UNKNOWN,
            PROBE_UNAVAILABLE,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    fn mark_available(&self) {
        let _ = self.state.compare_exchange(
            PROBE_UNKNOWN,
            PROBE_AVAILABLE,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}

impl Default for DeviceRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureRandom for DeviceRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        if self.state.load(Ordering::Acquire) == PROBE_UNAVAILABLE {
            return Err(RandomError::SourceUnavailable);
        }

        let mut file = match OpenOptions::new()
            .read(true)
            .custom_flags(libc::O_NONBLOCK | libc::O_NOCTTY | libc::O_NOFOLLOW)
            .open(&self.path)
        {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.mark_unavailable();
                return Err(RandomError::SourceUnavailable);
            }
            Err(e) => return Err(RandomError::Io(e.to_string())),
        };

        let meta = file.metadata().map_err(|e| RandomError::Io(e.to_string()))?;
        if !meta.file_type().is_char_device() {
            // Same treatment as an absent device: refuse and remember.
            self.mark_unavailable();
            return Err(RandomError::SourceUnavailable);
        }

        // One read, full length or failure. No retry on short reads.
        let got = file.read(dest).map_err(|e| RandomError::Io(e.to_string()))?;
        if got < dest.len() {
            return Err(RandomError::ShortRead {
                expected: dest.len(),
                got,
            });
        }

        self.mark_available();
        Ok(())
    }
}
