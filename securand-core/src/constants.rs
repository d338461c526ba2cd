/// Default request size for tokens and raw bytes: 16 bytes (128 bits).
pub const DEFAULT_TOKEN_LEN: usize = 16;

/// Conventional path of the OS entropy character device.
pub const ENTROPY_DEVICE_PATH: &str = "/dev/urandom";

/// Environment variable overriding the entropy device path.
pub const ENTROPY_DEVICE_ENV: &str = "SECURAND_DEVICE";

/// Defensive cap on rejection-sampling draws. Acceptance probability per
/// draw always exceeds 1/2, so a healthy source never comes near this.
pub const MAX_SAMPLE_DRAWS: u32 = 1000;
