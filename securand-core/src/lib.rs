//! Thin abstraction over platform-supplied cryptographically secure randomness.
//!
//! Callers that need unpredictable values (tokens, session identifiers,
//! nonces) get raw bytes, hex/base64 tokens, unbiased bounded integers,
//! and uniform floats. The only entropy sources used are the OS CSPRNG
//! (via `getrandom`, the default) and the OS entropy character device;
//! no PRNG is implemented here and no weaker source is ever substituted
//! on failure.

pub mod error;
pub mod constants;
pub mod traits;
pub mod backend;
pub mod token;
pub mod sample;
