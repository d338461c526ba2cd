//! Abstraction seams: randomness sources are injected so callers and
//! tests control where entropy comes from.

pub mod random;
