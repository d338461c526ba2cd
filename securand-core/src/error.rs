use thiserror::Error;

#[derive(Error, Debug)]
pub enum RandomError {
    #[error("no secure random source available")]
    SourceUnavailable,

    #[error("entropy device returned {got} bytes, expected {expected}")]
    ShortRead { expected: usize, got: usize },

    #[error("sampling bound must be positive, got {0}")]
    InvalidBound(u64),

    #[error("entropy device I/O error: {0}")]
    Io(String),

    #[error("rejection sampler made {0} draws without accepting; entropy source is suspect")]
    SamplerExhausted(u32),
}

pub type Result<T> = std::result::Result<T, RandomError>;
