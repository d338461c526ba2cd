use crate::error::RandomError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill the whole buffer from a secure
/// source or fail; partial or predictable output is never returned.
pub trait SecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError>;

    /// Draw `len` fresh random bytes.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, RandomError> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf)?;
        Ok(buf)
    }
}
