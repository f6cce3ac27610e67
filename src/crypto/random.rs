// Secure byte sources

use std::io::{self, Read};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised by a byte source that could not fill a buffer
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Short read: requested {requested} bytes, got {filled}")]
    ShortRead { requested: usize, filled: usize },

    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error reading entropy: {0}")]
    Io(#[from] io::Error),
}

/// A capability that fills buffers with cryptographically secure bytes.
///
/// Implementations must either fill `dest` completely or return an error;
/// a partially filled buffer is never a success. Methods take `&self` so one
/// source can back any number of generators. Sharing a source between
/// threads is sound only when the implementation is `Sync`.
pub trait SecureByteSource {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError>;
}

impl<T: SecureByteSource + ?Sized> SecureByteSource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: SecureByteSource + ?Sized> SecureByteSource for Box<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: SecureByteSource + ?Sized> SecureByteSource for Arc<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(dest)
    }
}

/// OS-based secure random source
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecureRandom {
    rng: OsRng,
}

/// The process-wide operating system source used by default.
pub static OS_SECURE_RANDOM: OsSecureRandom = OsSecureRandom::new();

impl OsSecureRandom {
    pub const fn new() -> Self {
        OsSecureRandom { rng: OsRng }
    }
}

impl SecureByteSource for OsSecureRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        // OsRng is a stateless handle, a copy reads from the same OS source
        let mut rng = self.rng;
        rng.try_fill_bytes(dest)
            .map_err(|e| SourceError::Unavailable(e.to_string()))
    }
}

/// Adapts any [`Read`] implementation into a byte source.
///
/// Useful for injecting fixed byte streams in tests or for reading an
/// entropy device directly. Reads are serialized through a mutex.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: Mutex<R>,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        ReaderSource { reader: Mutex::new(reader) }
    }

    pub fn into_inner(self) -> Result<R, SourceError> {
        self.reader
            .into_inner()
            .map_err(|_| SourceError::Unavailable("reader lock poisoned".to_string()))
    }
}

impl<R: Read> SecureByteSource for ReaderSource<R> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| SourceError::Unavailable("reader lock poisoned".to_string()))?;

        let mut filled = 0;
        while filled < dest.len() {
            match reader.read(&mut dest[filled..]) {
                Ok(0) => {
                    return Err(SourceError::ShortRead { requested: dest.len(), filled });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// Deterministic source for testing and benchmarks.
///
/// Produces `SHA-256(seed || counter)` blocks with a little-endian 64-bit
/// counter. Not secure: anyone who knows the seed knows the stream.
#[derive(Debug)]
pub struct HashChainSource {
    seed: Vec<u8>,
    counter: AtomicU64,
}

impl HashChainSource {
    pub fn new(seed: &[u8]) -> Self {
        HashChainSource { seed: seed.to_vec(), counter: AtomicU64::new(0) }
    }

    fn block(&self, counter: u64) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(&self.seed);
        hasher.update(counter.to_le_bytes());
        hasher.finalize().into()
    }
}

impl SecureByteSource for HashChainSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        for chunk in dest.chunks_mut(32) {
            let counter = self.counter.fetch_add(1, Ordering::Relaxed);
            let block = self.block(counter);
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        Ok(())
    }
}
