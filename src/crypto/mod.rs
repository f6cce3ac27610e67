pub mod random;

pub use random::{
    HashChainSource, OsSecureRandom, ReaderSource, SecureByteSource, SourceError,
    OS_SECURE_RANDOM,
};
