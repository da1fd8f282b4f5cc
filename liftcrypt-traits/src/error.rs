use thiserror::Error;

/// Errors that can arise when setting up a cryptosystem, encrypting or decrypting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The plaintext lies outside of the message space `[0, bound)`.
    #[error("plaintext {value} is outside of the message space [0, {bound})")]
    InvalidPlaintext {
        /// The rejected plaintext.
        value: u64,
        /// Exclusive upper bound of the message space.
        bound: u64,
    },

    /// The decrypted group element does not encode any plaintext below `bound`. This happens
    /// for a wrong key, a corrupted ciphertext or a homomorphic sum that overflowed.
    #[error("decryption failed: no plaintext below {bound} matches the recovered element")]
    DecryptionFailed {
        /// Exclusive upper bound of the searched message space.
        bound: u64,
    },

    /// Bytes that do not encode a valid group element.
    #[error("malformed group element encoding")]
    MalformedPoint,

    /// The requested security level cannot be met by the underlying group.
    #[error("unsupported security level: {0}")]
    UnsupportedSecurity(String),

    /// The cryptosystem parameters are inconsistent.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
