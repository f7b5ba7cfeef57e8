use thiserror::Error;

/// Main error type for the ISO 4217 header generator.
#[derive(Error, Debug)]
pub enum Iso4217Error {
    /// The input code sequence violates the domain invariants
    /// (element above 999, or not strictly ascending).
    #[error("Invalid code domain: {0}")]
    InvalidDomain(String),
    /// An I/O error occurred while writing the generated header
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for generation operations.
pub type Result<T> = std::result::Result<T, Iso4217Error>;
