use thiserror::Error;

/// Error type for loc2gene operations.
#[derive(Debug, Error)]
pub enum Loc2GeneError {
    /// A reference locus line carried fewer than the 7 required fields.
    #[error("malformed locus line (expected at least 7 fields, found {found}): {line}")]
    MalformedLocus {
        /// The offending line, verbatim.
        line: String,
        /// Number of tab-separated fields actually present.
        found: usize,
    },
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for loc2gene operations.
pub type Result<T> = std::result::Result<T, Loc2GeneError>;
