use std::path::PathBuf;

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// Ledger file does not exist.
    #[error("ledger file not found: {0}")]
    Missing(PathBuf),

    /// Amount rejected on append (must be positive).
    #[error("invalid amount: {0}")]
    InvalidAmount(f32),

    /// Underlying I/O failure.
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
}
