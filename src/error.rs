use thiserror::Error;

/// Errors raised by the fallible entry points of the crate.
///
/// The metric functions themselves are total over their inputs and return
/// plain values. Errors only come from the dispatch layer, from custom
/// [`CostRule`](crate::wagner_fischer::CostRule) implementations and from the
/// string projection used by the compression based distances.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqSimError {
    #[error("at least two sequences are needed for computation, got {0}")]
    TooFewSequences(usize),

    #[error("unknown or unsupported method `{0}`")]
    UnknownMethod(String),

    #[error("cost rule produced no candidate costs for cell ({row}, {col})")]
    NoCostCandidates { row: usize, col: usize },

    #[error("seed matrix has shape {found:?}, expected {expected:?}")]
    SeedMatrixShape {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("sequences hold {found} distinct elements, the string projection supports at most {limit}")]
    DomainLimitExceeded { found: usize, limit: usize },
}

impl SeqSimError {
    /// Whether the error was caused by an invalid argument supplied by the caller
    /// (as opposed to an input exceeding a supported domain).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SeqSimError::DomainLimitExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, SeqSimError>;
