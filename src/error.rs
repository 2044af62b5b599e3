//! Failures reported by the engine and the input parser

use thiserror::Error;

/// Which byte-length guard rejected a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeLimit {
    /// The input of a primality test is larger than the limit
    Test { limit: usize },
    /// The input of a next-prime search is not strictly smaller than the limit
    Search { limit: usize },
    /// A candidate produced during a next-prime search grew past the limit
    Candidate { limit: usize },
}

impl SizeLimit {
    /// The byte limit that was enforced
    pub fn limit(&self) -> usize {
        match *self {
            SizeLimit::Test { limit } | SizeLimit::Search { limit } | SizeLimit::Candidate { limit } => limit,
        }
    }
}

impl std::fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeLimit::Test { limit } => write!(f, "cannot test numbers with size > {} bytes.", limit),
            SizeLimit::Search { limit } => write!(f, "the number size should be < {} bytes", limit),
            SizeLimit::Candidate { limit } => {
                write!(f, "the size of the next prime should be <= {} bytes", limit)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    SizeLimitExceeded(SizeLimit),

    #[error("please provide a number, got {input:?}")]
    MalformedInput { input: String },
}

/// Outcome of an engine operation, either the answer or the failure message
pub type OperationResult<T> = Result<T, Error>;
