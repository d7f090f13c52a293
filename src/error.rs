/// Errors raised while configuring an experiment or sampling a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum EulerError {
    /// Rejected parameters. Raised when an experiment is created,
    /// or when a sequence is requested from a start stimulus that
    /// does not exist.
    InvalidConfiguration(String),
    /// The graph is not balanced and connected, or a sampler ran out
    /// of edges. Always a bug in graph construction, never retried.
    GraphInvariantViolation(String),
}

impl std::fmt::Display for EulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration(s) => write!(f, "invalid configuration: {}", s),
            Self::GraphInvariantViolation(s) => write!(f, "graph invariant violation: {}", s),
        }
    }
}

impl std::error::Error for EulerError {}
