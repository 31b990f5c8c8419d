use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied without any candidate passing the goal test.
    /// Not a fault: this is the normal terminal outcome for a search
    /// space with no reachable goal. Carries the number of candidates
    /// expanded before the frontier ran dry.
    #[error("frontier exhausted after {0} expansions with no goal found")]
    Exhausted(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
