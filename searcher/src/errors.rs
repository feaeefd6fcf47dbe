use thiserror::Error;

/// Error produced when a search is misused.
///
/// Failing to find a solution is not an error: searches
/// report that as `Ok(None)`.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("Cannot remove an action from an empty frontier")]
    EmptyFrontier,

    #[error("A search must start from an empty frontier, not one holding {0} actions")]
    FrontierNotEmpty(usize),

    #[error("Cost can not be negative: {0}")]
    NegativeCost(f64),

    #[error("Cost must be a number")]
    InvalidCost,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
