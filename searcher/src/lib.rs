//! Generalized uninformed search algorithms.
//!
//! To use these search algorithms, implement the trait [Problem],
//! which provides an initial state, the actions available from any
//! state, and a goal test. Then hand the problem to [bfs], [dfs]
//! or [dfs::recursive], or pick one at runtime with [Strategy].

mod action;
pub mod algorithm;
mod cost;
mod errors;
pub mod graph;
mod solution;
mod traits;

pub use action::Action;
pub use action::NO_ACTION;
pub use cost::Cost;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use solution::Solution;
pub use traits::Problem;

pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::strategy::{Strategy, UnknownStrategy};
pub use algorithm::{Frontier, SearchOutcome, UninformedSearch};
