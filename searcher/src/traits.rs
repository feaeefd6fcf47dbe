use std::fmt::Debug;
use std::hash::Hash;

use crate::action::Action;

/// Provides the definition of a problem to be solved by search.
///
/// A problem is made up of a starting state, a successor function
/// which lists the actions available from any state, and a goal test.
/// A solution is a sequence of actions leading from the initial state
/// to a state which passes the goal test.
///
/// Neither [Problem::successors] nor [Problem::is_goal] may have side
/// effects: searches call them as often as they like, in any order.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;

    /// The state the search begins from.
    fn initial_state(&self) -> Self::State;

    /// All actions which may be taken from this state, each carrying the
    /// state it leads to and the cost of the step.
    ///
    /// Order matters for depth-first search, which follows the first
    /// action before any of the others.
    fn successors(&self, state: &Self::State) -> Vec<Action<Self::State>>;

    /// Is this state an acceptable solution?
    fn is_goal(&self, state: &Self::State) -> bool;
}
