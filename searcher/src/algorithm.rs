//! Provides the building blocks for uninformed search algorithms

use std::collections::{HashMap, HashSet};
use std::default::Default;

use log::{debug, trace};

use crate::action::Action;
use crate::errors::{Result, SearchError};
use crate::solution::Solution;
use crate::traits::Problem;

pub(crate) mod basic;
pub(crate) mod strategy;

/// Trait used to implement the frontier of a search: the actions
/// which have been discovered but not yet expanded.
///
/// The order in which [Frontier::remove] hands back actions is what
/// distinguishes one uninformed search from another.
pub trait Frontier: Default {
    type State;

    fn insert(&mut self, action: Action<Self::State>);

    /// Insert the successors of a single state, in the order the problem
    /// listed them.
    fn extend(&mut self, actions: Vec<Action<Self::State>>) {
        for action in actions {
            self.insert(action);
        }
    }

    /// Take the next action to expand.
    ///
    /// Fails with [crate::SearchError::EmptyFrontier] when nothing is pending.
    fn remove(&mut self) -> Result<Action<Self::State>>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

type Parents<S> = HashMap<Action<S>, Action<S>>;

/// Everything a single search run leaves behind.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    solution: Option<Solution<S>>,
    closed: HashSet<S>,
    expanded: usize,
}

impl<S> SearchOutcome<S> {
    pub fn solution(&self) -> Option<&Solution<S>> {
        self.solution.as_ref()
    }

    pub fn into_solution(self) -> Option<Solution<S>> {
        self.solution
    }

    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// States which were expanded before the search stopped.
    pub fn closed(&self) -> &HashSet<S> {
        &self.closed
    }

    /// Number of actions removed from the frontier.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Implementation of uninformed search, using a generic frontier.
///
/// The frontier (F) decides the order of expansion, so the same
/// machinery drives both breadth-first and depth-first search.
/// A search is consumed by [UninformedSearch::run], so each frontier
/// serves exactly one run.
#[derive(Debug)]
pub struct UninformedSearch<'p, P, F>
where
    P: Problem,
    F: Frontier<State = P::State>,
{
    problem: &'p P,
    frontier: F,
    closed: HashSet<P::State>,
    parents: Parents<P::State>,
    expanded: usize,
}

impl<'p, P, F> UninformedSearch<'p, P, F>
where
    P: Problem,
    F: Frontier<State = P::State>,
{
    pub fn new(problem: &'p P) -> Self {
        Self::start(problem, F::default())
    }

    /// Search using a caller-supplied frontier.
    ///
    /// Fails with [SearchError::FrontierNotEmpty] unless the frontier is
    /// empty: every search begins with only the initial no-op pending.
    pub fn with_frontier(problem: &'p P, frontier: F) -> Result<Self> {
        if !frontier.is_empty() {
            return Err(SearchError::FrontierNotEmpty(frontier.len()));
        }
        Ok(Self::start(problem, frontier))
    }

    fn start(problem: &'p P, frontier: F) -> Self {
        let initial = problem.initial_state();

        let mut search = UninformedSearch {
            problem,
            frontier,
            closed: HashSet::new(),
            parents: HashMap::new(),
            expanded: 0,
        };
        search.closed.insert(initial.clone());
        search.frontier.insert(Action::none(initial));
        search
    }

    /// Expand a single action, returning it if it reached the goal.
    fn expand(&mut self, current: Action<P::State>) -> Option<Action<P::State>> {
        self.expanded += 1;
        let state = current.target();
        self.closed.insert(state.clone());

        if self.problem.is_goal(state) {
            return Some(current);
        }

        let closed = &self.closed;
        let fresh: Vec<_> = self
            .problem
            .successors(state)
            .into_iter()
            .filter(|next| !closed.contains(next.target()))
            .collect();

        // The first state to discover an action keeps it.
        for next in &fresh {
            self.parents
                .entry(next.clone())
                .or_insert_with(|| current.clone());
        }
        self.frontier.extend(fresh);
        None
    }

    /// Run the search to completion.
    ///
    /// Returns an outcome without a solution when the frontier
    /// is exhausted before any goal is reached.
    pub fn run(mut self) -> Result<SearchOutcome<P::State>> {
        debug!("Searching from {:?}", self.problem.initial_state());

        let mut goal = None;
        while !self.frontier.is_empty() {
            let current = self.frontier.remove()?;

            if let Some(found) = self.expand(current) {
                goal = Some(found);
                break;
            }

            if self.expanded % 10_000 == 0 {
                trace!(
                    "F{} C{} {}",
                    self.frontier.len(),
                    self.closed.len(),
                    self.expanded
                );
            }
        }

        let solution = goal.map(|g| reconstruct(&self.parents, g));
        debug!(
            "Search finished after {} expansions, solved: {}",
            self.expanded,
            solution.is_some()
        );

        Ok(SearchOutcome {
            solution,
            closed: self.closed,
            expanded: self.expanded,
        })
    }
}

/// Walk the parent pointers back from the goal to the
/// initial no-op, then flip them into start-to-goal order.
fn reconstruct<S>(parents: &Parents<S>, goal: Action<S>) -> Solution<S>
where
    S: Clone + Eq + std::hash::Hash,
{
    let mut actions = Vec::new();
    let mut parent = parents.get(&goal).cloned();
    actions.push(goal);

    while let Some(action) = parent {
        parent = parents.get(&action).cloned();
        actions.push(action);
    }

    actions.reverse();
    Solution::new(actions)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cost::Cost;

    #[test]
    fn reconstruct_follows_parents() {
        let start = Action::none(0);
        let one = Action::new("inc", 1, Cost::UNIFORM);
        let two = Action::new("inc", 2, Cost::UNIFORM);

        let mut parents = Parents::new();
        parents.insert(one.clone(), start.clone());
        parents.insert(two.clone(), one.clone());

        let solution = reconstruct(&parents, two.clone());
        assert_eq!(solution.actions(), &[start, one, two]);
    }

    #[test]
    fn reconstruct_without_parents() {
        let solution = reconstruct(&Parents::new(), Action::none(5));
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.goal(), &5);
    }
}
