//! Selecting a search algorithm at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::basic::{bfs, dfs};
use crate::errors::Result;
use crate::solution::Solution;
use crate::traits::Problem;

/// The uninformed search algorithms on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    DepthFirstRecursive,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::DepthFirstRecursive,
    ];

    /// Short name, as accepted by [Strategy::from_str].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::DepthFirstRecursive => "dfs-recursive",
        }
    }

    /// Does this strategy recurse on the native call stack?
    pub fn is_recursive(self) -> bool {
        matches!(self, Strategy::DepthFirstRecursive)
    }

    pub fn solve<P>(self, problem: &P) -> Result<Option<Solution<P::State>>>
    where
        P: Problem,
    {
        match self {
            Strategy::BreadthFirst => bfs::bfs(problem),
            Strategy::DepthFirst => dfs::dfs(problem),
            Strategy::DepthFirstRecursive => Ok(dfs::recursive(problem)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::BreadthFirst => "Breadth-first search",
            Strategy::DepthFirst => "Depth-first search",
            Strategy::DepthFirstRecursive => "Depth-first search (recursive)",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown search strategy: {0}")]
pub struct UnknownStrategy(String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Strategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == name)
            .ok_or(UnknownStrategy(name))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Action, Cost};

    #[derive(Debug)]
    struct Countdown(u32);

    impl Problem for Countdown {
        type State = u32;

        fn initial_state(&self) -> u32 {
            self.0
        }

        fn successors(&self, state: &u32) -> Vec<Action<u32>> {
            if *state == 0 {
                vec![]
            } else {
                vec![Action::new("tick", state - 1, Cost::UNIFORM)]
            }
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == 0
        }
    }

    #[test]
    fn parse() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!(" DFS ".parse::<Strategy>(), Ok(Strategy::DepthFirst));
        assert_eq!(
            "dfs-recursive".parse::<Strategy>(),
            Ok(Strategy::DepthFirstRecursive)
        );
        assert_eq!(
            "astar".parse::<Strategy>(),
            Err(UnknownStrategy("astar".to_string()))
        );

        for strategy in Strategy::ALL.iter() {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(*strategy));
        }
    }

    #[test]
    fn every_strategy_solves() {
        for strategy in Strategy::ALL.iter() {
            let solution = strategy.solve(&Countdown(4)).unwrap().unwrap();
            assert_eq!(solution.steps(), 4, "{}", strategy);
            assert_eq!(solution.goal(), &0);
        }
    }

    #[test]
    fn recursion() {
        assert!(Strategy::DepthFirstRecursive.is_recursive());
        assert!(!Strategy::DepthFirst.is_recursive());
    }
}
