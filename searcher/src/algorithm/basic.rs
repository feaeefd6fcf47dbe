pub use bfs::bfs;
pub use dfs::dfs;

pub mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::action::Action;
    use crate::algorithm::{Frontier, UninformedSearch};
    use crate::errors::{Result, SearchError};
    use crate::solution::Solution;
    use crate::traits::Problem;

    /// First-in, first-out frontier: the shallowest action is expanded first.
    #[derive(Debug)]
    pub struct QueueFrontier<S> {
        queue: VecDeque<Action<S>>,
    }

    impl<S> Frontier for QueueFrontier<S> {
        type State = S;

        fn insert(&mut self, action: Action<S>) {
            self.queue.push_back(action);
        }

        fn remove(&mut self) -> Result<Action<S>> {
            self.queue.pop_front().ok_or(SearchError::EmptyFrontier)
        }

        fn is_empty(&self) -> bool {
            self.queue.is_empty()
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for QueueFrontier<S> {
        fn default() -> Self {
            QueueFrontier {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearch<'p, P> =
        UninformedSearch<'p, P, QueueFrontier<<P as Problem>::State>>;

    pub fn build<P>(problem: &P) -> BreadthFirstSearch<P>
    where
        P: Problem,
    {
        UninformedSearch::new(problem)
    }

    /// Breadth-first search, which finds the solution with the fewest
    /// steps. Ties are broken by the order of [Problem::successors].
    pub fn bfs<P>(problem: &P) -> Result<Option<Solution<P::State>>>
    where
        P: Problem,
    {
        Ok(build(problem).run()?.into_solution())
    }
}

pub mod dfs {
    use std::collections::{HashSet, VecDeque};
    use std::default::Default;

    use crate::action::Action;
    use crate::algorithm::{Frontier, UninformedSearch};
    use crate::errors::{Result, SearchError};
    use crate::solution::Solution;
    use crate::traits::Problem;

    /// Last-in, first-out frontier: the most recently discovered
    /// action is expanded first.
    #[derive(Debug)]
    pub struct StackFrontier<S> {
        stack: Vec<Action<S>>,
    }

    impl<S> Default for StackFrontier<S> {
        fn default() -> Self {
            StackFrontier { stack: Vec::new() }
        }
    }

    impl<S> Frontier for StackFrontier<S> {
        type State = S;

        fn insert(&mut self, action: Action<S>) {
            self.stack.push(action);
        }

        /// Pushes in reverse, so the first successor is on top.
        fn extend(&mut self, actions: Vec<Action<S>>) {
            self.stack.extend(actions.into_iter().rev());
        }

        fn remove(&mut self) -> Result<Action<S>> {
            self.stack.pop().ok_or(SearchError::EmptyFrontier)
        }

        fn is_empty(&self) -> bool {
            self.stack.is_empty()
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearch<'p, P> =
        UninformedSearch<'p, P, StackFrontier<<P as Problem>::State>>;

    pub fn build<P>(problem: &P) -> DepthFirstSearch<P>
    where
        P: Problem,
    {
        UninformedSearch::new(problem)
    }

    /// Depth-first search with an explicit stack.
    ///
    /// Like [recursive], the first successor listed by the problem is
    /// explored first. Search depth is limited only by memory, at the price
    /// of remembering a parent for every discovered action. Unlike
    /// [recursive], states are never reopened once expanded.
    pub fn dfs<P>(problem: &P) -> Result<Option<Solution<P::State>>>
    where
        P: Problem,
    {
        Ok(build(problem).run()?.into_solution())
    }

    /// Depth-first search on the native call stack.
    ///
    /// Successors are explored in the order the problem lists them and the
    /// path is kept as it is built, so no parent pointers are needed.
    /// Each step of the path costs one stack frame: deep searches (large
    /// sliding puzzles, long chains) can overflow the thread's stack, in
    /// which case use [dfs] instead.
    pub fn recursive<P>(problem: &P) -> Option<Solution<P::State>>
    where
        P: Problem,
    {
        let initial = problem.initial_state();

        let mut closed = HashSet::new();
        closed.insert(initial.clone());
        let mut path = VecDeque::new();

        visit(problem, Action::none(initial), &mut path, &mut closed);

        if path.is_empty() {
            None
        } else {
            Some(Solution::new(path.into_iter().collect()))
        }
    }

    fn visit<P>(
        problem: &P,
        current: Action<P::State>,
        path: &mut VecDeque<Action<P::State>>,
        closed: &mut HashSet<P::State>,
    ) -> bool
    where
        P: Problem,
    {
        let state = current.target().clone();
        path.push_back(current);
        closed.insert(state.clone());

        if problem.is_goal(&state) {
            return true;
        }

        for next in problem.successors(&state) {
            if !closed.contains(next.target()) && visit(problem, next, path, closed) {
                return true;
            }
        }

        // Dead end, backtrack.
        closed.remove(&state);
        path.pop_back();
        false
    }
}
