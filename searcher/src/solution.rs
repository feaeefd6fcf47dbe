use std::fmt;

use crate::action::Action;
use crate::cost::Cost;

/// The sequence of actions found by a search, from the initial
/// state to the goal.
///
/// The first action is always the no-op wrapping the initial state,
/// so a solution for a problem which starts at its goal holds a single
/// action and zero steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    actions: Vec<Action<S>>,
}

impl<S> Solution<S> {
    pub(crate) fn new(actions: Vec<Action<S>>) -> Self {
        debug_assert!(!actions.is_empty(), "A solution holds at least one action");
        Self { actions }
    }

    pub fn actions(&self) -> &[Action<S>] {
        &self.actions
    }

    /// Number of actions, including the leading no-op.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of actions actually taken to reach the goal.
    pub fn steps(&self) -> usize {
        self.actions.len().saturating_sub(1)
    }

    pub fn origin(&self) -> &S {
        self.actions[0].target()
    }

    pub fn goal(&self) -> &S {
        self.actions[self.actions.len() - 1].target()
    }

    /// Each state visited along the way, starting with the origin.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.actions.iter().map(|a| a.target())
    }

    pub fn iter(&self) -> std::slice::Iter<Action<S>> {
        self.actions.iter()
    }

    /// Total cost of every step.
    pub fn cost(&self) -> Cost {
        self.actions.iter().map(|a| a.cost()).sum()
    }

    pub fn into_actions(self) -> Vec<Action<S>> {
        self.actions
    }
}

impl<S> IntoIterator for Solution<S> {
    type Item = Action<S>;
    type IntoIter = std::vec::IntoIter<Action<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'s, S> IntoIterator for &'s Solution<S> {
    type Item = &'s Action<S>;
    type IntoIter = std::slice::Iter<'s, Action<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

impl<S> fmt::Display for Solution<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{}", action)?;
        }
        Ok(())
    }
}
