use std::borrow::Cow;
use std::fmt;

use crate::cost::Cost;

/// Name given to the action which leaves a state untouched.
pub const NO_ACTION: &str = "no action performed";

/// A named transition into a target state, with the cost
/// of taking it.
///
/// Actions are compared and hashed by all three of their
/// components, so two actions which reach the same state
/// under different names or costs are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action<S> {
    name: Cow<'static, str>,
    target: S,
    cost: Cost,
}

impl<S> Action<S> {
    pub fn new<N>(name: N, target: S, cost: Cost) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Action {
            name: name.into(),
            target,
            cost,
        }
    }

    /// The action which performs nothing, and so arrives at the
    /// state it started in at zero cost. Searches start with one of these.
    pub fn none(state: S) -> Self {
        Action::new(NO_ACTION, state, Cost::ZERO)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Is this the no-op made by [Action::none]?
    ///
    /// Only the name and cost are checked, so a problem action named
    /// [NO_ACTION] with zero cost also counts as a no-op, and is displayed
    /// as one.
    pub fn is_none(&self) -> bool {
        self.name == NO_ACTION && self.cost == Cost::ZERO
    }

    pub fn into_target(self) -> S {
        self.target
    }
}

impl<S> fmt::Display for Action<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_none() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} [{:?}, {}]", self.name, self.target, self.cost)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_action() {
        let action = Action::none("Arad");
        assert_eq!(action.name(), NO_ACTION);
        assert_eq!(action.cost(), Cost::ZERO);
        assert_eq!(action.target(), &"Arad");
        assert!(action.is_none());
        assert_eq!(format!("{}", action), "no action performed");
    }

    #[test]
    fn equality_uses_every_component() {
        let go = Action::new("go", "Sibiu", Cost::new(140.0).unwrap());

        assert_eq!(go, Action::new("go", "Sibiu", Cost::new(140.0).unwrap()));
        assert_ne!(go, Action::new("go", "Sibiu", Cost::UNIFORM));
        assert_ne!(go, Action::new("drive", "Sibiu", Cost::new(140.0).unwrap()));
        assert_ne!(go, Action::new("go", "Fagaras", Cost::new(140.0).unwrap()));
        assert!(!go.is_none());
    }

    #[test]
    fn no_action_is_recognised_by_name_and_cost() {
        assert!(Action::new(NO_ACTION, 3, Cost::ZERO).is_none());
        assert!(!Action::new(NO_ACTION, 3, Cost::UNIFORM).is_none());
    }

    #[test]
    fn duplicate_no_actions_collapse() {
        let mut actions = HashSet::new();
        actions.insert(Action::none(7));
        actions.insert(Action::none(7));
        actions.insert(Action::none(8));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn display() {
        let go = Action::new(String::from("go"), "Sibiu", Cost::new(140.0).unwrap());
        assert_eq!(format!("{}", go), "go [\"Sibiu\", 140]");
    }
}
