//! Step costs attached to actions.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use ordered_float::OrderedFloat;

use crate::errors::{Result, SearchError};

/// The cost of performing an action.
///
/// Costs are never negative and never NaN. The [Cost::INFINITE]
/// sentinel stands for an unreachable or unmeasurable step; all
/// infinite costs compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// An action which costs nothing.
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// The standard cost for problems where every step is equal.
    pub const UNIFORM: Cost = Cost(OrderedFloat(1.0));

    /// A step which can not be measured, or is impossible.
    pub const INFINITE: Cost = Cost(OrderedFloat(f64::INFINITY));

    /// Construct a cost from a non-negative value.
    pub fn new(value: f64) -> Result<Self> {
        if value.is_nan() {
            return Err(SearchError::InvalidCost);
        }
        if value < 0.0 {
            return Err(SearchError::NegativeCost(value));
        }

        // Folds -0.0 into 0.0
        Ok(Cost(OrderedFloat(value + 0.0)))
    }

    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    /// The underlying value, which is infinite for [Cost::INFINITE].
    pub fn value(&self) -> f64 {
        self.0.into_inner()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, other: Cost) -> Cost {
        Cost(self.0 + other.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |total, c| total + c)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.value())
        } else {
            write!(f, "∞")
        }
    }
}
