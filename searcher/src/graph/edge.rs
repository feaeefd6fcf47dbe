use crate::cost::Cost;

/// A directed connection to a neighbouring vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<N> {
    pub(crate) destination: N,
    pub(crate) cost: Cost,
}

impl<N> Edge<N> {
    pub fn new(destination: N, cost: Cost) -> Self {
        Edge { destination, cost }
    }

    pub fn destination(&self) -> &N {
        &self.destination
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }
}
