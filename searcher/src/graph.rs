//! Weighted graphs, as adjacency lists.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::cost::Cost;

mod edge;

pub use edge::Edge;

type Nodes<N> = HashMap<N, Vec<Edge<N>>>;

#[derive(Debug)]
pub struct GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    nodes: Nodes<N>,
}

impl<N> Default for GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Add a vertex without any connections. Existing vertices
    /// are left alone.
    pub fn add_vertex(&mut self, node: N) -> &mut Self {
        self.nodes.entry(node).or_insert_with(Vec::new);
        self
    }

    /// Connect origin to destination, in that direction only.
    ///
    /// Loops back to the same vertex are ignored. Connecting a pair a second
    /// time replaces the cost, but keeps the original position among the
    /// neighbours of origin.
    pub fn insert(&mut self, origin: N, destination: N, cost: Cost) -> bool {
        if origin == destination {
            return false;
        }

        self.add_vertex(destination.clone());
        let connections = self.nodes.entry(origin).or_insert_with(Vec::new);

        match connections.iter_mut().find(|e| e.destination == destination) {
            Some(edge) => edge.cost = cost,
            None => connections.push(Edge::new(destination, cost)),
        }
        true
    }

    /// Connect a pair of vertices in both directions with equal cost.
    pub fn insert_bidirectional(&mut self, one: N, other: N, cost: Cost) -> bool {
        self.insert(one.clone(), other.clone(), cost) && self.insert(other, one, cost)
    }

    pub fn build(self) -> Graph<N> {
        Graph { nodes: self.nodes }
    }
}

pub fn builder<N>() -> GraphBuilder<N>
where
    N: Debug + Clone + Hash + Eq,
{
    GraphBuilder::new()
}

#[derive(Debug, Clone)]
pub struct Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    nodes: Nodes<N>,
}

impl<N> Graph<N>
where
    N: Debug + Clone + Hash + Eq,
{
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    /// The edges leaving this node, in the order they were inserted.
    ///
    /// Nodes which are not in the graph have no neighbors.
    pub fn neighbors(&self, node: &N) -> &[Edge<N>] {
        self.nodes.get(node).map(|e| e.as_slice()).unwrap_or(&[])
    }

    /// Cost of the direct connection from origin to destination, if any.
    pub fn cost_between(&self, origin: &N, destination: &N) -> Option<Cost> {
        self.neighbors(origin)
            .iter()
            .find(|e| &e.destination == destination)
            .map(|e| e.cost)
    }
}
