// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Iterators over nodes and edges in a `FacilityGraph`.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use crate::{Edge, FacilityGraph, Node};

use super::edge_key;

/// An iterator over the nodes in a `FacilityGraph`.
pub struct Nodes<'a, N>
where
    N: Node,
{
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<N>>,
}

impl<'a, N> Iterator for Nodes<'a, N>
where
    N: Node,
{
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the edges in a `FacilityGraph`.
pub struct Edges<'a, N, E>
where
    N: Node,
    E: Edge,
{
    pub(crate) fg: &'a FacilityGraph<N, E>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<u64>>,
}

impl<'a, N, E> Iterator for Edges<'a, N, E>
where
    N: Node,
    E: Edge,
{
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .and_then(|e| self.fg.edges.get(&edge_key(e.source(), e.target())))
    }
}

/// An iterator over the neighbors of a node in a `FacilityGraph`, together
/// with the weight of the connecting edge.
pub struct Neighbors<'a, N>
where
    N: Node,
{
    pub(crate) graph: &'a UnGraph<N, u64>,
    pub(crate) node: NodeIndex,
    pub(crate) iter: petgraph::graph::Edges<'a, u64, Undirected>,
}

impl<'a, N> Iterator for Neighbors<'a, N>
where
    N: Node,
{
    type Item = (&'a N, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|e| {
            let other = if e.source() == self.node {
                e.target()
            } else {
                e.source()
            };
            (&self.graph[other], *e.weight())
        })
    }
}
