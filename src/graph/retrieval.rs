// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Methods for retrieving nodes and edges from a [`FacilityGraph`].

use petgraph::graph::NodeIndex;

use crate::iterators::{Edges, Neighbors, Nodes};
use crate::node_role::RolePredicates;
use crate::{Edge, Error, FacilityConfig, FacilityGraph, Node};

/// `Node` and `Edge` retrieval.
impl<N, E> FacilityGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the `NodeIndex` of the node with the given `node_id`.
    pub(crate) fn index_of(&self, node_id: u64) -> Result<NodeIndex, Error> {
        self.node_indices
            .get(&node_id)
            .copied()
            .ok_or_else(|| Error::unknown_node(format!("Node with id {} not found.", node_id)))
    }

    /// Returns the node with the given `node_id`, if it exists.
    pub fn node(&self, node_id: u64) -> Result<&N, Error> {
        self.index_of(node_id).map(|i| &self.graph[i])
    }

    /// Returns true if a node with the given `node_id` exists.
    pub fn contains_node(&self, node_id: u64) -> bool {
        self.node_indices.contains_key(&node_id)
    }

    /// Returns true if an edge exists between the nodes `a` and `b`, in
    /// either direction.
    pub fn contains_edge(&self, a: u64, b: u64) -> bool {
        matches!(self.edge_weight(a, b), Ok(Some(_)))
    }

    /// Returns the weight of the edge between `a` and `b`, or `None` if the
    /// two nodes are not directly connected.
    ///
    /// Returns an error if either node does not exist.
    pub fn edge_weight(&self, a: u64, b: u64) -> Result<Option<u64>, Error> {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        Ok(self
            .graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e))
            .copied())
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the configuration the graph was created with.
    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    /// Returns an iterator over the nodes in the graph, in insertion order.
    pub fn nodes(&self) -> Nodes<'_, N> {
        Nodes {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the edges in the graph, in insertion order.
    pub fn edges(&self) -> Edges<'_, N, E> {
        Edges {
            fg: self,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the entry nodes of the facility.
    pub fn entries(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes().filter(|n| n.is_entry())
    }

    /// Returns an iterator over the exit nodes of the facility.
    pub fn exits(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes().filter(|n| n.is_exit())
    }

    /// Returns an iterator over the neighbors of the node with the given
    /// `node_id`, along with the weight of the connecting edge.
    ///
    /// Returns an error if the given `node_id` does not exist.
    pub fn neighbors(&self, node_id: u64) -> Result<Neighbors<'_, N>, Error> {
        self.index_of(node_id).map(|index| Neighbors {
            graph: &self.graph,
            node: index,
            iter: self.graph.edges(index),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestEdge, TestNode};
    use crate::{NodeRole, Position};

    fn nodes_and_edges() -> (Vec<TestNode>, Vec<TestEdge>) {
        let nodes = vec![
            TestNode::new(6, NodeRole::Slot),
            TestNode::new(1, NodeRole::Entry),
            TestNode::new(3, NodeRole::Road),
            TestNode::new(2, NodeRole::Road),
            TestNode::new(7, NodeRole::Slot),
            TestNode::new(9, NodeRole::Exit),
            TestNode::new(8, NodeRole::Entry),
        ];
        let edges = vec![
            TestEdge::new(1, 2, 1),
            TestEdge::new(3, 2, 2),
            TestEdge::new(2, 6, 1),
            TestEdge::new(3, 7, 1),
            TestEdge::new(9, 3, 5),
            TestEdge::new(8, 3, 1),
        ];

        (nodes, edges)
    }

    fn graph() -> Result<FacilityGraph<TestNode, TestEdge>, Error> {
        let (nodes, edges) = nodes_and_edges();
        FacilityGraph::try_new(nodes, edges, FacilityConfig::default())
    }

    #[test]
    fn test_node() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(graph.node(1), Ok(&TestNode::new(1, NodeRole::Entry)));
        assert_eq!(graph.node(7), Ok(&TestNode::new(7, NodeRole::Slot)));
        assert_eq!(
            graph.node(5),
            Err(Error::unknown_node("Node with id 5 not found."))
        );
        assert!(graph.contains_node(9));
        assert!(!graph.contains_node(5));

        Ok(())
    }

    #[test]
    fn test_positions_are_metadata() -> Result<(), Error> {
        let nodes = vec![
            TestNode::with_position(1, NodeRole::Entry, Position::new(100, 50)),
            TestNode::with_position(2, NodeRole::Road, Position::new(100, 50)),
            TestNode::new(3, NodeRole::Slot),
        ];
        let edges = vec![TestEdge::new(1, 2, 1), TestEdge::new(2, 3, 1)];
        let graph = FacilityGraph::try_new(nodes, edges, FacilityConfig::default())?;

        // Equal positions don't make nodes equal.
        assert_eq!(graph.node_count(), 3);
        let entry = graph.node(1)?.position().expect("position");
        let road = graph.node(2)?.position().expect("position");
        assert_eq!(entry, road);
        assert_eq!(entry.manhattan_distance(&Position::new(130, 10)), 70);
        assert_eq!(graph.node(3)?.position(), None);

        Ok(())
    }

    #[test]
    fn test_nodes_and_edges() -> Result<(), Error> {
        let (nodes, edges) = nodes_and_edges();
        let graph = graph()?;

        assert!(graph.nodes().eq(&nodes));
        assert!(graph.edges().eq(&edges));
        assert!(graph.entries().eq(&[
            TestNode::new(1, NodeRole::Entry),
            TestNode::new(8, NodeRole::Entry)
        ]));
        assert!(graph.exits().eq(&[TestNode::new(9, NodeRole::Exit)]));

        Ok(())
    }

    #[test]
    fn test_edge_lookup_is_symmetric() -> Result<(), Error> {
        let graph = graph()?;

        assert_eq!(graph.edge_weight(3, 2), Ok(Some(2)));
        assert_eq!(graph.edge_weight(2, 3), Ok(Some(2)));
        assert_eq!(graph.edge_weight(1, 9), Ok(None));
        assert!(graph.contains_edge(3, 9));
        assert!(graph.contains_edge(9, 3));
        assert!(!graph.contains_edge(6, 7));
        assert!(!graph.contains_edge(6, 42));
        assert_eq!(
            graph.edge_weight(42, 3),
            Err(Error::unknown_node("Node with id 42 not found."))
        );

        Ok(())
    }

    #[test]
    fn test_neighbors() -> Result<(), Error> {
        let graph = graph()?;

        let mut neighbors = graph
            .neighbors(3)?
            .map(|(n, w)| (n.node_id(), w))
            .collect::<Vec<_>>();
        neighbors.sort();
        assert_eq!(neighbors, vec![(2, 2), (7, 1), (8, 1), (9, 5)]);

        let neighbors = graph
            .neighbors(6)?
            .map(|(n, w)| (n.node_id(), w))
            .collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(2, 1)]);

        assert!(graph
            .neighbors(32)
            .is_err_and(|e| e == Error::unknown_node("Node with id 32 not found.")));

        Ok(())
    }
}
