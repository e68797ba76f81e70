// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Methods for creating [`FacilityGraph`] instances from given nodes and
//! edges.

use petgraph::graph::UnGraph;

use crate::{Edge, Error, FacilityConfig, Node};

use super::{edge_key, EdgeMap, FacilityGraph, NodeIndexMap};

/// `FacilityGraph` instantiation.
impl<N, E> FacilityGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`FacilityGraph`] from the given nodes and edges.
    ///
    /// Returns an error if the graph is invalid.
    pub fn try_new<NodeIterator: IntoIterator<Item = N>, EdgeIterator: IntoIterator<Item = E>>(
        nodes: NodeIterator,
        edges: EdgeIterator,
        config: FacilityConfig,
    ) -> Result<Self, Error> {
        let (graph, indices) = Self::create_graph(nodes)?;

        let mut fg = Self {
            graph,
            node_indices: indices,
            edges: EdgeMap::new(),
            config,
        };
        fg.add_edges(edges)?;

        tracing::debug!(
            nodes = fg.graph.node_count(),
            edges = fg.graph.edge_count(),
            "Created facility graph."
        );

        Ok(fg)
    }

    fn create_graph(
        nodes: impl IntoIterator<Item = N>,
    ) -> Result<(UnGraph<N, u64>, NodeIndexMap), Error> {
        let mut graph = UnGraph::default();
        let mut indices = NodeIndexMap::new();

        for node in nodes {
            let nid = node.node_id();

            if indices.contains_key(&nid) {
                return Err(Error::invalid_graph(format!(
                    "Duplicate node ID found: {nid}"
                )));
            }

            let idx = graph.add_node(node);
            indices.insert(nid, idx);
        }

        if indices.is_empty() {
            return Err(Error::invalid_graph("Facility graph has no nodes."));
        }

        Ok((graph, indices))
    }

    fn add_edges(&mut self, edges: impl IntoIterator<Item = E>) -> Result<(), Error> {
        for edge in edges {
            let (a, b) = edge.endpoints();

            if a == b {
                return Err(Error::invalid_edge(format!(
                    "Edge:({a}, {b}) Can't connect a node to itself."
                )));
            }
            for nid in [a, b] {
                if !self.node_indices.contains_key(&nid) {
                    return Err(Error::invalid_edge(format!(
                        "Edge:({a}, {b}) Can't find a node with ID {nid}"
                    )));
                }
            }
            let weight = edge.weight();
            if weight == 0 {
                return Err(Error::invalid_edge(format!(
                    "Edge:({a}, {b}) Weight must be strictly positive."
                )));
            }

            let key = edge_key(self.node_indices[&a], self.node_indices[&b]);
            if self.edges.contains_key(&key) {
                return Err(Error::invalid_edge(format!(
                    "Edge:({a}, {b}) Duplicate edge."
                )));
            }

            self.graph.add_edge(key.0, key.1, weight);
            self.edges.insert(key, edge);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_utils::{TestEdge, TestNode};
    use crate::ErrorKind;
    use crate::NodeRole;

    fn nodes_and_edges() -> (Vec<TestNode>, Vec<TestEdge>) {
        let nodes = vec![
            TestNode::new(1, NodeRole::Entry),
            TestNode::new(2, NodeRole::Road),
            TestNode::new(3, NodeRole::Road),
            TestNode::new(4, NodeRole::Slot),
            TestNode::new(5, NodeRole::Exit),
        ];
        let edges = vec![
            TestEdge::new(1, 2, 1),
            TestEdge::new(2, 3, 2),
            TestEdge::new(3, 4, 1),
            TestEdge::new(3, 5, 4),
        ];

        (nodes, edges)
    }

    #[test]
    fn test_node_validation() {
        let config = FacilityConfig::default();
        let (mut nodes, edges) = nodes_and_edges();

        assert!(FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone()).is_ok());

        nodes.push(TestNode::new(2, NodeRole::Road));
        assert!(
            FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone())
                .is_err_and(|e| e == Error::invalid_graph("Duplicate node ID found: 2"))
        );

        assert!(
            FacilityGraph::try_new(Vec::<TestNode>::new(), Vec::<TestEdge>::new(), config)
                .is_err_and(|e| e == Error::invalid_graph("Facility graph has no nodes."))
        );
    }

    #[test]
    fn test_edge_validation() {
        let config = FacilityConfig::default();
        let (nodes, mut edges) = nodes_and_edges();

        edges.push(TestEdge::new(2, 2, 1));
        assert!(
            FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_edge("Edge:(2, 2) Can't connect a node to itself.")
            )
        );

        edges.pop();
        edges.push(TestEdge::new(2, 9, 1));
        assert!(
            FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_edge("Edge:(2, 9) Can't find a node with ID 9")
            )
        );

        edges.pop();
        edges.push(TestEdge::new(1, 5, 0));
        assert!(
            FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone()).is_err_and(
                |e| e == Error::invalid_edge("Edge:(1, 5) Weight must be strictly positive.")
            )
        );

        // Edges are undirected, so the reversed pair is a duplicate.
        edges.pop();
        edges.push(TestEdge::new(3, 2, 7));
        assert!(
            FacilityGraph::try_new(nodes.clone(), edges.clone(), config.clone())
                .is_err_and(|e| e.kind() == ErrorKind::InvalidEdge
                    && e.description() == "Edge:(3, 2) Duplicate edge.")
        );

        edges.pop();
        let graph = FacilityGraph::try_new(nodes, edges, config);
        assert!(graph.is_ok_and(|g| g.node_count() == 5 && g.edge_count() == 4));
    }
}
