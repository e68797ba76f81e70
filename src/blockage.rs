// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module defines the `BlockageStore`, the set of nodes and edges that
//! are currently excluded from routing.

use std::collections::HashSet;

/// Returns the canonical form of the undirected edge between `a` and `b`.
fn canonical(a: u64, b: u64) -> (u64, u64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The nodes and edges that are currently closed for traffic.
///
/// Blocking a node or an edge does not change the structure of the
/// [`FacilityGraph`][crate::FacilityGraph]; the store is consulted by each
/// shortest path search, so only queries started after a change observe it.
///
/// The store itself does not know about the graph.  Validation of the
/// referenced nodes and edges happens in
/// [`ParkingFacility`][crate::ParkingFacility], before the store is touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockageStore {
    nodes: HashSet<u64>,
    edges: HashSet<(u64, u64)>,
}

impl BlockageStore {
    /// Creates an empty `BlockageStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the node with the given id is blocked.
    pub fn is_node_blocked(&self, node_id: u64) -> bool {
        self.nodes.contains(&node_id)
    }

    /// Returns true if the edge between `a` and `b` is blocked.  The lookup
    /// is symmetric.
    pub fn is_edge_blocked(&self, a: u64, b: u64) -> bool {
        self.edges.contains(&canonical(a, b))
    }

    /// Blocks or unblocks the node with the given id.
    ///
    /// Returns true if the state of the node changed.
    pub fn set_node_blocked(&mut self, node_id: u64, blocked: bool) -> bool {
        if blocked {
            self.nodes.insert(node_id)
        } else {
            self.nodes.remove(&node_id)
        }
    }

    /// Blocks or unblocks the edge between `a` and `b`.
    ///
    /// Returns true if the state of the edge changed.
    pub fn set_edge_blocked(&mut self, a: u64, b: u64, blocked: bool) -> bool {
        let key = canonical(a, b);
        if blocked {
            self.edges.insert(key)
        } else {
            self.edges.remove(&key)
        }
    }

    /// Returns the ids of all blocked nodes, in ascending order.
    pub fn blocked_nodes(&self) -> Vec<u64> {
        let mut nodes: Vec<u64> = self.nodes.iter().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Returns all blocked edges as `(smaller id, larger id)` pairs, in
    /// ascending order.
    pub fn blocked_edges(&self) -> Vec<(u64, u64)> {
        let mut edges: Vec<(u64, u64)> = self.edges.iter().copied().collect();
        edges.sort_unstable();
        edges
    }

    /// Returns true if nothing is blocked.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Unblocks all nodes and edges.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
