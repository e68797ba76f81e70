// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Operator commands for closing and reopening nodes and road segments.

use crate::{BlockageStore, Edge, Error, Node, ParkingFacility};

/// Blockage control.
impl<N, E> ParkingFacility<N, E>
where
    N: Node,
    E: Edge,
{
    /// Blocks or unblocks the node with the given id.  Path searches started
    /// afterwards observe the change.
    ///
    /// Returns whether the state of the node changed, or an error if the node
    /// does not exist, in which case nothing is changed.
    pub fn set_node_blocked(&self, node_id: u64, blocked: bool) -> Result<bool, Error> {
        self.graph.index_of(node_id)?;

        let changed = self.blockages.write().set_node_blocked(node_id, blocked);
        if changed {
            tracing::debug!(node_id, blocked, "Node blockage changed.");
        }
        Ok(changed)
    }

    /// Blocks or unblocks the edge between `a` and `b`, in both directions.
    /// Path searches started afterwards observe the change.
    ///
    /// Returns whether the state of the edge changed, or an error if either
    /// node or the edge does not exist, in which case nothing is changed.
    pub fn set_edge_blocked(&self, a: u64, b: u64, blocked: bool) -> Result<bool, Error> {
        if self.graph.edge_weight(a, b)?.is_none() {
            return Err(Error::unknown_edge(format!(
                "Edge between {a} and {b} not found."
            )));
        }

        let changed = self.blockages.write().set_edge_blocked(a, b, blocked);
        if changed {
            tracing::debug!(a, b, blocked, "Edge blockage changed.");
        }
        Ok(changed)
    }

    /// Returns true if the node with the given id is blocked.
    pub fn is_node_blocked(&self, node_id: u64) -> bool {
        self.blockages.read().is_node_blocked(node_id)
    }

    /// Returns true if the edge between `a` and `b` is blocked.
    pub fn is_edge_blocked(&self, a: u64, b: u64) -> bool {
        self.blockages.read().is_edge_blocked(a, b)
    }

    /// Returns the ids of all blocked nodes, in ascending order.
    pub fn blocked_nodes(&self) -> Vec<u64> {
        self.blockages.read().blocked_nodes()
    }

    /// Returns all blocked edges as `(smaller id, larger id)` pairs, in
    /// ascending order.
    pub fn blocked_edges(&self) -> Vec<(u64, u64)> {
        self.blockages.read().blocked_edges()
    }

    /// Returns a copy of the current blockages.
    pub fn blockages(&self) -> BlockageStore {
        self.blockages.read().clone()
    }

    /// Reopens every node and edge.
    pub fn clear_blockages(&self) {
        self.blockages.write().clear();
        tracing::debug!("Cleared all blockages.");
    }
}
