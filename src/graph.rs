// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! A graph representation of the road network of a parking facility: the
//! entries, exits, road segments and slot anchors, and the weighted
//! connections between them.

mod creation;
mod retrieval;

pub mod iterators;
mod shortest_path;
pub use shortest_path::{Route, ShortestPaths};

#[cfg(test)]
pub(crate) mod test_utils;

use crate::{Edge, FacilityConfig, Node};
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// `Node`s stored in an `UnGraph` instance can be addressed with `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for any `node_id`, so
/// that Nodes in the `UnGraph` can be retrieved from their `node_id`s.
pub(crate) type NodeIndexMap = HashMap<u64, NodeIndex>;

/// `Edge`s are not stored in the `UnGraph` instance, only their weights are,
/// so we need to store them separately.
///
/// `EdgeMap` can be used to lookup the `Edge` for any pair of `NodeIndex`
/// values, in the order returned by [`edge_key`].
pub(crate) type EdgeMap<E> = HashMap<(NodeIndex, NodeIndex), E>;

/// Returns the canonical key of the undirected edge between `a` and `b`.
pub(crate) fn edge_key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A graph representation of the road network of a parking facility.
///
/// The graph is immutable after construction.  Blocked nodes and edges are
/// not part of the graph, they are passed to each query as a
/// [`BlockageStore`][crate::BlockageStore].
pub struct FacilityGraph<N, E>
where
    N: Node,
    E: Edge,
{
    graph: UnGraph<N, u64>,
    node_indices: NodeIndexMap,
    edges: EdgeMap<E>,
    config: FacilityConfig,
}
