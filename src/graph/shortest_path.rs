// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Weighted shortest path search over a [`FacilityGraph`], honouring the
//! nodes and edges blocked in a [`BlockageStore`].

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::{BlockageStore, Edge, Error, FacilityGraph, Node};

/// A route through the facility, from its first node to its last node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    nodes: Vec<u64>,
    cost: u64,
}

impl Route {
    /// Returns the ids of the nodes on the route, starting with the start
    /// node and ending with the destination.
    pub fn nodes(&self) -> &[u64] {
        &self.nodes
    }

    /// Returns the sum of the weights of the traversed edges.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the id of the first node on the route.
    pub fn start(&self) -> u64 {
        self.nodes[0]
    }

    /// Returns the id of the last node on the route.
    pub fn end(&self) -> u64 {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns the number of nodes on the route.  Never zero.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consumes the route, returning the node ids.
    pub fn into_nodes(self) -> Vec<u64> {
        self.nodes
    }
}

/// The result of a single-source search: the cheapest route from one start
/// node to every node reachable from it.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    start: u64,
    costs: HashMap<u64, u64>,
    predecessors: HashMap<u64, u64>,
}

impl ShortestPaths {
    /// Returns the id of the node the search started from.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the number of reachable nodes, the start node included.
    pub fn reachable_count(&self) -> usize {
        self.costs.len()
    }

    /// Returns the cost of the cheapest route to the given node, or `None`
    /// if it is not reachable.
    pub fn cost_to(&self, node_id: u64) -> Option<u64> {
        self.costs.get(&node_id).copied()
    }

    /// Returns the cheapest route to the given node, or `None` if it is not
    /// reachable.
    pub fn route_to(&self, node_id: u64) -> Option<Route> {
        let cost = self.cost_to(node_id)?;
        let mut nodes = vec![node_id];
        let mut current = node_id;
        while let Some(&prev) = self.predecessors.get(&current) {
            nodes.push(prev);
            current = prev;
        }
        nodes.reverse();
        Some(Route { nodes, cost })
    }
}

/// An entry of the search frontier.
///
/// Entries are ordered by accumulated cost, and entries with equal cost by
/// the order in which they were discovered.  Node identity never takes part
/// in the ordering.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    cost: u64,
    seq: u64,
    node: NodeIndex,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Per-query state of Dijkstra's algorithm.  Dropped when the query returns.
struct Search<'a, N, E>
where
    N: Node,
    E: Edge,
{
    fg: &'a FacilityGraph<N, E>,
    blockages: &'a BlockageStore,
    start: NodeIndex,
    costs: HashMap<NodeIndex, u64>,
    predecessors: HashMap<NodeIndex, NodeIndex>,
    settled: HashSet<NodeIndex>,
    queue: BinaryHeap<Reverse<QueueEntry>>,
    next_seq: u64,
    expanded: usize,
}

impl<'a, N, E> Search<'a, N, E>
where
    N: Node,
    E: Edge,
{
    fn new(fg: &'a FacilityGraph<N, E>, blockages: &'a BlockageStore, start: NodeIndex) -> Self {
        let mut search = Self {
            fg,
            blockages,
            start,
            costs: HashMap::new(),
            predecessors: HashMap::new(),
            settled: HashSet::new(),
            queue: BinaryHeap::new(),
            next_seq: 0,
            expanded: 0,
        };
        search.costs.insert(start, 0);
        search.push(start, 0);
        search
    }

    fn push(&mut self, node: NodeIndex, cost: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(QueueEntry { cost, seq, node }));
    }

    /// Settles nodes in cost order until `target` is settled, or until every
    /// reachable node is settled if there is no target.
    fn run(&mut self, target: Option<NodeIndex>) -> Result<(), Error> {
        while let Some(Reverse(entry)) = self.queue.pop() {
            // Costs only ever decrease, so a node popped a second time comes
            // from a stale entry.
            if !self.settled.insert(entry.node) {
                continue;
            }
            if Some(entry.node) == target {
                return Ok(());
            }
            self.expand(entry)?;
        }

        Ok(())
    }

    /// Settles nodes in cost order until the cheapest of the `targets` are
    /// settled, and returns them.  Targets reached at a higher cost, and
    /// nodes that can only lead to such targets, are left unexpanded.
    ///
    /// Returns an empty list if none of the targets is reachable.
    fn run_to_nearest(&mut self, targets: &HashSet<NodeIndex>) -> Result<Vec<NodeIndex>, Error> {
        let mut nearest = Vec::new();
        let mut nearest_cost = None;

        while let Some(Reverse(entry)) = self.queue.pop() {
            if nearest_cost.is_some_and(|cost| entry.cost > cost) {
                break;
            }
            if !self.settled.insert(entry.node) {
                continue;
            }
            if targets.contains(&entry.node) {
                nearest_cost = Some(entry.cost);
                nearest.push(entry.node);
                if nearest.len() == targets.len() {
                    break;
                }
                continue;
            }
            // Once a target is settled, expanding can only reach costlier
            // nodes.
            if nearest_cost.is_none() {
                self.expand(entry)?;
            }
        }

        Ok(nearest)
    }

    /// Relaxes the edges of a settled node.
    ///
    /// The start node is expanded even if it is blocked.  Every other blocked
    /// node is never entered, and blocked edges are never traversed.
    fn expand(&mut self, entry: QueueEntry) -> Result<(), Error> {
        let fg = self.fg;
        if let Some(limit) = fg.config.max_expansions {
            if self.expanded >= limit {
                return Err(Error::search_budget_exceeded(format!(
                    "Search from node {} stopped after {} expansions.",
                    fg.graph[self.start].node_id(),
                    limit
                )));
            }
        }
        self.expanded += 1;

        let node_id = fg.graph[entry.node].node_id();
        for edge in fg.graph.edges(entry.node) {
            let next = if edge.source() == entry.node {
                edge.target()
            } else {
                edge.source()
            };
            if self.settled.contains(&next) {
                continue;
            }
            let next_id = fg.graph[next].node_id();
            if self.blockages.is_node_blocked(next_id)
                || self.blockages.is_edge_blocked(node_id, next_id)
            {
                continue;
            }

            let cost = entry.cost.checked_add(*edge.weight()).ok_or_else(|| {
                Error::internal(format!(
                    "Route cost overflow on edge ({node_id}, {next_id})."
                ))
            })?;
            if self.costs.get(&next).map_or(true, |&known| cost < known) {
                self.costs.insert(next, cost);
                self.predecessors.insert(next, entry.node);
                self.push(next, cost);
            }
        }

        Ok(())
    }

    fn route_to(&self, target: NodeIndex) -> Option<Route> {
        if !self.settled.contains(&target) {
            return None;
        }
        let cost = *self.costs.get(&target)?;
        let mut nodes = vec![self.fg.graph[target].node_id()];
        let mut current = target;
        while let Some(&prev) = self.predecessors.get(&current) {
            nodes.push(self.fg.graph[prev].node_id());
            current = prev;
        }
        nodes.reverse();
        Some(Route { nodes, cost })
    }

    fn into_shortest_paths(self) -> ShortestPaths {
        let graph = &self.fg.graph;
        ShortestPaths {
            start: graph[self.start].node_id(),
            costs: self
                .costs
                .iter()
                .filter(|(idx, _)| self.settled.contains(*idx))
                .map(|(&idx, &cost)| (graph[idx].node_id(), cost))
                .collect(),
            predecessors: self
                .predecessors
                .iter()
                .filter(|(idx, _)| self.settled.contains(*idx))
                .map(|(&idx, &prev)| (graph[idx].node_id(), graph[prev].node_id()))
                .collect(),
        }
    }
}

/// Shortest path queries.
impl<N, E> FacilityGraph<N, E>
where
    N: Node,
    E: Edge,
{
    /// Returns the cheapest route from `start` to `end` that avoids every
    /// node and edge blocked in `blockages`.
    ///
    /// Returns `Ok(None)` if `end` is not reachable from `start`, and an
    /// error if either node does not exist or the configured search budget
    /// is exhausted.
    ///
    /// The start node is always eligible, even when it is blocked.  A route
    /// from a node to itself has a single node and cost 0.  Among routes of
    /// equal cost, the one discovered first wins.
    pub fn shortest_path(
        &self,
        start: u64,
        end: u64,
        blockages: &BlockageStore,
    ) -> Result<Option<Route>, Error> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;

        if start_idx == end_idx {
            return Ok(Some(Route {
                nodes: vec![start],
                cost: 0,
            }));
        }

        let mut search = Search::new(self, blockages, start_idx);
        search.run(Some(end_idx))?;
        let route = search.route_to(end_idx);

        tracing::trace!(
            start,
            end,
            settled = search.settled.len(),
            cost = route.as_ref().map(Route::cost),
            "Shortest path search finished."
        );

        Ok(route)
    }

    /// Returns the cheapest routes from `start` to every node reachable from
    /// it, under the same rules as [`shortest_path`][Self::shortest_path].
    ///
    /// The route to any node is identical to the one returned by
    /// `shortest_path` for the same endpoints and blockages.
    pub fn shortest_paths_from(
        &self,
        start: u64,
        blockages: &BlockageStore,
    ) -> Result<ShortestPaths, Error> {
        let start_idx = self.index_of(start)?;

        let mut search = Search::new(self, blockages, start_idx);
        search.run(None)?;

        tracing::trace!(
            start,
            settled = search.settled.len(),
            "Single-source search finished."
        );

        Ok(search.into_shortest_paths())
    }

    /// Returns the cheapest routes from `start` to the nearest of the given
    /// `targets`, under the same rules as [`shortest_path`][Self::shortest_path].
    ///
    /// All targets that are reachable at the lowest cost are returned, in no
    /// particular order, and each route is identical to the one returned by
    /// `shortest_path` for the same endpoints.  The search stops as soon as
    /// the nearest targets are known, so it expands no more nodes than a
    /// `shortest_path` query to the first of them.
    ///
    /// Returns an empty list if no target is reachable, and an error if
    /// `start` or any target does not exist.
    pub fn nearest_routes(
        &self,
        start: u64,
        targets: impl IntoIterator<Item = u64>,
        blockages: &BlockageStore,
    ) -> Result<Vec<Route>, Error> {
        let start_idx = self.index_of(start)?;
        let targets = targets
            .into_iter()
            .map(|id| self.index_of(id))
            .collect::<Result<HashSet<_>, _>>()?;
        if targets.is_empty() {
            return Ok(Vec::new());
        }

        let mut search = Search::new(self, blockages, start_idx);
        let nearest = search.run_to_nearest(&targets)?;

        tracing::trace!(
            start,
            targets = targets.len(),
            settled = search.settled.len(),
            nearest = nearest.len(),
            "Nearest target search finished."
        );

        Ok(nearest
            .into_iter()
            .filter_map(|idx| search.route_to(idx))
            .collect())
    }
}
