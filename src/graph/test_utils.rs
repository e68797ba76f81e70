// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the crate.
//!
//! - the `TestNode` and `TestEdge` types, which implement the `Node` and
//!   `Edge` traits respectively.
//! - the `FacilityBuilder`, which can declaratively build facility layouts
//!   for use in tests.

use crate::{
    Edge, Error, FacilityConfig, FacilityGraph, Node, NodeRole, ParkingFacility, Position,
    SlotRegistry, SlotSpec, VehicleType,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestNode(u64, NodeRole, Option<Position>);

impl TestNode {
    pub(crate) fn new(id: u64, role: NodeRole) -> Self {
        TestNode(id, role, None)
    }

    pub(crate) fn with_position(id: u64, role: NodeRole, position: Position) -> Self {
        TestNode(id, role, Some(position))
    }
}

impl Node for TestNode {
    fn node_id(&self) -> u64 {
        self.0
    }

    fn role(&self) -> NodeRole {
        self.1
    }

    fn position(&self) -> Option<Position> {
        self.2
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TestEdge(u64, u64, u64);

impl TestEdge {
    pub(crate) fn new(a: u64, b: u64, weight: u64) -> Self {
        TestEdge(a, b, weight)
    }
}

impl Edge for TestEdge {
    fn endpoints(&self) -> (u64, u64) {
        (self.0, self.1)
    }

    fn weight(&self) -> u64 {
        self.2
    }
}

/// Represents a node added to the `FacilityBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub(crate) struct NodeHandle(u64);

impl NodeHandle {
    /// Returns the node ID of the node.
    pub(crate) fn node_id(&self) -> u64 {
        self.0
    }
}

/// A builder for creating facility layouts easily, for use in tests.
pub(crate) struct FacilityBuilder {
    nodes: Vec<TestNode>,
    edges: Vec<TestEdge>,
    slots: Vec<SlotSpec>,
    next_id: u64,
    config: FacilityConfig,
}

impl FacilityBuilder {
    /// Creates a new `FacilityBuilder`.
    pub(crate) fn new() -> Self {
        FacilityBuilder {
            nodes: Vec::new(),
            edges: Vec::new(),
            slots: Vec::new(),
            next_id: 1,
            config: FacilityConfig::default(),
        }
    }

    /// Replaces the configuration used when building the graph.
    pub(crate) fn config(&mut self, config: FacilityConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Adds a node with the given role and returns its handle.
    pub(crate) fn add_node(&mut self, role: NodeRole) -> NodeHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(TestNode::new(id, role));
        NodeHandle(id)
    }

    /// Adds an entry node and returns its handle.
    pub(crate) fn entry(&mut self) -> NodeHandle {
        self.add_node(NodeRole::Entry)
    }

    /// Adds a road node and returns its handle.
    pub(crate) fn road(&mut self) -> NodeHandle {
        self.add_node(NodeRole::Road)
    }

    /// Adds a slot anchor node together with a slot of the given label and
    /// vehicle type, and returns the handle of the anchor node.
    pub(crate) fn slot(&mut self, label: &str, vehicle_type: VehicleType) -> NodeHandle {
        let handle = self.add_node(NodeRole::Slot);
        self.slots
            .push(SlotSpec::new(label, vehicle_type, handle.node_id()));
        handle
    }

    /// Connects two nodes with an edge of the given weight.
    pub(crate) fn connect(&mut self, a: NodeHandle, b: NodeHandle, weight: u64) -> &mut Self {
        self.edges
            .push(TestEdge::new(a.node_id(), b.node_id(), weight));
        self
    }

    /// Adds a `width` x `height` grid of road nodes connected to their
    /// horizontal and vertical neighbours with edges of the given weight.
    ///
    /// The returned handles are indexed as `grid[x][y]`.
    pub(crate) fn grid(&mut self, width: usize, height: usize, weight: u64) -> Vec<Vec<NodeHandle>> {
        let grid: Vec<Vec<NodeHandle>> = (0..width)
            .map(|_| (0..height).map(|_| self.road()).collect())
            .collect();
        for x in 0..width {
            for y in 0..height {
                if x + 1 < width {
                    self.connect(grid[x][y], grid[x + 1][y], weight);
                }
                if y + 1 < height {
                    self.connect(grid[x][y], grid[x][y + 1], weight);
                }
            }
        }
        grid
    }

    /// Returns the nodes added so far.
    pub(crate) fn nodes(&self) -> Vec<TestNode> {
        self.nodes.clone()
    }

    /// Returns the edges added so far.
    pub(crate) fn edges(&self) -> Vec<TestEdge> {
        self.edges.clone()
    }

    /// Builds a `FacilityGraph` from the nodes and edges added so far.
    pub(crate) fn graph(&self) -> Result<FacilityGraph<TestNode, TestEdge>, Error> {
        FacilityGraph::try_new(self.nodes(), self.edges(), self.config.clone())
    }

    /// Builds a `FacilityGraph` and a `SlotRegistry` from everything added so
    /// far.
    pub(crate) fn graph_and_slots(
        &self,
    ) -> Result<(FacilityGraph<TestNode, TestEdge>, SlotRegistry), Error> {
        let graph = self.graph()?;
        let registry = SlotRegistry::try_new(self.slots.clone(), &graph)?;
        Ok((graph, registry))
    }

    /// Builds a `ParkingFacility` from everything added so far.
    pub(crate) fn build(&self) -> Result<ParkingFacility<TestNode, TestEdge>, Error> {
        let (graph, registry) = self.graph_and_slots()?;
        ParkingFacility::try_new(graph, registry)
    }
}
