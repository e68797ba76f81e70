// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

/*!
# Parking Facility Graph

This is a library for routing vehicles through a parking facility and
allocating parking slots to them.

The road network of the facility is represented as an undirected, weighted
graph of entries, exits, road nodes and slot anchors.  On top of it, the
library keeps a catalog of typed parking slots and a set of blocked nodes and
road segments, and answers two kinds of questions: what is the cheapest route
between two nodes, and which free slot of a given vehicle type is the
cheapest to reach from an entry.

## The `Node` and `Edge` traits

The graph is described by a [`FacilityGraph`], instances of which can be
created by passing an iterator of nodes and the edges between them to the
[`try_new`][FacilityGraph::try_new] method.

Because the layout of a facility is built elsewhere, this library doesn't know
about the node and edge types and instead uses traits to interact with them.
To be usable with this library, the node and edge types must implement the
[`Node`] and [`Edge`] traits, respectively.

## Validation

The [`try_new`][FacilityGraph::try_new] method checks that:

- Node ids are unique.
- All edges connect two distinct, existing nodes.
- Edge weights are strictly positive.
- No pair of nodes is connected twice.

[`SlotRegistry::try_new`] checks that slot labels are unique and that every
slot is anchored on its own slot node.

## Routing and allocation

A [`ParkingFacility`] combines the graph, the slot catalog and the current
blockages, and can be shared between threads:

- [`find_path`][ParkingFacility::find_path] returns the cheapest route
  avoiding blocked nodes and edges, or `None` if there is none.
- [`allocate_nearest`][ParkingFacility::allocate_nearest] reserves the
  cheapest reachable free slot of a vehicle type.
- [`release`][ParkingFacility::release] and
  [`reset_all`][ParkingFacility::reset_all] free slots again.
- [`set_node_blocked`][ParkingFacility::set_node_blocked] and
  [`set_edge_blocked`][ParkingFacility::set_edge_blocked] close and reopen
  parts of the facility.
*/

mod blockage;
pub use blockage::BlockageStore;

mod config;
pub use config::FacilityConfig;

mod error;
pub use error::{Error, ErrorKind};

mod facility;
pub use facility::{Allocation, ParkingFacility};

mod graph;
pub use graph::{iterators, FacilityGraph, Route, ShortestPaths};

mod graph_traits;
pub use graph_traits::{Edge, Node, Position};

mod node_role;
pub use node_role::{NodeRole, RolePredicates};

mod slot_registry;
pub use slot_registry::{
    Occupancy, ReleaseOutcome, Slot, SlotId, SlotRegistry, SlotSpec, VehicleType,
};
