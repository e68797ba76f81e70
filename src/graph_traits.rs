// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module contains the traits that need to be implemented by the types
//! that represent a node and an edge of the facility.

use crate::node_role::NodeRole;

/// A point on the facility layout.
///
/// Positions are auxiliary metadata for the layout and presentation layers.
/// They never take part in node identity or equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Creates a new `Position`.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the Manhattan distance between two positions.
    pub fn manhattan_distance(&self, other: &Position) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/**
This trait needs to be implemented by the type that represents a node.

Read more about why this is necessary [here][crate#the-node-and-edge-traits].

<details>
<summary>Example implementation for a layout builder's point type:</summary>

```ignore
impl parking_facility_graph::Node for layout::Point {
    fn node_id(&self) -> u64 {
        self.id
    }

    fn role(&self) -> parking_facility_graph::NodeRole {
        use parking_facility_graph::NodeRole;

        match self.kind {
            layout::PointKind::Gate { inbound: true } => NodeRole::Entry,
            layout::PointKind::Gate { inbound: false } => NodeRole::Exit,
            layout::PointKind::Lane => NodeRole::Road,
            layout::PointKind::Bay(_) => NodeRole::Slot,
        }
    }

    fn position(&self) -> Option<parking_facility_graph::Position> {
        Some(parking_facility_graph::Position::new(self.x, self.y))
    }
}
```

</details>
*/
pub trait Node {
    /// Returns the identifier of the node.  Identifiers are unique within a
    /// facility.
    fn node_id(&self) -> u64;
    /// Returns the role of the node.
    fn role(&self) -> NodeRole;
    /// Returns the position of the node on the layout, if known.
    fn position(&self) -> Option<Position> {
        None
    }
}

/**
This trait needs to be implemented by the type that represents a road
segment between two nodes.

Edges are undirected: `(a, b)` and `(b, a)` describe the same segment.

<details>
<summary>Example implementation for a layout builder's lane type:</summary>

```ignore
impl parking_facility_graph::Edge for layout::Lane {
    fn endpoints(&self) -> (u64, u64) {
        (self.from, self.to)
    }

    fn weight(&self) -> u64 {
        self.length_in_cells
    }
}
```

</details>
*/
pub trait Edge {
    /// Returns the ids of the two nodes connected by the edge.
    fn endpoints(&self) -> (u64, u64);
    /// Returns the traversal cost of the edge.  Must be strictly positive.
    fn weight(&self) -> u64;
}
