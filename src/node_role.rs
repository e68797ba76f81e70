// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module defines the `NodeRole` enum, which represents the role a node
//! plays in the facility layout.

use crate::graph_traits::Node;
use std::fmt::Display;

/// Represents the role of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Entry,
    Exit,
    Road,
    Slot,
}

impl Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeRole::Entry => write!(f, "Entry"),
            NodeRole::Exit => write!(f, "Exit"),
            NodeRole::Road => write!(f, "Road"),
            NodeRole::Slot => write!(f, "Slot"),
        }
    }
}

/// Predicates for checking the role of a `Node`.
pub trait RolePredicates: Node {
    fn is_entry(&self) -> bool {
        self.role() == NodeRole::Entry
    }

    fn is_exit(&self) -> bool {
        self.role() == NodeRole::Exit
    }

    fn is_road(&self) -> bool {
        self.role() == NodeRole::Road
    }

    fn is_slot(&self) -> bool {
        self.role() == NodeRole::Slot
    }
}

/// Implement the `RolePredicates` trait for all types that implement the
/// `Node` trait.
impl<T: Node> RolePredicates for T {}
