// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module defines the `SlotRegistry`, the catalog of parking slots of a
//! facility and their occupancy.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;

use crate::node_role::RolePredicates;
use crate::{Edge, Error, FacilityGraph, Node};

/// Represents the class of vehicle a slot is sized for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum VehicleType {
    Car,
    Bike,
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleType::Car => write!(f, "Car"),
            VehicleType::Bike => write!(f, "Bike"),
        }
    }
}

/// Identifies a slot within a `SlotRegistry`.  Ids follow the order in which
/// slots were handed to the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    /// Returns the creation index of the slot.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The description of a slot, as provided by the layout builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotSpec {
    /// Human readable label, e.g. `C3`.  Unique within a facility.
    pub label: String,
    /// The vehicle class the slot is sized for.
    pub vehicle_type: VehicleType,
    /// The id of the graph node vehicles are routed to.
    pub node_id: u64,
}

impl SlotSpec {
    /// Creates a new `SlotSpec`.
    pub fn new(label: impl Into<String>, vehicle_type: VehicleType, node_id: u64) -> Self {
        Self {
            label: label.into(),
            vehicle_type,
            node_id,
        }
    }
}

/// A parking slot and its occupancy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    id: SlotId,
    label: String,
    vehicle_type: VehicleType,
    node_id: u64,
    occupied: bool,
}

impl Slot {
    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Returns the id of the graph node the slot is anchored on.
    pub fn node_id(&self) -> u64 {
        self.node_id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }
}

/// The result of freeing a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The slot was occupied and is now free.
    Freed,
    /// The slot was already free; nothing changed.
    AlreadyFree,
}

/// Occupancy counts for one vehicle type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    pub total: usize,
    pub occupied: usize,
}

impl Occupancy {
    /// Returns the number of free slots.
    pub fn free(&self) -> usize {
        self.total - self.occupied
    }
}

/// The catalog of slots of a facility.
///
/// The occupied flag is the only mutable part of a slot.  Slots are indexed
/// by label and by vehicle type, so neither lookup scans the whole catalog.
#[derive(Clone, Debug, Default)]
pub struct SlotRegistry {
    slots: Vec<Slot>,
    by_label: HashMap<String, SlotId>,
    by_type: HashMap<VehicleType, Vec<SlotId>>,
}

impl SlotRegistry {
    /// Creates a new [`SlotRegistry`] from the given slot descriptions.  All
    /// slots start out free.
    ///
    /// Returns an error if a label is empty or used twice, if an anchor node
    /// does not exist in `graph`, if two slots share an anchor node, or if an
    /// anchor node is not a slot node and the graph's configuration does not
    /// allow that.
    pub fn try_new<N, E>(
        specs: impl IntoIterator<Item = SlotSpec>,
        graph: &FacilityGraph<N, E>,
    ) -> Result<Self, Error>
    where
        N: Node,
        E: Edge,
    {
        let mut registry = Self::default();
        let mut anchors = HashSet::new();

        for SlotSpec {
            label,
            vehicle_type,
            node_id,
        } in specs
        {
            if label.is_empty() {
                return Err(Error::invalid_slot(format!(
                    "Slot on node {node_id} has an empty label."
                )));
            }
            if registry.by_label.contains_key(&label) {
                return Err(Error::invalid_slot(format!(
                    "Duplicate slot label found: {label}"
                )));
            }

            let node = graph.node(node_id)?;
            if !node.is_slot() {
                if !graph.config().allow_non_slot_anchors {
                    return Err(Error::invalid_slot(format!(
                        "Slot {label} is anchored on node {node_id}, which is a {} node.",
                        node.role()
                    )));
                }
                tracing::warn!(
                    "Slot {label} is anchored on node {node_id}, which is a {} node.",
                    node.role()
                );
            }
            if !anchors.insert(node_id) {
                return Err(Error::invalid_slot(format!(
                    "Slot {label} shares node {node_id} with another slot."
                )));
            }

            let id = SlotId(registry.slots.len());
            registry.by_label.insert(label.clone(), id);
            registry.by_type.entry(vehicle_type).or_default().push(id);
            registry.slots.push(Slot {
                id,
                label,
                vehicle_type,
                node_id,
                occupied: false,
            });
        }

        Ok(registry)
    }

    /// Returns the number of slots in the catalog.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the catalog has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over all slots, in creation order.
    pub fn slots(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Returns an iterator over the free slots of the given vehicle type, in
    /// creation order.
    pub fn available_slots(&self, vehicle_type: VehicleType) -> impl Iterator<Item = &Slot> + '_ {
        self.by_type
            .get(&vehicle_type)
            .into_iter()
            .flatten()
            .map(|id| &self.slots[id.0])
            .filter(|slot| !slot.occupied)
    }

    /// Returns the occupancy counts for the given vehicle type.
    pub fn occupancy(&self, vehicle_type: VehicleType) -> Occupancy {
        self.by_type
            .get(&vehicle_type)
            .into_iter()
            .flatten()
            .fold(Occupancy::default(), |acc, id| Occupancy {
                total: acc.total + 1,
                occupied: acc.occupied + usize::from(self.slots[id.0].occupied),
            })
    }

    /// Returns the slot with the given id.
    pub fn slot(&self, id: SlotId) -> Result<&Slot, Error> {
        self.slots
            .get(id.0)
            .ok_or_else(|| Error::slot_not_found(format!("Slot {id} not found.")))
    }

    /// Returns the slot with the given label.
    pub fn find_by_label(&self, label: &str) -> Result<&Slot, Error> {
        self.by_label
            .get(label)
            .map(|id| &self.slots[id.0])
            .ok_or_else(|| {
                Error::slot_not_found(format!("Slot with label {label} not found."))
            })
    }

    /// Marks the slot as occupied.  Returns true if the slot was free.
    pub(crate) fn mark_occupied(&mut self, id: SlotId) -> Result<bool, Error> {
        let slot = self.slot_mut(id)?;
        let changed = !slot.occupied;
        slot.occupied = true;
        Ok(changed)
    }

    /// Marks the slot with the given id as free.
    pub fn mark_free(&mut self, id: SlotId) -> Result<ReleaseOutcome, Error> {
        let slot = self.slot_mut(id)?;
        if !slot.occupied {
            return Ok(ReleaseOutcome::AlreadyFree);
        }
        slot.occupied = false;
        Ok(ReleaseOutcome::Freed)
    }

    /// Marks the slot with the given label as free.
    pub fn release(&mut self, label: &str) -> Result<ReleaseOutcome, Error> {
        let id = self.find_by_label(label)?.id;
        self.mark_free(id)
    }

    /// Marks every slot as free, regardless of vehicle type.  Returns the
    /// number of slots that were occupied.
    pub fn reset_all(&mut self) -> usize {
        let mut freed = 0;
        for slot in self.slots.iter_mut().filter(|s| s.occupied) {
            slot.occupied = false;
            freed += 1;
        }
        freed
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut Slot, Error> {
        self.slots
            .get_mut(id.0)
            .ok_or_else(|| Error::slot_not_found(format!("Slot {id} not found.")))
    }
}
