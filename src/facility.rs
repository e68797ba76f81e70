// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! The parking facility: the road graph, the slot catalog and the current
//! blockages, behind a concurrency contract that allows the facility to be
//! shared between threads.

mod allocation;
mod blockage_control;

pub use allocation::Allocation;

use parking_lot::{Mutex, RwLock};

use crate::{
    BlockageStore, Edge, Error, FacilityGraph, Node, Occupancy, ReleaseOutcome, Route, Slot,
    SlotId, SlotRegistry, VehicleType,
};

/// A parking facility that routes vehicles to free slots.
///
/// The graph is immutable.  Blockages live behind a read-write lock: path
/// searches hold the read lock for their whole duration, so each blockage
/// change is observed either entirely or not at all.  The slot catalog lives
/// behind a mutex that is held across the select-then-reserve sequence of an
/// allocation.
///
/// Locks are always taken in the order slots, then blockages.
pub struct ParkingFacility<N, E>
where
    N: Node,
    E: Edge,
{
    graph: FacilityGraph<N, E>,
    blockages: RwLock<BlockageStore>,
    slots: Mutex<SlotRegistry>,
}

impl<N, E> ParkingFacility<N, E>
where
    N: Node,
    E: Edge,
{
    /// Creates a new [`ParkingFacility`] from a graph and a slot catalog
    /// built for it.  Nothing is blocked initially.
    ///
    /// Returns an error if a slot is anchored on a node that does not exist
    /// in `graph`.
    pub fn try_new(graph: FacilityGraph<N, E>, slots: SlotRegistry) -> Result<Self, Error> {
        for slot in slots.slots() {
            graph.index_of(slot.node_id())?;
        }

        Ok(Self {
            graph,
            blockages: RwLock::new(BlockageStore::new()),
            slots: Mutex::new(slots),
        })
    }

    /// Returns the road graph of the facility.
    pub fn graph(&self) -> &FacilityGraph<N, E> {
        &self.graph
    }

    /// Returns the cheapest route from `start` to `end` under the current
    /// blockages, or `None` if `end` is not reachable.
    ///
    /// The returned route is not updated when blockages change later on.
    pub fn find_path(&self, start: u64, end: u64) -> Result<Option<Route>, Error> {
        let blockages = self.blockages.read();
        self.graph.shortest_path(start, end, &blockages)
    }

    /// Returns a snapshot of all slots, in creation order.
    pub fn slots(&self) -> Vec<Slot> {
        self.slots.lock().slots().cloned().collect()
    }

    /// Returns a snapshot of the free slots of the given vehicle type, in
    /// creation order.
    pub fn available_slots(&self, vehicle_type: VehicleType) -> Vec<Slot> {
        self.slots
            .lock()
            .available_slots(vehicle_type)
            .cloned()
            .collect()
    }

    /// Returns a snapshot of the slot with the given label.
    pub fn find_by_label(&self, label: &str) -> Result<Slot, Error> {
        self.slots.lock().find_by_label(label).cloned()
    }

    /// Returns the occupancy counts for the given vehicle type.
    pub fn occupancy(&self, vehicle_type: VehicleType) -> Occupancy {
        self.slots.lock().occupancy(vehicle_type)
    }

    /// Frees the slot with the given label.
    pub fn release(&self, label: &str) -> Result<ReleaseOutcome, Error> {
        let outcome = self.slots.lock().release(label)?;
        tracing::debug!("Released slot {label}: {outcome:?}");
        Ok(outcome)
    }

    /// Frees the slot with the given id.
    pub fn mark_free(&self, id: SlotId) -> Result<ReleaseOutcome, Error> {
        let outcome = self.slots.lock().mark_free(id)?;
        tracing::debug!("Released slot {id}: {outcome:?}");
        Ok(outcome)
    }

    /// Frees every slot.  Returns the number of slots that were occupied.
    pub fn reset_all(&self) -> usize {
        let freed = self.slots.lock().reset_all();
        tracing::debug!("Reset all slots, {freed} were occupied.");
        freed
    }
}
