// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! Allocation of the nearest reachable free slot.

use crate::{Edge, Error, Node, ParkingFacility, Route, Slot, VehicleType};

/// A reserved slot and the route leading to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    slot: Slot,
    route: Route,
}

impl Allocation {
    /// Returns the reserved slot, as it was right after the reservation.
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// Returns the route from the start node to the slot.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the cost of the route to the slot.
    pub fn cost(&self) -> u64 {
        self.route.cost()
    }

    /// Consumes the allocation, returning the slot and the route.
    pub fn into_parts(self) -> (Slot, Route) {
        (self.slot, self.route)
    }
}

/// Slot allocation.
impl<N, E> ParkingFacility<N, E>
where
    N: Node,
    E: Edge,
{
    /// Reserves the free slot of the given vehicle type that is cheapest to
    /// reach from `start`, and returns it with the route leading to it.
    ///
    /// Among slots with equal route cost, the one created first wins.  The
    /// slot catalog stays locked from the moment candidates are collected
    /// until the chosen slot is marked occupied, so concurrent allocations
    /// never receive the same slot.
    ///
    /// Fails with `UnknownNode` if `start` does not exist, and with
    /// `NoAvailableSlot` if there is no free slot of the type or none of the
    /// free ones is reachable.  A failed allocation reserves nothing.
    pub fn allocate_nearest(
        &self,
        start: u64,
        vehicle_type: VehicleType,
    ) -> Result<Allocation, Error> {
        let mut slots = self.slots.lock();
        self.graph.index_of(start)?;

        let candidates: Vec<&Slot> = slots.available_slots(vehicle_type).collect();
        if candidates.is_empty() {
            return Err(Error::no_available_slot(format!(
                "No free {vehicle_type} slot."
            )));
        }

        let routes = {
            let blockages = self.blockages.read();
            self.graph
                .nearest_routes(start, candidates.iter().map(|slot| slot.node_id()), &blockages)?
        };

        // Candidates are in creation order, which breaks ties between the
        // equally near slots.
        let Some((id, route)) = candidates.iter().find_map(|slot| {
            routes
                .iter()
                .find(|route| route.end() == slot.node_id())
                .map(|route| (slot.id(), route.clone()))
        }) else {
            return Err(Error::no_available_slot(format!(
                "No free {vehicle_type} slot is reachable from node {start}."
            )));
        };

        slots.mark_occupied(id)?;
        let slot = slots.slot(id)?.clone();

        tracing::debug!(
            "Allocated {vehicle_type} slot {} from node {start} at cost {}.",
            slot.label(),
            route.cost()
        );

        Ok(Allocation { slot, route })
    }
}
