// License: MIT
// Copyright © 2024 The parking-facility-graph Authors

//! This module contains the configuration options for the `FacilityGraph`.

/// Configuration options for the `FacilityGraph`.
#[derive(Clone, Default, Debug)]
pub struct FacilityConfig {
    /// Whether to allow parking slots to be anchored on nodes whose role is
    /// not `NodeRole::Slot`.  When this is `true`, such slots are accepted
    /// with a warning instead of being rejected.
    pub allow_non_slot_anchors: bool,

    /// Upper bound on the number of nodes a single shortest path search may
    /// settle.  Searches that hit the bound fail with
    /// `ErrorKind::SearchBudgetExceeded`.  `None` means unbounded.
    pub max_expansions: Option<usize>,
}
