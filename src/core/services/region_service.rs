//! Rolls state-level map clicks up to the five macro-regions.

use crate::domain::{InteractionEvent, Region};

/// Every state and union territory the map can emit, with its macro-region.
const STATE_REGIONS: &[(&str, Region)] = &[
    ("Chandigarh", Region::North),
    ("Delhi", Region::North),
    ("Haryana", Region::North),
    ("Himachal Pradesh", Region::North),
    ("Jammu and Kashmir", Region::North),
    ("Ladakh", Region::North),
    ("Punjab", Region::North),
    ("Uttar Pradesh", Region::North),
    ("Uttarakhand", Region::North),
    ("Andhra Pradesh", Region::South),
    ("Karnataka", Region::South),
    ("Kerala", Region::South),
    ("Puducherry", Region::South),
    ("Tamil Nadu", Region::South),
    ("Telangana", Region::South),
    ("Arunachal Pradesh", Region::East),
    ("Assam", Region::East),
    ("Bihar", Region::East),
    ("Jharkhand", Region::East),
    ("Manipur", Region::East),
    ("Meghalaya", Region::East),
    ("Mizoram", Region::East),
    ("Nagaland", Region::East),
    ("Odisha", Region::East),
    ("Sikkim", Region::East),
    ("Tripura", Region::East),
    ("West Bengal", Region::East),
    ("Goa", Region::West),
    ("Gujarat", Region::West),
    ("Maharashtra", Region::West),
    ("Rajasthan", Region::West),
    ("Chhattisgarh", Region::Central),
    ("Madhya Pradesh", Region::Central),
];

pub struct RegionService;

impl RegionService {
    pub fn region_for(state: &str) -> Option<Region> {
        STATE_REGIONS
            .iter()
            .find(|(name, _)| *name == state)
            .map(|(_, region)| *region)
    }

    /// Returns the region label for `state`, or `state` itself when the table
    /// has no entry for it.
    pub fn roll_up(state: &str) -> &str {
        match Self::region_for(state) {
            Some(region) => region.label(),
            None => state,
        }
    }

    pub fn states_in(region: Region) -> impl Iterator<Item = &'static str> {
        STATE_REGIONS
            .iter()
            .filter(move |(_, r)| *r == region)
            .map(|(name, _)| *name)
    }

    /// Translates a state click into the region payload the selection expects.
    pub fn state_click(state: &str) -> InteractionEvent {
        InteractionEvent::region(Self::roll_up(state))
    }
}
