// Contract projection: heuristic terms and historical comparables.

pub mod comparables;
pub mod contract;
