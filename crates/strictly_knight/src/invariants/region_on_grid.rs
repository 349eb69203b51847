//! Region-on-grid invariant: narrowing never leaves the grid.

use super::Invariant;
use crate::{HalvingStrategy, Region};

/// Invariant: the bounding region lies inside the full grid.
pub struct RegionOnGridInvariant;

impl Invariant<HalvingStrategy> for RegionOnGridInvariant {
    fn holds(strategy: &HalvingStrategy) -> bool {
        strategy
            .region()
            .is_within(&Region::initial(strategy.extent()))
    }

    fn description() -> &'static str {
        "Bounding region lies inside the grid"
    }
}
