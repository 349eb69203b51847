//! Non-empty region invariant: the hidden cell always has somewhere to be.

use super::Invariant;
use crate::HalvingStrategy;

/// Invariant: the bounding region contains at least one cell.
pub struct NonEmptyRegionInvariant;

impl Invariant<HalvingStrategy> for NonEmptyRegionInvariant {
    fn holds(strategy: &HalvingStrategy) -> bool {
        !strategy.region().is_empty()
    }

    fn description() -> &'static str {
        "Bounding region is never empty"
    }
}
