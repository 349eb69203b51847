//! Guess-in-region invariant: every guess is still a candidate.

use super::Invariant;
use crate::HalvingStrategy;

/// Invariant: the last guess lies inside the bounding region.
///
/// Holds for the starting position (the region is the whole grid) and
/// for every midpoint after that.
pub struct GuessInRegionInvariant;

impl Invariant<HalvingStrategy> for GuessInRegionInvariant {
    fn holds(strategy: &HalvingStrategy) -> bool {
        strategy.region().contains(strategy.last_guess())
    }

    fn description() -> &'static str {
        "Last guess lies inside the bounding region"
    }
}
