//! Formal verification of region narrowing using the Kani model checker.
//!
//! These harnesses check narrowing for ALL regions and guesses on the
//! largest grid.

#[cfg(kani)]
mod proofs {
    use crate::{Feedback, Point, Region, TieBreak};

    fn any_region() -> Region {
        let x_min: i32 = kani::any();
        let x_max: i32 = kani::any();
        let y_min: i32 = kani::any();
        let y_max: i32 = kani::any();
        kani::assume(0 <= x_min && x_min <= x_max && x_max < 10_000);
        kani::assume(0 <= y_min && y_min <= y_max && y_max < 10_000);
        match Region::from_bounds(x_min, x_max, y_min, y_max) {
            Some(region) => region,
            None => unreachable!(),
        }
    }

    fn any_feedback() -> Feedback {
        match kani::any::<u8>() % 8 {
            0 => Feedback::Up,
            1 => Feedback::UpRight,
            2 => Feedback::Right,
            3 => Feedback::DownRight,
            4 => Feedback::Down,
            5 => Feedback::DownLeft,
            6 => Feedback::Left,
            _ => Feedback::UpLeft,
        }
    }

    /// Proves: a successful narrowing is non-empty and never widens.
    #[kani::proof]
    fn verify_narrow_is_monotonic() {
        let region = any_region();
        let guess = Point::new(kani::any(), kani::any());
        kani::assume(region.contains(guess));

        if let Ok(next) = region.narrow(guess, any_feedback()) {
            assert!(!next.is_empty(), "narrowed region is empty");
            assert!(next.is_within(&region), "narrowed region widened");
            assert!(next.contains(next.midpoint(TieBreak::Floor)));
            assert!(next.contains(next.midpoint(TieBreak::Ceil)));
        }
    }

    /// Proves: the cell implied by the token always survives narrowing.
    #[kani::proof]
    fn verify_truthful_feedback_keeps_target() {
        let region = any_region();
        let guess = Point::new(kani::any(), kani::any());
        let target = Point::new(kani::any(), kani::any());
        kani::assume(region.contains(guess) && region.contains(target));

        if let Some(feedback) = Feedback::between(guess, target) {
            match region.narrow(guess, feedback) {
                Ok(next) => assert!(next.contains(target)),
                Err(_) => panic!("truthful feedback rejected"),
            }
        }
    }
}
