//! Directional feedback tokens sent by the judge.
//!
//! A token names the direction of the hidden cell as seen from the
//! last guess. It splits into an optional vertical component and an
//! optional horizontal component; at least one is always present.

use crate::types::Point;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::instrument;

/// Vertical half of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertical {
    /// Target row is smaller than the guess row.
    Up,
    /// Target row is larger than the guess row.
    Down,
}

/// Horizontal half of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizontal {
    /// Target column is smaller than the guess column.
    Left,
    /// Target column is larger than the guess column.
    Right,
}

/// One of the eight directional tokens.
///
/// Parses from the short protocol form (`U`, `UR`, ...) or the long
/// form (`up`, `up-right`, ...), ignoring ASCII case. Displays as the
/// short form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Feedback {
    /// Target is straight up.
    #[strum(to_string = "U", serialize = "up")]
    #[serde(rename = "U")]
    Up,
    /// Target is up and to the right.
    #[strum(to_string = "UR", serialize = "up-right")]
    #[serde(rename = "UR")]
    UpRight,
    /// Target is straight right.
    #[strum(to_string = "R", serialize = "right")]
    #[serde(rename = "R")]
    Right,
    /// Target is down and to the right.
    #[strum(to_string = "DR", serialize = "down-right")]
    #[serde(rename = "DR")]
    DownRight,
    /// Target is straight down.
    #[strum(to_string = "D", serialize = "down")]
    #[serde(rename = "D")]
    Down,
    /// Target is down and to the left.
    #[strum(to_string = "DL", serialize = "down-left")]
    #[serde(rename = "DL")]
    DownLeft,
    /// Target is straight left.
    #[strum(to_string = "L", serialize = "left")]
    #[serde(rename = "L")]
    Left,
    /// Target is up and to the left.
    #[strum(to_string = "UL", serialize = "up-left")]
    #[serde(rename = "UL")]
    UpLeft,
}

impl Feedback {
    /// Returns the vertical component, if any.
    pub fn vertical(self) -> Option<Vertical> {
        match self {
            Feedback::Up | Feedback::UpRight | Feedback::UpLeft => Some(Vertical::Up),
            Feedback::Down | Feedback::DownRight | Feedback::DownLeft => Some(Vertical::Down),
            Feedback::Left | Feedback::Right => None,
        }
    }

    /// Returns the horizontal component, if any.
    pub fn horizontal(self) -> Option<Horizontal> {
        match self {
            Feedback::Left | Feedback::UpLeft | Feedback::DownLeft => Some(Horizontal::Left),
            Feedback::Right | Feedback::UpRight | Feedback::DownRight => Some(Horizontal::Right),
            Feedback::Up | Feedback::Down => None,
        }
    }

    /// Combines components into a token.
    ///
    /// Returns `None` when both are absent (the guess is the target).
    pub fn from_components(
        vertical: Option<Vertical>,
        horizontal: Option<Horizontal>,
    ) -> Option<Self> {
        use Horizontal::{Left, Right};
        use Vertical::{Down, Up};

        match (vertical, horizontal) {
            (Some(Up), None) => Some(Feedback::Up),
            (Some(Up), Some(Right)) => Some(Feedback::UpRight),
            (None, Some(Right)) => Some(Feedback::Right),
            (Some(Down), Some(Right)) => Some(Feedback::DownRight),
            (Some(Down), None) => Some(Feedback::Down),
            (Some(Down), Some(Left)) => Some(Feedback::DownLeft),
            (None, Some(Left)) => Some(Feedback::Left),
            (Some(Up), Some(Left)) => Some(Feedback::UpLeft),
            (None, None) => None,
        }
    }

    /// The token a truthful judge sends for `guess` when the hidden
    /// cell is `target`. `None` if they coincide.
    #[instrument]
    pub fn between(guess: Point, target: Point) -> Option<Self> {
        let vertical = match target.y.cmp(&guess.y) {
            Ordering::Less => Some(Vertical::Up),
            Ordering::Greater => Some(Vertical::Down),
            Ordering::Equal => None,
        };
        let horizontal = match target.x.cmp(&guess.x) {
            Ordering::Less => Some(Horizontal::Left),
            Ordering::Greater => Some(Horizontal::Right),
            Ordering::Equal => None,
        };
        Self::from_components(vertical, horizontal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(Feedback::from_str("UR").unwrap(), Feedback::UpRight);
        assert_eq!(Feedback::from_str("dl").unwrap(), Feedback::DownLeft);
        assert_eq!(Feedback::from_str("down-right").unwrap(), Feedback::DownRight);
        assert_eq!(Feedback::from_str("Left").unwrap(), Feedback::Left);
        assert!(Feedback::from_str("X").is_err());
        assert!(Feedback::from_str("").is_err());
    }

    #[test]
    fn test_display_is_short_form() {
        let shown: Vec<String> = Feedback::iter().map(|f| f.to_string()).collect();
        assert_eq!(shown, ["U", "UR", "R", "DR", "D", "DL", "L", "UL"]);
    }

    #[test]
    fn test_components_round_trip_for_all_tokens() {
        for feedback in Feedback::iter() {
            assert!(feedback.vertical().is_some() || feedback.horizontal().is_some());
            assert_eq!(
                Feedback::from_components(feedback.vertical(), feedback.horizontal()),
                Some(feedback)
            );
        }
    }

    #[test]
    fn test_between_uses_screen_orientation() {
        let guess = Point::new(2, 2);
        assert_eq!(Feedback::between(guess, Point::new(4, 3)), Some(Feedback::DownRight));
        assert_eq!(Feedback::between(guess, Point::new(2, 0)), Some(Feedback::Up));
        assert_eq!(Feedback::between(guess, Point::new(0, 2)), Some(Feedback::Left));
        assert_eq!(Feedback::between(guess, Point::new(0, 0)), Some(Feedback::UpLeft));
        assert_eq!(Feedback::between(guess, guess), None);
    }
}
