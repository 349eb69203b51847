//! Core domain types: grid coordinates, grid extent, turn budget.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest accepted grid width.
pub const MIN_WIDTH: i32 = 1;
/// Largest accepted grid width.
pub const MAX_WIDTH: i32 = 10_000;
/// Smallest accepted grid height.
pub const MIN_HEIGHT: i32 = 5;
/// Largest accepted grid height.
pub const MAX_HEIGHT: i32 = 10_000;
/// Smallest accepted turn budget.
pub const MIN_TURNS: u32 = 2;
/// Largest accepted turn budget.
pub const MAX_TURNS: u32 = 100;

/// A cell on the grid.
///
/// `x` is the column, `y` is the row. Row 0 is the top of the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_new::new,
)]
#[display("{x} {y}")]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

/// Fixed width and height of the search grid.
///
/// Only constructible through [`GridExtent::new`], so every value
/// satisfies the size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridExtent {
    width: i32,
    height: i32,
}

impl GridExtent {
    /// Validates and creates a grid extent.
    #[instrument]
    pub fn new(width: i64, height: i64) -> Result<Self, GameError> {
        let width = check_range("grid width", width, MIN_WIDTH.into(), MAX_WIDTH.into())?;
        let height = check_range("grid height", height, MIN_HEIGHT.into(), MAX_HEIGHT.into())?;
        Ok(Self {
            width: width as i32,
            height: height as i32,
        })
    }

    /// Returns the grid width.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the grid height.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if the point lies on the grid.
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Validates a starting position against this grid.
    #[instrument(skip(self))]
    pub fn point(&self, x: i64, y: i64) -> Result<Point, GameError> {
        let x = check_range("start x", x, 0, i64::from(self.width) - 1)?;
        let y = check_range("start y", y, 0, i64::from(self.height) - 1)?;
        Ok(Point::new(x as i32, y as i32))
    }

    /// Number of halvings that pins both axes: `ceil(log2 W) + ceil(log2 H)`.
    pub fn halving_bound(&self) -> u32 {
        ceil_log2(self.width) + ceil_log2(self.height)
    }
}

impl std::fmt::Display for GridExtent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Number of turns the player is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnBudget(u32);

impl TurnBudget {
    /// Validates and creates a turn budget.
    #[instrument]
    pub fn new(turns: i64) -> Result<Self, GameError> {
        let turns = check_range("turn budget", turns, MIN_TURNS.into(), MAX_TURNS.into())?;
        Ok(Self(turns as u32))
    }

    /// Returns the number of turns.
    pub fn turns(&self) -> u32 {
        self.0
    }
}

/// `ceil(log2(n))` for `n >= 1`.
pub fn ceil_log2(n: i32) -> u32 {
    if n <= 1 {
        0
    } else {
        u32::BITS - ((n - 1) as u32).leading_zeros()
    }
}

fn check_range(what: &'static str, value: i64, min: i64, max: i64) -> Result<i64, GameError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(GameError::InvalidArgument {
            what,
            detail: format!("argument '{}' is outside [{}, {}]", value, min, max),
        })
    }
}
