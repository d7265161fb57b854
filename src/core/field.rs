use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid cell coordinates, 0-indexed.
///
/// Ordering is lexicographic on `(x, y)`, which keeps collision grouping stable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`; saturates instead of overflowing.
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Rectangular grid with cells `0..width` by `0..height`. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    width: i64,
    height: i64,
}

impl Field {
    /// Create a field after validating that both dimensions are positive.
    ///
    /// Errors:
    /// - `Error::InvalidField` if `width <= 0` or `height <= 0`.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidField { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// True iff `p` lies in `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Resolve a move from `from` to `to` axis by axis: an axis whose target is
    /// outside the field keeps its value from `from`.
    #[inline]
    pub fn constrain(&self, from: Position, to: Position) -> Position {
        Position {
            x: if (0..self.width).contains(&to.x) { to.x } else { from.x },
            y: if (0..self.height).contains(&to.y) { to.y } else { from.y },
        }
    }
}
