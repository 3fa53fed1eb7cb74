//! Tool move types.

use engraver_core::Point;

/// A single tool move.
///
/// Rapid moves travel at the controller's rapid rate and carry no feed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Move {
    /// Non-cutting XY travel at the current (safe) Z.
    Rapid { x: f64, y: f64 },
    /// Vertical engage down to `z` at the plunge feed.
    Plunge { z: f64, feed: f64 },
    /// Cutting move to `(x, y)` at the cut feed.
    Linear { x: f64, y: f64, feed: f64 },
    /// Non-cutting vertical withdrawal to `z`.
    Retract { z: f64 },
}

impl Move {
    /// XY target of the move, if it has one.
    pub fn target(&self) -> Option<Point> {
        match *self {
            Self::Rapid { x, y } | Self::Linear { x, y, .. } => Some(Point::new(x, y)),
            Self::Plunge { .. } | Self::Retract { .. } => None,
        }
    }

    /// Whether the tool is in the material during this move.
    pub fn is_cutting(&self) -> bool {
        matches!(self, Self::Linear { .. })
    }
}
