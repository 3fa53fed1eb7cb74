//! Shape primitives placed on the workpiece.
//!
//! Shapes are plain scalar descriptions. They are not validated: a zero-size
//! rectangle or a zero-radius circle is a legal value and produces a
//! degenerate but well-formed contour.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Number of polygon sides used to approximate a circle.
pub const CIRCLE_SEGMENTS: usize = 36;

/// Represents a 2D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A shape on the design, tagged by `type` in the design file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeSpec {
    /// Axis-aligned rectangle with its top-left corner at `(x, y)`.
    Rect { x: f64, y: f64, w: f64, h: f64 },
    /// Circle centred on `(cx, cy)`.
    Circle { cx: f64, cy: f64, r: f64 },
}

impl ShapeSpec {
    /// Tags recognized in the `type` field of a serialized shape.
    pub const TAGS: [&'static str; 2] = ["rect", "circle"];

    /// Creates a rectangle.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::Rect { x, y, w, h }
    }

    /// Creates a circle.
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::Circle { cx, cy, r }
    }

    /// The discriminant written to the `type` field.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
        }
    }

    /// Ordered contour points the tool follows, starting point first.
    ///
    /// Closed shapes repeat their starting point at the end so that cutting
    /// through every point after the first closes the loop.
    pub fn contour(&self) -> Vec<Point> {
        match *self {
            Self::Rect { x, y, w, h } => vec![
                Point::new(x, y),
                Point::new(x + w, y),
                Point::new(x + w, y + h),
                Point::new(x, y + h),
                Point::new(x, y),
            ],
            Self::Circle { cx, cy, r } => (0..=CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = 2.0 * PI * (i as f64) / (CIRCLE_SEGMENTS as f64);
                    Point::new(cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect(),
        }
    }
}
