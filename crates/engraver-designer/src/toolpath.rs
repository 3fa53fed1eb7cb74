//! Toolpath generation from design shapes.
//!
//! Every shape follows the same pattern: one rapid to the contour start, one
//! plunge, a cutting move to each remaining contour point, one retract.

mod segment;

pub use segment::Move;

use engraver_core::{Point, ShapeSpec};
use engraver_settings::CutSettings;

/// The ordered moves that cut one shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toolpath {
    pub moves: Vec<Move>,
}

impl Toolpath {
    /// Creates a new empty toolpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the rapid/plunge/cut/retract sequence along `points`.
    ///
    /// An empty point list yields an empty toolpath.
    pub fn along_contour(points: &[Point], settings: &CutSettings) -> Self {
        let Some((start, rest)) = points.split_first() else {
            return Self::new();
        };

        let mut toolpath = Self {
            moves: Vec::with_capacity(rest.len() + 3),
        };
        toolpath.push(Move::Rapid {
            x: start.x,
            y: start.y,
        });
        toolpath.push(Move::Plunge {
            z: settings.cut_depth,
            feed: settings.plunge_feed,
        });
        for p in rest {
            toolpath.push(Move::Linear {
                x: p.x,
                y: p.y,
                feed: settings.cut_feed,
            });
        }
        toolpath.push(Move::Retract {
            z: settings.safe_height,
        });

        toolpath
    }

    /// Adds a move to the toolpath.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// XY points visited by the toolpath, entry point first.
    pub fn points(&self) -> Vec<Point> {
        self.moves.iter().filter_map(Move::target).collect()
    }

    /// Total XY distance travelled while cutting.
    pub fn cut_length(&self) -> f64 {
        let mut length = 0.0;
        let mut position: Option<Point> = None;
        for mv in &self.moves {
            if let Some(target) = mv.target() {
                match position {
                    Some(from) if mv.is_cutting() => length += from.distance_to(&target),
                    _ => {}
                }
                position = Some(target);
            }
        }
        length
    }
}

/// Generates toolpaths from design shapes.
#[derive(Debug, Clone, Default)]
pub struct ToolpathGenerator {
    settings: CutSettings,
}

impl ToolpathGenerator {
    /// Creates a generator with the given cutting parameters.
    pub fn new(settings: CutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CutSettings {
        &self.settings
    }

    /// Generates the toolpath for one shape.
    ///
    /// Shapes are not validated; degenerate geometry produces coincident
    /// points rather than an error.
    pub fn generate(&self, shape: &ShapeSpec) -> Toolpath {
        Toolpath::along_contour(&shape.contour(), &self.settings)
    }

    /// Generates one toolpath per shape, in order.
    pub fn generate_all(&self, shapes: &[ShapeSpec]) -> Vec<Toolpath> {
        shapes.iter().map(|shape| self.generate(shape)).collect()
    }
}
