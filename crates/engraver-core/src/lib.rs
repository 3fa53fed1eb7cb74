//! # Engraver Core
//!
//! The document model shared by every Engraver front end:
//!
//! - [`Material`]: validated workpiece dimensions in millimeters
//! - [`ShapeSpec`]: the closed set of shapes (rectangle, circle)
//! - [`Document`]: a material plus an ordered shape list, with JSON persistence
//!
//! All errors surface as [`DocumentError`]; nothing here logs or retries.

pub mod document;
pub mod error;
pub mod material;
pub mod shapes;

pub use document::Document;
pub use error::{DocumentError, DocumentResult};
pub use material::Material;
pub use shapes::{Point, ShapeSpec, CIRCLE_SEGMENTS};
