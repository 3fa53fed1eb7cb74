//! # Engraver Designer
//!
//! Turns a [`Document`](engraver_core::Document) into a G-code program.
//!
//! ```text
//! Document ── shapes ──> ToolpathGenerator
//!          ── Toolpath per shape ──> ProgramEmitter ──> text
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use engraver_core::{Document, Material, ShapeSpec};
//! use engraver_designer::ProgramEmitter;
//!
//! let mut doc = Document::new(Material::new(200.0, 100.0, 6.0)?);
//! doc.replace_shapes(vec![ShapeSpec::rect(0.0, 0.0, 10.0, 5.0)]);
//!
//! let emitter = ProgramEmitter::default();
//! emitter.export_to_file(&doc, "part.gcode")?;
//! ```
//!
//! Emission is a pure function of the borrowed document: shapes are cut in
//! document order, there is no path reordering, no depth passes and no tool
//! compensation.

pub mod gcode_gen;
pub mod toolpath;

pub use gcode_gen::ProgramEmitter;
pub use toolpath::{Move, Toolpath, ToolpathGenerator};
