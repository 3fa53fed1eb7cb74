//! G-code generation from toolpaths.
//!
//! Output layout:
//!
//! ```text
//! G90 ; absolute positioning
//! G21 ; units in mm
//! G0 Z5.000 ; safe height
//! G0 X0.000 Y0.000           <- one block per shape, in document order
//! G1 Z0.000 F300.000
//! G1 X10.000 Y0.000 F600.000
//! ...
//! G0 Z5.000
//! G0 Z5.000
//! M5 ; spindle stop
//! M2 ; program end
//! ```

use crate::toolpath::{Move, Toolpath, ToolpathGenerator};
use engraver_core::{Document, DocumentError, DocumentResult};
use engraver_settings::CutSettings;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Renders documents as G-code programs.
#[derive(Debug, Clone, Default)]
pub struct ProgramEmitter {
    generator: ToolpathGenerator,
}

impl ProgramEmitter {
    /// Creates an emitter using the given cutting parameters.
    pub fn new(settings: CutSettings) -> Self {
        Self {
            generator: ToolpathGenerator::new(settings),
        }
    }

    pub fn settings(&self) -> &CutSettings {
        self.generator.settings()
    }

    /// Program lines, without line terminators.
    pub fn lines(&self, document: &Document) -> Vec<String> {
        let toolpaths = self.generator.generate_all(document.shapes());
        let move_count: usize = toolpaths.iter().map(Toolpath::len).sum();

        let mut lines = Vec::with_capacity(move_count + 6);
        lines.extend(self.preamble());
        for toolpath in &toolpaths {
            lines.extend(toolpath.moves.iter().map(format_move));
        }
        lines.extend(self.postamble());
        lines
    }

    /// Renders the complete program text, one instruction per line.
    pub fn emit(&self, document: &Document) -> String {
        let mut program = self.lines(document).join("\n");
        program.push('\n');
        program
    }

    /// Writes the program for `document` to `writer`.
    pub fn write_program<W: Write>(
        &self,
        document: &Document,
        mut writer: W,
    ) -> DocumentResult<()> {
        let program = self.emit(document);
        writer
            .write_all(program.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(DocumentError::stream)
    }

    /// Exports the program for `document` to the file at `path`.
    pub fn export_to_file(
        &self,
        document: &Document,
        path: impl AsRef<Path>,
    ) -> DocumentResult<()> {
        let path = path.as_ref();
        let program = self.emit(document);
        let file = File::create(path).map_err(|e| DocumentError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(program.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| DocumentError::io(path, e))?;

        debug!(
            path = %path.display(),
            shapes = document.shapes().len(),
            bytes = program.len(),
            "exported G-code program"
        );
        Ok(())
    }

    fn preamble(&self) -> [String; 3] {
        [
            "G90 ; absolute positioning".to_string(),
            "G21 ; units in mm".to_string(),
            format!("G0 Z{} ; safe height", fmt_num(self.settings().safe_height)),
        ]
    }

    fn postamble(&self) -> [String; 3] {
        [
            format!("G0 Z{}", fmt_num(self.settings().safe_height)),
            "M5 ; spindle stop".to_string(),
            "M2 ; program end".to_string(),
        ]
    }
}

fn format_move(mv: &Move) -> String {
    match *mv {
        Move::Rapid { x, y } => format!("G0 X{} Y{}", fmt_num(x), fmt_num(y)),
        Move::Plunge { z, feed } => format!("G1 Z{} F{}", fmt_num(z), fmt_num(feed)),
        Move::Linear { x, y, feed } => {
            format!("G1 X{} Y{} F{}", fmt_num(x), fmt_num(y), fmt_num(feed))
        }
        Move::Retract { z } => format!("G0 Z{}", fmt_num(z)),
    }
}

/// Fixed-point with three decimals; values that round to zero print as `0.000`.
fn fmt_num(value: f64) -> String {
    let text = format!("{:.3}", value);
    if text == "-0.000" {
        "0.000".to_string()
    } else {
        text
    }
}
