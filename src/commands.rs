//! Command implementations behind the `engraver` binary.

use anyhow::{bail, Context, Result};
use engraver_core::{Document, Material, ShapeSpec};
use engraver_designer::{ProgramEmitter, ToolpathGenerator};
use engraver_settings::{CutSettings, EngraverConfig};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve the configuration in effect.
///
/// An explicit path must exist. Without one the platform default location is
/// used, falling back to built-in defaults when no file is there.
pub fn load_config(path: Option<&Path>) -> Result<EngraverConfig> {
    match path {
        Some(path) => EngraverConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let path = EngraverConfig::default_path()?;
            EngraverConfig::load_or_default(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
    }
}

fn load_design(path: &Path) -> Result<Document> {
    Document::load(path).with_context(|| format!("Failed to load design {}", path.display()))
}

fn save_design(document: &Document, path: &Path) -> Result<()> {
    document
        .save(path)
        .with_context(|| format!("Failed to save design {}", path.display()))
}

/// Create an empty design on a new workpiece and save it to `output`.
pub fn new_document(output: &Path, width: f64, height: f64, thickness: f64) -> Result<Document> {
    let material = Material::new(width, height, thickness)?;
    let document = Document::new(material);
    save_design(&document, output)?;
    info!(path = %output.display(), width, height, thickness, "created design");
    Ok(document)
}

/// Append `shape` to the design at `path`.
///
/// The shape list is rebuilt and handed back to the document as a whole.
pub fn add_shape(path: &Path, shape: ShapeSpec) -> Result<Document> {
    let mut document = load_design(path)?;
    let tag = shape.tag();
    let mut shapes = document.shapes().to_vec();
    shapes.push(shape);
    document.replace_shapes(shapes);
    save_design(&document, path)?;
    info!(path = %path.display(), shape = tag, count = document.shapes().len(), "added shape");
    Ok(document)
}

/// Replace the workpiece of the design at `path`, keeping its shapes.
pub fn set_material(path: &Path, width: f64, height: f64, thickness: f64) -> Result<Document> {
    let material = Material::new(width, height, thickness)?;
    let mut document = load_design(path)?;
    document.set_material(material);
    save_design(&document, path)?;
    info!(path = %path.display(), width, height, thickness, "updated material");
    Ok(document)
}

/// Export the program for the design at `input`.
///
/// Writes to `output` when given, otherwise returns the program text for the
/// caller to print. `output` must not name the design file itself.
pub fn export(
    input: &Path,
    output: Option<&Path>,
    settings: CutSettings,
) -> Result<Option<String>> {
    if let Some(output) = output {
        if same_file(input, output) {
            bail!(
                "Refusing to write G-code over the design file {}",
                input.display()
            );
        }
    }

    let document = load_design(input)?;
    let emitter = ProgramEmitter::new(settings);
    debug!(shapes = document.shapes().len(), "generating program");

    match output {
        Some(output) => {
            emitter
                .export_to_file(&document, output)
                .with_context(|| format!("Failed to export G-code {}", output.display()))?;
            info!(input = %input.display(), output = %output.display(), "exported program");
            Ok(None)
        }
        None => Ok(Some(emitter.emit(&document))),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Default output path: the input path with a `.gcode` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("gcode")
}

/// Overview of a design, printed by `engraver info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSummary {
    pub material: Material,
    pub rectangles: usize,
    pub circles: usize,
    pub moves: usize,
    pub cut_length: f64,
}

impl DocumentSummary {
    pub fn new(document: &Document, settings: CutSettings) -> Self {
        let mut rectangles = 0;
        let mut circles = 0;
        for shape in document.shapes() {
            match shape {
                ShapeSpec::Rect { .. } => rectangles += 1,
                ShapeSpec::Circle { .. } => circles += 1,
            }
        }

        let toolpaths = ToolpathGenerator::new(settings).generate_all(document.shapes());
        Self {
            material: *document.material(),
            rectangles,
            circles,
            moves: toolpaths.iter().map(|t| t.len()).sum(),
            cut_length: toolpaths.iter().map(|t| t.cut_length()).sum(),
        }
    }
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Material:   {:.3} x {:.3} x {:.3} mm",
            self.material.width(),
            self.material.height(),
            self.material.thickness()
        )?;
        writeln!(
            f,
            "Shapes:     {} ({} rect, {} circle)",
            self.rectangles + self.circles,
            self.rectangles,
            self.circles
        )?;
        writeln!(f, "Moves:      {}", self.moves)?;
        write!(f, "Cut length: {:.3} mm", self.cut_length)
    }
}

/// Summarize the design at `input`.
pub fn info(input: &Path, settings: CutSettings) -> Result<DocumentSummary> {
    let document = load_design(input)?;
    Ok(DocumentSummary::new(&document, settings))
}
