//! Design document and its file format.
//!
//! A design file is a single JSON object:
//!
//! ```text
//! {
//!   "material": { "width": 200.0, "height": 150.0, "thickness": 6.0 },
//!   "shapes": [
//!     { "type": "rect", "x": 0.0, "y": 0.0, "w": 10.0, "h": 5.0 },
//!     { "type": "circle", "cx": 50.0, "cy": 50.0, "r": 10.0 }
//!   ]
//! }
//! ```
//!
//! Loading is all-or-nothing: a shape with an unrecognized `type` fails the
//! whole load instead of being dropped.

use crate::error::{DocumentError, DocumentResult};
use crate::material::Material;
use crate::shapes::ShapeSpec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A workpiece and the ordered shapes laid out on it.
///
/// Shape order is emission order. The editing surface hands over a complete
/// shape list through [`Document::replace_shapes`] before every save or
/// export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    material: Material,
    shapes: Vec<ShapeSpec>,
}

/// On-disk layout, parsed before any validation happens.
#[derive(Deserialize)]
struct DesignFile {
    material: MaterialData,
    #[serde(default)]
    shapes: Vec<Value>,
}

#[derive(Deserialize)]
struct MaterialData {
    width: f64,
    height: f64,
    thickness: f64,
}

impl Document {
    /// Creates a document with no shapes.
    pub fn new(material: Material) -> Self {
        Self {
            material,
            shapes: Vec::new(),
        }
    }

    /// Creates a document from a material and a shape list.
    pub fn with_shapes(material: Material, shapes: Vec<ShapeSpec>) -> Self {
        Self { material, shapes }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn shapes(&self) -> &[ShapeSpec] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Replaces the whole shape list with a fresh snapshot.
    pub fn replace_shapes(&mut self, shapes: Vec<ShapeSpec>) {
        self.shapes = shapes;
    }

    /// Encodes the document as pretty-printed JSON.
    ///
    /// The output depends only on the document's contents, so repeated calls
    /// on an unchanged document return identical text.
    pub fn serialize(&self) -> DocumentResult<String> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    /// Decodes and validates a document from JSON text.
    pub fn deserialize(text: &str) -> DocumentResult<Self> {
        let value: Value = serde_json::from_str(text).map_err(DocumentError::Format)?;
        // Derived struct decoding also accepts arrays; the format only allows objects.
        expect_object(&value, "design file")?;
        if let Some(material) = value.get("material") {
            expect_object(material, "field `material`")?;
        }
        let file: DesignFile =
            serde_json::from_value(value).map_err(|e| DocumentError::Schema(e.to_string()))?;

        let material = Material::new(
            file.material.width,
            file.material.height,
            file.material.thickness,
        )?;

        let shapes = file
            .shapes
            .into_iter()
            .enumerate()
            .map(|(index, shape)| decode_shape(index, shape))
            .collect::<DocumentResult<Vec<_>>>()?;

        Ok(Self { material, shapes })
    }

    /// Writes the serialized document, followed by a newline, to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> DocumentResult<()> {
        let text = self.serialize()?;
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(DocumentError::stream)
    }

    /// Reads a document from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> DocumentResult<Self> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(DocumentError::stream)?;
        Self::deserialize(&text)
    }

    /// Saves the document to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let path = path.as_ref();
        // Encode first so a serialization failure never truncates the old file.
        let text = self.serialize()?;
        let file = File::create(path).map_err(|e| DocumentError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.write_all(b"\n"))
            .and_then(|_| writer.flush())
            .map_err(|e| DocumentError::io(path, e))
    }

    /// Loads a document from `path`.
    pub fn load(path: impl AsRef<Path>) -> DocumentResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DocumentError::io(path, e))?;
        let mut text = String::new();
        BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|e| DocumentError::io(path, e))?;
        Self::deserialize(&text)
    }
}

fn expect_object(value: &Value, what: &str) -> DocumentResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(DocumentError::Schema(format!(
            "{what} must be a JSON object, found {value}"
        )))
    }
}

fn decode_shape(index: usize, shape: Value) -> DocumentResult<ShapeSpec> {
    let tag = match shape.get("type") {
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => {
            return Err(DocumentError::Schema(format!(
                "shape {index}: field `type` must be a string, found {other}"
            )))
        }
        None => {
            return Err(DocumentError::Schema(format!(
                "shape {index}: missing field `type`"
            )))
        }
    };

    if !ShapeSpec::TAGS.contains(&tag.as_str()) {
        return Err(DocumentError::UnknownVariant { tag, index });
    }

    serde_json::from_value(shape)
        .map_err(|e| DocumentError::Schema(format!("shape {index} ({tag}): {e}")))
}
