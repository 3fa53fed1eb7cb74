//! Workpiece material.

use crate::error::{DocumentError, DocumentResult};
use serde::Serialize;

/// Workpiece stock dimensions in millimeters.
///
/// `width` and `height` are the planar (XY) size of the stock, `thickness`
/// its Z extent. All three are finite and strictly positive; the only way to
/// obtain a `Material` is through [`Material::new`], so every value in
/// circulation has been checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    width: f64,
    height: f64,
    thickness: f64,
}

impl Material {
    /// Creates a validated material.
    pub fn new(width: f64, height: f64, thickness: f64) -> DocumentResult<Self> {
        Ok(Self {
            width: check_dimension("width", width)?,
            height: check_dimension("height", height)?,
            thickness: check_dimension("thickness", thickness)?,
        })
    }

    /// Stock width (X) in mm.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Stock height (Y) in mm.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Stock thickness (Z) in mm.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

fn check_dimension(field: &'static str, value: f64) -> DocumentResult<f64> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DocumentError::Validation { field, value })
    }
}
