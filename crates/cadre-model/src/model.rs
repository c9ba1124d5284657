//! Parametric model variants
//!
//! Each variant declares a fixed, ordered set of strictly positive
//! dimensions. Every dimension is guarded independently at construction;
//! the first violation aborts with [`DimensionError`] and no object is
//! built. Instances are immutable afterwards; the solid they denote is
//! realized by the external modeling kernel, never here.

use serde::{Deserialize, Serialize};

/// A constructor argument failed the strictly-positive check.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("dimension '{name}' must be strictly positive, got {value}")]
pub struct DimensionError {
    /// Name of the offending dimension
    pub name: &'static str,
    /// The rejected value
    pub value: f64,
}

/// Guard for one named dimension.
fn positive(name: &'static str, value: f64) -> Result<f64, DimensionError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DimensionError { name, value })
    }
}

/// Simple rectangular box model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    length: f64,
    width: f64,
    thickness: f64,
}

impl Block {
    /// Build a box model from its three dimensions.
    ///
    /// # Errors
    /// Returns [`DimensionError`] if any dimension is not strictly positive.
    pub fn new(length: f64, width: f64, thickness: f64) -> Result<Self, DimensionError> {
        Ok(Self {
            length: positive("length", length)?,
            width: positive("width", width)?,
            thickness: positive("thickness", thickness)?,
        })
    }

    /// Length along the base workplane's X axis.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Width along the base workplane's Y axis.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extrusion thickness.
    #[inline]
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }
}

/// L-shaped block built as a base block with a second block feature
/// unioned onto it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LShapedBlock {
    length: f64,
    width: f64,
    thickness: f64,
    feature_b_length: f64,
    feature_b_width: f64,
    feature_b_thickness: f64,
}

impl LShapedBlock {
    /// Build an L-shaped block from base and feature dimensions.
    ///
    /// # Errors
    /// Returns [`DimensionError`] if any dimension is not strictly positive.
    pub fn new(
        length: f64,
        width: f64,
        thickness: f64,
        feature_b_length: f64,
        feature_b_width: f64,
        feature_b_thickness: f64,
    ) -> Result<Self, DimensionError> {
        Ok(Self {
            length: positive("length", length)?,
            width: positive("width", width)?,
            thickness: positive("thickness", thickness)?,
            feature_b_length: positive("feature_b_length", feature_b_length)?,
            feature_b_width: positive("feature_b_width", feature_b_width)?,
            feature_b_thickness: positive("feature_b_thickness", feature_b_thickness)?,
        })
    }

    /// Base block length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Base block width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Base block thickness.
    #[inline]
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Feature block length.
    #[inline]
    #[must_use]
    pub fn feature_b_length(&self) -> f64 {
        self.feature_b_length
    }

    /// Feature block width.
    #[inline]
    #[must_use]
    pub fn feature_b_width(&self) -> f64 {
        self.feature_b_width
    }

    /// Feature block thickness.
    #[inline]
    #[must_use]
    pub fn feature_b_thickness(&self) -> f64 {
        self.feature_b_thickness
    }
}

/// L-shaped solid produced by a single extrusion of an L profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LShapedExtrude {
    length: f64,
    width: f64,
    thickness: f64,
    side_width: f64,
    side_thickness: f64,
}

impl LShapedExtrude {
    /// Build an L-shaped extrusion from its profile dimensions.
    ///
    /// # Errors
    /// Returns [`DimensionError`] if any dimension is not strictly positive.
    pub fn new(
        length: f64,
        width: f64,
        thickness: f64,
        side_width: f64,
        side_thickness: f64,
    ) -> Result<Self, DimensionError> {
        Ok(Self {
            length: positive("length", length)?,
            width: positive("width", width)?,
            thickness: positive("thickness", thickness)?,
            side_width: positive("side_width", side_width)?,
            side_thickness: positive("side_thickness", side_thickness)?,
        })
    }

    /// Horizontal length of the L profile.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Vertical length of the L profile.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extrusion thickness.
    #[inline]
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Height of the upright side of the L.
    #[inline]
    #[must_use]
    pub fn side_width(&self) -> f64 {
        self.side_width
    }

    /// Wall thickness of the L's sides.
    #[inline]
    #[must_use]
    pub fn side_thickness(&self) -> f64 {
        self.side_thickness
    }
}

/// Fieldless discriminant of the model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelVariant {
    /// Simple rectangular box
    Block,
    /// Block with a unioned feature block
    LShapedBlock,
    /// Single-extrusion L profile
    LShapedExtrude,
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModelVariant::Block => "Block",
            ModelVariant::LShapedBlock => "LShapedBlock",
            ModelVariant::LShapedExtrude => "LShapedExtrude",
        };
        write!(f, "{name}")
    }
}

/// Placement of a realized solid relative to the global frame.
///
/// Every in-scope variant is built at the canonical placement; the field
/// exists so a future offset-carrying variant feeds straight into the
/// locational equivalence check.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    /// Origin of the solid's base workplane
    pub origin: [f64; 3],
}

impl Placement {
    /// The canonical placement: origin at zero, axes aligned.
    #[inline]
    #[must_use]
    pub fn canonical() -> Self {
        Self::default()
    }
}

/// Closed family of parametric models.
///
/// Validated at construction of the wrapped variant; carries no further
/// state and is immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParametricModel {
    /// Simple rectangular box
    Block(Block),
    /// Block with a unioned feature block
    LShapedBlock(LShapedBlock),
    /// Single-extrusion L profile
    LShapedExtrude(LShapedExtrude),
}

impl ParametricModel {
    /// Variant discriminant.
    #[inline]
    #[must_use]
    pub fn variant(&self) -> ModelVariant {
        match self {
            ParametricModel::Block(_) => ModelVariant::Block,
            ParametricModel::LShapedBlock(_) => ModelVariant::LShapedBlock,
            ParametricModel::LShapedExtrude(_) => ModelVariant::LShapedExtrude,
        }
    }

    /// Declared dimensions as ordered `(name, value)` pairs.
    ///
    /// The order is the declaration order of the variant's constructor,
    /// so traces and comparisons are deterministic.
    #[must_use]
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match self {
            ParametricModel::Block(m) => vec![
                ("length", m.length()),
                ("width", m.width()),
                ("thickness", m.thickness()),
            ],
            ParametricModel::LShapedBlock(m) => vec![
                ("length", m.length()),
                ("width", m.width()),
                ("thickness", m.thickness()),
                ("feature_b_length", m.feature_b_length()),
                ("feature_b_width", m.feature_b_width()),
                ("feature_b_thickness", m.feature_b_thickness()),
            ],
            ParametricModel::LShapedExtrude(m) => vec![
                ("length", m.length()),
                ("width", m.width()),
                ("thickness", m.thickness()),
                ("side_width", m.side_width()),
                ("side_thickness", m.side_thickness()),
            ],
        }
    }

    /// Placement of the realized solid. Canonical for every current
    /// variant.
    #[inline]
    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::canonical()
    }
}

impl From<Block> for ParametricModel {
    fn from(model: Block) -> Self {
        ParametricModel::Block(model)
    }
}

impl From<LShapedBlock> for ParametricModel {
    fn from(model: LShapedBlock) -> Self {
        ParametricModel::LShapedBlock(model)
    }
}

impl From<LShapedExtrude> for ParametricModel {
    fn from(model: LShapedExtrude) -> Self {
        ParametricModel::LShapedExtrude(model)
    }
}
