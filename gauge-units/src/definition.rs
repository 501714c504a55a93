//! Unit definition: what a symbol resolves to

use serde::{Serialize, Deserialize};
use crate::Dimension;

/// Physical definition bound to one unit symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Factor relative to the base unit of `dimensions`
    pub base_value: f64,
    /// The dimensional signature
    pub dimensions: Dimension,
    /// Additive shift for affine scales: `base = (value - offset) * base_value`
    #[serde(default)]
    pub offset: f64,
    /// Typeset display string
    pub tex_repr: String,
}

impl UnitDefinition {
    /// Create a proportional unit (no offset)
    pub fn new(base_value: f64, dimensions: Dimension, tex_repr: impl Into<String>) -> Self {
        UnitDefinition {
            base_value,
            dimensions,
            offset: 0.0,
            tex_repr: tex_repr.into(),
        }
    }

    /// Create a unit with offset (for temperature scales)
    pub fn with_offset(
        base_value: f64,
        dimensions: Dimension,
        offset: f64,
        tex_repr: impl Into<String>,
    ) -> Self {
        UnitDefinition {
            base_value,
            dimensions,
            offset,
            tex_repr: tex_repr.into(),
        }
    }

    /// Check if this unit has an offset (non-proportional conversion)
    pub fn has_offset(&self) -> bool {
        self.offset != 0.0
    }

    /// Same definition with a different base value
    pub fn rescaled(&self, base_value: f64) -> Self {
        UnitDefinition {
            base_value,
            ..self.clone()
        }
    }
}

/// Display string used when a unit is added without one
pub fn default_tex_repr(symbol: &str) -> String {
    format!(r"\rm{{{}}}", symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tex_repr() {
        assert_eq!(default_tex_repr("ft"), r"\rm{ft}");
        assert_eq!(default_tex_repr("code_length"), r"\rm{code_length}");
    }

    #[test]
    fn test_rescaled_keeps_other_fields() {
        let celsius = UnitDefinition::with_offset(1.0, Dimension::temperature(), -273.15, r"^\circ\rm{C}");
        let rescaled = celsius.rescaled(2.0);

        assert_eq!(rescaled.base_value, 2.0);
        assert_eq!(rescaled.dimensions, celsius.dimensions);
        assert_eq!(rescaled.offset, celsius.offset);
        assert_eq!(rescaled.tex_repr, celsius.tex_repr);
        assert!(rescaled.has_offset());
    }
}
