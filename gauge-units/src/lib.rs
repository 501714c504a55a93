//! Gauge Units - Unit Symbol Registry
//!
//! Maps unit symbols ("cm", "erg", "code_length", ...) to their physical
//! definition: a base value relative to the cgs base units, a dimension, an
//! additive offset for affine scales and a typeset display string.
//!
//! The registry is what a unit parser consults when it meets a symbol, and
//! what a quantity type uses to reduce itself to base units.
//!
//! ```
//! use gauge_units::{Dimension, UnitRegistry};
//!
//! let mut registry = UnitRegistry::new(false, None);
//! registry.add("ft", 30.48, Dimension::length(), None, None).unwrap();
//! assert_eq!(registry.lookup("ft").unwrap().tex_repr, r"\rm{ft}");
//!
//! registry.modify("ft", 30.0).unwrap();
//! registry.remove("ft").unwrap();
//! assert!(registry.lookup("ft").is_err());
//! ```

mod error;
mod dimension;
mod scalar;
mod definition;
mod table;
mod defaults;
mod registry;
mod quantity;

pub use error::UnitError;
pub use dimension::{Dimension, BASE_DIMENSIONS, validate_dimensions};
pub use scalar::Scalar;
pub use definition::{UnitDefinition, default_tex_repr};
pub use table::SymbolTable;
pub use registry::{UnitRegistry, BaseValue};
pub use quantity::{Unit, Quantity};

/// Base dimension symbol names
pub mod base_dimensions {
    pub use crate::dimension::{ANGLE, CURRENT_MKS, LENGTH, MASS, TEMPERATURE, TIME};
}
