//! Quantity type - a value with a unit resolved through a registry

use std::fmt;
use num_traits::One;
use serde::{Serialize, Deserialize};
use crate::{BaseValue, Dimension, UnitError, UnitRegistry};
use crate::dimension::{ANGLE, CURRENT_MKS, LENGTH, MASS, TEMPERATURE, TIME};

/// cgs symbol used to spell out each base dimension
const BASE_UNIT_SYMBOLS: [(&str, &str); 6] = [
    (MASS, "g"),
    (LENGTH, "cm"),
    (TIME, "s"),
    (TEMPERATURE, "K"),
    (ANGLE, "radian"),
    (CURRENT_MKS, "A"),
];

/// A unit resolved from a registry symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// The unit expression (e.g., "pc", "cm^2 g s^-2")
    pub expr: String,
    /// Factor relative to the base unit of `dimensions`
    pub base_value: f64,
    /// The dimensional signature
    pub dimensions: Dimension,
    /// Offset for affine scales like degC
    pub offset: f64,
}

impl Unit {
    /// Resolve `symbol` against `registry`
    pub fn from_symbol(symbol: &str, registry: &UnitRegistry) -> Result<Self, UnitError> {
        let def = registry.lookup(symbol)?;
        Ok(Unit {
            expr: symbol.to_string(),
            base_value: def.base_value,
            dimensions: def.dimensions.clone(),
            offset: def.offset,
        })
    }

    /// The cgs base unit for `dimensions`
    pub fn base(dimensions: Dimension) -> Self {
        let expr = if dimensions.is_dimensionless() {
            String::new()
        } else {
            dimensions.factors()
                .map(|(name, exp)| {
                    let symbol = BASE_UNIT_SYMBOLS.iter()
                        .find(|(dim, _)| *dim == name)
                        .map_or(name, |(_, symbol)| *symbol);
                    if exp.is_one() {
                        symbol.to_string()
                    } else {
                        format!("{}^{}", symbol, exp)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        };

        Unit {
            expr,
            base_value: 1.0,
            dimensions,
            offset: 0.0,
        }
    }

    /// Check if this is a base unit
    pub fn is_base(&self) -> bool {
        self.base_value == 1.0 && self.offset == 0.0
    }

    /// Convert a value in this unit to the base unit
    pub fn to_base(&self, value: f64) -> f64 {
        (value - self.offset) * self.base_value
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// A physical quantity: a numeric value with an associated unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The numeric value
    pub value: f64,
    /// The unit of measurement
    pub unit: Unit,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(value: f64, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    /// Create a quantity whose unit is a registry symbol
    pub fn from_symbol(value: f64, symbol: &str, registry: &UnitRegistry) -> Result<Self, UnitError> {
        Ok(Quantity::new(value, Unit::from_symbol(symbol, registry)?))
    }

    /// Get the dimensions of this quantity
    pub fn dimensions(&self) -> &Dimension {
        &self.unit.dimensions
    }

    /// Express this quantity in cgs base units
    pub fn in_base(&self) -> Quantity {
        Quantity::new(
            self.unit.to_base(self.value),
            Unit::base(self.unit.dimensions.clone()),
        )
    }
}

impl BaseValue for Quantity {
    fn base_value(&self) -> f64 {
        self.in_base().value
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.expr.is_empty() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> UnitRegistry {
        UnitRegistry::default()
    }

    #[test]
    fn test_from_symbol() {
        let reg = registry();
        let q = Quantity::from_symbol(2.0, "km_missing", &reg);
        assert!(q.unwrap_err().is_symbol_not_found());

        let q = Quantity::from_symbol(2.0, "m", &reg).unwrap();
        assert_eq!(q.dimensions(), &Dimension::length());
        assert_eq!(q.to_string(), "2 m");
    }

    #[test]
    fn test_in_base() {
        let reg = registry();
        let q = Quantity::from_symbol(3.0, "J", &reg).unwrap().in_base();

        assert_eq!(q.value, 3.0e7);
        assert!(q.unit.is_base());
        assert_eq!(q.unit.expr, "cm^2 g s^-2");
    }

    #[test]
    fn test_temperature_in_base() {
        let reg = registry();
        let celsius = Quantity::from_symbol(100.0, "degC", &reg).unwrap();
        assert!((celsius.in_base().value - 373.15).abs() < 1e-9);

        let fahrenheit = Quantity::from_symbol(32.0, "degF", &reg).unwrap();
        assert!((fahrenheit.in_base().value - 273.15).abs() < 1e-9);
    }

    #[test]
    fn test_base_unit_fractional_exponents() {
        let unit = Unit::base(Dimension::charge_cgs());
        assert_eq!(unit.expr, "cm^3/2 g^1/2 s^-1");
        assert_eq!(Unit::base(Dimension::dimensionless()).expr, "");
    }

    #[test]
    fn test_rescale_code_length() {
        let mut reg = registry();
        let box_size = Quantity::from_symbol(1.0, "pc", &reg).unwrap();

        reg.modify("code_length", &box_size).unwrap();
        let def = reg.lookup("code_length").unwrap();
        assert_eq!(def.base_value, 3.0856775813057e18);
        assert_eq!(def.dimensions, Dimension::length());
        assert_eq!(def.tex_repr, r"\rm{code\ length}");

        let q = Quantity::from_symbol(2.0, "code_length", &reg).unwrap();
        assert_eq!(q.base_value(), 2.0 * 3.0856775813057e18);
    }
}
