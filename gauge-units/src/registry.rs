//! Unit registry: the mutable `symbol -> definition` store consulted when
//! resolving unit symbols

use tracing::{debug, trace};
use crate::{Dimension, Scalar, SymbolTable, UnitDefinition, UnitError};
use crate::definition::default_tex_repr;
use crate::dimension::validate_dimensions;

/// Anything that can produce the numeric value of itself expressed in base
/// units. Plain numbers yield themselves; quantities reduce to base first.
pub trait BaseValue {
    fn base_value(&self) -> f64;
}

impl BaseValue for f64 {
    fn base_value(&self) -> f64 {
        *self
    }
}

impl<T: BaseValue + ?Sized> BaseValue for &T {
    fn base_value(&self) -> f64 {
        (**self).base_value()
    }
}

/// Registry of unit symbols
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRegistry {
    lut: SymbolTable,
}

impl UnitRegistry {
    /// Create a registry from `lut` (or an empty table). With
    /// `add_default_symbols`, the default table is merged in afterwards and
    /// wins over same-keyed entries of `lut`.
    pub fn new(add_default_symbols: bool, lut: Option<SymbolTable>) -> Self {
        let defaults = add_default_symbols.then(SymbolTable::defaults);
        Self::from_tables(lut, defaults)
    }

    /// Like [`UnitRegistry::new`], with a caller-supplied default table
    pub fn from_tables(lut: Option<SymbolTable>, defaults: Option<&SymbolTable>) -> Self {
        let mut lut = lut.unwrap_or_default();
        if let Some(defaults) = defaults {
            lut.merge(defaults);
        }
        trace!(symbols = lut.len(), "unit registry created");
        UnitRegistry { lut }
    }

    /// A registry with no symbols at all
    pub fn empty() -> Self {
        Self::new(false, None)
    }

    /// Get the definition of `symbol`
    pub fn lookup(&self, symbol: &str) -> Result<&UnitDefinition, UnitError> {
        self.lut.get(symbol)
            .ok_or_else(|| UnitError::symbol_not_found(symbol, "look up"))
    }

    pub fn get(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.lut.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.lut.contains(symbol)
    }

    /// Add a symbol to this registry, replacing any previous definition.
    ///
    /// `base_value` and `offset` must be finite floats; integers are
    /// rejected. `dimensions` must pass [`validate_dimensions`]. Without a
    /// `tex_repr` the symbol is wrapped as `\rm{symbol}`. Nothing is
    /// inserted unless every check passes.
    ///
    /// `offset` is a concrete `Option<Scalar>` so that a bare `None` needs
    /// no type annotation; [`UnitRegistry::add_affine`] takes the offset as
    /// any number.
    pub fn add(
        &mut self,
        symbol: &str,
        base_value: impl Into<Scalar>,
        dimensions: Dimension,
        tex_repr: Option<&str>,
        offset: Option<Scalar>,
    ) -> Result<(), UnitError> {
        let base_value = base_value.into().require_float("base_value")?;
        let offset = match offset {
            Some(offset) => offset.require_float("offset value")?,
            None => 0.0,
        };

        validate_dimensions(&dimensions)?;

        let tex_repr = match tex_repr {
            Some(tex) => tex.to_string(),
            None => default_tex_repr(symbol),
        };

        debug!(symbol, base_value, offset, %dimensions, "adding unit symbol");
        self.lut.insert(symbol, UnitDefinition::with_offset(base_value, dimensions, offset, tex_repr));
        Ok(())
    }

    /// [`UnitRegistry::add`] for an affine unit such as a temperature scale
    pub fn add_affine(
        &mut self,
        symbol: &str,
        base_value: impl Into<Scalar>,
        dimensions: Dimension,
        tex_repr: Option<&str>,
        offset: impl Into<Scalar>,
    ) -> Result<(), UnitError> {
        self.add(symbol, base_value, dimensions, tex_repr, Some(offset.into()))
    }

    /// Remove the entry for `symbol`
    pub fn remove(&mut self, symbol: &str) -> Result<(), UnitError> {
        match self.lut.remove(symbol) {
            Some(_) => {
                debug!(symbol, "removed unit symbol");
                Ok(())
            }
            None => Err(UnitError::symbol_not_found(symbol, "remove")),
        }
    }

    /// Change the base value of `symbol`, keeping its dimensions, offset and
    /// display string. Used to rescale code units once the physical scale of
    /// a dataset is known.
    pub fn modify(&mut self, symbol: &str, base_value: impl BaseValue) -> Result<(), UnitError> {
        let definition = self.lut.get_mut(symbol)
            .ok_or_else(|| UnitError::symbol_not_found(symbol, "modify"))?;

        let value = base_value.base_value();
        if !value.is_finite() {
            return Err(UnitError::unit_parse(format!(
                "base_value ({}) must be a finite float.",
                value
            )));
        }

        debug!(symbol, old = definition.base_value, new = value, "modified unit symbol");
        definition.base_value = value;
        Ok(())
    }

    /// Registered symbols, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.lut.keys()
    }

    /// Get all unit symbols
    pub fn symbols(&self) -> Vec<&str> {
        self.keys().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnitDefinition)> + '_ {
        self.lut.iter()
    }

    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// The underlying table
    pub fn table(&self) -> &SymbolTable {
        &self.lut
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new(true, None)
    }
}
