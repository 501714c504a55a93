//! Registry errors
//!
//! Two kinds, both fatal to the call that raised them: the registry is left
//! exactly as it was before the call.

use thiserror::Error;

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// The symbol is not registered
    #[error("Tried to {operation} the symbol '{symbol}', but it does not exist in this registry.")]
    SymbolNotFound {
        symbol: String,
        operation: &'static str,
    },

    /// Malformed unit definition or dimensionality expression
    #[error("{0}")]
    UnitParse(String),
}

impl UnitError {
    pub fn symbol_not_found(symbol: &str, operation: &'static str) -> Self {
        UnitError::SymbolNotFound {
            symbol: symbol.to_string(),
            operation,
        }
    }

    pub fn unit_parse(details: impl Into<String>) -> Self {
        UnitError::UnitParse(details.into())
    }

    /// The offending symbol, for `SymbolNotFound`
    pub fn symbol(&self) -> Option<&str> {
        match self {
            UnitError::SymbolNotFound { symbol, .. } => Some(symbol),
            UnitError::UnitParse(_) => None,
        }
    }

    pub fn is_symbol_not_found(&self) -> bool {
        matches!(self, UnitError::SymbolNotFound { .. })
    }

    pub fn is_unit_parse(&self) -> bool {
        matches!(self, UnitError::UnitParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = UnitError::symbol_not_found("ft", "remove");
        assert_eq!(
            err.to_string(),
            "Tried to remove the symbol 'ft', but it does not exist in this registry."
        );
        assert_eq!(err.symbol(), Some("ft"));
        assert!(err.is_symbol_not_found());
    }

    #[test]
    fn test_unit_parse_kind() {
        let err = UnitError::unit_parse("bad");
        assert!(err.is_unit_parse());
        assert!(!err.is_symbol_not_found());
        assert_eq!(err.symbol(), None);
    }
}
