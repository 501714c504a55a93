//! Symbol table: the `symbol -> definition` mapping a registry owns

use std::collections::hash_map::{self, HashMap};
use std::sync::LazyLock;
use serde::{Serialize, Deserialize};
use crate::UnitDefinition;
use crate::defaults::default_unit_symbol_lut;

static DEFAULT_SYMBOLS: LazyLock<SymbolTable> = LazyLock::new(default_unit_symbol_lut);

/// Mapping from unit symbol to its definition. Inserting an existing
/// symbol replaces its definition entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: HashMap<String, UnitDefinition>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in default table, built once and never mutated
    pub fn defaults() -> &'static SymbolTable {
        &DEFAULT_SYMBOLS
    }

    pub fn get(&self, symbol: &str) -> Option<&UnitDefinition> {
        self.entries.get(symbol)
    }

    pub(crate) fn get_mut(&mut self, symbol: &str) -> Option<&mut UnitDefinition> {
        self.entries.get_mut(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Insert or overwrite, returning the replaced definition
    pub fn insert(&mut self, symbol: impl Into<String>, definition: UnitDefinition) -> Option<UnitDefinition> {
        self.entries.insert(symbol.into(), definition)
    }

    pub fn remove(&mut self, symbol: &str) -> Option<UnitDefinition> {
        self.entries.remove(symbol)
    }

    /// Copy every entry of `other` into this table, overwriting same-keyed entries
    pub fn merge(&mut self, other: &SymbolTable) {
        self.entries.extend(other.iter().map(|(s, d)| (s.to_string(), d.clone())));
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &UnitDefinition)> + '_ {
        self.entries.iter().map(|(s, d)| (s.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, UnitDefinition)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, UnitDefinition)>>(iter: I) -> Self {
        SymbolTable {
            entries: iter.into_iter().map(|(s, d)| (s.into(), d)).collect(),
        }
    }
}

impl IntoIterator for SymbolTable {
    type Item = (String, UnitDefinition);
    type IntoIter = hash_map::IntoIter<String, UnitDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;

    fn foot() -> UnitDefinition {
        UnitDefinition::new(30.48, Dimension::length(), r"\rm{ft}")
    }

    #[test]
    fn test_insert_overwrites() {
        let mut table = SymbolTable::new();
        assert!(table.insert("ft", foot()).is_none());

        let replaced = table.insert("ft", UnitDefinition::new(30.0, Dimension::length(), "ft"));
        assert_eq!(replaced, Some(foot()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ft").unwrap().tex_repr, "ft");
    }

    #[test]
    fn test_merge_overwrites_same_keys() {
        let mut table: SymbolTable = [("ft", foot()), ("x", foot())].into_iter().collect();
        let other: SymbolTable = [("ft", UnitDefinition::new(1.0, Dimension::length(), "f"))]
            .into_iter()
            .collect();

        table.merge(&other);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ft").unwrap().base_value, 1.0);
        assert_eq!(table.get("x"), Some(&foot()));
    }

    #[test]
    fn test_defaults_are_shared() {
        let a = SymbolTable::defaults();
        let b = SymbolTable::defaults();
        assert!(std::ptr::eq(a, b));
        assert!(a.contains("cm"));
    }

    #[test]
    fn test_load_from_json_config() {
        let json = r#"{
            "furlong": {
                "base_value": 20116.8,
                "dimensions": {"length": [1, 1]},
                "tex_repr": "\\rm{fur}"
            },
            "degC": {
                "base_value": 1.0,
                "dimensions": {"temperature": [1, 1]},
                "offset": -273.15,
                "tex_repr": "^\\circ\\rm{C}"
            }
        }"#;
        let table: SymbolTable = serde_json::from_str(json).unwrap();

        let furlong = table.get("furlong").unwrap();
        assert_eq!(furlong.dimensions, Dimension::length());
        assert_eq!(furlong.offset, 0.0);
        assert_eq!(table.get("degC").unwrap().offset, -273.15);
    }
}
