use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// One exported symbol, identified by its owning module and exported name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    /// Owning module path, relative to the project root, extension stripped.
    pub module: String,
    /// Statically reachable from the entry point. Set once by reachability
    /// marking; the retention classifier must never overwrite it.
    pub is_used: bool,
    pub is_exported: bool,
    /// Present only when a bundler kept a statically-unused symbol.
    pub retention_reason: Option<String>,
}

impl SymbolInfo {
    pub fn new(module: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            module: module.to_string(),
            is_used: false,
            is_exported: true,
            retention_reason: None,
        }
    }

    /// Table key shared by the symbol table, reason map, and verdict map.
    pub fn key(&self) -> String {
        symbol_key(&self.module, &self.name)
    }
}

pub fn symbol_key(module: &str, name: &str) -> String {
    format!("{}:{}", module, name)
}

/// Every exported symbol in the project, keyed by `"module:name"`.
///
/// Iteration order is the key order, so reports and tests are deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolTable {
    symbols: BTreeMap<String, SymbolInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an exported symbol, initially unused.
    pub fn insert(&mut self, module: &str, name: &str) {
        let sym = SymbolInfo::new(module, name);
        self.symbols.insert(sym.key(), sym);
    }

    #[allow(dead_code)]
    pub fn get(&self, module: &str, name: &str) -> Option<&SymbolInfo> {
        self.symbols.get(&symbol_key(module, name))
    }

    /// Marks `(module, name)` as statically used. Returns whether the entry
    /// existed; marking is monotone, a symbol is never unmarked.
    pub fn mark_used(&mut self, module: &str, name: &str) -> bool {
        match self.symbols.get_mut(&symbol_key(module, name)) {
            Some(sym) => {
                sym.is_used = true;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> btree_map::Iter<'_, String, SymbolInfo> {
        self.symbols.iter()
    }

    pub fn values(&self) -> btree_map::Values<'_, String, SymbolInfo> {
        self.symbols.values()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = (&'a String, &'a SymbolInfo);
    type IntoIter = btree_map::Iter<'a, String, SymbolInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
