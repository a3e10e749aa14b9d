//! Symbol table
//!
//! Nimble has a single flat namespace: no block scoping and no shadowing.
//! Each name maps to the variable's *current* type, which becomes `Error`
//! once the variable is poisoned by a bad declaration or assignment.

use std::collections::HashMap;

use string_interner::{DefaultStringInterner, DefaultSymbol};

use crate::types::PrimitiveType;

/// Variable name to current type
#[derive(Debug, Default)]
pub struct SymbolTable {
    names: DefaultStringInterner,
    types: HashMap<DefaultSymbol, PrimitiveType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type of `name`, returning the type it replaced
    pub fn define(&mut self, name: &str, ty: PrimitiveType) -> Option<PrimitiveType> {
        let symbol = self.names.get_or_intern(name);
        self.types.insert(symbol, ty)
    }

    pub fn lookup(&self, name: &str) -> Option<PrimitiveType> {
        let symbol = self.names.get(name)?;
        self.types.get(&symbol).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Entries in the order the names were first defined
    pub fn iter(&self) -> impl Iterator<Item = (&str, PrimitiveType)> + '_ {
        self.names
            .iter()
            .filter_map(|(symbol, name)| self.types.get(&symbol).map(|ty| (name, *ty)))
    }
}

impl<S: AsRef<str>> FromIterator<(S, PrimitiveType)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (S, PrimitiveType)>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for (name, ty) in iter {
            table.define(name.as_ref(), ty);
        }
        table
    }
}
