use std::collections::HashSet;

use crate::parser::Identifier;

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    vars: Vec<String>,
    monitored: Vec<String>,
    declared: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when `name` was already declared.
    pub fn declare_var(&mut self, name: &str) -> bool {
        if !self.declared.insert(name.to_string()) {
            return false;
        }
        self.vars.push(name.to_string());
        true
    }

    /// Repeated names keep their first position.
    pub fn declare_monitor(&mut self, ident: &Identifier) {
        if !self.is_monitored(&ident.name) {
            self.monitored.push(ident.name.clone());
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    pub fn is_monitored(&self, name: &str) -> bool {
        self.monitored.iter().any(|m| m == name)
    }

    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn monitored(&self) -> &[String] {
        &self.monitored
    }
}
