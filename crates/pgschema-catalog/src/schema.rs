//! Schema - Named collection of tables

use crate::errors::CatalogError;
use crate::table::Table;
use std::collections::HashMap;

/// Default schema name used by PostgreSQL dumps.
pub const DEFAULT_SCHEMA: &str = "public";

/// A schema - named collection of tables built up statement by statement.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: String,
    tables: HashMap<String, Table>,
}

impl Schema {
    /// Create a new empty schema
    pub fn new(name: String) -> Self {
        Schema { name, tables: HashMap::new() }
    }

    /// Get a table by name, creating an empty one if it does not exist yet
    pub fn get_table(&mut self, name: &str) -> &mut Table {
        self.tables.entry(name.to_string()).or_insert_with(|| Table::new(name.to_string()))
    }

    /// Look up an existing table
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Look up an existing table, failing if it is absent
    pub fn table(&self, name: &str) -> Result<&Table, CatalogError> {
        self.tables.get(name).ok_or_else(|| CatalogError::TableNotFound(name.to_string()))
    }

    /// Check if table exists in this schema
    pub fn table_exists(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// List all table names, sorted
    pub fn list_tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        names
    }

    /// Iterate over tables sorted by name
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        let mut tables: Vec<&Table> = self.tables.values().collect();
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        tables.into_iter()
    }

    /// Get the number of tables in this schema
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if schema is empty (no tables)
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new(DEFAULT_SCHEMA.to_string())
    }
}
