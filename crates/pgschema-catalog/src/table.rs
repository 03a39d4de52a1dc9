use crate::{column::Column, constraint::Constraint};

/// Table definition collected from a `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    /// Columns in order of first mention
    pub columns: Vec<Column>,
    pub constraints: Vec<Constraint>,
    /// Parent list of `INHERITS (...)`, without the parentheses
    pub inherits: Option<String>,
    /// `WITH OIDS` / `WITHOUT OIDS`; None when neither was given
    pub with_oids: Option<bool>,
}

impl Table {
    pub fn new(name: String) -> Self {
        Table { name, columns: Vec::new(), constraints: Vec::new(), inherits: None, with_oids: None }
    }

    /// Get column by name, appending a new one if the table has none by that name.
    pub fn get_column(&mut self, name: &str) -> &mut Column {
        let index = match self.get_column_index(name) {
            Some(index) => index,
            None => {
                self.columns.push(Column::new(name.to_string()));
                self.columns.len() - 1
            }
        };
        &mut self.columns[index]
    }

    /// Get constraint by name, creating it if absent.
    pub fn get_constraint(&mut self, name: &str) -> &mut Constraint {
        let index = match self.constraints.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.constraints.push(Constraint::new(name.to_string()));
                self.constraints.len() - 1
            }
        };
        &mut self.constraints[index]
    }

    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }

    pub fn find_constraint(&self, name: &str) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Get column index by name.
    pub fn get_column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|col| col.name.as_str()).collect()
    }

    pub fn constraint_names(&self) -> Vec<&str> {
        self.constraints.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn set_inherits(&mut self, inherits: &str) {
        self.inherits = Some(inherits.to_string());
    }

    pub fn set_with_oids(&mut self, with_oids: bool) {
        self.with_oids = Some(with_oids);
    }

    /// The first constraint declaring a primary key, if any
    pub fn primary_key(&self) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.is_primary_key())
    }
}
