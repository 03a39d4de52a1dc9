/// Named table constraint. The definition is kept as raw text.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub definition: String,
}

impl Constraint {
    pub fn new(name: String) -> Self {
        Constraint { name, definition: String::new() }
    }

    pub fn set_definition(&mut self, definition: &str) {
        self.definition = definition.to_string();
    }

    /// Whether this constraint declares the table's primary key
    pub fn is_primary_key(&self) -> bool {
        self.definition.trim_start().to_uppercase().starts_with("PRIMARY KEY")
    }
}
