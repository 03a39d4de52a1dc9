/// Errors returned by catalog operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    TableNotFound(String),
    InvalidColumnDefinition {
        column_name: String,
        definition: String,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::TableNotFound(name) => write!(f, "Table '{}' not found", name),
            CatalogError::InvalidColumnDefinition { column_name, definition } => {
                write!(f, "Cannot parse definition of column '{}': '{}'", column_name, definition)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
