use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// A statement other than CREATE TABLE while unsupported statements are not skipped
    UnsupportedStatement(String),
    /// One or more statements failed to parse
    StatementsFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnsupportedStatement(stmt) => write!(f, "Unsupported statement: {}", stmt),
            CliError::StatementsFailed(count) => write!(f, "{} statements failed", count),
        }
    }
}

impl std::error::Error for CliError {}
