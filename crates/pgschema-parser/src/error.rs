use pgschema_catalog::CatalogError;

/// Prefix of every message that reports text the parser could not handle.
pub const CANNOT_PARSE_COMMAND: &str = "Cannot parse command: ";

/// Error raised while parsing a DDL statement.
///
/// The message names the table and the text the parser gave up on; errors
/// raised while parsing the column list are wrapped, and the original
/// failure is available through [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        ParseError { message: message.into(), source: Some(source.into()) }
    }

    /// `Cannot parse command: <text>`
    pub fn cannot_parse(text: &str) -> Self {
        ParseError::new(format!("{}{}", CANNOT_PARSE_COMMAND, text))
    }
}

impl From<CatalogError> for ParseError {
    fn from(err: CatalogError) -> Self {
        ParseError::with_source(err.to_string(), err)
    }
}
