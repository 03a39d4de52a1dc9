use crate::errors::CatalogError;

/// Column of a table, as declared in its `CREATE TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    /// Type text exactly as written, e.g. `numeric(10,2)` or `character varying(100)`
    pub data_type: Option<String>,
    pub default_value: Option<String>,
    pub nullable: bool,
}

impl Column {
    pub fn new(name: String) -> Self {
        Column { name, data_type: None, default_value: None, nullable: true }
    }

    /// Interpret the text that follows the column name in a column clause.
    ///
    /// Recognizes a trailing `NOT NULL` or `NULL`, then a `DEFAULT <expr>`
    /// suffix (`DEFAULT NULL` is a default, not a nullability marker), and keeps whatever precedes them as the type. A definition
    /// without a type (`NOT NULL`, `DEFAULT 0`) is rejected. Parsing the
    /// same text twice leaves the column unchanged.
    pub fn parse_definition(&mut self, definition: &str) -> Result<(), CatalogError> {
        let mut remainder = definition.trim();
        let mut nullable = true;
        let mut default_value = None;

        if let Some(rest) = strip_keyword_suffix(remainder, &["NOT", "NULL"]) {
            remainder = rest;
            nullable = false;
        } else if let Some(rest) = strip_keyword_suffix(remainder, &["NULL"]) {
            // `DEFAULT NULL` is a default expression, not a nullability marker
            if strip_keyword_suffix(rest, &["DEFAULT"]).is_none() {
                remainder = rest;
            }
        }

        if let Some((data_type, default)) = split_default(remainder) {
            remainder = data_type;
            default_value = Some(default.to_string());
        }

        if remainder.is_empty() || starts_with_keyword(remainder) {
            return Err(CatalogError::InvalidColumnDefinition {
                column_name: self.name.clone(),
                definition: definition.to_string(),
            });
        }

        self.data_type = Some(remainder.to_string());
        self.default_value = default_value;
        self.nullable = nullable;
        tracing::trace!(column = %self.name, data_type = %remainder, nullable, "parsed column definition");
        Ok(())
    }

    /// Render the column back as a column clause.
    pub fn full_definition(&self) -> String {
        let mut sql = self.name.clone();
        if let Some(data_type) = &self.data_type {
            sql.push(' ');
            sql.push_str(data_type);
        }
        if let Some(default) = &self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        sql
    }
}

/// Keywords that can never begin a type name.
const CLAUSE_KEYWORDS: &[&str] = &["DEFAULT", "NOT", "NULL"];

fn starts_with_keyword(text: &str) -> bool {
    text.split_whitespace().next().is_some_and(|token| CLAUSE_KEYWORDS.contains(&token))
}

/// Strip trailing whole-word keywords, requiring non-empty text before them.
fn strip_keyword_suffix<'a>(text: &'a str, keywords: &[&str]) -> Option<&'a str> {
    let mut rest = text.trim_end();
    for keyword in keywords.iter().rev() {
        let stripped = rest.strip_suffix(keyword)?;
        if !stripped.ends_with(char::is_whitespace) {
            return None;
        }
        rest = stripped.trim_end();
    }
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// Split `<type> DEFAULT <expr>` at the last whitespace-delimited `DEFAULT`.
fn split_default(text: &str) -> Option<(&str, &str)> {
    text.rmatch_indices("DEFAULT").find_map(|(idx, keyword)| {
        let before = &text[..idx];
        let after = &text[idx + keyword.len()..];
        let delimited = before.ends_with(char::is_whitespace) && after.starts_with(char::is_whitespace);
        let (data_type, default) = (before.trim(), after.trim());
        if delimited && !data_type.is_empty() && !default.is_empty() {
            Some((data_type, default))
        } else {
            None
        }
    })
}
