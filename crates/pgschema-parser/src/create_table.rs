//! CREATE TABLE parsing
//!
//! `parse_create_table` takes one complete statement, extracts the table
//! name, walks the column list clause by clause, and finally hands whatever
//! follows the closing parenthesis to the post-column option parser.

use pgschema_catalog::{Schema, Table};
use tracing::{debug, trace};

use crate::error::{ParseError, CANNOT_PARSE_COMMAND};
use crate::post_columns::parse_post_columns;
use crate::scanner::find_clause_end;

const CREATE_TABLE: &str = "CREATE TABLE";
const CONSTRAINT: &str = "CONSTRAINT";

/// One top-level clause of the column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clause<'a> {
    /// `CONSTRAINT <name> <definition>`
    Constraint { name: &'a str, definition: &'a str },
    /// `<name> <definition>`
    Column { name: &'a str, definition: &'a str },
    /// Nothing but whitespace
    Empty,
}

/// Parse a `CREATE TABLE` statement into `schema`.
///
/// The statement may carry its trailing `;`. Returns the name of the table
/// that was created or updated. On error, columns and constraints that were
/// already applied stay on the table.
pub fn parse_create_table(schema: &mut Schema, command: &str) -> Result<String, ParseError> {
    let (table_name, body) = extract_table_name(command)?;
    let body = remove_last_semicolon(&body);
    debug!(table = %table_name, "parsing CREATE TABLE");

    let table = schema.get_table(&table_name);
    let post_columns = parse_clauses(table, body).map_err(|err| {
        ParseError::with_source(
            format!("{}{} {} ( {}", CANNOT_PARSE_COMMAND, CREATE_TABLE, table_name, body),
            err,
        )
    })?;

    let residual = parse_post_columns(table, post_columns);
    let residual = residual.trim();
    if !residual.is_empty() {
        return Err(ParseError::new(format!(
            "Cannot parse {} '{}' - do not know how to parse '{}'",
            CREATE_TABLE, table_name, residual
        )));
    }

    debug!(
        table = %table_name,
        columns = table.column_count(),
        constraints = table.constraints.len(),
        "parsed CREATE TABLE"
    );
    Ok(table_name)
}

/// Strip the `CREATE TABLE <name> (` prefix.
///
/// Returns the table name and the statement with the matched prefix cut out.
/// The name ends at the first whitespace or `(`.
pub fn extract_table_name(command: &str) -> Result<(String, String), ParseError> {
    for (start, keyword) in command.match_indices(CREATE_TABLE) {
        let after_keyword = start + keyword.len();
        if let Some((name, prefix_len)) = match_name_and_paren(&command[after_keyword..]) {
            let mut rest = String::with_capacity(command.len());
            rest.push_str(&command[..start]);
            rest.push_str(&command[after_keyword + prefix_len..]);
            return Ok((name.trim().to_string(), rest));
        }
    }

    Err(ParseError::cannot_parse(command))
}

/// Match `<ws>+<name><ws>*(` at the start of `text`, returning the name and
/// the length of the match.
fn match_name_and_paren(text: &str) -> Option<(&str, usize)> {
    let name_start = text.len() - text.trim_start().len();
    if name_start == 0 {
        return None;
    }

    let from_name = &text[name_start..];
    let name_len = from_name.find(|c: char| c.is_whitespace() || c == '(')?;
    if name_len == 0 {
        return None;
    }

    let after_name = &from_name[name_len..];
    let gap = after_name.len() - after_name.trim_start().len();
    if after_name[gap..].starts_with('(') {
        Some((&from_name[..name_len], name_start + name_len + gap + 1))
    } else {
        None
    }
}

/// Remove the statement terminator, if present.
fn remove_last_semicolon(text: &str) -> &str {
    let text = text.trim_end();
    text.strip_suffix(';').unwrap_or(text)
}

/// Classify a clause of the column list.
pub fn classify_clause(clause: &str) -> Result<Clause<'_>, ParseError> {
    let clause = clause.trim();
    if clause.is_empty() {
        return Ok(Clause::Empty);
    }

    if let Some(rest) = clause.strip_prefix(CONSTRAINT) {
        if rest.starts_with(char::is_whitespace) {
            let (name, definition) =
                split_name(rest.trim_start()).ok_or_else(|| ParseError::cannot_parse(clause))?;
            return Ok(Clause::Constraint { name, definition });
        }
    }

    let (name, definition) = split_name(clause).ok_or_else(|| ParseError::cannot_parse(clause))?;
    Ok(Clause::Column { name, definition })
}

/// Split trimmed text into its first token and the remainder.
fn split_name(text: &str) -> Option<(&str, &str)> {
    let idx = text.find(char::is_whitespace)?;
    Some((&text[..idx], text[idx..].trim()))
}

/// Walk the column list up to its closing `)` and return the text after it.
fn parse_clauses<'a>(table: &mut Table, body: &'a str) -> Result<&'a str, ParseError> {
    let mut cursor = 0;
    loop {
        let end = find_clause_end(body, cursor)?;
        apply_clause(table, classify_clause(&body[cursor..end.offset])?)?;
        cursor = end.offset + 1;

        if end.closes_list() {
            return Ok(&body[cursor..]);
        }
    }
}

fn apply_clause(table: &mut Table, clause: Clause<'_>) -> Result<(), ParseError> {
    trace!(table = %table.name, ?clause, "applying clause");
    match clause {
        Clause::Constraint { name, definition } => {
            table.get_constraint(name).set_definition(definition);
        }
        Clause::Column { name, definition } => {
            table.get_column(name).parse_definition(definition)?;
        }
        Clause::Empty => {}
    }
    Ok(())
}
