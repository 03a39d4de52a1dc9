use std::{
    fmt, fs,
    io::{self, Read},
};

use pgschema_catalog::Schema;
use pgschema_parser::parse_create_table;
use tracing::{debug, error};

use crate::{config::InputConfig, error::CliError};

/// Counts of statements seen while loading a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub parsed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Load Summary ===")?;
        writeln!(f, "Total statements: {}", self.parsed + self.skipped + self.failed)?;
        writeln!(f, "Parsed: {}", self.parsed)?;
        writeln!(f, "Skipped: {}", self.skipped)?;
        write!(f, "Failed: {}", self.failed)
    }
}

/// Loads DDL scripts into a schema, one statement at a time
pub struct ScriptLoader {
    schema: Schema,
    input: InputConfig,
    verbose: bool,
}

impl ScriptLoader {
    pub fn new(input: InputConfig, verbose: bool) -> Self {
        ScriptLoader { schema: Schema::default(), input, verbose }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Load DDL from a file
    pub fn load_file(&mut self, file_path: &str) -> anyhow::Result<LoadSummary> {
        let contents = fs::read_to_string(file_path)
            .map_err(|e| anyhow::anyhow!("Failed to read file '{}': {}", file_path, e))?;

        self.load_script(&contents)
    }

    /// Load DDL from stdin
    pub fn load_stdin(&mut self) -> anyhow::Result<LoadSummary> {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .map_err(|e| anyhow::anyhow!("Failed to read from stdin: {}", e))?;

        self.load_script(&contents)
    }

    /// Load a script (multiple DDL statements)
    pub fn load_script(&mut self, script: &str) -> anyhow::Result<LoadSummary> {
        let statements = split_statements(script);
        let mut summary = LoadSummary::default();

        for (idx, stmt) in statements.iter().enumerate() {
            if !is_create_table(stmt) {
                if self.input.skip_unsupported {
                    debug!(statement = idx + 1, "skipping statement that is not CREATE TABLE");
                    summary.skipped += 1;
                    continue;
                }
                let err = CliError::UnsupportedStatement(first_line(stmt).to_string());
                self.record_failure(idx, anyhow::Error::new(err), &mut summary)?;
                continue;
            }

            if self.verbose {
                eprintln!("Parsing statement {} of {}...", idx + 1, statements.len());
            }

            match parse_create_table(&mut self.schema, stmt) {
                Ok(table_name) => {
                    debug!(statement = idx + 1, table = %table_name, "loaded table");
                    summary.parsed += 1;
                }
                Err(e) => self.record_failure(idx, anyhow::Error::new(e), &mut summary)?,
            }
        }

        // stdout carries only the rendered schema
        if self.verbose || summary.failed > 0 {
            eprintln!("\n{}", summary);
        }

        Ok(summary)
    }

    fn record_failure(
        &self,
        idx: usize,
        err: anyhow::Error,
        summary: &mut LoadSummary,
    ) -> anyhow::Result<()> {
        let err = err.context(format!("Statement {} failed", idx + 1));
        if !self.input.continue_on_error {
            return Err(err);
        }
        error!("{:#}", err);
        summary.failed += 1;
        Ok(())
    }
}

fn is_create_table(stmt: &str) -> bool {
    stmt.trim_start().starts_with("CREATE TABLE")
}

fn first_line(stmt: &str) -> &str {
    stmt.trim().lines().next().unwrap_or("")
}

/// Split a DDL script into individual statements
///
/// This implementation:
/// 1. Removes single-line comments (--) and multi-line comments (/* ... */)
/// 2. Splits on semicolons outside string literals and quoted identifiers
/// 3. Keeps the terminating semicolon on each statement
/// 4. Drops statements that are empty once trimmed
pub fn split_statements(script: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current_statement = String::new();
    let mut quote: Option<char> = None;
    let mut in_multiline_comment = false;
    let mut chars = script.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_multiline_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next(); // consume '/'
                in_multiline_comment = false;
            }
            continue;
        }

        if let Some(open) = quote {
            current_statement.push(ch);
            if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '/' if chars.peek() == Some(&'*') => {
                chars.next(); // consume '*'
                in_multiline_comment = true;
            }
            '-' if chars.peek() == Some(&'-') => {
                // Skip until end of line
                for c in chars.by_ref() {
                    if c == '\n' {
                        current_statement.push(c); // preserve newline for formatting
                        break;
                    }
                }
            }
            '\'' | '"' => {
                quote = Some(ch);
                current_statement.push(ch);
            }
            ';' => {
                let trimmed = current_statement.trim();
                if !trimmed.is_empty() {
                    statements.push(format!("{};", trimmed));
                }
                current_statement.clear();
            }
            _ => current_statement.push(ch),
        }
    }

    // Add final statement if not empty
    let trimmed = current_statement.trim();
    if !trimmed.is_empty() {
        statements.push(trimmed.to_string());
    }

    statements
}
