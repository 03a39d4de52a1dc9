//! DDL Parser crate.
//!
//! Parses `CREATE TABLE` statements from PostgreSQL dumps into the
//! `pgschema_catalog` schema model. Clause boundaries inside the column list
//! are found by an explicit scanner that tracks parenthesis depth and quoted
//! spans, so `numeric(10,2)` or `CHECK (x IN ('a,b'))` stay in one clause.

mod create_table;
mod error;
mod post_columns;
mod scanner;

pub use create_table::{classify_clause, extract_table_name, parse_create_table, Clause};
pub use error::{ParseError, CANNOT_PARSE_COMMAND};
pub use post_columns::parse_post_columns;
pub use scanner::{find_clause_end, find_closing_paren, ClauseEnd, Terminator};
