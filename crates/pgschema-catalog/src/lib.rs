//! Catalog - Schema Model
//!
//! Provides the tables, columns and constraints that the DDL parser fills in.
//! Every lookup is lookup-or-create: asking a schema for a table, or a table
//! for a column or constraint, returns the existing entry or a fresh empty one.

mod column;
mod constraint;
pub mod errors;
mod schema;
mod table;

pub use column::Column;
pub use constraint::Constraint;
pub use errors::CatalogError;
pub use schema::{Schema, DEFAULT_SCHEMA};
pub use table::Table;
