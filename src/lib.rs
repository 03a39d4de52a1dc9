//! pgschema - PostgreSQL CREATE TABLE parsing for schema comparison
//!
//! This is the root crate that re-exports all components.

pub use pgschema_catalog as catalog;
pub use pgschema_parser as parser;
