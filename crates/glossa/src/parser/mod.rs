//! Template and catalog parsers.
//!
//! Templates parse into a small public AST usable by external tooling;
//! catalogs decode into raw [`MessageEntry`] records.

pub mod ast;
pub mod error;
mod file;
mod template;

pub use ast::{CompiledTemplate, FieldPath, Segment};
pub use error::ParseError;
pub use file::{CatalogFormat, DESCRIPTION_KEY, MessageEntry, parse_catalog, parse_catalog_bytes};
pub use template::parse_template;
