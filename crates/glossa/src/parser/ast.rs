//! Public AST types for message templates.
//!
//! These types are public to enable external tooling (linters, extractors).

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A parsed template: literal text interleaved with field substitutions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    pub segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Field paths referenced by this template, in order of appearance.
    pub fn fields(&self) -> impl Iterator<Item = &FieldPath> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(path) => Some(path),
            Segment::Literal(_) => None,
        })
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied verbatim.
    Literal(String),
    /// A field substitution: `{{.Name}}`, `{{.User.Name}}` or `{{.}}`.
    Field(FieldPath),
}

/// A dotted path into template data. The empty path is the data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(pub Vec<String>);

impl FieldPath {
    /// The path naming the whole data value (`{{.}}`).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Whether this path names the whole data value.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path components.
    pub fn components(&self) -> &[String] {
        &self.0
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.0.is_empty() {
            return f.write_str(".");
        }
        for component in &self.0 {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}
