use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interpreter::{RenderError, eval_template};
use crate::parser::{CompiledTemplate, ParseError, parse_template};
use crate::types::Value;

/// The marker that opens a template action.
const ACTION_OPEN: &str = "{{";

/// A message variant: literal text with optional field substitutions.
///
/// The source is compiled once at construction, and only if it contains an
/// action. A literal template renders to its source without looking at the
/// data at all.
///
/// Templates serialize as their source string and deserialize by compiling
/// it again.
///
/// # Example
///
/// ```
/// use glossa::{Data, Template, Value};
///
/// let template = Template::parse("{{.Count}} items").unwrap();
/// let data = Value::from(Data::new().with("Count", 5));
/// assert_eq!(template.render(Some(&data)), "5 items");
///
/// let literal = Template::parse("No items").unwrap();
/// assert!(literal.is_literal());
/// assert_eq!(literal.render(None), "No items");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    source: String,
    compiled: Option<CompiledTemplate>,
}

impl Template {
    /// Compile a template source.
    pub fn parse(source: impl Into<String>) -> Result<Self, ParseError> {
        let source = source.into();
        let compiled = if source.contains(ACTION_OPEN) {
            Some(parse_template(&source)?)
        } else {
            None
        };
        Ok(Self { source, compiled })
    }

    /// The source text, exactly as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled form, absent for literal templates.
    pub fn compiled(&self) -> Option<&CompiledTemplate> {
        self.compiled.as_ref()
    }

    /// Whether the template has no actions.
    pub fn is_literal(&self) -> bool {
        self.compiled.is_none()
    }

    /// Execute the template, reporting substitution failures.
    pub fn try_render(&self, data: Option<&Value>) -> Result<Cow<'_, str>, RenderError> {
        match &self.compiled {
            None => Ok(Cow::Borrowed(&self.source)),
            Some(compiled) => eval_template(compiled, data).map(Cow::Owned),
        }
    }

    /// Execute the template. A failed substitution renders as the text of
    /// its error instead of failing.
    pub fn render(&self, data: Option<&Value>) -> Cow<'_, str> {
        self.try_render(data).unwrap_or_else(|error| {
            warn!(template = %self.source, %error, "template render failed");
            Cow::Owned(error.to_string())
        })
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.source)
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Template {
    type Error = ParseError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::parse(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}
