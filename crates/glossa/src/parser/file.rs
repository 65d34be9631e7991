//! Message catalog file decoding.
//!
//! A catalog maps message ids to either a single string (the `other`
//! template) or a table of category keywords to templates, optionally with a
//! `description`:
//!
//! ```json
//! {
//!   "greeting": "Hello!",
//!   "cart_items": {
//!     "description": "Items in the shopping cart",
//!     "one": "{{.Count}} item",
//!     "other": "{{.Count}} items"
//!   }
//! }
//! ```
//!
//! Decoding stops at raw strings; category keywords and template syntax are
//! checked when the entries become [`Message`](crate::Message)s.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::from_utf8;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::error::{ParseError, position_at};

/// The key holding a message's description inside a forms table.
pub const DESCRIPTION_KEY: &str = "description";

/// A catalog file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// The format for a file extension, matched case-insensitively.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "toml" => Some(CatalogFormat::Toml),
            _ => None,
        }
    }

    /// The canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Toml => "toml",
        }
    }
}

impl Display for CatalogFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.extension())
    }
}

/// One message as written in a catalog, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub id: String,
    pub description: Option<String>,
    /// Category keyword to template source, in file order. Repeated keys
    /// are kept so validation can reject them.
    pub forms: Vec<(String, String)>,
}

impl MessageEntry {
    /// The template source for a keyword, if the entry defines it.
    pub fn form(&self, key: &str) -> Option<&str> {
        self.forms
            .iter()
            .find(|(form, _)| form == key)
            .map(|(_, source)| source.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Simple(String),
    Forms(FormTable),
}

/// A forms table that keeps every key, unlike a map type.
struct FormTable(Vec<(String, String)>);

impl<'de> Deserialize<'de> for FormTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FormTableVisitor)
    }
}

struct FormTableVisitor;

impl<'de> Visitor<'de> for FormTableVisitor {
    type Value = FormTable;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("a table of plural category templates")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut forms = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, String>()? {
            forms.push(entry);
        }
        Ok(FormTable(forms))
    }
}

impl RawEntry {
    fn into_entry(self, id: String) -> MessageEntry {
        match self {
            RawEntry::Simple(source) => MessageEntry {
                id,
                description: None,
                forms: vec![("other".to_string(), source)],
            },
            RawEntry::Forms(FormTable(table)) => {
                let mut description = None;
                let mut forms = Vec::with_capacity(table.len());
                for (key, source) in table {
                    if key != DESCRIPTION_KEY {
                        forms.push((key, source));
                    } else if description.is_none() {
                        description = Some(source);
                    }
                }
                MessageEntry {
                    id,
                    description,
                    forms,
                }
            }
        }
    }
}

/// Decode a catalog into message entries, sorted by id.
///
/// Empty or whitespace-only content is an empty catalog.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<MessageEntry>, ParseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let raw: BTreeMap<String, RawEntry> = match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(|e| ParseError::Syntax {
            line: e.line(),
            column: e.column(),
            message: json_message(&e),
        })?,
        CatalogFormat::Toml => toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map_or((1, 1), |span| position_at(content, span.start));
            ParseError::Syntax {
                line,
                column,
                message: e.message().to_string(),
            }
        })?,
    };
    Ok(raw
        .into_iter()
        .map(|(id, entry)| entry.into_entry(id))
        .collect())
}

/// Decode a catalog from raw bytes, rejecting invalid UTF-8.
pub fn parse_catalog_bytes(
    bytes: &[u8],
    format: CatalogFormat,
) -> Result<Vec<MessageEntry>, ParseError> {
    let content = from_utf8(bytes).map_err(|_| ParseError::InvalidUtf8)?;
    parse_catalog(content, format)
}

/// serde_json appends " at line L column C"; the position is reported separately.
fn json_message(error: &serde_json::Error) -> String {
    let full = error.to_string();
    let suffix = format!(" at line {} column {}", error.line(), error.column());
    full.strip_suffix(&suffix).unwrap_or(&full).to_string()
}
