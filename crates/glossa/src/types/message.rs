use std::collections::BTreeMap;

use bon::Builder;

use crate::interpreter::MessageError;
use crate::parser::{DESCRIPTION_KEY, MessageEntry};
use crate::plural::PluralError;
use crate::types::{PluralCategory, Template};

/// A translatable message for one language.
///
/// A message maps plural categories to templates. It may define only
/// `other`, or any subset of the categories its language distinguishes. The
/// description is documentation for translators and is never rendered.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use glossa::{Message, PluralCategory, Template};
///
/// let message = Message::builder()
///     .id("cart_items")
///     .templates(BTreeMap::from([
///         (PluralCategory::One, Template::parse("{{.Count}} item").unwrap()),
///         (PluralCategory::Other, Template::parse("{{.Count}} items").unwrap()),
///     ]))
///     .build();
///
/// assert_eq!(message.select(PluralCategory::One).unwrap().source(), "{{.Count}} item");
/// assert_eq!(message.select(PluralCategory::Few).unwrap().source(), "{{.Count}} items");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct Message {
    /// Identifier, unique within a language.
    pub id: String,

    /// Context for translators.
    pub description: Option<String>,

    /// Templates keyed by plural category.
    #[builder(default)]
    pub templates: BTreeMap<PluralCategory, Template>,
}

impl Message {
    /// Build a message from category keywords and template sources.
    ///
    /// A `description` key is taken as the description when none is given
    /// explicitly. Any other key must be a CLDR category keyword, and each
    /// category may appear once.
    ///
    /// ```
    /// use glossa::{Message, MessageError};
    ///
    /// let message = Message::parse("apples", None, [("one", "an apple"), ("other", "apples")]).unwrap();
    /// assert_eq!(message.templates.len(), 2);
    ///
    /// let error = Message::parse("apples", None, [("oen", "an apple")]).unwrap_err();
    /// assert!(matches!(error, MessageError::UnknownCategory { .. }));
    /// ```
    pub fn parse<K, V>(
        id: impl Into<String>,
        description: Option<String>,
        forms: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, MessageError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut description = description;
        let mut templates = BTreeMap::new();
        for (key, source) in forms {
            let key = key.as_ref();
            if key == DESCRIPTION_KEY {
                if description.is_none() {
                    description = Some(source.into());
                }
            } else {
                let category = parse_category(key)?;
                if templates.contains_key(&category) {
                    return Err(MessageError::DuplicateCategory {
                        key: key.to_string(),
                    });
                }
                let template = Template::parse(source).map_err(|e| MessageError::Template {
                    key: key.to_string(),
                    source: e,
                })?;
                templates.insert(category, template);
            }
        }
        Ok(Message::builder()
            .id(id)
            .maybe_description(description)
            .templates(templates)
            .build())
    }

    /// Build a message from a decoded catalog entry.
    pub fn from_entry(entry: MessageEntry) -> Result<Self, MessageError> {
        Self::parse(entry.id, entry.description, entry.forms)
    }

    /// The template for exactly this category.
    pub fn template(&self, category: PluralCategory) -> Option<&Template> {
        self.templates.get(&category)
    }

    /// The template for `category`, or the `other` template when the message
    /// does not define `category`.
    pub fn select(&self, category: PluralCategory) -> Option<&Template> {
        self.template(category)
            .or_else(|| self.template(PluralCategory::Other))
    }

    /// The categories this message defines, in CLDR order.
    pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.templates.keys().copied()
    }
}

fn parse_category(key: &str) -> Result<PluralCategory, MessageError> {
    key.parse().map_err(|error| {
        let suggestions = match error {
            PluralError::UnknownCategory { suggestions, .. } => suggestions,
            _ => Vec::new(),
        };
        MessageError::UnknownCategory {
            key: key.to_string(),
            suggestions,
        }
    })
}
