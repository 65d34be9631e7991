//! The message catalog.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bon::Builder;
use tracing::debug;

use crate::interpreter::error::{LoadError, LoadWarning};
use crate::parser::{CatalogFormat, MessageEntry, parse_catalog, parse_catalog_bytes};
use crate::plural::{PluralRule, PluralRules, normalize_locale};
use crate::types::{Message, PluralCategory};

/// Messages and plural rules for a set of languages.
///
/// A bundle is filled once at startup and only read afterwards; share it by
/// reference (or behind an `Arc`) with as many [`Translator`](crate::Translator)s
/// as needed.
///
/// Every language holding messages has a plural rule. Adding messages for a
/// language registers its rule from the bundle's rule table, and fails with
/// [`LoadError::UnknownLocale`] when the table has none. Language tags are
/// matched case-insensitively, with `_` and `-` treated alike.
///
/// # Example
///
/// ```
/// use glossa::{Bundle, Translator, Value};
///
/// let mut bundle = Bundle::new();
/// bundle
///     .put("en", "cart_items", None, [("one", "{{.Count}} item"), ("other", "{{.Count}} items")])
///     .unwrap();
///
/// let translator = Translator::new(&bundle, "en-US");
/// assert_eq!(translator.translate("cart_items", "?", &[Value::from(1)]), "1 item");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Bundle {
    /// The table language tags are resolved against.
    #[builder(default = PluralRules::shared())]
    rules: Arc<PluralRules>,

    /// Normalized language tag to its plural rule.
    #[builder(skip)]
    plural_rules: HashMap<String, PluralRule>,

    /// Normalized language tag to message id to message.
    #[builder(skip)]
    messages: HashMap<String, HashMap<String, Message>>,
}

impl Default for Bundle {
    fn default() -> Self {
        Bundle::builder().build()
    }
}

impl Bundle {
    /// An empty bundle backed by the CLDR rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule table language tags are resolved against.
    pub fn rules(&self) -> &PluralRules {
        &self.rules
    }

    // =========================================================================
    // Languages
    // =========================================================================

    /// Register a language, looking its rule up in the rule table.
    ///
    /// Regional tags fall back to their base language (`en-GB` uses `en`).
    /// Registering a language again is a no-op returning the same rule.
    pub fn add_language(&mut self, tag: &str) -> Result<PluralRule, LoadError> {
        let key = normalize_locale(tag);
        if let Some(rule) = self.plural_rules.get(&key) {
            return Ok(*rule);
        }
        let rule = *self
            .rules
            .resolve(&key)
            .ok_or_else(|| LoadError::UnknownLocale {
                locale: tag.to_string(),
            })?;
        self.plural_rules.insert(key, rule);
        Ok(rule)
    }

    /// Register a language with an explicit rule, replacing any earlier one.
    pub fn add_language_with_rule(&mut self, tag: &str, rule: PluralRule) {
        self.plural_rules.insert(normalize_locale(tag), rule);
    }

    /// The plural rule registered for a language.
    pub fn plural_rule(&self, tag: &str) -> Option<&PluralRule> {
        self.plural_rules.get(&normalize_locale(tag))
    }

    /// Registered language tags (normalized), sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.plural_rules.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Add a message, replacing any message with the same id for the language.
    pub fn add_message(&mut self, tag: &str, message: Message) -> Result<(), LoadError> {
        self.add_language(tag)?;
        self.messages
            .entry(normalize_locale(tag))
            .or_default()
            .insert(message.id.clone(), message);
        Ok(())
    }

    /// Add several messages for one language, returning how many were added.
    pub fn add_messages(
        &mut self,
        tag: &str,
        messages: impl IntoIterator<Item = Message>,
    ) -> Result<usize, LoadError> {
        self.add_language(tag)?;
        let set = self.messages.entry(normalize_locale(tag)).or_default();
        let mut count = 0;
        for message in messages {
            set.insert(message.id.clone(), message);
            count += 1;
        }
        debug!(locale = tag, count, "added messages");
        Ok(count)
    }

    /// Build a message from category keywords and template sources and add it.
    ///
    /// Unknown category keywords and malformed templates are rejected with
    /// [`LoadError::Message`] naming the language and message id.
    pub fn put<K, V>(
        &mut self,
        tag: &str,
        id: &str,
        description: Option<String>,
        forms: impl IntoIterator<Item = (K, V)>,
    ) -> Result<(), LoadError>
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let message =
            Message::parse(id, description, forms).map_err(|source| LoadError::Message {
                locale: tag.to_string(),
                id: id.to_string(),
                source,
            })?;
        self.add_message(tag, message)
    }

    /// The message `id` for a language. No fallback is applied.
    pub fn message(&self, tag: &str, id: &str) -> Option<&Message> {
        self.messages(tag)?.get(id)
    }

    /// All messages for a language, keyed by id.
    pub fn messages(&self, tag: &str) -> Option<&HashMap<String, Message>> {
        self.messages.get(&normalize_locale(tag))
    }

    // =========================================================================
    // Catalog Files
    // =========================================================================

    /// Decode catalog content for a language and add its messages.
    ///
    /// ```
    /// use glossa::{Bundle, CatalogFormat};
    ///
    /// let mut bundle = Bundle::new();
    /// let count = bundle
    ///     .parse_messages("fr", r#"{"hello": "Bonjour", "apples": {"one": "une pomme", "other": "des pommes"}}"#, CatalogFormat::Json)
    ///     .unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn parse_messages(
        &mut self,
        tag: &str,
        content: &str,
        format: CatalogFormat,
    ) -> Result<usize, LoadError> {
        let path = PathBuf::from(format!("<{tag}>.{format}"));
        let entries =
            parse_catalog(content, format).map_err(|e| LoadError::from_parse(path, e))?;
        self.add_entries(tag, entries)
    }

    /// Decode a catalog file's contents, taking the language tag and format
    /// from `path`.
    ///
    /// The tag is the last dot-separated component of the file name before
    /// the extension: `en-US.json` and `active.en-US.json` are both `en-US`.
    pub fn parse_message_file_bytes(
        &mut self,
        bytes: &[u8],
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let (tag, format) = catalog_file_info(path)?;
        let entries = parse_catalog_bytes(bytes, format)
            .map_err(|e| LoadError::from_parse(path.to_path_buf(), e))?;
        let count = self.add_entries(&tag, entries)?;
        debug!(path = %path.display(), locale = %tag, count, "loaded message file");
        Ok(count)
    }

    /// Read and decode a catalog file.
    ///
    /// ```ignore
    /// bundle.load_message_file("locales/active.ru.toml")?;
    /// ```
    pub fn load_message_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.parse_message_file_bytes(&bytes, path)
    }

    fn add_entries(
        &mut self,
        tag: &str,
        entries: Vec<MessageEntry>,
    ) -> Result<usize, LoadError> {
        let messages = entries
            .into_iter()
            .map(|entry| {
                let id = entry.id.clone();
                Message::from_entry(entry).map_err(|source| LoadError::Message {
                    locale: tag.to_string(),
                    id,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.add_messages(tag, messages)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Compare a translation against its source language.
    ///
    /// Reports, sorted by message id:
    /// - messages in the target that the source does not define (only when
    ///   the source language has messages)
    /// - categories the target's plural rule never produces
    /// - messages with no `other` template
    ///
    /// ```
    /// use glossa::{Bundle, LoadWarning};
    ///
    /// let mut bundle = Bundle::new();
    /// bundle.put("en", "hello", None, [("other", "Hello!")]).unwrap();
    /// bundle.put("ja", "hello", None, [("other", "こんにちは")]).unwrap();
    /// bundle.put("ja", "extra", None, [("one", "余分")]).unwrap();
    ///
    /// let warnings = bundle.validate("en", "ja");
    /// assert_eq!(warnings.len(), 3); // unknown, unused `one`, no `other`
    /// ```
    pub fn validate(&self, source: &str, target: &str) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();
        let Some(target_messages) = self.messages(target) else {
            return warnings;
        };
        let source_messages = self.messages(source);
        let rule = self.plural_rule(target);

        let mut sorted: Vec<(&String, &Message)> = target_messages.iter().collect();
        sorted.sort_by_key(|(id, _)| *id);

        for (id, message) in sorted {
            if source_messages.is_some_and(|messages| !messages.contains_key(id)) {
                warnings.push(LoadWarning::UnknownMessage {
                    id: id.clone(),
                    locale: target.to_string(),
                });
            }
            if let Some(rule) = rule {
                for category in message.categories() {
                    if !rule.has_category(category) {
                        warnings.push(LoadWarning::UnusedCategory {
                            id: id.clone(),
                            locale: target.to_string(),
                            category,
                        });
                    }
                }
            }
            if message.template(PluralCategory::Other).is_none() {
                warnings.push(LoadWarning::MissingOther {
                    id: id.clone(),
                    locale: target.to_string(),
                });
            }
        }

        warnings
    }
}

/// The language tag and format encoded in a catalog file name.
pub fn catalog_file_info(path: &Path) -> Result<(String, CatalogFormat), LoadError> {
    let format = path
        .extension()
        .and_then(OsStr::to_str)
        .and_then(CatalogFormat::from_extension)
        .ok_or_else(|| LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
    let tag = path
        .file_stem()
        .and_then(OsStr::to_str)
        .and_then(|stem| stem.rsplit('.').next())
        .filter(|tag| !tag.is_empty())
        .ok_or_else(|| LoadError::MissingLanguageTag {
            path: path.to_path_buf(),
        })?;
    Ok((tag.to_string(), format))
}
