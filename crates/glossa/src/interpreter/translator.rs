//! Message resolution over a language fallback chain.

use tracing::{debug, warn};

use crate::interpreter::args::Arguments;
use crate::interpreter::bundle::Bundle;
use crate::interpreter::error::TranslateError;
use crate::types::{PluralCategory, Value};

/// Resolves messages from a [`Bundle`] for an ordered list of language tags.
///
/// A translator holds no state besides its tags, so one can be built per
/// request and calls with the same arguments always produce the same text.
///
/// # Example
///
/// ```
/// use glossa::{Bundle, Translator, Value};
///
/// let mut bundle = Bundle::new();
/// bundle.put("en", "cart_items", None, [("one", "{{.Count}} item"), ("other", "{{.Count}} items")]).unwrap();
/// bundle.put("ru", "cart_items", None, [("one", "{{.Count}} товар"), ("few", "{{.Count}} товара"), ("many", "{{.Count}} товаров")]).unwrap();
///
/// let translator = Translator::new(&bundle, "ru-RU, en");
/// assert_eq!(translator.language_tags(), ["ru-RU", "ru", "en"]);
/// assert_eq!(translator.translate("cart_items", "?", &[Value::from(3)]), "3 товара");
///
/// // Russian has no template for fractions; English does.
/// assert_eq!(translator.translate("cart_items", "?", &[Value::from("1.5")]), "1.5 items");
/// ```
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    bundle: &'a Bundle,
    language_tags: Vec<String>,
}

impl<'a> Translator<'a> {
    /// A translator for a comma-separated preference string such as
    /// `"fr-CA, en"`. See [`language_tags`] for how it expands.
    pub fn new(bundle: &'a Bundle, preferences: &str) -> Self {
        Self::with_tags(bundle, language_tags(preferences))
    }

    /// A translator trying exactly these tags, in order.
    pub fn with_tags<I, S>(bundle: &'a Bundle, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bundle,
            language_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The fallback chain, most specific first.
    pub fn language_tags(&self) -> &[String] {
        &self.language_tags
    }

    /// The bundle messages are resolved from.
    pub fn bundle(&self) -> &'a Bundle {
        self.bundle
    }

    /// Translate message `id`, falling back to `default`.
    ///
    /// `args` holds at most a count and template data; see
    /// [`try_translate`](Self::try_translate) for how they are interpreted.
    /// A count that cannot be classified produces the diagnostic
    /// `[ERR][<id>] <error>` instead of a translation. This never fails.
    ///
    /// # Panics
    ///
    /// Panics if `args` has more than two elements.
    pub fn translate(&self, id: &str, default: &str, args: &[Value]) -> String {
        match self.try_translate(id, args) {
            Ok(Some(text)) => text,
            Ok(None) => default.to_string(),
            Err(error) => {
                warn!(id, %error, "plural classification failed");
                error.to_string()
            }
        }
    }

    /// Translate message `id`, returning `None` when no language in the
    /// chain has a usable, non-empty translation.
    ///
    /// A leading number or string in `args` is the count and a second
    /// argument is the template data; otherwise the first argument is the
    /// data. The count is available to templates as `{{.Count}}`, and a
    /// `Count` field in map data serves as the count when none is given.
    ///
    /// For each language in turn, the count is classified under that
    /// language's plural rule and the message's template for the category is
    /// rendered, using `other` when the message lacks the category. Without
    /// a count the category is `other`. Languages without the message, or
    /// whose message has no usable template or renders empty, are skipped.
    ///
    /// # Errors
    ///
    /// Classification failure ends the search with
    /// [`TranslateError::Classification`].
    ///
    /// # Panics
    ///
    /// Panics if `args` has more than two elements.
    pub fn try_translate(&self, id: &str, args: &[Value]) -> Result<Option<String>, TranslateError> {
        let arguments = Arguments::parse(args);
        for tag in &self.language_tags {
            let Some(messages) = self.bundle.messages(tag) else {
                debug!(locale = %tag, id, "skipping locale: no messages");
                continue;
            };
            let Some(message) = messages.get(id) else {
                debug!(locale = %tag, id, "skipping locale: message not found");
                continue;
            };
            let Some(rule) = self.bundle.plural_rule(tag) else {
                debug!(locale = %tag, id, "skipping locale: no plural rule");
                continue;
            };
            let category = match &arguments.count {
                Some(count) => {
                    rule.classify(count)
                        .map_err(|source| TranslateError::Classification {
                            id: id.to_string(),
                            source,
                        })?
                }
                None => PluralCategory::Other,
            };
            let Some(template) = message.select(category) else {
                debug!(locale = %tag, id, %category, "skipping locale: no template");
                continue;
            };
            let rendered = template.render(arguments.data.as_ref());
            if rendered.is_empty() {
                debug!(locale = %tag, id, %category, "skipping locale: empty translation");
                continue;
            }
            return Ok(Some(rendered.into_owned()));
        }
        Ok(None)
    }
}

/// Expand a comma-separated preference string into a fallback chain.
///
/// Each preference is trimmed of leading and trailing non-alphanumeric
/// characters, split on `-` and `_`, and expanded from most to least
/// specific by dropping trailing segments. Empty segments are ignored, as
/// are single-character segments at either end. Expansions keep the order of
/// the preferences; a tag already in the chain is not repeated.
///
/// ```
/// use glossa::language_tags;
///
/// assert_eq!(language_tags("aa-bb-cc-dd"), ["aa-bb-cc-dd", "aa-bb-cc", "aa-bb", "aa"]);
/// assert_eq!(language_tags("aa-bb, aa-cc"), ["aa-bb", "aa", "aa-cc"]);
/// assert_eq!(language_tags("x-aa-bb-x"), ["aa-bb", "aa"]);
/// ```
pub fn language_tags(preferences: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in preferences.split(',').flat_map(expand_preference) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn expand_preference(preference: &str) -> Vec<String> {
    let trimmed = preference.trim_matches(|c: char| !c.is_alphanumeric());
    let mut segments: Vec<&str> = trimmed
        .split(['-', '_'])
        .filter(|segment| !segment.is_empty())
        .collect();
    while segments.last().is_some_and(|segment| is_singleton(segment)) {
        segments.pop();
    }
    let start = segments
        .iter()
        .position(|segment| !is_singleton(segment))
        .unwrap_or(segments.len());
    let segments = &segments[start..];
    (1..=segments.len())
        .rev()
        .map(|len| segments[..len].join("-"))
        .collect()
}

fn is_singleton(segment: &str) -> bool {
    segment.chars().count() == 1
}
