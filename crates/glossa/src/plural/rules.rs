//! The plural rule record and the per-locale rule table.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, LazyLock};

use crate::plural::{Operands, PluralError, cldr};
use crate::types::PluralCategory;

/// A pure classification function over CLDR operands.
pub type PluralFn = fn(&Operands) -> PluralCategory;

/// The CLDR cardinal rule for one language.
///
/// A rule pairs the set of categories the language distinguishes with the
/// function that picks one of them. The function never returns a category
/// outside `categories`.
#[derive(Clone, Copy)]
pub struct PluralRule {
    categories: &'static [PluralCategory],
    func: PluralFn,
}

impl PluralRule {
    /// Create a rule from its declared categories and classification function.
    pub const fn new(categories: &'static [PluralCategory], func: PluralFn) -> Self {
        Self { categories, func }
    }

    /// The categories this rule can produce, in CLDR order.
    pub fn categories(&self) -> &'static [PluralCategory] {
        self.categories
    }

    /// Whether this rule can produce `category`.
    pub fn has_category(&self, category: PluralCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Apply the rule to already-extracted operands.
    pub fn category_for(&self, operands: &Operands) -> PluralCategory {
        (self.func)(operands)
    }

    /// Extract operands from `value` and classify them.
    ///
    /// ```
    /// use glossa::{PluralCategory, PluralRules, Value};
    ///
    /// let rules = PluralRules::cldr();
    /// let ru = rules.get("ru").unwrap();
    /// assert_eq!(ru.classify(&Value::from(21)).unwrap(), PluralCategory::One);
    /// assert_eq!(ru.classify(&Value::from("1.5")).unwrap(), PluralCategory::Other);
    /// assert_eq!(ru.classify(5).unwrap(), PluralCategory::Many);
    /// ```
    pub fn classify<V>(&self, value: V) -> Result<PluralCategory, PluralError>
    where
        V: TryInto<Operands>,
        PluralError: From<V::Error>,
    {
        let operands = value.try_into()?;
        Ok(self.category_for(&operands))
    }
}

impl Debug for PluralRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("PluralRule")
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

/// Normalize a locale identifier for rule lookup: lowercase, `_` becomes `-`.
pub fn normalize_locale(locale: &str) -> String {
    locale.replace('_', "-").to_lowercase()
}

static SHARED_CLDR: LazyLock<Arc<PluralRules>> = LazyLock::new(|| Arc::new(PluralRules::cldr()));

/// An immutable table mapping normalized locale identifiers to plural rules.
///
/// The table is assembled by value and then shared; nothing mutates it once
/// it is handed to a [`Bundle`](crate::Bundle).
#[derive(Debug, Clone, Default)]
pub struct PluralRules {
    rules: HashMap<String, PluralRule>,
}

impl PluralRules {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of CLDR cardinal rules for every supported locale.
    pub fn cldr() -> Self {
        let mut rules = Self::new();
        for (locales, rule) in cldr::rules() {
            rules = rules.with_rule(locales, rule);
        }
        for (alias, target) in cldr::ALIASES {
            rules = rules.with_alias(alias, target);
        }
        rules
    }

    /// The process-wide CLDR table, built on first use.
    pub fn shared() -> Arc<PluralRules> {
        Arc::clone(&SHARED_CLDR)
    }

    /// Register `rule` for each locale in `locales`, replacing earlier entries.
    pub fn with_rule(mut self, locales: &[&str], rule: PluralRule) -> Self {
        for locale in locales {
            self.rules.insert(normalize_locale(locale), rule);
        }
        self
    }

    /// Make `alias` use the rule already registered for `target`.
    ///
    /// Does nothing if `target` has no rule.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        if let Some(rule) = self.rules.get(&normalize_locale(target)).copied() {
            self.rules.insert(normalize_locale(alias), rule);
        }
        self
    }

    /// The rule registered for exactly this locale (after normalization).
    pub fn get(&self, locale: &str) -> Option<&PluralRule> {
        self.rules.get(&normalize_locale(locale))
    }

    /// The rule for `locale`, falling back through shorter tags.
    ///
    /// `pt-PT` has its own entry; `en-GB` and `sr-Latn-RS` resolve to their
    /// base languages.
    pub fn resolve(&self, locale: &str) -> Option<&PluralRule> {
        let normalized = normalize_locale(locale);
        let mut candidate = normalized.as_str();
        loop {
            if let Some(rule) = self.rules.get(candidate) {
                return Some(rule);
            }
            let (prefix, _) = candidate.rsplit_once('-')?;
            candidate = prefix;
        }
    }

    /// Classify `value` under the rule [`resolve`](Self::resolve) finds for
    /// `locale`, so `en-US` classifies with `en`.
    pub fn classify<V>(&self, locale: &str, value: V) -> Result<PluralCategory, PluralError>
    where
        V: TryInto<Operands>,
        PluralError: From<V::Error>,
    {
        let rule = self.resolve(locale).ok_or_else(|| PluralError::UnknownLocale {
            locale: locale.to_string(),
        })?;
        rule.classify(value)
    }

    /// All registered locale identifiers, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of registered locale identifiers.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
