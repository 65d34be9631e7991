//! Pluralized, localized message resolution.
//!
//! `glossa` classifies numbers into CLDR plural categories and resolves
//! messages through a chain of fallback languages:
//!
//! ```
//! use glossa::{Bundle, Translator, Value, params};
//!
//! let mut bundle = Bundle::new();
//! bundle
//!     .put("en", "unread", None, [
//!         ("one", "{{.Name}} has {{.Count}} unread email"),
//!         ("other", "{{.Name}} has {{.Count}} unread emails"),
//!     ])
//!     .unwrap();
//!
//! let translator = Translator::new(&bundle, "en-GB");
//! let data = Value::from(params! { "Name" => "Ada" });
//! assert_eq!(
//!     translator.translate("unread", "", &[Value::from(2), data]),
//!     "Ada has 2 unread emails"
//! );
//! ```

pub mod interpreter;
pub mod parser;
pub mod plural;
pub mod types;

pub use interpreter::{
    Bundle, COUNT_FIELD, LoadError, LoadWarning, MessageError, RenderError, TranslateError,
    Translator, catalog_file_info, language_tags,
};
pub use parser::{CatalogFormat, MessageEntry, ParseError};
pub use plural::{Operands, PluralError, PluralFn, PluralRule, PluralRules, compute_suggestions};
pub use types::{Data, Fields, Message, PluralCategory, Template, Value};

/// Creates template [`Data`] from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or nested `Data` directly.
///
/// # Example
///
/// ```
/// use glossa::{params, Value};
///
/// let p = params! { "Count" => 3, "Name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.get("Count").and_then(Value::as_number), Some(3));
/// assert_eq!(p.get("Name").and_then(Value::as_string), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        $crate::Data::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut data = $crate::Data::new();
            $(
                data.insert($key, ::std::convert::Into::<$crate::Value>::into($value));
            )+
            data
        }
    };
}
