//! Catalog storage and message resolution.
//!
//! A [`Bundle`] holds messages and plural rules per language. A
//! [`Translator`] walks a language fallback chain over a bundle, classifies
//! the count under each language's rule and renders the selected template.

mod args;
mod bundle;
mod error;
mod evaluator;
mod translator;

pub use args::COUNT_FIELD;
pub use bundle::{Bundle, catalog_file_info};
pub use error::{LoadError, LoadWarning, MessageError, RenderError, TranslateError};
pub use evaluator::eval_template;
pub use translator::{Translator, language_tags};
