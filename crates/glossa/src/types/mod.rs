//! Core value types: plural categories, template data, templates and messages.

mod category;
mod message;
mod template;
mod value;

pub use category::PluralCategory;
pub use message::Message;
pub use template::Template;
pub use value::{Data, Fields, Value};
