//! Tests for catalog file decoding and loading.

use std::fs;
use std::path::Path;

use glossa::parser::parse_catalog;
use glossa::{Bundle, CatalogFormat, LoadError, ParseError, PluralCategory, catalog_file_info};
use tempfile::TempDir;

#[test]
fn json_simple_and_plural_entries() {
    let entries = parse_catalog(
        r#"{
            "greeting": "Hello!",
            "cart_items": {
                "description": "Items in the cart",
                "one": "{{.Count}} item",
                "other": "{{.Count}} items"
            }
        }"#,
        CatalogFormat::Json,
    )
    .unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "cart_items");
    assert_eq!(entries[0].description.as_deref(), Some("Items in the cart"));
    assert_eq!(entries[0].forms.len(), 2);
    assert_eq!(entries[1].id, "greeting");
    assert_eq!(entries[1].form("other"), Some("Hello!"));
}

#[test]
fn toml_simple_and_plural_entries() {
    let entries = parse_catalog(
        r#"
greeting = "Bonjour !"

[cart_items]
one = "{{.Count}} article"
other = "{{.Count}} articles"
"#,
        CatalogFormat::Toml,
    )
    .unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].form("one"), Some("{{.Count}} article"));
}

#[test]
fn empty_content_is_an_empty_catalog() {
    assert!(parse_catalog("  \n", CatalogFormat::Json).unwrap().is_empty());
    assert!(parse_catalog("", CatalogFormat::Toml).unwrap().is_empty());
}

#[test]
fn json_error_has_position() {
    let error = parse_catalog("{\n  \"a\": \"x\",\n  \"b\" 1\n}", CatalogFormat::Json).unwrap_err();
    let ParseError::Syntax { line, .. } = error else {
        panic!("expected syntax error, got {error:?}");
    };
    assert_eq!(line, 3);
}

#[test]
fn toml_error_has_position() {
    let error = parse_catalog("a = \"x\"\nb = @\n", CatalogFormat::Toml).unwrap_err();
    let ParseError::Syntax { line, .. } = error else {
        panic!("expected syntax error, got {error:?}");
    };
    assert_eq!(line, 2);
}

#[test]
fn non_string_values_are_rejected() {
    assert!(parse_catalog(r#"{"count": 3}"#, CatalogFormat::Json).is_err());
    assert!(parse_catalog(r#"{"nested": {"one": {"deep": "x"}}}"#, CatalogFormat::Json).is_err());
}

#[test]
fn file_name_carries_language_and_format() {
    let (tag, format) = catalog_file_info(Path::new("locales/active.en-US.json")).unwrap();
    assert_eq!((tag.as_str(), format), ("en-US", CatalogFormat::Json));

    let (tag, format) = catalog_file_info(Path::new("fr.TOML")).unwrap();
    assert_eq!((tag.as_str(), format), ("fr", CatalogFormat::Toml));

    assert!(matches!(
        catalog_file_info(Path::new("en.yaml")),
        Err(LoadError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        catalog_file_info(Path::new("messages..json")),
        Err(LoadError::MissingLanguageTag { .. })
    ));
}

#[test]
fn load_message_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("active.ru.json");
    fs::write(
        &path,
        r#"{"files": {"one": "{{.Count}} файл", "few": "{{.Count}} файла", "many": "{{.Count}} файлов", "other": "{{.Count}} файла"}}"#,
    )
    .unwrap();

    let mut bundle = Bundle::new();
    assert_eq!(bundle.load_message_file(&path).unwrap(), 1);
    let message = bundle.message("ru", "files").unwrap();
    assert_eq!(
        message.template(PluralCategory::Many).unwrap().source(),
        "{{.Count}} файлов"
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut bundle = Bundle::new();
    let error = bundle
        .load_message_file(dir.path().join("en.json"))
        .unwrap_err();
    assert!(matches!(error, LoadError::Io { .. }));
}

#[test]
fn decode_error_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("de.json");
    fs::write(&path, "{ not json").unwrap();

    let mut bundle = Bundle::new();
    let error = bundle.load_message_file(&path).unwrap_err();
    let LoadError::Parse { path: reported, line, .. } = error else {
        panic!("expected parse error");
    };
    assert_eq!(reported, path);
    assert_eq!(line, 1);
}

#[test]
fn invalid_utf8_is_rejected() {
    let mut bundle = Bundle::new();
    let error = bundle
        .parse_message_file_bytes(&[0x7b, 0xff, 0x7d], "en.json")
        .unwrap_err();
    assert!(matches!(error, LoadError::Parse { message, .. } if message == "invalid UTF-8"));
}

#[test]
fn unknown_category_in_file_names_message() {
    let mut bundle = Bundle::new();
    let error = bundle
        .parse_message_file_bytes(br#"{"apples": {"othr": "apples"}}"#, "en.json")
        .unwrap_err();
    assert!(matches!(error, LoadError::Message { ref id, .. } if id == "apples"));
    assert_eq!(
        error.to_string(),
        "invalid message 'apples' for language 'en': unknown plural category 'othr', did you mean: other?"
    );
}

#[test]
fn repeated_json_keys_are_kept_in_order() {
    let entries = parse_catalog(
        r#"{"apples": {"one": "an apple", "other": "apples", "one": "one apple"}}"#,
        CatalogFormat::Json,
    )
    .unwrap();
    let keys: Vec<&str> = entries[0].forms.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, ["one", "other", "one"]);
}

#[test]
fn repeated_category_in_file_is_rejected() {
    let mut bundle = Bundle::new();
    let error = bundle
        .parse_message_file_bytes(
            br#"{"apples": {"one": "an apple", "one": "one apple", "other": "apples"}}"#,
            "en.json",
        )
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid message 'apples' for language 'en': duplicate plural category 'one'"
    );
    assert!(bundle.message("en", "apples").is_none());
}

#[test]
fn parse_messages_from_string() {
    let mut bundle = Bundle::new();
    let count = bundle
        .parse_messages("es", "hola = \"Hola\"\n", CatalogFormat::Toml)
        .unwrap();
    assert_eq!(count, 1);
    assert!(bundle.message("es", "hola").is_some());
}
