//! Tests for message resolution over fallback chains.

use glossa::{Bundle, Data, Fields, PluralError, TranslateError, Translator, Value, params};

fn cart_bundle() -> Bundle {
    let mut bundle = Bundle::new();
    bundle
        .put("en", "cart_items", None, [("one", "{{.Count}} item"), ("other", "{{.Count}} items")])
        .unwrap();
    bundle
}

#[test]
fn english_cart_items() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    assert_eq!(translator.translate("cart_items", "?", &[Value::from(1)]), "1 item");
    assert_eq!(translator.translate("cart_items", "?", &[Value::from(5)]), "5 items");
    assert_eq!(translator.translate("cart_items", "?", &[Value::from(0)]), "0 items");
}

#[test]
fn missing_message_returns_default() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    assert_eq!(translator.translate("missing_id", "fallback text", &[]), "fallback text");
}

#[test]
fn no_matching_language_returns_default() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "de-AT, fr");
    assert_eq!(translator.translate("cart_items", "Warenkorb", &[Value::from(1)]), "Warenkorb");
}

#[test]
fn decimal_string_keeps_visible_fraction() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    // Integer 1 is `one`; "1.50" has v = 2 and is `other`.
    assert_eq!(translator.translate("cart_items", "?", &[Value::from("1")]), "1 item");
    assert_eq!(translator.translate("cart_items", "?", &[Value::from("1.50")]), "1.50 items");
    assert_eq!(translator.translate("cart_items", "?", &[Value::from(1.5)]), "1.5 items");
}

#[test]
fn decimal_classifies_per_locale() {
    let mut bundle = Bundle::new();
    bundle
        .put("fr", "kilos", None, [("one", "{{.Count}} kilo"), ("other", "{{.Count}} kilos")])
        .unwrap();
    let translator = Translator::new(&bundle, "fr");
    assert_eq!(translator.translate("kilos", "?", &[Value::from("1.50")]), "1.50 kilo");
    assert_eq!(translator.translate("kilos", "?", &[Value::from("2.0")]), "2.0 kilos");
}

#[test]
fn classification_is_redone_for_each_locale() {
    let mut bundle = Bundle::new();
    // Russian lacks `many` here, so 5 falls through to Polish, which has it.
    bundle
        .put("ru", "files", None, [("one", "{{.Count}} файл"), ("few", "{{.Count}} файла")])
        .unwrap();
    bundle
        .put("pl", "files", None, [("one", "{{.Count}} plik"), ("few", "{{.Count}} pliki"), ("many", "{{.Count}} plików")])
        .unwrap();
    let translator = Translator::new(&bundle, "ru, pl");
    assert_eq!(translator.translate("files", "?", &[Value::from(2)]), "2 файла");
    assert_eq!(translator.translate("files", "?", &[Value::from(5)]), "5 plików");
}

#[test]
fn other_is_the_fallback_within_a_locale() {
    let mut bundle = Bundle::new();
    bundle.put("en", "messages", None, [("other", "{{.Count}} messages")]).unwrap();
    bundle.put("de", "messages", None, [("one", "eine Nachricht")]).unwrap();

    // `one` is missing in English, so its `other` is used before trying German.
    let translator = Translator::new(&bundle, "en, de");
    assert_eq!(translator.translate("messages", "?", &[Value::from(1)]), "1 messages");

    // German has `one` but no `other`, so 3 moves on to the default.
    let translator = Translator::new(&bundle, "de");
    assert_eq!(translator.translate("messages", "?", &[Value::from(1)]), "eine Nachricht");
    assert_eq!(translator.translate("messages", "default", &[Value::from(3)]), "default");
}

#[test]
fn empty_translation_falls_through() {
    let mut bundle = Bundle::new();
    bundle.put("en-GB", "colour", None, [("other", "")]).unwrap();
    bundle.put("en", "colour", None, [("other", "color")]).unwrap();
    let translator = Translator::new(&bundle, "en-GB");
    assert_eq!(translator.translate("colour", "?", &[]), "color");
}

#[test]
fn without_count_the_category_is_other() {
    let mut bundle = Bundle::new();
    bundle
        .put("en", "greeting", None, [("one", "Hi, you"), ("other", "Hello, {{.Name}}")])
        .unwrap();
    let translator = Translator::new(&bundle, "en");
    let data = Value::from(params! { "Name" => "Ada" });
    assert_eq!(translator.translate("greeting", "?", &[data]), "Hello, Ada");
}

#[test]
fn count_and_data_are_merged() {
    let mut bundle = Bundle::new();
    bundle
        .put(
            "en",
            "unread",
            None,
            [("one", "{{.Name}} has {{.Count}} unread email"), ("other", "{{.Name}} has {{.Count}} unread emails")],
        )
        .unwrap();
    let translator = Translator::new(&bundle, "en");
    let data = Value::from(params! { "Name" => "Nick" });
    assert_eq!(
        translator.translate("unread", "?", &[Value::from(1), data.clone()]),
        "Nick has 1 unread email"
    );
    assert_eq!(
        translator.translate("unread", "?", &[Value::from("2"), data]),
        "Nick has 2 unread emails"
    );
}

#[test]
fn count_field_in_data_drives_plural_form() {
    struct Inbox {
        count: u32,
    }
    impl Fields for Inbox {
        fn fields(&self) -> Data {
            params! { "Count" => self.count }
        }
    }

    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    let one = Value::from_fields(&Inbox { count: 1 });
    let many = Value::from_fields(&Inbox { count: 7 });
    assert_eq!(translator.translate("cart_items", "?", &[one]), "1 item");
    assert_eq!(translator.translate("cart_items", "?", &[many]), "7 items");
}

#[test]
fn non_numeric_count_is_a_terminal_diagnostic() {
    let mut bundle = cart_bundle();
    bundle.put("de", "cart_items", None, [("other", "{{.Count}} Artikel")]).unwrap();
    let translator = Translator::new(&bundle, "en, de");
    assert_eq!(
        translator.translate("cart_items", "?", &[Value::from("lots")]),
        "[ERR][cart_items] 'lots' is not a number"
    );
    assert_eq!(
        translator.try_translate("cart_items", &[Value::from("lots")]),
        Err(TranslateError::Classification {
            id: "cart_items".to_string(),
            source: PluralError::NotANumber {
                input: "lots".to_string()
            },
        })
    );
}

#[test]
fn implicit_count_that_is_not_a_number() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    let data = Value::from(params! { "Count" => true });
    assert_eq!(
        translator.translate("cart_items", "?", &[data]),
        "[ERR][cart_items] 'true' is not a number"
    );
}

#[test]
fn render_failure_degrades_to_error_text() {
    let mut bundle = Bundle::new();
    bundle.put("en", "hello", None, [("other", "Hello, {{.Name}}")]).unwrap();
    let translator = Translator::new(&bundle, "en");
    assert_eq!(
        translator.translate("hello", "?", &[Value::from(params! {})]),
        "executing \".Name\": map has no entry for key \"Name\""
    );
}

#[test]
fn repeated_calls_are_identical() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    let first = translator.translate("cart_items", "?", &[Value::from(3)]);
    let second = translator.translate("cart_items", "?", &[Value::from(3)]);
    assert_eq!(first, second);
}

#[test]
fn explicit_tags_are_used_verbatim() {
    let bundle = cart_bundle();
    let translator = Translator::with_tags(&bundle, ["EN"]);
    assert_eq!(translator.language_tags(), ["EN"]);
    assert_eq!(translator.translate("cart_items", "?", &[Value::from(2)]), "2 items");
}

#[test]
#[should_panic(expected = "at most 2 arguments")]
fn more_than_two_arguments_panics() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    let _ = translator.translate(
        "cart_items",
        "?",
        &[Value::from(1), Value::from(params! {}), Value::from(2)],
    );
}
