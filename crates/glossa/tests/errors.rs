//! Snapshot tests for user-facing error and diagnostic text.

use std::path::Path;

use glossa::{
    Bundle, LoadError, MessageError, Operands, ParseError, PluralCategory, RenderError, Template, Translator,
    Value, catalog_file_info, params,
};
use insta::assert_snapshot;

fn cart_bundle() -> Bundle {
    let mut bundle = Bundle::new();
    bundle
        .put("en", "cart_items", None, [("one", "{{.Count}} item"), ("other", "{{.Count}} items")])
        .unwrap();
    bundle
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn not_a_number() {
    let error = "abc".parse::<Operands>().unwrap_err();
    assert_snapshot!(error.to_string(), @"'abc' is not a number");
}

#[test]
fn duplicate_category() {
    let error = MessageError::DuplicateCategory { key: "one".to_string() };
    assert_snapshot!(error.to_string(), @"duplicate plural category 'one'");
}

#[test]
fn unknown_category_with_suggestion() {
    let error = "fw".parse::<PluralCategory>().unwrap_err();
    assert_snapshot!(error.to_string(), @"unknown plural category 'fw', did you mean: few?");
}

#[test]
fn unknown_category_without_suggestion() {
    let error = "plural".parse::<PluralCategory>().unwrap_err();
    assert_snapshot!(error.to_string(), @"unknown plural category 'plural'");
}

#[test]
fn translate_diagnostic() {
    let bundle = cart_bundle();
    let translator = Translator::new(&bundle, "en");
    let text = translator.translate("cart_items", "?", &[Value::from("abc")]);
    assert_snapshot!(text, @"[ERR][cart_items] 'abc' is not a number");
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn render_without_data() {
    let template = Template::parse("Hello, {{.Name}}").unwrap();
    let error = template.try_render(None).unwrap_err();
    assert_snapshot!(error.to_string(), @r#"executing ".Name": no data"#);
}

#[test]
fn render_missing_field() {
    let template = Template::parse("Hello, {{.Name}}").unwrap();
    let data = Value::from(params! { "Count" => 1 });
    let error = template.try_render(Some(&data)).unwrap_err();
    assert_snapshot!(error.to_string(), @r#"executing ".Name": map has no entry for key "Name""#);
}

#[test]
fn render_field_of_scalar() {
    let mut bundle = Bundle::new();
    bundle.put("en", "total", None, [("other", "{{.Count.Value}}")]).unwrap();
    let translator = Translator::new(&bundle, "en");
    let text = translator.translate("total", "?", &[Value::from(3)]);
    assert_snapshot!(text, @r#"executing ".Count.Value": can't evaluate field Value in 3"#);
}

#[test]
fn render_error_variant() {
    let template = Template::parse("{{.}}").unwrap();
    assert_eq!(
        template.try_render(None),
        Err(RenderError::NoData {
            path: ".".to_string()
        })
    );
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn unknown_language() {
    let mut bundle = Bundle::new();
    let error = bundle.add_language("qqq").unwrap_err();
    assert_snapshot!(error.to_string(), @"no plural rule for language 'qqq'");
}

#[test]
fn invalid_template_in_message() {
    let mut bundle = Bundle::new();
    let error = bundle
        .put("en", "greet", None, [("other", "Hi {{ if }}")])
        .unwrap_err();
    assert_snapshot!(
        error.to_string(),
        @"invalid message 'greet' for language 'en': invalid template for 'other': syntax error at 1:7: unexpected character in action: 'i'"
    );
}

#[test]
fn unterminated_action() {
    let mut bundle = Bundle::new();
    let error = bundle
        .put("en", "greet", None, [("other", "Hi {{.Name")])
        .unwrap_err();
    let source = match error {
        LoadError::Message { source, .. } => source,
        other => panic!("expected a message error, got {other:?}"),
    };
    assert!(matches!(
        source,
        MessageError::Template {
            source: ParseError::UnexpectedEof { .. },
            ..
        }
    ));
}

#[test]
fn unsupported_format() {
    let error = catalog_file_info(Path::new("locales/en.yaml")).unwrap_err();
    assert_snapshot!(error.to_string(), @"unsupported catalog format for 'locales/en.yaml'");
}

#[test]
fn missing_language_tag() {
    let error = catalog_file_info(Path::new("active..json")).unwrap_err();
    assert_snapshot!(error.to_string(), @"no language tag in file name 'active..json'");
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn validation_warnings() {
    let mut bundle = Bundle::new();
    bundle.put("en", "hello", None, [("other", "Hello")]).unwrap();
    bundle.put("ja", "hello", None, [("one", "一つ"), ("other", "こんにちは")]).unwrap();
    bundle.put("ja", "orphan", None, [("other", "孤児")]).unwrap();
    bundle.put("ja", "partial", None, [("one", "一つ")]).unwrap();

    let text = bundle
        .validate("en", "ja")
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(text, @r"
    warning: message 'hello' in 'ja' defines 'one', which 'ja' never uses
    warning: unknown message 'orphan' in 'ja' translations (not defined in source)
    warning: unknown message 'partial' in 'ja' translations (not defined in source)
    warning: message 'partial' in 'ja' defines 'one', which 'ja' never uses
    warning: message 'partial' in 'ja' has no 'other' template
    ");
}
