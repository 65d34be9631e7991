//! Tests for template rendering and the render degradation policy.

use glossa::{Data, Fields, RenderError, Template, Value, params};

#[test]
fn literal_renders_verbatim_without_data() {
    let template = Template::parse("Nothing to see").unwrap();
    assert_eq!(template.render(None), "Nothing to see");
    assert_eq!(template.render(Some(&Value::from(5))), "Nothing to see");
}

#[test]
fn substitutes_map_fields() {
    let template = Template::parse("{{.Name}} has {{.Count}} cats").unwrap();
    let data = Value::from(params! { "Name" => "Nick", "Count" => 2 });
    assert_eq!(template.render(Some(&data)), "Nick has 2 cats");
}

#[test]
fn values_use_their_canonical_text() {
    let template = Template::parse("{{.A}}|{{.B}}|{{.C}}|{{.D}}|{{.E}}").unwrap();
    let data = Value::from(params! {
        "A" => -3,
        "B" => 1.5,
        "C" => "1.50",
        "D" => false,
        "E" => params! { "Y" => 2, "X" => 1 },
    });
    assert_eq!(template.render(Some(&data)), "-3|1.5|1.50|false|map[X:1 Y:2]");
}

#[test]
fn nested_maps_are_traversed() {
    let template = Template::parse("{{.User.Name}}").unwrap();
    let data = Value::from(params! { "User" => params! { "Name" => "Ada" } });
    assert_eq!(template.render(Some(&data)), "Ada");
}

#[test]
fn dot_renders_scalar_data() {
    let template = Template::parse("#{{.}}").unwrap();
    assert_eq!(template.render(Some(&Value::from("7"))), "#7");
}

#[test]
fn missing_field_is_reported() {
    let template = Template::parse("Hello {{.Name}}").unwrap();
    let data = Value::from(Data::new());
    assert_eq!(
        template.try_render(Some(&data)),
        Err(RenderError::MissingField {
            path: ".Name".to_string(),
            field: "Name".to_string(),
        })
    );
}

#[test]
fn failed_render_degrades_to_error_text() {
    let template = Template::parse("Hello {{.Name}}").unwrap();
    let data = Value::from(Data::new());
    assert_eq!(
        template.render(Some(&data)),
        "executing \".Name\": map has no entry for key \"Name\""
    );
    assert_eq!(template.render(None), "executing \".Name\": no data");
}

#[test]
fn field_on_scalar_is_reported() {
    let template = Template::parse("{{.Count.Value}}").unwrap();
    let data = Value::from(params! { "Count" => 3 });
    assert_eq!(
        template.try_render(Some(&data)),
        Err(RenderError::NotAMap {
            path: ".Count.Value".to_string(),
            field: "Value".to_string(),
            value: "3".to_string(),
        })
    );
}

struct Person {
    name: String,
    age: u32,
}

impl Fields for Person {
    fn fields(&self) -> Data {
        params! { "Name" => self.name.as_str(), "Age" => self.age }
    }
}

#[test]
fn records_expose_named_fields() {
    let person = Person {
        name: "Grace".to_string(),
        age: 85,
    };
    let template = Template::parse("{{.Name}} ({{.Age}})").unwrap();
    assert_eq!(
        template.render(Some(&Value::from_fields(&person))),
        "Grace (85)"
    );
}
